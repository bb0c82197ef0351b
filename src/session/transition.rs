//! The transition function
//!
//! All session mutation happens here. Rejected events are ordinary error
//! values: the session is left untouched and stays usable, so a rejection is
//! observably a no-op.

use super::state::{Message, Session, SessionPhase, TurnId, ERROR_REPLY};
use super::{Effect, Event};
use crate::agent::ChunkEvent;
use thiserror::Error;

/// Errors that reject an event without mutating the session
#[derive(Debug, Error)]
pub enum TransitionError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("a turn is already in flight")]
    TurnInFlight,
    #[error("event for turn {event_turn} does not match the in-flight turn")]
    StaleTurn { event_turn: TurnId },
}

/// Apply one event to the session, returning the effects to execute.
pub fn transition(session: &mut Session, event: Event) -> Result<Vec<Effect>, TransitionError> {
    match (session.phase, event) {
        // ============================================================
        // Submission
        // ============================================================
        (SessionPhase::Idle, Event::Submit { prompt }) => {
            let prompt = prompt.trim().to_string();
            if prompt.is_empty() {
                return Err(TransitionError::EmptyPrompt);
            }

            let turn = TurnId::new();
            session.transcript.push(Message::user(turn, prompt.clone()));
            session.transcript.push(Message::assistant_placeholder(turn));
            session.phase = SessionPhase::AwaitingResponse { turn };

            Ok(vec![Effect::OpenChannel {
                turn,
                prompt,
                document: session.current_document.clone(),
            }])
        }

        // Only one turn may be in flight; no message, no channel.
        (SessionPhase::AwaitingResponse { .. }, Event::Submit { .. }) => {
            Err(TransitionError::TurnInFlight)
        }

        // ============================================================
        // Chunk application
        // ============================================================
        (SessionPhase::AwaitingResponse { turn }, Event::Chunk { turn: event_turn, chunk })
            if event_turn == turn =>
        {
            Ok(apply_chunk(session, turn, chunk))
        }

        // ============================================================
        // Turn finalization
        // ============================================================
        (SessionPhase::AwaitingResponse { turn }, Event::ChannelClosed { turn: event_turn })
            if event_turn == turn =>
        {
            if let Some(message) = session.transcript.assistant_mut(turn) {
                message.streaming = false;
            }
            session.status = None;
            session.phase = SessionPhase::Idle;
            Ok(vec![])
        }

        // Failure overwrites any partial content with the fixed reply; the
        // session returns to Idle and stays usable.
        (SessionPhase::AwaitingResponse { turn }, Event::ChannelFailed { turn: event_turn })
            if event_turn == turn =>
        {
            if let Some(message) = session.transcript.assistant_mut(turn) {
                message.content = ERROR_REPLY.to_string();
                message.streaming = false;
            }
            session.status = None;
            session.phase = SessionPhase::Idle;
            Ok(vec![])
        }

        // Chunk or finalization for a turn that is not in flight.
        (
            _,
            Event::Chunk { turn, .. }
            | Event::ChannelClosed { turn }
            | Event::ChannelFailed { turn },
        ) => Err(TransitionError::StaleTurn { event_turn: turn }),
    }
}

fn apply_chunk(session: &mut Session, turn: TurnId, chunk: ChunkEvent) -> Vec<Effect> {
    match chunk {
        // The only mutation path for in-flight assistant content.
        ChunkEvent::Text(payload) => {
            if let Some(message) = session.transcript.assistant_mut(turn) {
                message.content.push_str(&payload);
            }
            vec![]
        }
        ChunkEvent::Status(payload) => {
            session.status = Some(payload);
            vec![]
        }
        // Wholesale replacement; a repeated Document chunk wins silently.
        ChunkEvent::Document(payload) => {
            session.current_document = Some(payload);
            session.status = None;
            vec![Effect::FocusDeck]
        }
    }
}
