//! Property-based tests for the session state machine
//!
//! These tests verify key invariants hold across all possible chunk
//! sequences.

use super::state::*;
use super::transition::*;
use super::{Effect, Event};
use crate::agent::ChunkEvent;
use proptest::prelude::*;

// ============================================================================
// Test Helpers
// ============================================================================

fn submitted() -> (Session, TurnId) {
    let mut session = Session::new();
    transition(
        &mut session,
        Event::Submit {
            prompt: "test prompt".to_string(),
        },
    )
    .unwrap();
    let turn = session.phase().in_flight().unwrap();
    (session, turn)
}

fn apply_all(session: &mut Session, turn: TurnId, chunks: &[ChunkEvent]) {
    for chunk in chunks {
        transition(
            session,
            Event::Chunk {
                turn,
                chunk: chunk.clone(),
            },
        )
        .unwrap();
    }
}

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_text_chunk() -> impl Strategy<Value = ChunkEvent> {
    "[a-zA-Z0-9 \n]{0,12}".prop_map(ChunkEvent::Text)
}

fn arb_status_chunk() -> impl Strategy<Value = ChunkEvent> {
    "[a-zA-Z .]{1,20}".prop_map(ChunkEvent::Status)
}

fn arb_non_document_chunk() -> impl Strategy<Value = ChunkEvent> {
    prop_oneof![arb_text_chunk(), arb_status_chunk()]
}

/// A turn's chunk sequence with exactly one Document at a random position.
fn arb_turn_with_one_document() -> impl Strategy<Value = (Vec<ChunkEvent>, String)> {
    (
        proptest::collection::vec(arb_non_document_chunk(), 0..12),
        "[a-zA-Z#\n -]{1,40}",
        any::<proptest::sample::Index>(),
    )
        .prop_map(|(mut chunks, document, position)| {
            let at = position.index(chunks.len() + 1);
            chunks.insert(at, ChunkEvent::Document(document.clone()));
            (chunks, document)
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// The final assistant content is the ordered concatenation of all Text
    /// payloads, and the document equals the Document payload regardless of
    /// where in the sequence it arrived.
    #[test]
    fn text_concatenation_and_document_position((chunks, document) in arb_turn_with_one_document()) {
        let (mut session, turn) = submitted();
        apply_all(&mut session, turn, &chunks);
        transition(&mut session, Event::ChannelClosed { turn }).unwrap();

        let expected: String = chunks
            .iter()
            .filter_map(|c| match c {
                ChunkEvent::Text(s) => Some(s.as_str()),
                _ => None,
            })
            .collect();

        let assistant = session.transcript().assistant(turn).unwrap();
        prop_assert_eq!(&assistant.content, &expected);
        prop_assert!(!assistant.streaming);
        prop_assert_eq!(session.current_document(), Some(document.as_str()));
        prop_assert!(session.phase().is_idle());
    }

    /// Submitting while a turn is in flight never changes the session.
    #[test]
    fn submit_while_busy_never_mutates(chunks in proptest::collection::vec(arb_non_document_chunk(), 0..8), prompt in "[a-z ]{1,20}") {
        let (mut session, turn) = submitted();
        apply_all(&mut session, turn, &chunks);

        let before = session.clone();
        let result = transition(&mut session, Event::Submit { prompt });
        prop_assert!(matches!(result, Err(TransitionError::TurnInFlight)));
        prop_assert_eq!(session, before);
    }

    /// Failure always ends with the fixed reply, a non-streaming message, no
    /// status, and an idle (usable) session - whatever arrived beforehand.
    #[test]
    fn failure_is_total_and_recoverable(chunks in proptest::collection::vec(arb_non_document_chunk(), 0..8)) {
        let (mut session, turn) = submitted();
        apply_all(&mut session, turn, &chunks);
        transition(&mut session, Event::ChannelFailed { turn }).unwrap();

        let assistant = session.transcript().assistant(turn).unwrap();
        prop_assert_eq!(assistant.content.as_str(), ERROR_REPLY);
        prop_assert!(!assistant.streaming);
        prop_assert_eq!(session.status(), None);
        prop_assert!(session.phase().is_idle());
    }

    /// The transcript is append-only: applying chunks never changes its
    /// length, and user entries are never touched.
    #[test]
    fn transcript_is_append_only(chunks in proptest::collection::vec(arb_non_document_chunk(), 0..8)) {
        let (mut session, turn) = submitted();
        let user_before = session.transcript().iter().next().unwrap().clone();

        apply_all(&mut session, turn, &chunks);

        prop_assert_eq!(session.transcript().len(), 2);
        prop_assert_eq!(session.transcript().iter().next().unwrap(), &user_before);
    }

    /// The latest Document chunk wins, every time.
    #[test]
    fn last_document_wins(documents in proptest::collection::vec("[a-z\n]{1,20}", 1..5)) {
        let (mut session, turn) = submitted();
        for doc in &documents {
            let effects = transition(
                &mut session,
                Event::Chunk { turn, chunk: ChunkEvent::Document(doc.clone()) },
            )
            .unwrap();
            prop_assert_eq!(effects, vec![Effect::FocusDeck]);
        }
        prop_assert_eq!(session.current_document(), Some(documents.last().unwrap().as_str()));
    }
}
