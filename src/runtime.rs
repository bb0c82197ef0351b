//! Session runtime
//!
//! Owns the session and drives one agent turn at a time: open the channel,
//! pump chunk events through the state machine, finalize the in-flight
//! message on exhaustion or failure. The runtime also keeps the derived
//! state: the compiled deck (recomputed wholesale whenever the document is
//! replaced, never patched incrementally) and which surface has focus.

#[cfg(test)]
pub(crate) mod testing;

use crate::agent::AgentChannel;
use crate::compiler::{compile, SlideDeck};
use crate::session::{transition, Effect, Event, Session, TransitionError, TurnId};
use std::sync::Arc;
use tokio_stream::StreamExt;

/// Which surface the user is looking at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SurfaceFocus {
    #[default]
    Chat,
    /// Compiled deck preview; taken automatically when a document lands
    Deck,
}

/// Composes the session, the agent channel, and the derived deck.
pub struct SessionRuntime {
    session: Session,
    channel: Arc<dyn AgentChannel>,
    deck: SlideDeck,
    focus: SurfaceFocus,
}

impl SessionRuntime {
    pub fn new(channel: Arc<dyn AgentChannel>) -> Self {
        Self {
            session: Session::new(),
            channel,
            deck: SlideDeck::default(),
            focus: SurfaceFocus::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    pub fn focus(&self) -> SurfaceFocus {
        self.focus
    }

    /// Switch back to the chat surface (the deck switch is automatic).
    pub fn focus_chat(&mut self) {
        self.focus = SurfaceFocus::Chat;
    }

    /// Run one full turn: submit the prompt and pump the channel until it
    /// ends. Returns once the turn has been finalized either way.
    ///
    /// Rejections (empty prompt, turn already in flight) leave the session
    /// untouched.
    pub async fn submit(&mut self, prompt: &str) -> Result<(), TransitionError> {
        let effects = transition(
            &mut self.session,
            Event::Submit {
                prompt: prompt.to_string(),
            },
        )?;

        for effect in effects {
            match effect {
                Effect::OpenChannel {
                    turn,
                    prompt,
                    document,
                } => self.run_turn(turn, &prompt, document.as_deref()).await,
                Effect::FocusDeck => self.focus_deck(),
            }
        }
        Ok(())
    }

    async fn run_turn(&mut self, turn: TurnId, prompt: &str, document: Option<&str>) {
        let mut stream = match self.channel.open(prompt, document).await {
            Ok(stream) => stream,
            Err(e) => {
                tracing::error!(
                    %turn,
                    error = %e,
                    retryable = e.kind.is_retryable(),
                    "failed to open agent channel"
                );
                self.finalize(Event::ChannelFailed { turn });
                return;
            }
        };

        while let Some(item) = stream.next().await {
            match item {
                Ok(chunk) => {
                    tracing::debug!(%turn, kind = chunk.kind(), "chunk received");
                    match transition(&mut self.session, Event::Chunk { turn, chunk }) {
                        Ok(effects) => {
                            for effect in effects {
                                match effect {
                                    Effect::FocusDeck => self.focus_deck(),
                                    Effect::OpenChannel { .. } => {
                                        tracing::warn!(%turn, "unexpected OpenChannel effect mid-turn");
                                    }
                                }
                            }
                        }
                        Err(e) => tracing::warn!(%turn, error = %e, "dropped chunk"),
                    }
                }
                Err(e) => {
                    tracing::error!(
                        %turn,
                        error = %e,
                        retryable = e.kind.is_retryable(),
                        "agent channel failed mid-turn"
                    );
                    self.finalize(Event::ChannelFailed { turn });
                    return;
                }
            }
        }

        self.finalize(Event::ChannelClosed { turn });
    }

    fn finalize(&mut self, event: Event) {
        if let Err(e) = transition(&mut self.session, event) {
            tracing::warn!(error = %e, "turn finalization rejected");
        }
    }

    /// Recompile the deck from the freshly replaced document and switch the
    /// surface, as the original flow switches to the preview tab.
    fn focus_deck(&mut self) {
        self.deck = compile(self.session.current_document());
        self.focus = SurfaceFocus::Deck;
        tracing::info!(slides = self.deck.len(), "document replaced; deck recompiled");
    }
}
