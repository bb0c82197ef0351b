//! Core conversation state machine
//!
//! Implements the Elm Architecture pattern: every mutation of the session
//! (transcript, current document, transient status, phase) flows through the
//! single `transition` function, which returns the effects the runtime must
//! carry out.

mod effect;
pub mod event;
pub mod state;
pub(crate) mod transition;

#[cfg(test)]
mod proptests;

pub use effect::Effect;
pub use event::Event;
pub use state::{Message, Role, Session, SessionPhase, Transcript, TurnId, ERROR_REPLY};
pub use transition::{transition, TransitionError};
