//! Effects produced by state transitions

use crate::session::state::TurnId;

/// Effects to be executed by the runtime after a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an agent channel for the new turn
    OpenChannel {
        turn: TurnId,
        prompt: String,
        /// Current slide source, as context for follow-up edits
        document: Option<String>,
    },

    /// A new document landed; the presentation surface should take focus
    FocusDeck,
}
