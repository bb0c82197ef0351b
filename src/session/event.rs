//! Events that can occur in a session

use crate::agent::ChunkEvent;
use crate::session::state::TurnId;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// User submitted a prompt
    Submit { prompt: String },

    /// The channel delivered one chunk for `turn`
    Chunk { turn: TurnId, chunk: ChunkEvent },

    /// The channel for `turn` exhausted naturally (success)
    ChannelClosed { turn: TurnId },

    /// The channel for `turn` ended abnormally
    ChannelFailed { turn: TurnId },
}
