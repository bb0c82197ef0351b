//! Typed chunk events emitted by an agent channel

use serde::{Deserialize, Serialize};

/// One unit of agent output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "payload", rename_all = "snake_case")]
pub enum ChunkEvent {
    /// Incremental assistant text. Payloads are suffixes of the accumulating
    /// message and concatenate in arrival order.
    Text(String),
    /// Transient progress indicator. Each one replaces the last; none of them
    /// accumulate into the transcript.
    Status(String),
    /// The complete, final slide-source document for this turn. Replaces the
    /// previous document wholesale.
    Document(String),
}

impl ChunkEvent {
    #[allow(dead_code)] // Accessor for API completeness
    pub fn payload(&self) -> &str {
        match self {
            ChunkEvent::Text(s) | ChunkEvent::Status(s) | ChunkEvent::Document(s) => s,
        }
    }

    /// Stable name for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ChunkEvent::Text(_) => "text",
            ChunkEvent::Status(_) => "status",
            ChunkEvent::Document(_) => "document",
        }
    }
}
