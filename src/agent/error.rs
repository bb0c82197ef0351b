//! Agent channel error types

use thiserror::Error;

/// Channel error with classification
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ChannelError {
    pub kind: ChannelErrorKind,
    pub message: String,
}

impl ChannelError {
    pub fn new(kind: ChannelErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    #[allow(dead_code)] // Constructor for the live transport adapter
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ChannelErrorKind::Network, message)
    }

    pub fn protocol(message: impl Into<String>) -> Self {
        Self::new(ChannelErrorKind::Protocol, message)
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(ChannelErrorKind::Upstream, message)
    }

    #[allow(dead_code)] // Constructor for API completeness
    pub fn unknown(message: impl Into<String>) -> Self {
        Self::new(ChannelErrorKind::Unknown, message)
    }
}

/// Error classification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelErrorKind {
    /// Transport-level failure (connection dropped, timeout) - retryable
    Network,
    /// The stream carried a frame we could not decode - not retryable
    Protocol,
    /// The agent itself reported a failure mid-generation - not retryable
    Upstream,
    /// Unknown error
    Unknown,
}

impl ChannelErrorKind {
    pub fn is_retryable(self) -> bool {
        matches!(self, Self::Network)
    }
}
