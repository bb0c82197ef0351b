//! Session state types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Fixed reply shown when a turn fails; it replaces any partial content.
pub const ERROR_REPLY: &str =
    "Something went wrong while generating your slides. Please try again.";

// ============================================================================
// Turn identity
// ============================================================================

/// Stable handle for one user submission through completion or failure.
///
/// Chunk application addresses the in-flight assistant message through this
/// handle rather than by "last transcript entry", so delivery stays correct
/// even if other entries are appended concurrently in a future refinement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TurnId(Uuid);

impl TurnId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TurnId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TurnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// ============================================================================
// Transcript
// ============================================================================

/// Who authored a transcript entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    User,
    Assistant,
}

/// One transcript entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// True while this message's turn is still receiving text chunks.
    pub streaming: bool,
    pub turn: TurnId,
    pub created_at: DateTime<Utc>,
}

impl Message {
    pub fn user(turn: TurnId, content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            streaming: false,
            turn,
            created_at: Utc::now(),
        }
    }

    /// Empty assistant placeholder created at turn start.
    pub fn assistant_placeholder(turn: TurnId) -> Self {
        Self {
            role: Role::Assistant,
            content: String::new(),
            streaming: true,
            turn,
            created_at: Utc::now(),
        }
    }
}

/// Ordered, append-only message sequence. Entries are never removed or
/// reordered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript(Vec<Message>);

impl Transcript {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.0.iter()
    }

    pub fn last(&self) -> Option<&Message> {
        self.0.last()
    }

    pub(crate) fn push(&mut self, message: Message) {
        self.0.push(message);
    }

    /// The assistant message belonging to `turn`, if any.
    #[allow(dead_code)] // Turn-addressed lookup, counterpart of assistant_mut
    pub fn assistant(&self, turn: TurnId) -> Option<&Message> {
        self.0
            .iter()
            .rev()
            .find(|m| m.turn == turn && m.role == Role::Assistant)
    }

    pub(crate) fn assistant_mut(&mut self, turn: TurnId) -> Option<&mut Message> {
        self.0
            .iter_mut()
            .rev()
            .find(|m| m.turn == turn && m.role == Role::Assistant)
    }
}

// ============================================================================
// Session
// ============================================================================

/// Where the session is in its turn lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionPhase {
    /// Ready for a new submission
    #[default]
    Idle,
    /// One turn in flight; chunks for `turn` are being applied
    AwaitingResponse { turn: TurnId },
}

impl SessionPhase {
    #[allow(dead_code)] // State query utility
    pub fn is_idle(self) -> bool {
        matches!(self, SessionPhase::Idle)
    }

    /// The turn currently receiving chunks, if any.
    #[allow(dead_code)] // State query utility
    pub fn in_flight(self) -> Option<TurnId> {
        match self {
            SessionPhase::Idle => None,
            SessionPhase::AwaitingResponse { turn } => Some(turn),
        }
    }
}

/// One user's conversation: transcript, current slide source, and the
/// transient status line. Owned exclusively by whichever layer composes the
/// components; there are no ambient globals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub(crate) phase: SessionPhase,
    pub(crate) transcript: Transcript,
    pub(crate) current_document: Option<String>,
    pub(crate) status: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    #[allow(dead_code)] // State query utility
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Latest finalized slide-source document, if one has been generated.
    pub fn current_document(&self) -> Option<&str> {
        self.current_document.as_deref()
    }

    /// Transient status indicator; not part of the transcript.
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }
}
