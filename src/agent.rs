//! Agent channel boundary
//!
//! A channel yields the ordered stream of typed chunk events for one
//! generation turn. The wire transport is a collaborator concern; this module
//! owns the event contract plus two adapters: a JSON-lines wire decoder and a
//! scripted mock for local development.

mod error;
mod mock;
mod types;
mod wire;

pub use error::{ChannelError, ChannelErrorKind};
pub use mock::MockAgentChannel;
pub use types::ChunkEvent;
pub use wire::decode_lines;

use async_trait::async_trait;
use futures::stream::Stream;
use std::pin::Pin;

/// Ordered chunk events for one turn. The stream ends by natural exhaustion
/// (success) or deterministically after yielding a single error item.
pub type ChunkStream = Pin<Box<dyn Stream<Item = Result<ChunkEvent, ChannelError>> + Send>>;

/// Common interface for agent channels
#[async_trait]
pub trait AgentChannel: Send + Sync {
    /// Open a channel for one generation turn.
    ///
    /// `current_document` carries the latest slide source so the agent can
    /// apply follow-up edits instead of starting over.
    async fn open(
        &self,
        prompt: &str,
        current_document: Option<&str>,
    ) -> Result<ChunkStream, ChannelError>;
}
