//! Scripted mock channel for local development
//!
//! Streams the same shape of turn a live agent produces: thinking text
//! delivered character by character, one status update, the finished
//! slide-source document, and a closing remark. The live implementation must
//! satisfy the same chunk-event contract, so everything downstream is
//! indifferent to which one is wired in.

use super::{AgentChannel, ChannelError, ChunkEvent, ChunkStream};
use async_trait::async_trait;
use futures::stream::{self, StreamExt};
use std::time::Duration;

/// Mock agent that scripts a three-slide deck for any prompt.
pub struct MockAgentChannel {
    chunk_delay: Duration,
}

impl MockAgentChannel {
    pub fn new(chunk_delay: Duration) -> Self {
        Self { chunk_delay }
    }

    /// Zero-delay variant for tests.
    #[allow(dead_code)]
    pub fn instant() -> Self {
        Self::new(Duration::ZERO)
    }

    fn script(prompt: &str) -> Vec<ChunkEvent> {
        let thinking = format!(
            "Let me put together a deck about {prompt}.\n\nSketching the outline..."
        );

        let mut events: Vec<ChunkEvent> = thinking
            .chars()
            .map(|c| ChunkEvent::Text(c.to_string()))
            .collect();
        events.push(ChunkEvent::Status("Generating slides...".to_string()));
        events.push(ChunkEvent::Document(sample_document(prompt)));
        events.push(ChunkEvent::Text(
            "\n\nYour slides are ready - switch to the preview to take a look.".to_string(),
        ));
        events
    }
}

#[async_trait]
impl AgentChannel for MockAgentChannel {
    async fn open(
        &self,
        prompt: &str,
        current_document: Option<&str>,
    ) -> Result<ChunkStream, ChannelError> {
        // The script starts from scratch each turn; a live agent uses the
        // current document to apply follow-up edits.
        tracing::debug!(
            prompt_len = prompt.len(),
            has_context = current_document.is_some(),
            "opening mock agent channel"
        );

        let delay = self.chunk_delay;
        let events = Self::script(prompt);
        Ok(Box::pin(stream::iter(events).then(move |event| async move {
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            Ok(event)
        })))
    }
}

fn sample_document(prompt: &str) -> String {
    format!(
        "---\n\
         marp: true\n\
         theme: gaia\n\
         size: 16:9\n\
         paginate: true\n\
         ---\n\
         \n\
         # {prompt}\n\
         \n\
         An overview in three slides\n\
         \n\
         ---\n\
         \n\
         # Key points\n\
         \n\
         - Point one\n\
         - Point two\n\
         - Point three\n\
         \n\
         ---\n\
         \n\
         # Wrap-up\n\
         \n\
         Thanks for reading\n"
    )
}
