//! Mock collaborators for runtime tests

use crate::agent::{AgentChannel, ChannelError, ChunkEvent, ChunkStream};
use async_trait::async_trait;
use futures::stream;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Agent channel that replays queued turns and records every open call.
pub(crate) struct ScriptedAgentChannel {
    turns: Mutex<VecDeque<Vec<Result<ChunkEvent, ChannelError>>>>,
    opens: Mutex<Vec<(String, Option<String>)>>,
}

impl ScriptedAgentChannel {
    pub(crate) fn new() -> Self {
        Self {
            turns: Mutex::new(VecDeque::new()),
            opens: Mutex::new(Vec::new()),
        }
    }

    /// Queue the chunk items for the next turn.
    pub(crate) fn push_turn(&self, items: Vec<Result<ChunkEvent, ChannelError>>) {
        self.turns.lock().unwrap().push_back(items);
    }

    /// Every `(prompt, current_document)` pair this channel was opened with.
    pub(crate) fn recorded_opens(&self) -> Vec<(String, Option<String>)> {
        self.opens.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentChannel for ScriptedAgentChannel {
    async fn open(
        &self,
        prompt: &str,
        current_document: Option<&str>,
    ) -> Result<ChunkStream, ChannelError> {
        self.opens
            .lock()
            .unwrap()
            .push((prompt.to_string(), current_document.map(str::to_string)));

        let items = self
            .turns
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ChannelError::unknown("no scripted turn queued"))?;
        Ok(Box::pin(stream::iter(items)))
    }
}
