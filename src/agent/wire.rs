//! JSON-lines wire decoding
//!
//! Upstream transports deliver one JSON frame per line, tagged by `type`.
//! Decoding failures and agent-reported errors become a single terminal
//! `Err` item: once an error has been yielded the stream is fused, so the
//! consumer never sees an ambiguous partial tail.

use super::{ChannelError, ChunkEvent, ChunkStream};
use futures::future;
use futures::stream::{Stream, StreamExt};
use serde::Deserialize;

/// One frame from the upstream agent.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum WireFrame {
    Text { content: String },
    Status { content: String },
    Markdown { content: String },
    Error { message: String },
}

impl WireFrame {
    fn into_chunk(self) -> Result<ChunkEvent, ChannelError> {
        match self {
            WireFrame::Text { content } => Ok(ChunkEvent::Text(content)),
            WireFrame::Status { content } => Ok(ChunkEvent::Status(content)),
            WireFrame::Markdown { content } => Ok(ChunkEvent::Document(content)),
            WireFrame::Error { message } => Err(ChannelError::upstream(message)),
        }
    }
}

fn decode_frame(line: &str) -> Result<ChunkEvent, ChannelError> {
    let frame: WireFrame = serde_json::from_str(line)
        .map_err(|e| ChannelError::protocol(format!("undecodable frame: {e}")))?;
    frame.into_chunk()
}

/// Decode a raw line stream into an ordered chunk-event stream.
///
/// Blank lines are keep-alives and are skipped. Ordering is preserved
/// exactly; no batching or reordering, since later text chunks are defined as
/// suffixes of the accumulating message.
#[allow(dead_code)] // Wired in by the live transport; the mock channel bypasses the wire
pub fn decode_lines<S>(lines: S) -> ChunkStream
where
    S: Stream<Item = Result<String, ChannelError>> + Send + 'static,
{
    let frames = lines.filter_map(|item| {
        future::ready(match item {
            Ok(line) if line.trim().is_empty() => None,
            Ok(line) => Some(decode_frame(&line)),
            Err(e) => Some(Err(e)),
        })
    });

    // Fuse after the first error so the turn terminates deterministically.
    Box::pin(frames.scan(false, |failed, item| {
        if *failed {
            return future::ready(None);
        }
        *failed = item.is_err();
        future::ready(Some(item))
    }))
}
