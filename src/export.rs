//! Export sink boundary
//!
//! The sink turns the current slide-source document into a downloadable
//! artifact. The mock sink hands back the document verbatim as markdown; the
//! production sink renders a PDF but satisfies the same contract, so the
//! caller cannot tell the difference.

use async_trait::async_trait;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

/// A downloadable file-like artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Write the artifact into `dir`, returning the full path.
    pub fn write_to(&self, dir: &Path) -> io::Result<PathBuf> {
        let path = dir.join(&self.filename);
        std::fs::write(&path, &self.bytes)?;
        Ok(path)
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("nothing to export: the current document is empty")]
    EmptyDocument,
    #[error("an export is already in progress")]
    ExportInFlight,
    #[error("export failed: {0}")]
    Sink(String),
}

/// Producer of export artifacts
#[async_trait]
pub trait ExportSink: Send + Sync {
    async fn export(&self, document: &str) -> Result<ExportArtifact, ExportError>;
}

/// Mock sink: a verbatim copy of the document with a markdown MIME type and
/// a fixed filename.
pub struct MarkdownExportSink;

#[async_trait]
impl ExportSink for MarkdownExportSink {
    async fn export(&self, document: &str) -> Result<ExportArtifact, ExportError> {
        Ok(ExportArtifact {
            filename: "slide.md".to_string(),
            mime_type: "text/markdown".to_string(),
            bytes: document.as_bytes().to_vec(),
        })
    }
}

/// Busy-gated front over a sink.
///
/// One export at a time: the busy flag is taken before the attempt and
/// released by a drop guard on every exit path, so a failing sink can never
/// wedge the exporter.
pub struct Exporter {
    sink: Arc<dyn ExportSink>,
    busy: AtomicBool,
}

impl Exporter {
    pub fn new(sink: Arc<dyn ExportSink>) -> Self {
        Self {
            sink,
            busy: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Export the document through the sink.
    ///
    /// An empty document is rejected before the sink is invoked and before
    /// the busy flag is taken. Sink failures come back as a single error
    /// value - one user-visible notice, never a crash.
    pub async fn export(&self, document: &str) -> Result<ExportArtifact, ExportError> {
        if document.trim().is_empty() {
            return Err(ExportError::EmptyDocument);
        }
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(ExportError::ExportInFlight);
        }
        let _guard = BusyGuard(&self.busy);

        let result = self.sink.export(document).await;
        match &result {
            Ok(artifact) => tracing::info!(
                filename = %artifact.filename,
                bytes = artifact.bytes.len(),
                "export produced artifact"
            ),
            Err(e) => tracing::error!(error = %e, "export failed"),
        }
        result
    }
}

struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}
