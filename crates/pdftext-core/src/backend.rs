use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors wrap one external PDF library each and map a file path to
/// that library's full-text output; the fallback chain across backends
/// lives in [`crate::extract::Extractor`].
pub trait PdfBackend: Send + Sync {
    /// Stable backend name, reported in API responses and the health map.
    fn name(&self) -> &'static str;

    /// Extract the full text content of a PDF file.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
