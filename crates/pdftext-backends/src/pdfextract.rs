use std::path::Path;

use pdftext_core::registry::BACKEND_PDF_EXTRACT;
use pdftext_core::{BackendError, PdfBackend};

/// Whole-document backend built on the pure-Rust `pdf-extract` crate.
///
/// A single call returns the full document text with no page delimiters.
/// Statically linked, so it is always available and terminates the
/// fallback chain.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn name(&self) -> &'static str {
        BACKEND_PDF_EXTRACT
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let text = pdf_extract::extract_text(path)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?;
        Ok(text.trim().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_an_error() {
        let backend = PdfExtractBackend::new();
        let err = backend
            .extract_text(Path::new("/nonexistent/file.pdf"))
            .unwrap_err();
        assert!(matches!(err, BackendError::ExtractionError(_)));
    }
}
