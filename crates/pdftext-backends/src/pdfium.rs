use std::path::Path;

use pdfium_render::prelude::*;

use pdftext_core::registry::BACKEND_PDFIUM;
use pdftext_core::{BackendError, PdfBackend};

/// Per-page backend built on `pdfium-render`.
///
/// libpdfium is bound dynamically: nothing links at build time, so
/// whether the library is installed really is a runtime question,
/// answered once by [`PdfiumBackend::probe`] at startup. `Pdfium` handles
/// are not `Send`, so each extraction binds afresh instead of caching an
/// instance across requests.
#[derive(Debug, Default)]
pub struct PdfiumBackend;

impl PdfiumBackend {
    /// Probe for libpdfium. Returns the backend only when binding
    /// succeeds.
    pub fn probe() -> Option<Self> {
        match bind() {
            Ok(_) => Some(Self),
            Err(e) => {
                tracing::debug!(error = ?e, "libpdfium not found");
                None
            }
        }
    }
}

/// Bind libpdfium from the working directory first, then system paths.
fn bind() -> Result<Pdfium, PdfiumError> {
    Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
        .or_else(|_| Pdfium::bind_to_system_library())
        .map(Pdfium::new)
}

impl PdfBackend for PdfiumBackend {
    fn name(&self) -> &'static str {
        BACKEND_PDFIUM
    }

    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        let pdfium = bind().map_err(|e| BackendError::OpenError(format!("{e:?}")))?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| BackendError::OpenError(format!("{e:?}")))?;

        let mut text = String::new();
        for (index, page) in document.pages().iter().enumerate() {
            let page_text = page
                .text()
                .map_err(|e| BackendError::ExtractionError(format!("{e:?}")))?
                .all();
            if page_text.trim().is_empty() {
                continue;
            }
            text.push_str(&format!("\n--- PAGE {} ---\n{}\n", index + 1, page_text));
        }
        Ok(text.trim().to_string())
    }
}
