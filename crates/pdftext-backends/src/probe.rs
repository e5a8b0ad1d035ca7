use std::sync::Arc;

use pdftext_core::PdfBackend;
use pdftext_core::registry::{
    BACKEND_MUPDF, BACKEND_PDF_EXTRACT, BACKEND_PDFIUM, BackendRegistry,
};

use crate::PdfExtractBackend;

/// Probe every known backend once, in preference order, and freeze the
/// outcome into the process-wide registry.
///
/// A backend compiled out via cargo features and one whose runtime
/// library is missing both report unavailable; the chain always ends at
/// the statically linked pdf-extract adapter.
pub fn probe_backends() -> BackendRegistry {
    let mut probed: Vec<(&'static str, Option<Arc<dyn PdfBackend>>)> = Vec::new();

    #[cfg(feature = "pdfium")]
    probed.push((
        BACKEND_PDFIUM,
        crate::PdfiumBackend::probe().map(|b| Arc::new(b) as Arc<dyn PdfBackend>),
    ));
    #[cfg(not(feature = "pdfium"))]
    probed.push((BACKEND_PDFIUM, None));

    #[cfg(feature = "mupdf")]
    probed.push((
        BACKEND_MUPDF,
        Some(Arc::new(crate::MupdfBackend::new()) as Arc<dyn PdfBackend>),
    ));
    #[cfg(not(feature = "mupdf"))]
    probed.push((BACKEND_MUPDF, None));

    probed.push((
        BACKEND_PDF_EXTRACT,
        Some(Arc::new(PdfExtractBackend::new()) as Arc<dyn PdfBackend>),
    ));

    BackendRegistry::new(probed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pdftext_core::registry::KNOWN_BACKENDS;

    #[test]
    fn probe_covers_every_known_backend() {
        let registry = probe_backends();
        let names: Vec<&str> = registry.availability().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, KNOWN_BACKENDS.to_vec());
    }

    #[test]
    fn terminal_fallback_is_always_available() {
        let registry = probe_backends();
        assert!(
            registry
                .availability()
                .iter()
                .any(|(name, available)| *name == BACKEND_PDF_EXTRACT && *available)
        );
        assert!(registry.primary().is_some());
    }
}
