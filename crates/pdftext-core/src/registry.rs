use std::sync::Arc;

use crate::backend::PdfBackend;

pub const BACKEND_PDFIUM: &str = "pdfium";
pub const BACKEND_MUPDF: &str = "mupdf";
pub const BACKEND_PDF_EXTRACT: &str = "pdf-extract";

/// Every backend the service knows about, in probe preference order.
pub const KNOWN_BACKENDS: [&str; 3] = [BACKEND_PDFIUM, BACKEND_MUPDF, BACKEND_PDF_EXTRACT];

/// Which backends were available when the process started.
///
/// Built once from the startup probe and never mutated afterwards: the
/// primary backend and the fallback order are fixed for the lifetime of
/// the process, not reconfigurable per request.
pub struct BackendRegistry {
    /// Backends that probed available, in preference order.
    backends: Vec<Arc<dyn PdfBackend>>,
    /// Probe outcome for every known backend name.
    availability: Vec<(&'static str, bool)>,
}

impl BackendRegistry {
    /// Freeze the startup probe results into a registry.
    ///
    /// `probed` holds one entry per known backend, in preference order:
    /// the backend's name and, when its probe succeeded, the adapter.
    pub fn new(probed: Vec<(&'static str, Option<Arc<dyn PdfBackend>>)>) -> Self {
        let availability = probed
            .iter()
            .map(|(name, backend)| (*name, backend.is_some()))
            .collect();
        let backends = probed.into_iter().filter_map(|(_, b)| b).collect();
        Self {
            backends,
            availability,
        }
    }

    /// Name of the primary backend: the first one that probed available.
    pub fn primary(&self) -> Option<&'static str> {
        self.backends.first().map(|b| b.name())
    }

    pub fn is_empty(&self) -> bool {
        self.backends.is_empty()
    }

    /// Probe outcome per known backend name, for the health endpoint.
    pub fn availability(&self) -> &[(&'static str, bool)] {
        &self.availability
    }

    /// Ordered attempt list for one request: the primary first, then the
    /// remaining backends in a fixed permutation keyed by the primary,
    /// filtered to the ones that probed available.
    pub fn attempt_order(&self) -> Vec<Arc<dyn PdfBackend>> {
        let Some(primary) = self.primary() else {
            return Vec::new();
        };
        let order: [&str; 3] = match primary {
            BACKEND_MUPDF => [BACKEND_MUPDF, BACKEND_PDFIUM, BACKEND_PDF_EXTRACT],
            BACKEND_PDF_EXTRACT => [BACKEND_PDF_EXTRACT, BACKEND_MUPDF, BACKEND_PDFIUM],
            _ => [BACKEND_PDFIUM, BACKEND_MUPDF, BACKEND_PDF_EXTRACT],
        };
        order.iter().filter_map(|name| self.get(name)).collect()
    }

    fn get(&self, name: &str) -> Option<Arc<dyn PdfBackend>> {
        self.backends.iter().find(|b| b.name() == name).cloned()
    }
}
