use std::sync::Arc;

use pdftext_core::Extractor;
use pdftext_core::registry::BackendRegistry;

/// Shared application state accessible from all handlers.
///
/// The registry is the only cross-request state and it is immutable;
/// everything else is request-scoped.
pub struct AppState {
    pub registry: Arc<BackendRegistry>,
    pub extractor: Extractor,
}

impl AppState {
    pub fn new(registry: Arc<BackendRegistry>) -> Self {
        let extractor = Extractor::new(registry.clone());
        Self {
            registry,
            extractor,
        }
    }
}
