use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::backend::BackendError;
use crate::registry::BackendRegistry;

/// Minimum trimmed length for a backend's output to count as a success.
/// Anything shorter is treated exactly like a failed backend.
pub const MIN_TEXT_LEN: usize = 50;

/// Minimum normalized length for a response to count as readable text.
pub const MIN_READABLE_LEN: usize = 10;

#[derive(Error, Debug)]
pub enum ExtractError {
    /// No backend library was available at startup. Every request fails
    /// with this until the process is restarted with one installed.
    #[error(
        "no PDF extraction backend available; install libpdfium or rebuild with the mupdf feature"
    )]
    NoBackendAvailable,
    /// Every backend in the chain either failed or under-produced.
    #[error("all PDF extraction backends failed; last error: {last_error}")]
    AllBackendsFailed { last_error: String },
}

/// Text produced by one backend for one request.
#[derive(Debug, Clone)]
pub struct Extraction {
    pub text: String,
    /// Name of the backend whose output was accepted.
    pub backend: &'static str,
}

/// Tries backends in the registry's fallback order until one produces
/// output that passes the quality gate.
#[derive(Clone)]
pub struct Extractor {
    registry: Arc<BackendRegistry>,
    min_text_len: usize,
}

impl Extractor {
    pub fn new(registry: Arc<BackendRegistry>) -> Self {
        Self {
            registry,
            min_text_len: MIN_TEXT_LEN,
        }
    }

    /// Override the quality-gate threshold. Tests use tiny fixtures.
    pub fn with_min_text_len(mut self, min_text_len: usize) -> Self {
        self.min_text_len = min_text_len;
        self
    }

    pub fn registry(&self) -> &BackendRegistry {
        &self.registry
    }

    /// Extract text from the PDF at `path`, falling over to the next
    /// backend on failure or under-length output.
    ///
    /// "Looks empty" is indistinguishable from "failed" here: a result at
    /// or below the quality gate advances the chain the same way an error
    /// does. Backend-local errors never escape; only total failure does.
    pub fn extract(&self, path: &Path) -> Result<Extraction, ExtractError> {
        if self.registry.is_empty() {
            return Err(ExtractError::NoBackendAvailable);
        }

        let mut last_error: Option<BackendError> = None;
        for backend in self.registry.attempt_order() {
            match backend.extract_text(path) {
                Ok(text) => {
                    let trimmed = text.trim();
                    if trimmed.len() > self.min_text_len {
                        tracing::info!(
                            backend = backend.name(),
                            chars = trimmed.len(),
                            "extraction succeeded"
                        );
                        return Ok(Extraction {
                            text,
                            backend: backend.name(),
                        });
                    }
                    tracing::debug!(
                        backend = backend.name(),
                        chars = trimmed.len(),
                        "output below quality gate, trying next backend"
                    );
                }
                Err(e) => {
                    tracing::warn!(backend = backend.name(), error = %e, "backend failed");
                    last_error = Some(e);
                }
            }
        }

        Err(ExtractError::AllBackendsFailed {
            last_error: last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "none".to_string()),
        })
    }
}
