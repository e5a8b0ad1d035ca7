//! Core types for the PDF text extraction service: the backend trait, the
//! registry of backends probed at startup, the fallback coordinator, and
//! text normalization.
//!
//! The concrete backend adapters live in `pdftext-backends`; the HTTP
//! surface lives in `pdftext-web`.

pub mod backend;
pub mod extract;
pub mod normalize;
pub mod registry;
pub mod tables;

pub use backend::{BackendError, PdfBackend};
pub use extract::{ExtractError, Extraction, Extractor, MIN_READABLE_LEN, MIN_TEXT_LEN};
pub use normalize::{expand_ligatures, normalize_text};
pub use registry::BackendRegistry;
