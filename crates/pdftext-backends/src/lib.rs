//! Concrete [`PdfBackend`](pdftext_core::PdfBackend) adapters, one per
//! external PDF library, plus the startup probe that freezes their
//! availability into the process-wide registry.

#[cfg(feature = "mupdf")]
pub mod mupdf;
pub mod pdfextract;
#[cfg(feature = "pdfium")]
pub mod pdfium;
mod probe;

#[cfg(feature = "mupdf")]
pub use mupdf::MupdfBackend;
pub use pdfextract::PdfExtractBackend;
#[cfg(feature = "pdfium")]
pub use pdfium::PdfiumBackend;
pub use probe::probe_backends;
