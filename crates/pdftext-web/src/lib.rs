//! HTTP surface of the PDF text extraction service.
//!
//! Two routes: `POST /extract_pdf` (base64 PDF in, normalized text out)
//! and `GET /health` (primary backend plus the availability map).

pub mod handlers;
pub mod models;
pub mod state;

pub use handlers::router;
