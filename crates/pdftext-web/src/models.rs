use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Body of `POST /extract_pdf`.
///
/// `pdf_data` is optional so that a missing field surfaces as our own
/// 400 JSON error rather than a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub pdf_data: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    pub text: String,
    pub length: usize,
    pub method: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    /// Primary backend name; `null` when no backend probed available.
    pub pdf_library: Option<String>,
    pub libraries_available: BTreeMap<&'static str, bool>,
}
