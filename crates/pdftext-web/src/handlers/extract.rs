use std::io::Write;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;

use pdftext_core::{MIN_READABLE_LEN, normalize_text};

use crate::models::{ErrorResponse, ExtractRequest, ExtractResponse};
use crate::state::AppState;

/// `POST /extract_pdf`: decode the base64 document, run the backend
/// chain on a blocking task, normalize, and shape the JSON response.
///
/// The decoded bytes live in a uniquely named temp file owned by the
/// blocking task; dropping it removes the file on both the success and
/// failure paths.
pub async fn extract_pdf(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ExtractRequest>,
) -> Response {
    let Some(pdf_data) = request.pdf_data else {
        return error_response(StatusCode::BAD_REQUEST, "No PDF data provided".to_string());
    };

    let pdf_bytes = match BASE64.decode(pdf_data.trim()) {
        Ok(bytes) => bytes,
        Err(e) => {
            return error_response(StatusCode::BAD_REQUEST, format!("Invalid base64 data: {e}"));
        }
    };

    let extractor = state.extractor.clone();
    let extracted = tokio::task::spawn_blocking(move || {
        let mut temp_file = tempfile::Builder::new()
            .prefix("pdftext-")
            .suffix(".pdf")
            .tempfile()
            .map_err(|e| format!("Failed to create temp file: {e}"))?;
        temp_file
            .write_all(&pdf_bytes)
            .and_then(|_| temp_file.flush())
            .map_err(|e| format!("Failed to write temp file: {e}"))?;

        extractor
            .extract(temp_file.path())
            .map_err(|e| e.to_string())
    })
    .await;

    let extraction = match extracted {
        Ok(Ok(extraction)) => extraction,
        Ok(Err(message)) => {
            tracing::error!(error = %message, "extraction failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, message);
        }
        Err(e) => {
            tracing::error!(error = %e, "extraction task panicked");
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Extraction task failed: {e}"),
            );
        }
    };

    let text = normalize_text(&extraction.text);
    if text.len() < MIN_READABLE_LEN {
        return error_response(
            StatusCode::BAD_REQUEST,
            "No readable text found in PDF".to_string(),
        );
    }

    tracing::info!(backend = extraction.backend, chars = text.len(), "request served");

    let length = text.len();
    (
        StatusCode::OK,
        Json(ExtractResponse {
            success: true,
            text,
            length,
            method: extraction.backend.to_string(),
        }),
    )
        .into_response()
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorResponse { error })).into_response()
}
