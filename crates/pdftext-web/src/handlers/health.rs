use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;

use crate::models::HealthResponse;
use crate::state::AppState;

/// `GET /health`: primary backend plus the startup availability map.
/// Always 200; an unconfigured service is still a healthy process.
pub async fn health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let libraries_available: BTreeMap<&'static str, bool> =
        state.registry.availability().iter().copied().collect();

    Json(HealthResponse {
        status: "healthy",
        pdf_library: state.registry.primary().map(str::to_string),
        libraries_available,
    })
}
