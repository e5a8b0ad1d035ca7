use std::sync::Arc;

use tower_http::cors::CorsLayer;

use crate::state::AppState;

pub mod extract;
pub mod health;

/// Build the service router: the two API routes plus permissive CORS.
pub fn router(state: Arc<AppState>) -> axum::Router {
    axum::Router::new()
        .route("/extract_pdf", axum::routing::post(extract::extract_pdf))
        .route("/health", axum::routing::get(health::health))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
