use std::net::SocketAddr;
use std::sync::Arc;

use pdftext_backends::probe_backends;
use pdftext_web::router;
use pdftext_web::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let registry = Arc::new(probe_backends());
    match registry.primary() {
        Some(name) => tracing::info!(backend = name, "using primary PDF backend"),
        None => tracing::error!(
            "no PDF backend available; every extraction request will fail — \
             install libpdfium or rebuild with the mupdf feature"
        ),
    }

    let state = Arc::new(AppState::new(registry));

    // base64 inflates uploads by a third; allow large documents
    let body_limit = axum::extract::DefaultBodyLimit::max(100 * 1024 * 1024);

    let app = router(state).layer(body_limit);

    let addr = SocketAddr::from(([127, 0, 0, 1], 5000));
    println!("Listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
