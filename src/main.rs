//! LexLink - legal document analysis server.

use lexlink::config::AppConfig;
use lexlink::routes::{create_router, AppState};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lexlink=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    if config.ai_available() {
        info!("Gemini client configured (model: {})", config.gemini_model);
    } else {
        warn!("GEMINI_API_KEY not set - serving deterministic demo responses");
    }
    if config.ocr_endpoint.is_none() {
        warn!("OCR_ENDPOINT not set - image uploads will be rejected");
    }

    let port = config.port;
    let state = AppState::from_config(&config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    info!("Server listening on http://0.0.0.0:{}", port);
    axum::serve(listener, app).await?;

    Ok(())
}
