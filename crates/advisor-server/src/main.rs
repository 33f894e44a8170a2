//! Portfolio Rating HTTP Server
//!
//! Axum-based server exposing the analysis pipeline: multipart document
//! upload in, structured multi-axis assessment out. Runs with or without an
//! OpenAI credential; without one, every submission gets the fixed mock
//! analysis.

mod handlers;
mod state;

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use advisor_runtime::{AnalysisRequester, CompletionProvider, OpenAiProvider};

use crate::handlers::{health_check, rate_portfolio};
use crate::state::AppState;

// Uploads are capped per file at 5 MiB by intake; the transport limit just
// has to clear a handful of such files plus multipart framing.
const MAX_BODY_BYTES: usize = 32 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    // Initialize the completion provider. A missing credential is a
    // supported degraded mode, not a startup error.
    let provider = OpenAiProvider::from_env();

    match &provider {
        Some(p) => {
            tracing::info!("✓ OpenAI configured (model: {})", p.model());
        }
        None => {
            tracing::warn!("⚠ OPENAI_API_KEY not set - serving mock analyses");
            tracing::warn!("  Add your key to .env to receive AI generated reviews");
        }
    }

    let requester = AnalysisRequester::new(
        provider.map(|p| Arc::new(p) as Arc<dyn CompletionProvider>),
    );

    // Build application state
    let state = AppState {
        requester: Arc::new(requester),
    };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build router
    let app = Router::new()
        // Health & info
        .route("/health", get(health_check))
        // Analysis API
        .route("/api/rate", post(rate_portfolio))
        // Static files (frontend)
        .nest_service("/", tower_http::services::ServeDir::new("static"))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 advisor-server running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health    - Health check");
    tracing::info!("  POST /api/rate  - Rate a portfolio (multipart upload)");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
