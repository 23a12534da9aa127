mod ats;
mod config;
mod errors;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::ats::scorer::{KeywordResumeScorer, ResumeScorer};
use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::ScoreStore;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting resumeit ATS API v{}", env!("CARGO_PKG_VERSION"));

    let scorer: Arc<dyn ResumeScorer> = Arc::new(KeywordResumeScorer);
    info!(
        "Resume scorer initialized (backend: {}, max description: {} chars)",
        scorer.backend(),
        config.max_description_chars
    );

    let state = AppState {
        config: config.clone(),
        store: ScoreStore::new(),
        scorer,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
