mod analytics;
mod config;
mod db;
mod errors;
mod extraction;
mod models;
mod recommend;
mod routes;
mod scoring;
mod screening;
mod sentiment;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::extraction::{CapitalizedSpanTagger, EntityTagger};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Screening API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url).await?;

    // Load the pretrained ranking model once; it is shared read-only across
    // all requests and never reloaded. Absence is non-fatal.
    let scorer = scoring::load_scorer(Path::new(&config.model_path));
    info!("Ranking scorer initialized (backend: {})", scorer.backend());

    // Entity tagger for the name-extraction fallback
    let tagger: Arc<dyn EntityTagger> = Arc::new(CapitalizedSpanTagger);

    // Build app state
    let state = AppState {
        db,
        config: config.clone(),
        scorer,
        tagger,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
