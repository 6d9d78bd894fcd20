mod cache;
mod config;
mod engine;
mod enrich;
mod errors;
mod llm;
mod models;
mod persona;
mod pipeline;
mod routes;
mod state;
mod timeline;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cache::PgCacheStore;
use crate::config::Config;
use crate::llm::orchestrator::TokioSleeper;
use crate::llm::schema::Schemas;
use crate::llm::OpenAiTransport;
use crate::persona::catalog::PersonaCatalog;
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

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Response cache: degrades to disabled on any connectivity failure
    let cache = PgCacheStore::connect(
        &config.database_url,
        config.db_pool_size,
        config.cache_enabled,
    )
    .await;
    info!("Cache enabled: {}", cache.is_enabled());
    if let Some(stats) = cache.stats().await {
        info!(
            "Cache holds {} entries (latest: {:?})",
            stats.total_entries, stats.latest_entry
        );
    }

    // LLM transport
    let llm = OpenAiTransport::new(config.openai_api_key.clone(), config.openai_timeout_secs);
    info!("LLM transport initialized (model: {})", config.openai_model);

    // Static reference data and compiled schemas, built once
    let catalog = PersonaCatalog::builtin();
    info!("Persona catalog loaded ({} personas)", catalog.len());
    let schemas = Schemas::build()?;

    let state = AppState {
        cache: Arc::new(cache),
        llm: Arc::new(llm),
        sleeper: Arc::new(TokioSleeper),
        catalog: Arc::new(catalog),
        schemas: Arc::new(schemas),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
