mod admin;
mod career;
mod config;
mod db;
mod errors;
mod interview;
mod llm_client;
mod profiles;
mod routes;
mod skills;
mod state;
mod trust;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::career::CareerCatalog;
use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::interview::{LlmInterviewCoach, QuizCache};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skill It API v{}", env!("CARGO_PKG_VERSION"));

    // The service refuses to start on a malformed career table
    let catalog = CareerCatalog::builtin().context("Built-in career catalog is invalid")?;
    info!(
        "Career catalog loaded: {} careers, {} weighted questions",
        catalog.len(),
        catalog.weighted_questions().len()
    );

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    if config.run_migrations {
        run_migrations(&db).await?;
    }

    // Initialize Redis. The cache is optional, so an unreachable server is not fatal.
    let quiz_cache = QuizCache::new(redis::Client::open(config.redis_url.clone())?);
    match quiz_cache.connect().await {
        Ok(()) => info!("Redis connection established"),
        Err(e) => warn!("Redis unavailable at startup, quiz cache disabled until it returns: {e}"),
    }

    // Initialize LLM client and the interview coach built on it
    let llm = LlmClient::new(config.openai_api_key.clone())?;
    info!(
        "LLM client initialized (chat: {}, analysis: {}, transcription: {})",
        llm_client::CHAT_MODEL,
        llm_client::ANALYSIS_MODEL,
        llm_client::TRANSCRIPTION_MODEL
    );
    let coach = Arc::new(LlmInterviewCoach::new(llm));

    // Build app state
    let state = AppState {
        db,
        quiz_cache,
        config: config.clone(),
        catalog: Arc::new(catalog),
        coach,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins once the web client's domain is fixed

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
