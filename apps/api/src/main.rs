mod config;
mod db;
mod errors;
mod extract;
mod generation;
mod llm_client;
mod models;
mod routes;
mod state;
mod store;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, init_responses_schema, init_resumes_schema};
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Interview Prep API v{}", env!("CARGO_PKG_VERSION"));

    // Two independent storage domains: résumés and submitted answers
    let resumes_db = create_pool(&config.database_url).await?;
    init_resumes_schema(&resumes_db).await?;
    let responses_db = create_pool(&config.responses_database_url).await?;
    init_responses_schema(&responses_db).await?;
    info!("PostgreSQL connection pools established");

    // Transient upload directory (files are removed after extraction)
    tokio::fs::create_dir_all(&config.upload_dir).await?;

    // Question generation client; without a key the generator serves the
    // static fallback set and makes no outbound calls
    let llm = config.gemini_api_key.clone().map(GeminiClient::new);
    info!("Gemini API key configured: {}", llm.is_some());

    let state = AppState {
        resumes_db,
        responses_db,
        llm,
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
