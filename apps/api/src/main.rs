mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod extract;
mod llm_client;
mod matching;
mod models;
mod render;
mod resumes;
mod routes;
mod state;
mod suggestions;
#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::auth::TokenVerifier;
use crate::catalog::registry;
use crate::catalog::store::PgTemplateStore;
use crate::config::Config;
use crate::db::create_pool;
use crate::llm_client::LlmClient;
use crate::matching::store::PgJobMatchStore;
use crate::resumes::store::PgResumeStore;
use crate::routes::build_router;
use crate::state::AppState;
use crate::suggestions::SuggestionClient;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CVCraft API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (runs migrations)
    let db = create_pool(&config.database_url, config.database_max_connections).await?;

    // Initialize suggestion client; without a key every AI call answers 503
    let llm = match &config.openai_api_key {
        Some(key) => {
            info!(
                "LLM client initialized (model: {}, base url: {})",
                llm_client::MODEL,
                config.openai_base_url
            );
            Some(LlmClient::new(key.clone(), config.openai_base_url.clone()))
        }
        None => {
            warn!("OPENAI_API_KEY not set; AI features are disabled");
            None
        }
    };

    info!("Template catalog loaded ({} templates)", registry::catalog().len());

    // Build app state
    let state = AppState {
        resumes: Arc::new(PgResumeStore::new(db.clone())),
        templates: Arc::new(PgTemplateStore::new(db.clone())),
        job_matches: Arc::new(PgJobMatchStore::new(db)),
        suggestions: SuggestionClient::new(llm),
        auth: TokenVerifier::new(&config.jwt_secret),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
