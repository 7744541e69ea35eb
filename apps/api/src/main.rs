mod assist;
mod auth;
mod config;
mod errors;
mod export;
mod llm_client;
mod mailer;
mod models;
mod render;
mod routes;
mod state;
mod store;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::{GeminiClient, OpenAiClient};
use crate::mailer::ResendMailer;
use crate::routes::build_router;
use crate::state::AppState;
use crate::store::sessions::SessionRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("portfolio_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    if config.gemini_api_key.is_none() {
        warn!("GEMINI_API_KEY not set; text improvement falls back to original text");
    }
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY not set; categorize/describe/suggest endpoints will report not configured");
    }
    if config.resend_api_key.is_none() {
        warn!("RESEND_API_KEY not set; welcome emails are skipped");
    }

    let improver = Arc::new(GeminiClient::new(config.gemini_api_key.clone()));
    let generator = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    let mailer = Arc::new(ResendMailer::new(config.resend_api_key.clone()));

    let state = AppState {
        config: config.clone(),
        improver,
        generator,
        mailer,
        sessions: SessionRegistry::new(),
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
