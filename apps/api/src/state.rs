use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::ChatModel;
use crate::mailer::Mailer;
use crate::store::sessions::SessionRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model behind improve-text and improve-bio (Gemini in production).
    pub improver: Arc<dyn ChatModel>,
    /// Model behind categorize/describe/suggest (OpenAI in production).
    pub generator: Arc<dyn ChatModel>,
    pub mailer: Arc<dyn Mailer>,
    pub sessions: SessionRegistry,
}
