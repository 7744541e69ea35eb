//! Provider clients — the single point of entry for all hosted-model calls.
//!
//! ARCHITECTURAL RULE: no other module may call a model provider directly.
//! The assist gateway talks to `dyn ChatModel`; the two concrete clients here
//! wrap the Gemini and OpenAI HTTP APIs. Both are constructed with an
//! *optional* credential and fail fast with `ModelError::NotConfigured` when
//! it is absent, so every feature degrades instead of crashing at startup.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const GEMINI_API_URL: &str =
    "https://generativelanguage.googleapis.com/v1/models/gemini-2.5-flash:generateContent";
const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Models are intentionally hardcoded to prevent accidental drift.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";
pub const OPENAI_MODEL: &str = "gpt-3.5-turbo";

#[derive(Debug, Error)]
pub enum ModelError {
    /// Configuration failure: the provider credential is missing.
    #[error("{0} API key not configured")]
    NotConfigured(&'static str),

    /// Transport failure: the request never produced a usable response.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Transport failure: the provider answered non-2xx.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Parse failure: the reply carried no text content.
    #[error("model returned empty content")]
    EmptyContent,

    /// Parse failure: the reply text did not conform to the expected schema.
    #[error("response parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl ModelError {
    /// Failure-class label used in diagnostic logs: configuration vs
    /// transport vs parse. All three collapse to the same caller-observable
    /// fallback; logs keep them apart for operability.
    pub fn taxonomy(&self) -> &'static str {
        match self {
            ModelError::NotConfigured(_) => "configuration",
            ModelError::Http(_) | ModelError::Api { .. } => "transport",
            ModelError::EmptyContent | ModelError::Parse(_) => "parse",
        }
    }
}

/// One chat completion request. Temperature and token caps vary per
/// capability, so the gateway passes them explicitly.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system: String,
    pub user: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

#[async_trait]
pub trait ChatModel: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError>;
}

// ────────────────────────────────────────────────────────────────────────────
// Gemini (text improvement provider)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct GeminiRequest {
    contents: Vec<GeminiContent>,
    #[serde(rename = "generationConfig")]
    generation_config: GeminiGenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiContent {
    parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeminiPart {
    text: String,
}

#[derive(Debug, Serialize)]
struct GeminiGenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
struct GeminiCandidate {
    content: GeminiContent,
}

impl GeminiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatModel for GeminiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ModelError::NotConfigured("Gemini"))?;

        // The v1 generateContent endpoint has no system slot; fold the system
        // text into the single user turn.
        let text = if request.system.is_empty() {
            request.user
        } else {
            format!("{}\n\n{}", request.system, request.user)
        };

        let body = GeminiRequest {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text }],
            }],
            generation_config: GeminiGenerationConfig {
                temperature: request.temperature,
                max_output_tokens: request.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!("{GEMINI_API_URL}?key={api_key}"))
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: GeminiResponse = response.json().await?;
        let text = parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ModelError::EmptyContent)?;

        debug!(model = GEMINI_MODEL, "model call succeeded");
        Ok(text)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// OpenAI (categorization / generation / suggestion provider)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct OpenAiRequest<'a> {
    model: &'a str,
    messages: Vec<OpenAiMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct OpenAiMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponse {
    #[serde(default)]
    choices: Vec<OpenAiChoice>,
}

#[derive(Debug, Deserialize)]
struct OpenAiChoice {
    message: OpenAiResponseMessage,
}

#[derive(Debug, Deserialize)]
struct OpenAiResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl ChatModel for OpenAiClient {
    async fn complete(&self, request: ChatRequest) -> Result<String, ModelError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ModelError::NotConfigured("OpenAI"))?;

        let body = OpenAiRequest {
            model: OPENAI_MODEL,
            messages: vec![
                OpenAiMessage {
                    role: "system",
                    content: &request.system,
                },
                OpenAiMessage {
                    role: "user",
                    content: &request.user,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(OPENAI_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ModelError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: OpenAiResponse = response.json().await?;
        let text = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .filter(|t| !t.trim().is_empty())
            .ok_or(ModelError::EmptyContent)?;

        debug!(model = OPENAI_MODEL, "model call succeeded");
        Ok(text)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences that models wrap
/// structured replies in.
pub fn strip_code_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_code_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_code_fences_without_tag() {
        let input = "```\n[\"a\"]\n```";
        assert_eq!(strip_code_fences(input), "[\"a\"]");
    }

    #[test]
    fn test_strip_code_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), input);
    }

    #[test]
    fn test_error_taxonomy_labels() {
        assert_eq!(
            ModelError::NotConfigured("Gemini").taxonomy(),
            "configuration"
        );
        assert_eq!(
            ModelError::Api {
                status: 503,
                message: String::new()
            }
            .taxonomy(),
            "transport"
        );
        assert_eq!(ModelError::EmptyContent.taxonomy(), "parse");
    }

    #[tokio::test]
    async fn test_unconfigured_client_fails_without_network() {
        let client = GeminiClient::new(None);
        let err = client
            .complete(ChatRequest {
                system: String::new(),
                user: "hi".to_string(),
                temperature: 0.7,
                max_tokens: 100,
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ModelError::NotConfigured("Gemini")));
    }
}
