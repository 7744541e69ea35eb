//! Transactional email — the welcome message sent on signup.
//!
//! `ResendMailer` wraps the Resend HTTP API. Like the model clients it is
//! built with an optional credential and reports `MailError::NotConfigured`
//! when the key is absent; the handlers turn that into an explicit
//! "not configured" response, never a silent no-op.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

const RESEND_API_URL: &str = "https://api.resend.com/emails";
const FROM_ADDRESS: &str = "Portfolio Builder <onboarding@resend.dev>";

#[derive(Debug, Error)]
pub enum MailError {
    #[error("Email service not configured")]
    NotConfigured,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

#[async_trait]
pub trait Mailer: Send + Sync {
    /// Sends the welcome email; returns the provider's email id.
    async fn send_welcome(&self, name: &str, email: &str) -> Result<String, MailError>;

    fn is_configured(&self) -> bool;
}

#[derive(Clone)]
pub struct ResendMailer {
    client: Client,
    api_key: Option<String>,
}

#[derive(Debug, Serialize)]
struct ResendRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: String,
    text: String,
}

#[derive(Debug, Deserialize)]
struct ResendResponse {
    id: String,
}

impl ResendMailer {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
        }
    }
}

#[async_trait]
impl Mailer for ResendMailer {
    async fn send_welcome(&self, name: &str, email: &str) -> Result<String, MailError> {
        let api_key = self.api_key.as_deref().ok_or(MailError::NotConfigured)?;

        let body = ResendRequest {
            from: FROM_ADDRESS,
            to: vec![email],
            subject: "Welcome to Portfolio Builder!",
            html: welcome_html(name),
            text: welcome_text(name),
        };

        let response = self
            .client
            .post(RESEND_API_URL)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(MailError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let parsed: ResendResponse = response.json().await?;
        info!(email_id = %parsed.id, "welcome email sent");
        Ok(parsed.id)
    }

    fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

fn welcome_html(name: &str) -> String {
    let name = crate::render::escape_html(name);
    format!(
        "<div style=\"font-family:Arial,sans-serif;max-width:600px;margin:0 auto;padding:20px\">\
         <h1>Welcome to Portfolio Builder!</h1>\
         <p>Hi {name}!</p>\
         <p>We're thrilled to have you here. You've just taken the first step towards \
         creating a professional portfolio.</p>\
         <ul>\
         <li>Build a portfolio in minutes</li>\
         <li>Get AI-powered content suggestions</li>\
         <li>Choose from five templates</li>\
         <li>Export and share anywhere</li>\
         </ul>\
         <p>If you have any questions, just reply to this email.</p>\
         <p>Cheers,<br><strong>The Portfolio Builder Team</strong></p>\
         </div>"
    )
}

fn welcome_text(name: &str) -> String {
    format!(
        "Hi {name}!\n\n\
         Welcome to Portfolio Builder!\n\n\
         We're thrilled to have you here. You've just taken the first step towards \
         creating a professional portfolio.\n\n\
         - Build a portfolio in minutes\n\
         - Get AI-powered content suggestions\n\
         - Choose from five templates\n\
         - Export and share anywhere\n\n\
         If you have any questions, just reply to this email.\n\n\
         Cheers,\nThe Portfolio Builder Team\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_unconfigured_mailer_fails_without_network() {
        let mailer = ResendMailer::new(None);
        assert!(!mailer.is_configured());
        let err = mailer.send_welcome("Jane", "jane@example.com").await;
        assert!(matches!(err, Err(MailError::NotConfigured)));
    }

    #[test]
    fn test_welcome_bodies_address_the_user() {
        assert!(welcome_html("Jane").contains("Hi Jane!"));
        assert!(welcome_text("Jane").starts_with("Hi Jane!"));
        // User-supplied names are escaped in the HTML body.
        assert!(welcome_html("<b>J</b>").contains("&lt;b&gt;"));
    }
}
