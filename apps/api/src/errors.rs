use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

use crate::llm_client::ModelError;

/// Application-level error type.
/// Implements `IntoResponse` so handlers can return `Result<T, AppError>`.
///
/// Two wire shapes coexist on purpose: AI and session endpoints answer
/// `{"error": …, "success": false}`, while the auth/email endpoints keep
/// their `{"success": false, "message": …}` bodies.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Session {0} not found")]
    SessionNotFound(Uuid),

    #[error("{0}")]
    NotConfigured(String),

    #[error("Model provider error: {0}")]
    Provider(String),

    #[error("Export error: {0}")]
    Export(String),

    #[error("{0}")]
    Auth(String),

    #[error("Email error: {0}")]
    Email(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ModelError> for AppError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::NotConfigured(_) => AppError::NotConfigured(err.to_string()),
            other => AppError::Provider(other.to_string()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => error_body(StatusCode::BAD_REQUEST, &msg),
            AppError::SessionNotFound(id) => {
                error_body(StatusCode::NOT_FOUND, &format!("Session {id} not found"))
            }
            AppError::NotConfigured(msg) => {
                tracing::error!("configuration error: {msg}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, &msg)
            }
            AppError::Provider(msg) => {
                tracing::error!("provider error: {msg}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An AI processing error occurred",
                )
            }
            AppError::Export(msg) => {
                tracing::error!("export error: {msg}");
                error_body(StatusCode::INTERNAL_SERVER_ERROR, "Export failed")
            }
            AppError::Auth(msg) => message_body(StatusCode::BAD_REQUEST, &msg),
            AppError::Email(msg) => {
                tracing::error!("email error: {msg}");
                message_body(StatusCode::INTERNAL_SERVER_ERROR, &msg)
            }
            AppError::Internal(err) => {
                tracing::error!("internal error: {err:?}");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An internal server error occurred",
                )
            }
        }
    }
}

fn error_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message, "success": false }))).into_response()
}

fn message_body(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "success": false, "message": message }))).into_response()
}
