//! Axum route handlers for signup, login and the welcome email.
//!
//! These answer on the `{success, message}` wire shape. Credentials are
//! validated but never echoed back: the signup response carries name and
//! email only.

use axum::{extract::State, http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::auth::{is_valid_email, is_valid_password, MIN_PASSWORD_LEN};
use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct PublicUser {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SendWelcomeEmailRequest {
    pub name: String,
    pub email: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SendWelcomeEmailResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_id: Option<String>,
}

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SignupResponse>), AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Auth("Name is required".to_string()));
    }
    if !is_valid_email(&request.email) {
        return Err(AppError::Auth("Please enter a valid email address".to_string()));
    }
    if !is_valid_password(&request.password) {
        return Err(AppError::Auth(format!(
            "Password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let name = request.name.trim().to_string();
    let email = request.email.trim().to_string();

    // Best effort: a mail outage must not fail the signup itself.
    if let Err(err) = state.mailer.send_welcome(&name, &email).await {
        warn!(error = %err, "welcome email not sent during signup");
    }

    Ok((
        StatusCode::CREATED,
        Json(SignupResponse {
            success: true,
            message: "Account created successfully".to_string(),
            user: PublicUser { name, email },
        }),
    ))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    if !is_valid_email(&request.email) {
        return Err(AppError::Auth("Please enter a valid email address".to_string()));
    }
    if request.password.is_empty() {
        return Err(AppError::Auth("Password is required".to_string()));
    }

    Ok(Json(LoginResponse {
        success: true,
        message: "Logged in successfully".to_string(),
    }))
}

/// POST /api/v1/send-welcome-email
pub async fn handle_send_welcome_email(
    State(state): State<AppState>,
    Json(request): Json<SendWelcomeEmailRequest>,
) -> Result<Json<SendWelcomeEmailResponse>, AppError> {
    if request.name.trim().is_empty() {
        return Err(AppError::Email("Name is required".to_string()));
    }
    if !is_valid_email(&request.email) {
        return Err(AppError::Email("Please enter a valid email address".to_string()));
    }

    if !state.mailer.is_configured() {
        return Ok(Json(SendWelcomeEmailResponse {
            success: true,
            message: "Email service not configured; welcome email skipped".to_string(),
            email_id: None,
        }));
    }

    let email_id = state
        .mailer
        .send_welcome(request.name.trim(), request.email.trim())
        .await
        .map_err(|err| AppError::Email(err.to_string()))?;

    Ok(Json(SendWelcomeEmailResponse {
        success: true,
        message: "Welcome email sent".to_string(),
        email_id: Some(email_id),
    }))
}
