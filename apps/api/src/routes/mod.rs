pub mod health;

use axum::{
    routing::{get, patch, post, put},
    Router,
};

use crate::assist::handlers as ai;
use crate::auth::handlers as auth;
use crate::export::handlers as export;
use crate::state::AppState;
use crate::store::handlers as sessions;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Builder sessions
        .route("/api/v1/sessions", post(sessions::handle_create_session))
        .route(
            "/api/v1/sessions/:id",
            get(sessions::handle_get_session).delete(sessions::handle_delete_session),
        )
        .route(
            "/api/v1/sessions/:id/personal-info",
            patch(sessions::handle_update_personal_info),
        )
        .route(
            "/api/v1/sessions/:id/contact",
            patch(sessions::handle_update_contact),
        )
        .route(
            "/api/v1/sessions/:id/skills",
            put(sessions::handle_update_skills),
        )
        .route(
            "/api/v1/sessions/:id/education",
            put(sessions::handle_update_education),
        )
        .route(
            "/api/v1/sessions/:id/experience",
            put(sessions::handle_update_experience),
        )
        .route(
            "/api/v1/sessions/:id/projects",
            put(sessions::handle_update_projects),
        )
        .route(
            "/api/v1/sessions/:id/config",
            patch(sessions::handle_update_config),
        )
        .route(
            "/api/v1/sessions/:id/theme",
            patch(sessions::handle_update_theme),
        )
        .route(
            "/api/v1/sessions/:id/sections",
            patch(sessions::handle_update_sections),
        )
        .route(
            "/api/v1/sessions/:id/section-order",
            put(sessions::handle_update_section_order),
        )
        .route(
            "/api/v1/sessions/:id/sample",
            post(sessions::handle_load_sample),
        )
        .route("/api/v1/sessions/:id/reset", post(sessions::handle_reset))
        .route("/api/v1/sessions/:id/preview", get(sessions::handle_preview))
        .route(
            "/api/v1/sessions/:id/improve-bio",
            post(sessions::handle_improve_bio),
        )
        // Exports
        .route(
            "/api/v1/sessions/:id/export/pdf",
            post(export::handle_export_pdf),
        )
        .route(
            "/api/v1/sessions/:id/export/html",
            post(export::handle_export_html),
        )
        // AI assist
        .route("/api/v1/ai/improve-text", post(ai::handle_improve_text))
        .route(
            "/api/v1/ai/categorize-skills",
            post(ai::handle_categorize_skills),
        )
        .route(
            "/api/v1/ai/generate-project-description",
            post(ai::handle_generate_project_description),
        )
        .route(
            "/api/v1/ai/suggest-improvements",
            post(ai::handle_suggest_improvements),
        )
        // Accounts and email
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        .route(
            "/api/v1/send-welcome-email",
            post(auth::handle_send_welcome_email),
        )
        .with_state(state)
}
