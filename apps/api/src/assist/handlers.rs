//! Axum route handlers for the AI endpoints.
//!
//! Request validation happens before any network call; provider failures
//! surface as `{error, success:false}` 500s, while the session-scoped write
//! path (`store::handlers::handle_improve_bio`) uses the degradation
//! wrappers instead.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::assist::{
    categorize_skills, describe_project, improve_text, suggest_improvements, ExperienceSummary,
    ImproveKind,
};
use crate::errors::AppError;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ImproveTextRequest {
    pub kind: ImproveKind,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ImproveTextResponse {
    pub content: String,
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct CategorizeSkillsRequest {
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct CategorizeSkillsResponse {
    pub categories: BTreeMap<String, Vec<String>>,
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct GenerateProjectDescriptionRequest {
    pub title: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GenerateProjectDescriptionResponse {
    pub description: String,
    pub success: bool,
}

#[derive(Debug, Deserialize)]
pub struct SuggestImprovementsRequest {
    pub role: String,
    #[serde(default)]
    pub experience: Vec<ExperienceSummary>,
}

#[derive(Debug, Serialize)]
pub struct SuggestImprovementsResponse {
    pub suggestions: Vec<String>,
    pub success: bool,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ai/improve-text
pub async fn handle_improve_text(
    State(state): State<AppState>,
    Json(request): Json<ImproveTextRequest>,
) -> Result<Json<ImproveTextResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation("text cannot be empty".to_string()));
    }

    let content = improve_text(state.improver.as_ref(), request.kind, &request.text).await?;

    Ok(Json(ImproveTextResponse {
        content,
        success: true,
    }))
}

/// POST /api/v1/ai/categorize-skills
pub async fn handle_categorize_skills(
    State(state): State<AppState>,
    Json(request): Json<CategorizeSkillsRequest>,
) -> Result<Json<CategorizeSkillsResponse>, AppError> {
    if request.skills.is_empty() {
        return Err(AppError::Validation("skills cannot be empty".to_string()));
    }

    let categories = categorize_skills(state.generator.as_ref(), &request.skills).await?;

    Ok(Json(CategorizeSkillsResponse {
        categories,
        success: true,
    }))
}

/// POST /api/v1/ai/generate-project-description
pub async fn handle_generate_project_description(
    State(state): State<AppState>,
    Json(request): Json<GenerateProjectDescriptionRequest>,
) -> Result<Json<GenerateProjectDescriptionResponse>, AppError> {
    if request.title.trim().is_empty() {
        return Err(AppError::Validation("title cannot be empty".to_string()));
    }

    let description = describe_project(
        state.generator.as_ref(),
        &request.title,
        &request.technologies,
    )
    .await?;

    Ok(Json(GenerateProjectDescriptionResponse {
        description,
        success: true,
    }))
}

/// POST /api/v1/ai/suggest-improvements
pub async fn handle_suggest_improvements(
    State(state): State<AppState>,
    Json(request): Json<SuggestImprovementsRequest>,
) -> Result<Json<SuggestImprovementsResponse>, AppError> {
    if request.role.trim().is_empty() {
        return Err(AppError::Validation("role cannot be empty".to_string()));
    }

    let suggestions =
        suggest_improvements(state.generator.as_ref(), &request.role, &request.experience).await?;

    Ok(Json(SuggestImprovementsResponse {
        suggestions,
        success: true,
    }))
}
