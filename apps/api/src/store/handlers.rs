//! Axum route handlers for the builder-session API — the HTTP surface of the
//! Portfolio State Store's named operations.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::assist::{improve_or_keep, ImproveKind};
use crate::errors::AppError;
use crate::models::portfolio::{Education, Experience, PortfolioData, Project, Skill};
use crate::models::render_config::{PortfolioConfig, SectionId};
use crate::render::render_portfolio;
use crate::state::AppState;
use crate::store::sample::sample_portfolio;
use crate::store::{
    AssistField, ConfigPatch, ContactPatch, PersonalInfoPatch, SectionTogglesPatch, ThemePatch,
};

#[derive(Debug, Serialize)]
pub struct SessionCreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotResponse {
    pub data: PortfolioData,
    pub config: PortfolioConfig,
    pub revision: u64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImproveBioResponse {
    pub bio: String,
    pub applied: bool,
    pub success: bool,
}

/// POST /api/v1/sessions
pub async fn handle_create_session(
    State(state): State<AppState>,
) -> (StatusCode, Json<SessionCreatedResponse>) {
    let id = state.sessions.create();
    tracing::info!(%id, "builder session created");
    (StatusCode::CREATED, Json(SessionCreatedResponse { id }))
}

/// GET /api/v1/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    snapshot(&state, id)
}

fn snapshot(state: &AppState, id: Uuid) -> Result<Json<SessionSnapshotResponse>, AppError> {
    state
        .sessions
        .with_store(id, |store| SessionSnapshotResponse {
            data: store.data().clone(),
            config: store.config().clone(),
            revision: store.revision(),
        })
        .map(Json)
        .ok_or(AppError::SessionNotFound(id))
}

/// Runs one named store operation against a session, answering with the
/// post-operation snapshot so form clients can re-render from the response.
fn mutate(
    state: &AppState,
    id: Uuid,
    op: impl FnOnce(&mut crate::store::PortfolioStore),
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    state
        .sessions
        .with_store(id, op)
        .ok_or(AppError::SessionNotFound(id))?;
    snapshot(state, id)
}

/// PATCH /api/v1/sessions/:id/personal-info
pub async fn handle_update_personal_info(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<PersonalInfoPatch>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_personal_info(patch))
}

/// PATCH /api/v1/sessions/:id/contact
pub async fn handle_update_contact(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ContactPatch>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_contact(patch))
}

/// PUT /api/v1/sessions/:id/skills
pub async fn handle_update_skills(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(skills): Json<Vec<Skill>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_skills(skills))
}

/// PUT /api/v1/sessions/:id/education
pub async fn handle_update_education(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(education): Json<Vec<Education>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_education(education))
}

/// PUT /api/v1/sessions/:id/experience
pub async fn handle_update_experience(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(experience): Json<Vec<Experience>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_experience(experience))
}

/// PUT /api/v1/sessions/:id/projects
pub async fn handle_update_projects(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(projects): Json<Vec<Project>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_projects(projects))
}

/// PATCH /api/v1/sessions/:id/config
pub async fn handle_update_config(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ConfigPatch>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_config(patch))
}

/// PATCH /api/v1/sessions/:id/theme
pub async fn handle_update_theme(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<ThemePatch>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_theme(patch))
}

/// PATCH /api/v1/sessions/:id/sections
pub async fn handle_update_sections(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(patch): Json<SectionTogglesPatch>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_sections(patch))
}

/// PUT /api/v1/sessions/:id/section-order
pub async fn handle_update_section_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(order): Json<Vec<SectionId>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.update_section_order(order))
}

/// POST /api/v1/sessions/:id/sample
///
/// Loads demo content: the posted model when one is sent, the built-in
/// sample otherwise.
pub async fn handle_load_sample(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<PortfolioData>>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    let data = body.map(|Json(data)| data).unwrap_or_else(sample_portfolio);
    mutate(&state, id, |store| store.load_sample_data(data))
}

/// POST /api/v1/sessions/:id/reset
pub async fn handle_reset(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSnapshotResponse>, AppError> {
    mutate(&state, id, |store| store.reset())
}

/// GET /api/v1/sessions/:id/preview
///
/// The rendered document for the session's current data and config.
pub async fn handle_preview(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Html<String>, AppError> {
    state
        .sessions
        .with_store(id, |store| render_portfolio(store.data(), store.config()))
        .map(Html)
        .ok_or(AppError::SessionNotFound(id))
}

/// POST /api/v1/sessions/:id/improve-bio
///
/// Full gateway round-trip that writes the improved bio back into the store.
/// The write goes through the assist-ticket guard: if a newer improve for the
/// same field was issued while this one was in flight, the stale result is
/// discarded (`applied == false`) instead of clobbering the newer one.
pub async fn handle_improve_bio(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ImproveBioResponse>, AppError> {
    let (ticket, bio) = state
        .sessions
        .with_store(id, |store| {
            let ticket = store.issue_assist_ticket(AssistField::Bio);
            (ticket, store.data().personal_info.bio.clone())
        })
        .ok_or(AppError::SessionNotFound(id))?;

    if bio.trim().is_empty() {
        return Err(AppError::Validation("bio cannot be empty".to_string()));
    }

    // Suspension point: the store lock is not held across this await.
    let outcome = improve_or_keep(state.improver.as_ref(), ImproveKind::Bio, &bio).await;

    let applied = if outcome.success {
        let content = outcome.content.clone();
        state
            .sessions
            .with_store(id, |store| {
                store.apply_assist(AssistField::Bio, ticket, |data| {
                    data.personal_info.bio = content;
                })
            })
            .ok_or(AppError::SessionNotFound(id))?
    } else {
        false
    };

    Ok(Json(ImproveBioResponse {
        bio: outcome.content,
        applied,
        success: outcome.success,
    }))
}

/// DELETE /api/v1/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.sessions.remove(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::SessionNotFound(id))
    }
}
