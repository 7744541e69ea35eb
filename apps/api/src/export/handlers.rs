//! Axum route handlers for the export endpoints. Both read the session's
//! live data model; the PDF path additionally takes the client-captured
//! surface bitmap, the HTML path an optional DOM snapshot.

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::export::{artifact_filename, bundle, decode_capture, pdf, ExportError};
use crate::models::portfolio::PortfolioData;
use crate::models::render_config::PortfolioConfig;
use crate::render::render_portfolio;
use crate::state::AppState;

impl From<ExportError> for AppError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::EmptyCapture | ExportError::Decode(_) => {
                AppError::Validation(err.to_string())
            }
            other => AppError::Export(other.to_string()),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ExportPdfRequest {
    /// PNG capture of the rendered surface, base64 or data-URI encoded.
    pub capture: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct ExportHtmlRequest {
    /// DOM snapshot of the rendered subtree. When absent the service
    /// renders the session itself.
    #[serde(default)]
    pub markup: Option<String>,
}

fn session_model(
    state: &AppState,
    id: Uuid,
) -> Result<(PortfolioData, PortfolioConfig), AppError> {
    state
        .sessions
        .with_store(id, |store| (store.data().clone(), store.config().clone()))
        .ok_or(AppError::SessionNotFound(id))
}

fn download_headers(content_type: &'static str, filename: &str) -> Result<HeaderMap, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static(content_type));
    let disposition = format!("attachment; filename=\"{filename}\"");
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&disposition)
            .map_err(|e| AppError::Export(format!("invalid filename: {e}")))?,
    );
    Ok(headers)
}

/// POST /api/v1/sessions/:id/export/pdf
pub async fn handle_export_pdf(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExportPdfRequest>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (data, _config) = session_model(&state, id)?;
    let png = decode_capture(&request.capture)?;

    let filename = artifact_filename(&data.personal_info.full_name, "pdf");
    let title = format!("{} - Portfolio", data.personal_info.full_name);

    // Rasterization and PDF assembly are CPU-bound; keep them off the
    // request executor.
    let bytes = tokio::task::spawn_blocking(move || pdf::render_pdf(&png, &title))
        .await
        .map_err(|e| AppError::Export(e.to_string()))??;

    tracing::info!(%id, %filename, "PDF export complete");
    Ok((download_headers("application/pdf", &filename)?, bytes))
}

/// POST /api/v1/sessions/:id/export/html
pub async fn handle_export_html(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    body: Option<Json<ExportHtmlRequest>>,
) -> Result<(HeaderMap, Vec<u8>), AppError> {
    let (data, config) = session_model(&state, id)?;

    let request = body.map(|Json(r)| r).unwrap_or_default();
    let markup = match request.markup {
        Some(snapshot) if !snapshot.trim().is_empty() => snapshot,
        _ => render_portfolio(&data, &config),
    };

    let bytes = bundle::build_bundle(&markup, &data, &config)?;
    let filename = artifact_filename(&data.personal_info.full_name, "zip");

    tracing::info!(%id, %filename, "HTML bundle export complete");
    Ok((download_headers("application/zip", &filename)?, bytes))
}
