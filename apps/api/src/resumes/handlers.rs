use std::sync::Arc;

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use resume_parser::{compute_completeness_report, CompletenessReport, Resume, TextItem};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    /// One document's text items in reading order, as emitted by the PDF text layer.
    pub text_items: Vec<TextItem>,
}

#[derive(Debug, Serialize)]
pub struct ParseResponse {
    pub resume: Resume,
    pub completeness: CompletenessReport,
}

/// POST /api/v1/resumes/parse
pub async fn handle_parse(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, AppError> {
    let Json(req) = payload?;
    let item_count = req.text_items.len();

    // CPU-bound extraction runs on the blocking pool.
    let parser = Arc::clone(&state.parser);
    let resume = tokio::task::spawn_blocking(move || parser.parse(&req.text_items))
        .await
        .map_err(|e| AppError::Internal(anyhow::anyhow!("spawn_blocking failed in resume parse: {e}")))??;

    let completeness = compute_completeness_report(&resume);
    info!(
        text_items = item_count,
        work_experiences = resume.work_experiences.len(),
        overall_score = completeness.overall_score,
        "Parsed resume"
    );
    Ok(Json(ParseResponse {
        resume,
        completeness,
    }))
}

/// POST /api/v1/resumes/completeness
pub async fn handle_completeness(
    payload: Result<Json<Resume>, JsonRejection>,
) -> Result<Json<CompletenessReport>, AppError> {
    let Json(resume) = payload?;
    Ok(Json(compute_completeness_report(&resume)))
}
