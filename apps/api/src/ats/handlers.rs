//! Axum route handlers for the ATS score API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::warn;
use uuid::Uuid;

use crate::ats::resume_text::ResumeNode;
use crate::ats::scorer::ScoreRequest;
use crate::ats::suggestions::{expand_suggestions, OptimizationSuggestion};
use crate::errors::AppError;
use crate::models::ats::{AtsScoreRow, KeywordMatchRow};
use crate::state::AppState;

const MAX_JOB_TITLE_CHARS: usize = 255;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateScoreRequest {
    /// Caller's identifier for the resume; stored as-is.
    #[serde(default)]
    pub resume_id: Option<Uuid>,
    pub content: ResumeNode,
    pub job_title: String,
    pub job_description: String,
}

#[derive(Debug, Deserialize)]
pub struct ApplySuggestionRequest {
    pub suggestion_id: Uuid,
}

#[derive(Debug, Serialize)]
pub struct ApplySuggestionResponse {
    pub message: String,
    pub suggestion: OptimizationSuggestion,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/ats-scores
///
/// Scores the resume against the job description and stores the result.
/// A failed analysis is stored too, with score 0 and `analysis.error` set.
pub async fn handle_create_score(
    State(state): State<AppState>,
    Json(request): Json<CreateScoreRequest>,
) -> Result<(StatusCode, Json<AtsScoreRow>), AppError> {
    validate_create(&request, state.config.max_description_chars)?;

    let CreateScoreRequest {
        resume_id,
        content,
        job_title,
        job_description,
    } = request;
    let score_request = ScoreRequest {
        content,
        job_title,
        job_description,
    };

    let analysis = state.scorer.analyze(&score_request);
    if analysis.is_failure() {
        warn!(job_title = %score_request.job_title, "Storing failed ATS analysis");
    }
    let now = Utc::now();
    let row = AtsScoreRow {
        id: Uuid::new_v4(),
        resume_id,
        job_title: score_request.job_title,
        job_description: score_request.job_description,
        score: analysis.overall_score,
        scorer_backend: state.scorer.backend().to_string(),
        keyword_matches: analysis.keywords.iter().map(KeywordMatchRow::from).collect(),
        optimization_suggestions: expand_suggestions(&analysis.suggestions),
        analysis,
        created_at: now,
        updated_at: now,
    };

    state.store.insert(row.clone()).await;
    Ok((StatusCode::CREATED, Json(row)))
}

/// GET /api/v1/ats-scores
pub async fn handle_list_scores(State(state): State<AppState>) -> Json<Vec<AtsScoreRow>> {
    Json(state.store.list().await)
}

/// GET /api/v1/ats-scores/:id
pub async fn handle_get_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<AtsScoreRow>, AppError> {
    Ok(Json(state.store.get(id).await?))
}

/// DELETE /api/v1/ats-scores/:id
pub async fn handle_delete_score(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.store.remove(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/ats-scores/:id/keyword-matches
pub async fn handle_keyword_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<KeywordMatchRow>>, AppError> {
    Ok(Json(state.store.get(id).await?.keyword_matches))
}

/// GET /api/v1/ats-scores/:id/optimization-suggestions
pub async fn handle_optimization_suggestions(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<OptimizationSuggestion>>, AppError> {
    Ok(Json(state.store.get(id).await?.optimization_suggestions))
}

/// POST /api/v1/ats-scores/:id/apply-suggestion
pub async fn handle_apply_suggestion(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ApplySuggestionRequest>,
) -> Result<Json<ApplySuggestionResponse>, AppError> {
    let suggestion = state
        .store
        .apply_suggestion(id, request.suggestion_id)
        .await?;

    Ok(Json(ApplySuggestionResponse {
        message: "Suggestion applied successfully".to_string(),
        suggestion,
    }))
}

fn validate_create(request: &CreateScoreRequest, max_description_chars: usize) -> Result<(), AppError> {
    let title = request.job_title.trim();
    if title.is_empty() {
        return Err(AppError::Validation("job_title cannot be empty".to_string()));
    }
    if title.chars().count() > MAX_JOB_TITLE_CHARS {
        return Err(AppError::Validation(format!(
            "job_title cannot exceed {MAX_JOB_TITLE_CHARS} characters"
        )));
    }
    if request.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description cannot be empty".to_string(),
        ));
    }
    if request.job_description.chars().count() > max_description_chars {
        return Err(AppError::Validation(format!(
            "job_description cannot exceed {max_description_chars} characters"
        )));
    }
    Ok(())
}
