//! Axum route handlers for the Evaluation API.

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::debug;

use crate::errors::AppError;
use crate::evaluation::scoring::EvaluationResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateRequest {
    pub transcript: String,
}

/// POST /api/v1/evaluate
///
/// Scores a transcript and returns the strict three-field result. Empty and
/// whitespace-only transcripts are valid inputs: the evaluator is total, so
/// the caller always gets a well-formed assessment, never an error.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<EvaluationResult>, AppError> {
    debug!("evaluating transcript ({} bytes)", request.transcript.len());

    let result = state.evaluator.evaluate(&request.transcript).await?;

    Ok(Json(result))
}
