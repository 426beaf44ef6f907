//! Transcript scoring — pluggable, trait-based evaluator over a transcript.
//!
//! Default: `HeuristicEvaluator` (pure-Rust, fast, deterministic, fully testable).
//! Optional: `LlmEvaluator` (semantic, via the Anthropic Messages API).
//! `FallbackEvaluator` wraps the LLM path so that any failure degrades to the
//! heuristic result and the caller never observes an error.
//!
//! `AppState` holds an `Arc<dyn TranscriptEvaluator>`, selected at startup
//! from config rather than read from ambient environment at call time.

use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::AppError;
use crate::evaluation::heuristic;
use crate::evaluation::prompts::{EVALUATE_PROMPT_TEMPLATE, EVALUATE_SYSTEM};
use crate::llm_client::LlmClient;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all evaluator backends)
// ────────────────────────────────────────────────────────────────────────────

/// The strict three-field assessment contract. Callers depend on exactly
/// these fields; any replacement backend must produce the same shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    /// Overall quality, 0–100 inclusive.
    pub overall_score: u32,
    /// Constructive feedback paragraph. Non-empty on the heuristic path.
    pub feedback_text: String,
    /// Distinct filler terms detected, in candidate-list order.
    pub filler_words: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The transcript evaluator trait. Implement this to swap backends without
/// touching the endpoint, handler, or caller code.
///
/// Carried in `AppState` as `Arc<dyn TranscriptEvaluator>`.
#[async_trait]
pub trait TranscriptEvaluator: Send + Sync {
    async fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, AppError>;
}

// ────────────────────────────────────────────────────────────────────────────
// HeuristicEvaluator — default backend, no API key required
// ────────────────────────────────────────────────────────────────────────────

/// Deterministic evaluator backend. Total over all inputs; never errors.
pub struct HeuristicEvaluator;

#[async_trait]
impl TranscriptEvaluator for HeuristicEvaluator {
    async fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, AppError> {
        Ok(heuristic::evaluate(transcript))
    }
}

// ────────────────────────────────────────────────────────────────────────────
// LlmEvaluator — semantic backend over the Anthropic API
// ────────────────────────────────────────────────────────────────────────────

/// Semantic evaluator backend. Asks the model for the three-field JSON
/// object and coerces ill-typed fields instead of rejecting the response.
pub struct LlmEvaluator {
    llm: LlmClient,
}

impl LlmEvaluator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl TranscriptEvaluator for LlmEvaluator {
    async fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, AppError> {
        let prompt = EVALUATE_PROMPT_TEMPLATE.replace("{transcript}", transcript);
        let value: Value = self
            .llm
            .call_json(&prompt, EVALUATE_SYSTEM)
            .await
            .map_err(|e| AppError::Llm(format!("transcript evaluation failed: {e}")))?;

        Ok(coerce_llm_result(value))
    }
}

/// Coerces a parsed-but-possibly-ill-typed model response into the contract:
/// non-numeric score becomes 0, non-string feedback becomes empty, non-array
/// fillers become an empty list. The score is clamped to [0, 100] and rounded.
fn coerce_llm_result(value: Value) -> EvaluationResult {
    let overall_score = value
        .get("overall_score")
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
        .clamp(0.0, 100.0)
        .round() as u32;

    let feedback_text = value
        .get("feedback_text")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let filler_words = value
        .get("filler_words")
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default();

    EvaluationResult {
        overall_score,
        feedback_text,
        filler_words,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// FallbackEvaluator — degrade to the heuristic result, never to an error
// ────────────────────────────────────────────────────────────────────────────

/// Wraps a primary (usually LLM) evaluator; any primary failure yields the
/// heuristic result for the same transcript. One attempt, no retry loop.
pub struct FallbackEvaluator {
    primary: Arc<dyn TranscriptEvaluator>,
}

impl FallbackEvaluator {
    pub fn new(primary: Arc<dyn TranscriptEvaluator>) -> Self {
        Self { primary }
    }
}

#[async_trait]
impl TranscriptEvaluator for FallbackEvaluator {
    async fn evaluate(&self, transcript: &str) -> Result<EvaluationResult, AppError> {
        match self.primary.evaluate(transcript).await {
            Ok(result) => Ok(result),
            Err(e) => {
                warn!("primary evaluator failed, using heuristic fallback: {e}");
                Ok(heuristic::evaluate(transcript))
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
