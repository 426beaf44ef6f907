// Transcript Evaluation Engine
// Implements: heuristic scoring, LLM-backed scoring, fallback combination.
// All LLM calls go through llm_client — no direct Anthropic API calls here.

pub mod handlers;
pub mod heuristic;
pub mod prompts;
pub mod scoring;
