mod config;
mod errors;
mod evaluation;
mod llm_client;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::evaluation::scoring::{
    FallbackEvaluator, HeuristicEvaluator, LlmEvaluator, TranscriptEvaluator,
};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Cadence API v{}", env!("CARGO_PKG_VERSION"));

    // Select the evaluation strategy once, from config. With an API key the
    // LLM evaluator runs first and any failure degrades to the heuristic
    // result; without one the heuristic evaluator serves every request.
    let evaluator: Arc<dyn TranscriptEvaluator> = match &config.anthropic_api_key {
        Some(api_key) => {
            let llm = LlmClient::new(api_key.clone());
            info!("Evaluator: LLM (model: {}) with heuristic fallback", llm_client::MODEL);
            Arc::new(FallbackEvaluator::new(Arc::new(LlmEvaluator::new(llm))))
        }
        None => {
            info!("Evaluator: heuristic (no ANTHROPIC_API_KEY configured)");
            Arc::new(HeuristicEvaluator)
        }
    };

    let state = AppState {
        evaluator,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
