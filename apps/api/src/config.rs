use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
///
/// The Anthropic key is optional and doubles as the strategy switch: when it
/// is present the LLM evaluator runs first with a heuristic fallback, when it
/// is absent the heuristic evaluator runs alone. The choice is made once at
/// startup; nothing reads the environment at request time.
#[derive(Debug, Clone)]
pub struct Config {
    pub anthropic_api_key: Option<String>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            anthropic_api_key: std::env::var("ANTHROPIC_API_KEY")
                .ok()
                .filter(|k| !k.trim().is_empty()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}
