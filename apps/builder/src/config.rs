use anyhow::{Context, Result};

/// Configuration for the service-backed intake adapters, loaded from
/// environment variables. The renderer, editor, and exporter need none of
/// this — only profile import and AI prompt intake call external services.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the profile extraction service used by the import adapter.
    pub extraction_service_url: String,
    /// Base URL of the AI completion service used by the prompt adapter.
    pub ai_service_url: String,
    pub ai_api_key: String,
    /// Per-request timeout for both service clients, in seconds.
    pub http_timeout_secs: u64,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            extraction_service_url: require_env("EXTRACTION_SERVICE_URL")?,
            ai_service_url: require_env("AI_SERVICE_URL")?,
            ai_api_key: require_env("AI_API_KEY")?,
            http_timeout_secs: std::env::var("HTTP_TIMEOUT_SECS")
                .unwrap_or_else(|_| "60".to_string())
                .parse::<u64>()
                .context("HTTP_TIMEOUT_SECS must be a positive integer")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

fn require_env(key: &str) -> Result<String> {
    std::env::var(key).with_context(|| format!("Required environment variable '{key}' is not set"))
}
