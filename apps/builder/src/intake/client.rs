//! Retrying JSON-over-HTTP client for the resume drafting service.
//!
//! The service speaks a completion-style API: a prompt goes in, a text
//! completion comes back. Completions are expected to be JSON, possibly
//! wrapped in markdown code fences, which [`AiClient::call_json`] strips
//! before deserializing.

use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::config::Config;
use crate::errors::BuilderError;

const MAX_ATTEMPTS: u32 = 3;
const BASE_BACKOFF_MS: u64 = 500;

#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    prompt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    content: String,
}

#[derive(Debug, Clone)]
pub struct AiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl AiClient {
    pub fn new(config: &Config) -> Result<Self, BuilderError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()
            .map_err(BuilderError::Service)?;
        Ok(Self {
            http,
            base_url: config.ai_service_url.trim_end_matches('/').to_string(),
            api_key: config.ai_api_key.clone(),
        })
    }

    /// Sends a completion request, retrying transient failures (connect
    /// errors, 429, 5xx) with exponential backoff.
    pub async fn complete(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<String, BuilderError> {
        let url = format!("{}/v1/generate", self.base_url);
        let body = CompletionRequest { prompt, system };

        let mut last_err: Option<BuilderError> = None;
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                let delay = BASE_BACKOFF_MS * 2u64.pow(attempt - 1);
                tokio::time::sleep(Duration::from_millis(delay)).await;
            }

            let response = self
                .http
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
                .await;

            match response {
                Ok(resp) if resp.status().is_success() => {
                    let parsed: CompletionResponse =
                        resp.json().await.map_err(BuilderError::Service)?;
                    return Ok(parsed.content);
                }
                Ok(resp) if resp.status().as_u16() == 429 || resp.status().is_server_error() => {
                    warn!(
                        status = resp.status().as_u16(),
                        attempt, "drafting service returned a retryable status"
                    );
                    last_err = Some(BuilderError::Extraction(format!(
                        "drafting service returned {}",
                        resp.status()
                    )));
                }
                Ok(resp) => {
                    return Err(BuilderError::Extraction(format!(
                        "drafting service returned {}",
                        resp.status()
                    )));
                }
                Err(e) if e.is_connect() || e.is_timeout() => {
                    warn!(attempt, "drafting service unreachable: {e}");
                    last_err = Some(BuilderError::Service(e));
                }
                Err(e) => return Err(BuilderError::Service(e)),
            }
        }

        Err(last_err.unwrap_or_else(|| {
            BuilderError::Extraction("drafting service exhausted retries".to_string())
        }))
    }

    /// Completion that must deserialize to `T`. Markdown code fences around
    /// the JSON payload are tolerated and stripped.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: Option<&str>,
    ) -> Result<T, BuilderError> {
        let raw = self.complete(prompt, system).await?;
        let cleaned = strip_json_fences(&raw);
        serde_json::from_str(cleaned).map_err(BuilderError::Parse)
    }
}

/// Strips a single surrounding markdown code fence (```json ... ``` or
/// ``` ... ```) if present; otherwise returns the trimmed input.
pub fn strip_json_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let rest = rest.strip_prefix("json").unwrap_or(rest);
    let rest = rest.strip_suffix("```").unwrap_or(rest);
    rest.trim()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_plain_passthrough() {
        assert_eq!(strip_json_fences(r#"{"a": 1}"#), r#"{"a": 1}"#);
        assert_eq!(strip_json_fences("  {\"a\": 1}\n"), r#"{"a": 1}"#);
    }

    #[test]
    fn test_strip_json_fences_removes_json_fence() {
        let raw = "```json\n{\"firstName\": \"Ada\"}\n```";
        assert_eq!(strip_json_fences(raw), "{\"firstName\": \"Ada\"}");
    }

    #[test]
    fn test_strip_json_fences_removes_bare_fence() {
        let raw = "```\n{\"a\": 1}\n```";
        assert_eq!(strip_json_fences(raw), "{\"a\": 1}");
    }

    #[test]
    fn test_strip_json_fences_unterminated_fence() {
        let raw = "```json\n{\"a\": 1}";
        assert_eq!(strip_json_fences(raw), "{\"a\": 1}");
    }
}
