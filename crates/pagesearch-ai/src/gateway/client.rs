//! Gateway client struct, request building, and response parsing.

use crate::prompt::SYSTEM_PROMPT;
use crate::{AiError, Message};

use super::config::GatewayConfig;

/// Chat-completions gateway client.
pub struct GatewayClient {
    pub(crate) config: GatewayConfig,
    pub(crate) http: reqwest::Client,
}

impl GatewayClient {
    pub fn new(config: GatewayConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(config.timeout)
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }

    /// Build the JSON request body for one description.
    pub(crate) fn build_request_body(&self, description: &str) -> serde_json::Value {
        let messages = [Message::system(SYSTEM_PROMPT), Message::user(description)];
        serde_json::json!({
            "model": self.config.model,
            "messages": messages,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }
}

/// Pull the pattern out of a successful response and check it compiles.
pub(crate) fn parse_response(json: &serde_json::Value) -> Result<String, AiError> {
    let message = json["choices"]
        .get(0)
        .and_then(|choice| choice.get("message"))
        .filter(|m| m.is_object())
        .ok_or(AiError::InvalidResponse)?;

    let content = message["content"]
        .as_str()
        .ok_or(AiError::InvalidResponse)?
        .trim();

    regex::Regex::new(content).map_err(|e| AiError::InvalidPattern(e.to_string()))?;
    Ok(content.to_string())
}

/// Map a non-success status and its (possibly non-JSON) body to an error.
///
/// Prefers the server's `error.message`.
pub(crate) fn error_from_status(status: reqwest::StatusCode, body: &str) -> AiError {
    let server_message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json["error"]["message"].as_str().map(String::from))
        .filter(|m| !m.is_empty());

    match server_message {
        Some(message) => AiError::ApiError(message),
        None if status == reqwest::StatusCode::TOO_MANY_REQUESTS => AiError::RateLimited,
        None => AiError::ApiError(format!(
            "API request failed with status {}",
            status.as_u16()
        )),
    }
}
