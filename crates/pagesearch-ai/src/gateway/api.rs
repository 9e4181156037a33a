//! PatternGenerator implementation for GatewayClient.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{AiError, PatternGenerator};

use super::client::{error_from_status, parse_response, GatewayClient};

#[async_trait]
impl PatternGenerator for GatewayClient {
    async fn generate_pattern(&self, description: &str) -> Result<String, AiError> {
        if self.config.api_key.trim().is_empty() {
            return Err(AiError::MissingCredential);
        }
        if description.trim().is_empty() {
            return Err(AiError::EmptyDescription);
        }

        let body = self.build_request_body(description);

        debug!(model = %self.config.model, "pattern generation request");

        let response = self
            .http
            .post(self.config.endpoint())
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AiError::Timeout
                } else {
                    AiError::NetworkError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let err = error_from_status(status, &text);
            warn!(status = status.as_u16(), error = %err, "gateway rejected request");
            return Err(err);
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AiError::ParseError(e.to_string()))?;

        let pattern = parse_response(&json)?;
        debug!(pattern = %pattern, "pattern generated");
        Ok(pattern)
    }
}
