//! Pattern generation for pagesearch.
//!
//! Turns a natural-language description ("email addresses", "prices")
//! into a search pattern by asking an OpenAI-compatible chat-completions
//! gateway. The returned pattern is checked to compile before it is handed
//! back.

pub mod gateway;
pub mod prompt;

use async_trait::async_trait;

pub use gateway::{GatewayClient, GatewayConfig};
pub use prompt::SYSTEM_PROMPT;

/// Anything that can turn a description into a search pattern.
#[async_trait]
pub trait PatternGenerator: Send + Sync {
    async fn generate_pattern(&self, description: &str) -> Result<String, AiError>;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

/// Generation failures. The `Display` text is what the panel shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AiError {
    #[error("API key is required")]
    MissingCredential,
    #[error("Description is required")]
    EmptyDescription,
    #[error("{0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Invalid response from API")]
    InvalidResponse,
    #[error("Generated invalid regex: {0}")]
    InvalidPattern(String),
    #[error("Request timed out")]
    Timeout,
}
