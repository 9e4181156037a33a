//! Pattern-generation gateway settings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_GATEWAY_URL: &str = "https://ai-gateway.vercel.sh/v1";

/// Request parameters for the chat-completions gateway.
///
/// The credential and model choice are user settings, not config; see
/// [`crate::settings`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GenerationConfig {
    pub base_url: String,
    /// Valid range: 1-4096.
    pub max_tokens: u32,
    /// Valid range: 0.0-2.0.
    pub temperature: f64,
    /// Valid range: 1-300 seconds.
    pub timeout_secs: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_GATEWAY_URL.into(),
            max_tokens: 200,
            temperature: 0.1,
            timeout_secs: 30,
        }
    }
}
