//! Background request handler: owns the settings store and the gateway.
//!
//! The panel never talks to the store or the network directly; it sends a
//! [`Request`] and renders the [`Response`].

use std::sync::Arc;
use std::time::Duration;

use pagesearch_ai::{AiError, GatewayClient, GatewayConfig, PatternGenerator};
use pagesearch_common::SettingsError;
use pagesearch_config::schema::GenerationConfig;
use pagesearch_config::{Settings, SettingsSnapshot, SettingsUpdate};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

pub const MISSING_KEY_MESSAGE: &str =
    "API key not configured. Run `pagesearch settings set-key <KEY>` to add your AI gateway API key.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Request {
    GenerateRegex { description: String },
    GetSettings,
    SaveSettings { settings: SettingsUpdate },
}

impl Request {
    fn action(&self) -> &'static str {
        match self {
            Request::GenerateRegex { .. } => "generateRegex",
            Request::GetSettings => "getSettings",
            Request::SaveSettings { .. } => "saveSettings",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regex: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<SettingsSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    pub fn ok() -> Self {
        Self {
            success: true,
            ..Default::default()
        }
    }

    pub fn failure(error: impl ToString) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum ServiceError {
    #[error("{}", MISSING_KEY_MESSAGE)]
    MissingApiKey,
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Generation(#[from] AiError),
}

/// Builds a generator for one request.
pub type Connector =
    Arc<dyn Fn(GatewayConfig) -> Result<Arc<dyn PatternGenerator>, AiError> + Send + Sync>;

pub struct BackgroundService {
    settings: Settings,
    generation: GenerationConfig,
    connect: Connector,
}

impl BackgroundService {
    pub fn new(settings: Settings, generation: GenerationConfig) -> Self {
        Self {
            settings,
            generation,
            connect: Arc::new(|config| {
                let client = GatewayClient::new(config)?;
                Ok(Arc::new(client) as Arc<dyn PatternGenerator>)
            }),
        }
    }

    /// Replace how generators are built (the default posts to the gateway).
    pub fn with_connector(
        mut self,
        connect: impl Fn(GatewayConfig) -> Result<Arc<dyn PatternGenerator>, AiError>
            + Send
            + Sync
            + 'static,
    ) -> Self {
        self.connect = Arc::new(connect);
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub async fn handle(&self, request: Request) -> Response {
        debug!(action = request.action(), "background request");
        match request {
            Request::GenerateRegex { description } => {
                match self.generate_regex(&description).await {
                    Ok(regex) => Response {
                        regex: Some(regex),
                        ..Response::ok()
                    },
                    Err(e) => {
                        warn!(error = %e, "pattern generation failed");
                        Response::failure(e)
                    }
                }
            }
            Request::GetSettings => match self.settings.snapshot() {
                Ok(snapshot) => Response {
                    settings: Some(snapshot),
                    ..Response::ok()
                },
                Err(e) => Response::failure(e),
            },
            Request::SaveSettings { settings } => match self.settings.apply_update(&settings) {
                Ok(()) => {
                    info!("settings saved");
                    Response::ok()
                }
                Err(e) => Response::failure(e),
            },
        }
    }

    async fn generate_regex(&self, description: &str) -> Result<String, ServiceError> {
        let api_key = self.settings.api_key()?.ok_or(ServiceError::MissingApiKey)?;
        let model = self.settings.model_identifier()?;

        let config = GatewayConfig::new(api_key, model)
            .with_base_url(self.generation.base_url.clone())
            .with_max_tokens(self.generation.max_tokens)
            .with_temperature(self.generation.temperature)
            .with_timeout(Duration::from_secs(u64::from(self.generation.timeout_secs)));

        let generator = (self.connect)(config)?;
        Ok(generator.generate_pattern(description).await?)
    }
}
