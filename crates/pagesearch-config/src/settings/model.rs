//! Quality preference and its gateway model mapping.

use std::fmt;
use std::str::FromStr;

use pagesearch_common::SettingsError;
use serde::{Deserialize, Serialize};

/// User-facing model choice. Each value maps to one fixed gateway model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelPreference {
    Fast,
    #[default]
    Slow,
}

impl ModelPreference {
    pub const ALL: [ModelPreference; 2] = [ModelPreference::Fast, ModelPreference::Slow];

    /// Value as stored in the settings store.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fast => "fast",
            Self::Slow => "slow",
        }
    }

    /// Gateway model identifier for this preference.
    pub fn model_identifier(self) -> &'static str {
        match self {
            Self::Fast => "anthropic/claude-3-5-haiku-20241022",
            Self::Slow => "anthropic/claude-sonnet-4-20250514",
        }
    }
}

impl fmt::Display for ModelPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelPreference {
    type Err = SettingsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fast" => Ok(Self::Fast),
            "slow" => Ok(Self::Slow),
            other => Err(SettingsError::InvalidModelPreference(other.to_string())),
        }
    }
}
