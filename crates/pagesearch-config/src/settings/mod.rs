//! User settings: the gateway credential and the model preference.
//!
//! Unlike [`crate::schema`], these are written by the application itself
//! (settings view, `settings` subcommand) and live in a key-value store.

mod model;
mod store;


pub use model::ModelPreference;
pub use store::{FileSettingsStore, MemorySettingsStore, SettingsStore};

use std::sync::Arc;

use pagesearch_common::SettingsError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Store keys.
pub const API_KEY_KEY: &str = "vercel_api_key";
pub const MODEL_PREFERENCE_KEY: &str = "model_preference";

/// Shortest credential accepted, after trimming.
pub const MIN_API_KEY_LEN: usize = 10;

/// What the settings view shows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsSnapshot {
    pub has_api_key: bool,
    pub api_key: String,
    pub model_preference: ModelPreference,
}

/// A partial settings change. `None` leaves a field alone; an empty
/// `api_key` removes the stored credential.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsUpdate {
    pub api_key: Option<String>,
    pub model_preference: Option<ModelPreference>,
}

/// Typed access to the settings store.
#[derive(Clone)]
pub struct Settings {
    store: Arc<dyn SettingsStore>,
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings").finish_non_exhaustive()
    }
}

impl Settings {
    pub fn new(store: impl SettingsStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(MemorySettingsStore::new())
    }

    /// The stored credential. Empty values read as absent.
    pub fn api_key(&self) -> Result<Option<String>, SettingsError> {
        Ok(self.store.get(API_KEY_KEY)?.filter(|k| !k.is_empty()))
    }

    /// Store a credential, trimmed.
    pub fn save_api_key(&self, key: &str) -> Result<(), SettingsError> {
        let key = key.trim();
        if key.chars().count() < MIN_API_KEY_LEN {
            return Err(SettingsError::InvalidApiKey);
        }
        self.store.set(API_KEY_KEY, key)?;
        info!("API key saved");
        Ok(())
    }

    pub fn clear_api_key(&self) -> Result<(), SettingsError> {
        self.store.remove(API_KEY_KEY)?;
        info!("API key removed");
        Ok(())
    }

    /// The stored preference, or the default when unset or unrecognised.
    pub fn model_preference(&self) -> Result<ModelPreference, SettingsError> {
        let Some(raw) = self.store.get(MODEL_PREFERENCE_KEY)? else {
            return Ok(ModelPreference::default());
        };
        match raw.parse() {
            Ok(pref) => Ok(pref),
            Err(_) => {
                warn!(value = %raw, "unknown model preference in store, using default");
                Ok(ModelPreference::default())
            }
        }
    }

    pub fn save_model_preference(&self, pref: ModelPreference) -> Result<(), SettingsError> {
        self.store.set(MODEL_PREFERENCE_KEY, pref.as_str())
    }

    /// Gateway model identifier for the current preference.
    pub fn model_identifier(&self) -> Result<&'static str, SettingsError> {
        Ok(self.model_preference()?.model_identifier())
    }

    pub fn snapshot(&self) -> Result<SettingsSnapshot, SettingsError> {
        let api_key = self.api_key()?;
        Ok(SettingsSnapshot {
            has_api_key: api_key.is_some(),
            api_key: api_key.unwrap_or_default(),
            model_preference: self.model_preference()?,
        })
    }

    /// Apply a partial update. The credential is handled before the
    /// preference; a rejected credential leaves the preference untouched.
    pub fn apply_update(&self, update: &SettingsUpdate) -> Result<(), SettingsError> {
        if let Some(key) = &update.api_key {
            if key.is_empty() {
                self.clear_api_key()?;
            } else {
                self.save_api_key(key)?;
            }
        }
        if let Some(pref) = update.model_preference {
            self.save_model_preference(pref)?;
        }
        Ok(())
    }
}
