//! Key-value settings storage.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use pagesearch_common::SettingsError;
use tracing::debug;

use crate::toml_loader::config_dir;
use crate::toml_writer::write_atomic;

/// Persistent string key-value store.
pub trait SettingsStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), SettingsError>;
}

/// Settings kept in memory for the life of the process.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: Mutex<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn values(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.values.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        self.values().remove(key);
        Ok(())
    }
}

/// Settings persisted as a flat JSON object.
///
/// Every operation reads the file, so edits made by another process are
/// picked up. A missing file reads as empty.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config_dir>/pagesearch/settings.json`.
    pub fn open_default() -> Result<Self, SettingsError> {
        let dir = config_dir().map_err(|e| SettingsError::Storage(e.to_string()))?;
        Ok(Self::new(dir.join("settings.json")))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            SettingsError::Storage(format!("failed to read {}: {e}", self.path.display()))
        })?;
        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&content).map_err(|e| {
            SettingsError::Storage(format!("failed to parse {}: {e}", self.path.display()))
        })
    }

    fn write(&self, values: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(values)
            .map_err(|e| SettingsError::Storage(format!("failed to serialize settings: {e}")))?;
        write_atomic(&self.path, &json).map_err(|e| SettingsError::Storage(e.to_string()))?;
        debug!(path = %self.path.display(), "settings saved to disk");
        Ok(())
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.read()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut values = self.read()?;
        values.insert(key.to_string(), value.to_string());
        self.write(&values)
    }

    fn remove(&self, key: &str) -> Result<(), SettingsError> {
        let mut values = self.read()?;
        if values.remove(key).is_some() {
            self.write(&values)?;
        }
        Ok(())
    }
}
