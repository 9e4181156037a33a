//! pagesearch configuration.
//!
//! Two layers:
//!
//! - [`PageSearchConfig`]: TOML file, hand-edited, validated on load. All
//!   sections use defaults so partial configs work out of the box.
//! - [`Settings`]: the gateway credential and model preference, written by
//!   the application into a key-value [`SettingsStore`].
//!
//! ```rust,no_run
//! use pagesearch_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod schema;
pub mod settings;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{PageSearchConfig, CONFIG_SCHEMA_VERSION};
pub use settings::{
    FileSettingsStore, MemorySettingsStore, ModelPreference, Settings, SettingsSnapshot,
    SettingsStore, SettingsUpdate,
};
pub use toml_writer::{save_config, save_config_to_path};

use pagesearch_common::ConfigError;
use std::path::Path;

/// Load config from the platform default path (creating it when missing)
/// and validate it.
pub fn load_config() -> Result<PageSearchConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate config from an explicit path.
pub fn load_config_from(path: &Path) -> Result<PageSearchConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PageSearchConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PageSearchConfig::default());
        assert!(json.contains("\"search\""));
        assert!(json.contains("\"generation\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"enhanced-page-search-host\""));
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn load_config_from_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[search]\ndebounce_ms = 60000\n").unwrap();
        assert!(matches!(
            load_config_from(&path),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
