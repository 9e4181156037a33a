//! Tests for TOML config loading, creation, and path resolution.

use super::template::default_config_toml;
use super::*;
use crate::schema::{LogLevel, PageSearchConfig};
use pagesearch_common::ConfigError;
use std::path::Path;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_pagesearch_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[search]
debounce_ms = 150

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.search.debounce_ms, 150);
    assert_eq!(config.logging.level, LogLevel::Debug);
    // Defaults preserved
    assert!(config.search.auto_focus_first);
    assert_eq!(config.generation.max_tokens, 200);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn unknown_log_level_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[logging]\nlevel = \"chatty\"\n").unwrap();
    assert!(matches!(
        load_from_path(&path),
        Err(ConfigError::ParseError(_))
    ));
}

#[test]
fn out_of_range_values_still_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[generation]\ntemperature = 9.0\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.generation.temperature, 9.0);
}

#[test]
fn empty_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "").unwrap();
    assert_eq!(load_from_path(&path).unwrap(), PageSearchConfig::default());
}

#[test]
fn create_default_config_writes_loadable_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    create_default_config(&path).unwrap();
    assert!(path.exists());
    assert_eq!(load_from_path(&path).unwrap(), PageSearchConfig::default());
}

#[test]
fn template_parses_to_defaults() {
    let parsed: PageSearchConfig = toml::from_str(default_config_toml()).unwrap();
    assert_eq!(parsed, PageSearchConfig::default());
}

#[test]
fn default_path_ends_with_pagesearch_config() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("pagesearch/config.toml"));
    }
}
