//! Configuration validation.
//!
//! Checks every numeric range and string constraint, collecting all errors
//! into a single `ConfigError`.

mod helpers;


use crate::schema::PageSearchConfig;
use pagesearch_common::ConfigError;

use helpers::{validate_not_blank, validate_range, validate_range_f64, validate_url};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &PageSearchConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_search(&mut errors, config);
    validate_generation(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_search(errors: &mut Vec<String>, config: &PageSearchConfig) {
    validate_range(
        errors,
        "search.debounce_ms",
        config.search.debounce_ms,
        0,
        5000,
    );
    validate_not_blank(errors, "search.ui_root_id", &config.search.ui_root_id);
}

fn validate_generation(errors: &mut Vec<String>, config: &PageSearchConfig) {
    validate_url(errors, "generation.base_url", &config.generation.base_url);
    validate_range(
        errors,
        "generation.max_tokens",
        config.generation.max_tokens,
        1,
        4096,
    );
    validate_range_f64(
        errors,
        "generation.temperature",
        config.generation.temperature,
        0.0,
        2.0,
    );
    validate_range(
        errors,
        "generation.timeout_secs",
        config.generation.timeout_secs,
        1,
        300,
    );
}
