use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid API key")]
    InvalidApiKey,

    #[error("invalid model preference: {0}")]
    InvalidModelPreference(String),

    #[error("settings storage error: {0}")]
    Storage(String),
}

/// Failures the highlight engine can distinguish when asked to.
///
/// `Highlighter::apply` folds these into a zero count; `try_apply`
/// surfaces them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("invalid regex pattern: {0}")]
    InvalidPattern(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PageSearchError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("document error: {0}")]
    Document(String),

    #[error("generation error: {0}")]
    Generation(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("search.debounce_ms out of range".into());
        assert_eq!(
            err.to_string(),
            "config validation error: search.debounce_ms out of range"
        );
    }

    #[test]
    fn settings_error_display() {
        assert_eq!(SettingsError::InvalidApiKey.to_string(), "invalid API key");

        let err = SettingsError::InvalidModelPreference("medium".into());
        assert_eq!(err.to_string(), "invalid model preference: medium");

        let err = SettingsError::Storage("permission denied".into());
        assert_eq!(err.to_string(), "settings storage error: permission denied");
    }

    #[test]
    fn search_error_display() {
        let err = SearchError::InvalidPattern("unclosed group".into());
        assert_eq!(err.to_string(), "invalid regex pattern: unclosed group");
    }

    #[test]
    fn pagesearch_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: PageSearchError = config_err.into();
        assert!(matches!(err, PageSearchError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn pagesearch_error_from_settings() {
        let err: PageSearchError = SettingsError::InvalidApiKey.into();
        assert!(matches!(err, PageSearchError::Settings(_)));
        assert_eq!(err.to_string(), "invalid API key");
    }

    #[test]
    fn pagesearch_error_from_search() {
        let err: PageSearchError = SearchError::InvalidPattern("(".into()).into();
        assert!(matches!(err, PageSearchError::Search(_)));
        assert!(err.to_string().contains("invalid regex pattern"));
    }

    #[test]
    fn pagesearch_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PageSearchError = io_err.into();
        assert!(matches!(err, PageSearchError::Io(_)));
        assert!(err.to_string().contains("file missing"));
    }

    #[test]
    fn pagesearch_error_other_variants() {
        let err = PageSearchError::Document("unexpected token".into());
        assert_eq!(err.to_string(), "document error: unexpected token");

        let err = PageSearchError::Generation("rate limited".into());
        assert_eq!(err.to_string(), "generation error: rate limited");

        let err = PageSearchError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
