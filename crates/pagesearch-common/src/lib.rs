pub mod errors;
pub mod types;

pub use errors::{ConfigError, PageSearchError, SearchError, SettingsError};
pub use types::{MatchCount, MatchPosition};

pub type Result<T> = std::result::Result<T, PageSearchError>;
