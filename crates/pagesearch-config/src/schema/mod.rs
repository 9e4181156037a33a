//! Configuration schema types for pagesearch.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod generation;
mod logging;
mod search;

pub use generation::*;
pub use logging::*;
pub use search::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change; every field has a default.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct PageSearchConfig {
    pub search: SearchConfig,
    pub generation: GenerationConfig,
    pub logging: LoggingConfig,
}
