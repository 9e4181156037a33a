//! Live search behaviour.

use serde::{Deserialize, Serialize};

/// Id of the element that hosts the search panel; its subtree is never
/// scanned.
pub const DEFAULT_UI_ROOT_ID: &str = "enhanced-page-search-host";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SearchConfig {
    /// Quiet period before live input triggers a search (valid range: 0-5000 ms).
    pub debounce_ms: u32,
    pub ui_root_id: String,
    /// Jump to the first match after every successful search.
    pub auto_focus_first: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 300,
            ui_root_id: DEFAULT_UI_ROOT_ID.into(),
            auto_focus_first: true,
        }
    }
}
