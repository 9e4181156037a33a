//! State of the search panel as the user sees it.

use pagesearch_common::MatchCount;
use pagesearch_config::SettingsSnapshot;

/// Which body the panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelView {
    /// No credential stored yet: ask for one before anything else.
    #[default]
    Onboarding,
    Search,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient status line under the settings or onboarding form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    pub visible: bool,
    pub view: PanelView,
    /// Settings form, when open, prefilled from the store.
    pub settings: Option<SettingsSnapshot>,
    /// Contents of the pattern field.
    pub pattern: String,
    pub status: MatchCount,
    pub error: Option<String>,
    pub loading: bool,
    pub notice: Option<Notice>,
}

impl PanelState {
    /// The match counter text.
    pub fn status_text(&self) -> String {
        self.status.to_string()
    }

    pub fn settings_open(&self) -> bool {
        self.settings.is_some()
    }
}
