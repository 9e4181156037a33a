//! Search panel controller: turns panel events into engine calls and keeps
//! [`PanelState`] in step with the result.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use pagesearch_common::{MatchCount, MatchPosition, SearchError};
use pagesearch_config::schema::SearchConfig;
use pagesearch_config::SettingsUpdate;
use pagesearch_dom::HostDocument;
use pagesearch_search::{ContentScanner, Highlighter};
use tracing::debug;

use crate::panel::{Notice, PanelState, PanelView};
use crate::service::{BackgroundService, Request};

pub const INVALID_PATTERN_MESSAGE: &str = "Invalid regex pattern";
pub const GENERATE_FAILED_MESSAGE: &str = "Failed to generate regex";
pub const SAVE_FAILED_MESSAGE: &str = "Failed to save settings";

pub struct SearchController<D: HostDocument> {
    doc: D,
    highlighter: Highlighter,
    panel: PanelState,
    service: Arc<BackgroundService>,
    auto_focus_first: bool,
}

impl<D: HostDocument> SearchController<D> {
    pub fn new(doc: D, service: Arc<BackgroundService>, search: &SearchConfig) -> Self {
        Self {
            doc,
            highlighter: Highlighter::new(ContentScanner::new(search.ui_root_id.clone())),
            panel: PanelState::default(),
            service,
            auto_focus_first: search.auto_focus_first,
        }
    }

    pub fn document(&self) -> &D {
        &self.doc
    }

    pub fn highlighter(&self) -> &Highlighter {
        &self.highlighter
    }

    pub fn panel(&self) -> &PanelState {
        &self.panel
    }

    // -----------------------------------------------------------------
    // Search and navigation
    // -----------------------------------------------------------------

    /// Run a search and update the counter. With auto-focus on, a
    /// non-empty result jumps straight to the first match.
    ///
    /// An invalid pattern clears prior highlights, shows
    /// [`INVALID_PATTERN_MESSAGE`] and is returned as an error.
    pub fn handle_search(&mut self, pattern: &str) -> Result<MatchCount, SearchError> {
        self.panel.error = None;
        self.panel.pattern = pattern.to_string();

        let count = match self.highlighter.try_apply(&mut self.doc, pattern) {
            Ok(count) => count,
            Err(e) => {
                debug!(error = %e, "search rejected");
                self.panel.error = Some(INVALID_PATTERN_MESSAGE.to_string());
                self.panel.status = MatchCount::None;
                return Err(e);
            }
        };

        self.panel.status = MatchCount::from_total(count);
        if count > 0 && self.auto_focus_first {
            if let Some(pos) = self.highlighter.next(&mut self.doc) {
                self.panel.status = pos.into();
            }
        }
        Ok(self.panel.status)
    }

    /// Live input: the field's contents, trimmed, after the debounce window.
    pub fn handle_input(&mut self, raw: &str) -> Result<MatchCount, SearchError> {
        self.handle_search(raw.trim())
    }

    pub fn handle_next(&mut self) -> Option<MatchPosition> {
        let pos = self.highlighter.next(&mut self.doc)?;
        self.panel.status = pos.into();
        Some(pos)
    }

    pub fn handle_previous(&mut self) -> Option<MatchPosition> {
        let pos = self.highlighter.previous(&mut self.doc)?;
        self.panel.status = pos.into();
        Some(pos)
    }

    /// Ask the background service for a pattern, then search with it.
    ///
    /// Blank descriptions are ignored. Returns the generated pattern.
    pub async fn handle_generate(&mut self, description: &str) -> Option<String> {
        let description = description.trim();
        if description.is_empty() {
            return None;
        }

        self.panel.error = None;
        self.panel.loading = true;
        let response = self
            .service
            .handle(Request::GenerateRegex {
                description: description.to_string(),
            })
            .await;
        self.panel.loading = false;

        match (response.success, response.regex) {
            (true, Some(regex)) => {
                // The pattern already compiled in the service; a failure here
                // is reported through the panel like any other search.
                let _ = self.handle_search(&regex);
                Some(regex)
            }
            _ => {
                self.panel.error = Some(
                    response
                        .error
                        .unwrap_or_else(|| GENERATE_FAILED_MESSAGE.to_string()),
                );
                None
            }
        }
    }

    // -----------------------------------------------------------------
    // Visibility
    // -----------------------------------------------------------------

    /// Open the panel: the search view when a credential is stored,
    /// onboarding otherwise.
    pub async fn show(&mut self) {
        self.panel.visible = true;
        let response = self.service.handle(Request::GetSettings).await;
        let has_key = response.success && response.settings.is_some_and(|s| s.has_api_key);
        self.panel.view = if has_key {
            PanelView::Search
        } else {
            PanelView::Onboarding
        };
    }

    /// Close the panel and remove every highlight.
    pub fn close(&mut self) {
        self.panel.visible = false;
        self.panel.settings = None;
        self.panel.notice = None;
        self.panel.status = MatchCount::None;
        self.highlighter.clear(&mut self.doc);
    }

    pub async fn toggle(&mut self) {
        if self.panel.visible {
            self.close();
        } else {
            self.show().await;
        }
    }

    /// Escape closes the settings form if open, else the panel.
    pub fn handle_escape(&mut self) {
        if self.panel.settings_open() {
            self.close_settings();
        } else if self.panel.visible {
            self.close();
        }
    }

    // -----------------------------------------------------------------
    // Settings and onboarding
    // -----------------------------------------------------------------

    pub async fn open_settings(&mut self) {
        let response = self.service.handle(Request::GetSettings).await;
        self.panel.notice = None;
        self.panel.settings = Some(response.settings.unwrap_or_default());
    }

    pub fn close_settings(&mut self) {
        self.panel.settings = None;
        self.panel.notice = None;
    }

    /// Save the settings form. Returns whether the save succeeded.
    pub async fn save_settings(&mut self, update: SettingsUpdate) -> bool {
        let response = self
            .service
            .handle(Request::SaveSettings { settings: update })
            .await;
        if response.success {
            self.panel.notice = Some(Notice::success("Settings saved successfully"));
            self.panel.settings = None;
            true
        } else {
            self.panel.notice = Some(Notice::error(
                response
                    .error
                    .unwrap_or_else(|| SAVE_FAILED_MESSAGE.to_string()),
            ));
            false
        }
    }

    /// First-run credential entry. On success the search view opens.
    pub async fn save_onboarding_key(&mut self, key: &str) -> bool {
        let key = key.trim();
        if key.is_empty() {
            self.panel.notice = Some(Notice::error("Please enter an API key"));
            return false;
        }

        let response = self
            .service
            .handle(Request::SaveSettings {
                settings: SettingsUpdate {
                    api_key: Some(key.to_string()),
                    model_preference: None,
                },
            })
            .await;
        if response.success {
            self.panel.notice = Some(Notice::success("API key saved!"));
            self.panel.view = PanelView::Search;
            true
        } else {
            self.panel.notice = Some(Notice::error(
                response.error.unwrap_or_else(|| "Failed to save".to_string()),
            ));
            false
        }
    }
}
