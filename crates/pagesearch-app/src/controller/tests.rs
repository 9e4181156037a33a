//! Controller tests: panel state after search, navigation, generation and
//! settings flows. Generation goes through a fake generator.

use std::sync::Arc;

use pagesearch_ai::{AiError, PatternGenerator};
use pagesearch_common::{MatchCount, MatchPosition};
use pagesearch_config::schema::{GenerationConfig, SearchConfig};
use pagesearch_config::{ModelPreference, Settings, SettingsUpdate};
use pagesearch_dom::{Document, NodeSpec};
use pagesearch_search::CURRENT_CLASS;

use super::*;
use crate::panel::{NoticeKind, PanelView};
use crate::service::MISSING_KEY_MESSAGE;
use crate::testing::FakeGenerator;

const KEY: &str = "vck_1234567890";

fn page() -> Document {
    Document::from_specs(&[
        NodeSpec::element("p", vec![NodeSpec::text("Contact: a@b.com or c@d.org")]),
        NodeSpec::element("p", vec![NodeSpec::text("Call 555-0100 before 5pm.")]),
    ])
}

fn controller_with(
    generator: FakeGenerator,
    search: SearchConfig,
) -> (SearchController<Document>, Arc<FakeGenerator>) {
    let generator = Arc::new(generator);
    let shared = Arc::clone(&generator);
    let service = BackgroundService::new(Settings::in_memory(), GenerationConfig::default())
        .with_connector(move |_| Ok(Arc::clone(&shared) as Arc<dyn PatternGenerator>));
    (
        SearchController::new(page(), Arc::new(service), &search),
        generator,
    )
}

fn controller() -> SearchController<Document> {
    controller_with(FakeGenerator::returning(r"\d+"), SearchConfig::default()).0
}

fn pos(current: usize, total: usize) -> MatchCount {
    MatchCount::Position(MatchPosition { current, total })
}

// -----------------------------------------------------------------
// Search and navigation
// -----------------------------------------------------------------

#[test]
fn search_focuses_first_match() {
    let mut ctrl = controller();
    let status = ctrl.handle_search("[a-z]@[a-z]+\\.[a-z]{2,}").unwrap();
    assert_eq!(status, pos(1, 2));
    assert_eq!(ctrl.panel().status_text(), "1 of 2");
    assert_eq!(ctrl.document().elements_with_class(CURRENT_CLASS).len(), 1);
}

#[test]
fn search_without_auto_focus_shows_total() {
    let search = SearchConfig {
        auto_focus_first: false,
        ..SearchConfig::default()
    };
    let (mut ctrl, _) = controller_with(FakeGenerator::returning("x"), search);
    assert_eq!(ctrl.handle_search(r"\.(com|org)").unwrap(), MatchCount::Total(2));
    assert_eq!(ctrl.panel().status_text(), "2 matches");
    assert!(ctrl.highlighter().current_index().is_none());

    assert_eq!(ctrl.handle_search("before").unwrap(), MatchCount::Total(1));
    assert_eq!(ctrl.panel().status_text(), "1 match");
}

#[test]
fn search_with_no_hits() {
    let mut ctrl = controller();
    assert_eq!(ctrl.handle_search("zebra").unwrap(), MatchCount::None);
    assert_eq!(ctrl.panel().status_text(), "No matches");
    assert!(ctrl.panel().error.is_none());
}

#[test]
fn invalid_pattern_sets_error_and_clears() {
    let mut ctrl = controller();
    let baseline = ctrl.document().body_outline();
    ctrl.handle_search("or").unwrap();

    assert!(ctrl.handle_search("(or").is_err());
    assert_eq!(ctrl.panel().error.as_deref(), Some(INVALID_PATTERN_MESSAGE));
    assert_eq!(ctrl.panel().status, MatchCount::None);
    assert_eq!(ctrl.document().body_outline(), baseline);

    ctrl.handle_search("or").unwrap();
    assert!(ctrl.panel().error.is_none());
}

#[test]
fn live_input_is_trimmed() {
    let mut ctrl = controller();
    ctrl.handle_input("  555  ").unwrap();
    assert_eq!(ctrl.panel().pattern, "555");
    assert_eq!(ctrl.panel().status, pos(1, 1));

    assert_eq!(ctrl.handle_input("   ").unwrap(), MatchCount::None);
    assert_eq!(ctrl.highlighter().match_count(), 0);
}

#[test]
fn next_and_previous_update_status() {
    let mut ctrl = controller();
    ctrl.handle_search(r"\d").unwrap();
    let total = ctrl.highlighter().match_count();
    assert_eq!(total, 8);

    assert_eq!(
        ctrl.handle_next(),
        Some(MatchPosition { current: 2, total })
    );
    assert_eq!(ctrl.panel().status_text(), "2 of 8");
    ctrl.handle_previous();
    ctrl.handle_previous();
    assert_eq!(ctrl.panel().status_text(), "8 of 8");
}

#[test]
fn navigation_without_matches_keeps_status() {
    let mut ctrl = controller();
    ctrl.handle_search("zebra").unwrap();
    assert!(ctrl.handle_next().is_none());
    assert!(ctrl.handle_previous().is_none());
    assert_eq!(ctrl.panel().status_text(), "No matches");
}

// -----------------------------------------------------------------
// Generation
// -----------------------------------------------------------------

#[tokio::test]
async fn generate_fills_pattern_and_searches() {
    let (mut ctrl, generator) =
        controller_with(FakeGenerator::returning(r"\d{3}-\d{4}"), SearchConfig::default());
    ctrl.service.settings().save_api_key(KEY).unwrap();

    let pattern = ctrl.handle_generate("  phone numbers ").await;
    assert_eq!(pattern.as_deref(), Some(r"\d{3}-\d{4}"));
    assert_eq!(ctrl.panel().pattern, r"\d{3}-\d{4}");
    assert_eq!(ctrl.panel().status_text(), "1 of 1");
    assert!(!ctrl.panel().loading);
    assert_eq!(generator.calls(), vec!["phone numbers"]);
}

#[tokio::test]
async fn blank_description_is_ignored() {
    let (mut ctrl, generator) =
        controller_with(FakeGenerator::returning("x"), SearchConfig::default());
    assert_eq!(ctrl.handle_generate("   ").await, None);
    assert!(ctrl.panel().error.is_none());
    assert!(generator.calls().is_empty());
}

#[tokio::test]
async fn generate_without_key_shows_error() {
    let mut ctrl = controller();
    assert_eq!(ctrl.handle_generate("numbers").await, None);
    assert_eq!(ctrl.panel().error.as_deref(), Some(MISSING_KEY_MESSAGE));
    assert!(!ctrl.panel().loading);
}

#[tokio::test]
async fn generator_failure_shows_its_message() {
    let (mut ctrl, _) = controller_with(
        FakeGenerator::failing(AiError::InvalidPattern("unclosed group".into())),
        SearchConfig::default(),
    );
    ctrl.service.settings().save_api_key(KEY).unwrap();
    ctrl.handle_search(r"\.(com|org)").unwrap();

    assert_eq!(ctrl.handle_generate("something").await, None);
    assert_eq!(
        ctrl.panel().error.as_deref(),
        Some("Generated invalid regex: unclosed group")
    );
    // Previous results stay until the next successful search.
    assert_eq!(ctrl.highlighter().match_count(), 2);
}

// -----------------------------------------------------------------
// Visibility
// -----------------------------------------------------------------

#[tokio::test]
async fn show_picks_onboarding_without_key() {
    let mut ctrl = controller();
    ctrl.show().await;
    assert!(ctrl.panel().visible);
    assert_eq!(ctrl.panel().view, PanelView::Onboarding);

    ctrl.service.settings().save_api_key(KEY).unwrap();
    ctrl.close();
    ctrl.show().await;
    assert_eq!(ctrl.panel().view, PanelView::Search);
}

#[tokio::test]
async fn toggle_closes_and_clears_highlights() {
    let mut ctrl = controller();
    let baseline = ctrl.document().body_outline();
    ctrl.toggle().await;
    ctrl.handle_search("or").unwrap();

    ctrl.toggle().await;
    assert!(!ctrl.panel().visible);
    assert_eq!(ctrl.panel().status, MatchCount::None);
    assert_eq!(ctrl.document().body_outline(), baseline);
}

#[tokio::test]
async fn escape_closes_settings_before_panel() {
    let mut ctrl = controller();
    ctrl.show().await;
    ctrl.open_settings().await;
    assert!(ctrl.panel().settings_open());

    ctrl.handle_escape();
    assert!(!ctrl.panel().settings_open());
    assert!(ctrl.panel().visible);

    ctrl.handle_escape();
    assert!(!ctrl.panel().visible);
}

// -----------------------------------------------------------------
// Settings and onboarding
// -----------------------------------------------------------------

#[tokio::test]
async fn onboarding_key_switches_to_search_view() {
    let mut ctrl = controller();
    ctrl.show().await;

    assert!(!ctrl.save_onboarding_key("   ").await);
    assert_eq!(
        ctrl.panel().notice.as_ref().map(|n| n.message.as_str()),
        Some("Please enter an API key")
    );

    assert!(!ctrl.save_onboarding_key("short").await);
    assert_eq!(ctrl.panel().view, PanelView::Onboarding);
    assert_eq!(
        ctrl.panel().notice.as_ref().map(|n| n.kind),
        Some(NoticeKind::Error)
    );

    assert!(ctrl.save_onboarding_key(KEY).await);
    assert_eq!(ctrl.panel().view, PanelView::Search);
    assert_eq!(
        ctrl.panel().notice.as_ref().map(|n| n.message.as_str()),
        Some("API key saved!")
    );
}

#[tokio::test]
async fn settings_form_round_trip() {
    let mut ctrl = controller();
    ctrl.service.settings().save_api_key(KEY).unwrap();

    ctrl.open_settings().await;
    let form = ctrl.panel().settings.clone().unwrap();
    assert_eq!(form.api_key, KEY);
    assert_eq!(form.model_preference, ModelPreference::Slow);

    let saved = ctrl
        .save_settings(SettingsUpdate {
            api_key: Some(KEY.into()),
            model_preference: Some(ModelPreference::Fast),
        })
        .await;
    assert!(saved);
    assert!(!ctrl.panel().settings_open());
    assert_eq!(
        ctrl.service.settings().model_preference().unwrap(),
        ModelPreference::Fast
    );
}

#[tokio::test]
async fn failed_settings_save_keeps_form_open() {
    let mut ctrl = controller();
    ctrl.open_settings().await;
    let saved = ctrl
        .save_settings(SettingsUpdate {
            api_key: Some("tiny".into()),
            model_preference: None,
        })
        .await;
    assert!(!saved);
    assert!(ctrl.panel().settings_open());
    assert_eq!(
        ctrl.panel().notice.as_ref().map(|n| n.message.as_str()),
        Some("invalid API key")
    );
}
