//! Subcommand handlers.

mod interactive;
mod settings;

use std::path::Path;
use std::sync::Arc;

use pagesearch_common::{MatchCount, PageSearchError};
use pagesearch_config::{FileSettingsStore, PageSearchConfig, Settings};
use pagesearch_dom::Document;

use crate::cli::{Command, GenerateArgs, SearchArgs};
use crate::controller::SearchController;
use crate::service::BackgroundService;

pub async fn run(command: Command, config: PageSearchConfig) -> Result<(), PageSearchError> {
    match command {
        Command::Search(args) => search(args, &config),
        Command::Generate(args) => generate(args, &config).await,
        Command::Interactive(args) => {
            let doc = load_document(&args.doc)?;
            interactive::run(controller(doc, &config)?, &config).await
        }
        Command::Settings(cmd) => settings::run(cmd, &open_settings()?),
    }
}

/// Read a document: `.json` files as a node tree, anything else as plain
/// text.
pub(crate) fn load_document(path: &Path) -> Result<Document, PageSearchError> {
    let contents = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    if is_json {
        Document::from_json(&contents)
    } else {
        Ok(Document::from_plain_text(&contents))
    }
}

fn open_settings() -> Result<Settings, PageSearchError> {
    Ok(Settings::new(FileSettingsStore::open_default()?))
}

fn controller(
    doc: Document,
    config: &PageSearchConfig,
) -> Result<SearchController<Document>, PageSearchError> {
    let service = BackgroundService::new(open_settings()?, config.generation.clone());
    Ok(SearchController::new(doc, Arc::new(service), &config.search))
}

fn search(args: SearchArgs, config: &PageSearchConfig) -> Result<(), PageSearchError> {
    let doc = load_document(&args.doc.doc)?;
    let mut ctrl = controller(doc, config)?;
    ctrl.handle_search(&args.pattern)?;

    for _ in 0..args.next.unwrap_or(0) {
        ctrl.handle_next();
    }
    for _ in 0..args.previous.unwrap_or(0) {
        ctrl.handle_previous();
    }

    report(&ctrl, args.outline);
    Ok(())
}

async fn generate(args: GenerateArgs, config: &PageSearchConfig) -> Result<(), PageSearchError> {
    let doc = load_document(&args.doc.doc)?;
    let mut ctrl = controller(doc, config)?;

    let Some(pattern) = ctrl.handle_generate(&args.describe).await else {
        let message = ctrl
            .panel()
            .error
            .clone()
            .unwrap_or_else(|| "a description is required".to_string());
        return Err(PageSearchError::Generation(message));
    };

    println!("pattern: {pattern}");
    report(&ctrl, false);
    Ok(())
}

/// Print the counter, each match with its text, and optionally the
/// highlighted tree.
pub(crate) fn report(ctrl: &SearchController<Document>, outline: bool) {
    let panel = ctrl.panel();
    if let Some(error) = &panel.error {
        println!("error: {error}");
    }
    println!("{}", panel.status_text());

    let current = ctrl.highlighter().current_index();
    for (i, handle) in ctrl.highlighter().matches().iter().enumerate() {
        let marker = if current == Some(i) { '>' } else { ' ' };
        println!("{marker} {:>3}  {:?}", i + 1, handle.text);
    }

    if outline {
        for line in ctrl.document().body_outline() {
            println!("{line}");
        }
    }
}

/// Show the first and last four characters of a credential.
pub(crate) fn mask_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    if chars.len() <= 8 {
        return "*".repeat(chars.len());
    }
    let head: String = chars[..4].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// Counter text for the prompt line.
pub(crate) fn status_line(status: MatchCount) -> String {
    match status {
        MatchCount::None => "[no matches]".to_string(),
        other => format!("[{other}]"),
    }
}
