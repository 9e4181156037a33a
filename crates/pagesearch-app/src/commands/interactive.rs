//! Line-driven session over stdin.
//!
//! Plain lines are live pattern input and go through the debouncer; an
//! empty line steps to the next match. Commands start with `:`.

use std::time::Duration;

use pagesearch_common::PageSearchError;
use pagesearch_config::{ModelPreference, PageSearchConfig, SettingsUpdate};
use pagesearch_dom::Document;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::debug;

use super::{mask_key, report, status_line};
use crate::controller::SearchController;
use crate::debounce::Debouncer;
use crate::panel::{NoticeKind, PanelView};

const HELP: &str = "\
  <text>          search (live, debounced)
  <empty line>    next match
  :n / :p         next / previous match
  :g <words>      generate a pattern from a description
  :list           list matches
  :settings       show settings
  :key <KEY>      store the API key
  :model <fast|slow>
  :close / :open  hide or show the panel (hiding clears highlights)
  :help           this text
  :q              quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Input {
    Pattern(String),
    Next,
    Previous,
    Generate(String),
    List,
    ShowSettings,
    SetKey(String),
    Model(ModelPreference),
    Close,
    Open,
    Help,
    Quit,
    Unknown(String),
}

pub(crate) fn parse_line(line: &str) -> Input {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Input::Next;
    }
    let Some(command) = line.strip_prefix(':') else {
        return Input::Pattern(line.to_string());
    };

    let (name, rest) = match command.split_once(char::is_whitespace) {
        Some((name, rest)) => (name, rest.trim()),
        None => (command.trim(), ""),
    };
    match name {
        "n" | "next" => Input::Next,
        "p" | "prev" | "previous" => Input::Previous,
        "g" | "gen" | "generate" => Input::Generate(rest.to_string()),
        "l" | "list" => Input::List,
        "settings" => Input::ShowSettings,
        "key" => Input::SetKey(rest.to_string()),
        "model" => match rest.parse() {
            Ok(pref) => Input::Model(pref),
            Err(_) => Input::Unknown(line.to_string()),
        },
        "close" | "esc" => Input::Close,
        "open" => Input::Open,
        "h" | "help" | "?" => Input::Help,
        "q" | "quit" | "exit" => Input::Quit,
        _ => Input::Unknown(line.to_string()),
    }
}

pub(super) async fn run(
    mut ctrl: SearchController<Document>,
    config: &PageSearchConfig,
) -> Result<(), PageSearchError> {
    let delay = Duration::from_millis(u64::from(config.search.debounce_ms));
    let (mut debouncer, mut settled) = Debouncer::new(delay);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    ctrl.show().await;
    if ctrl.panel().view == PanelView::Onboarding {
        println!("No API key stored. Paste your AI gateway key to enable :g, or just type a pattern.");
    }
    println!("Type a pattern to search, :help for commands.");

    // Last pattern handed to the debouncer, kept so a command can flush it.
    let mut typed: Option<String> = None;

    loop {
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else { break };
                let input = parse_line(&line);
                debug!(?input, "interactive input");
                if input == Input::Quit {
                    break;
                }
                let pattern = match &input {
                    Input::Pattern(text) => Some(text.clone()),
                    _ => None,
                };
                match &input {
                    Input::Pattern(_) => {}
                    _ if debouncer.is_pending() => {
                        debouncer.cancel();
                        if let Some(pattern) = typed.take() {
                            let _ = ctrl.handle_input(&pattern);
                            // Enter right after typing runs the search, it
                            // does not also step past the first match.
                            if input == Input::Next {
                                render(&ctrl);
                                continue;
                            }
                        }
                    }
                    _ => {}
                }
                handle(&mut ctrl, &mut debouncer, input).await;
                if pattern.is_some() && debouncer.is_pending() {
                    typed = pattern;
                }
            }
            Some(pattern) = settled.recv() => {
                typed = None;
                // The error, if any, is already on the panel.
                let _ = ctrl.handle_input(&pattern);
                render(&ctrl);
            }
        }
    }

    ctrl.close();
    Ok(())
}

async fn handle(
    ctrl: &mut SearchController<Document>,
    debouncer: &mut Debouncer<String>,
    input: Input,
) {
    match input {
        Input::Pattern(text) => {
            if !ctrl.panel().visible {
                println!("panel is closed, :open to reopen");
                return;
            }
            // During onboarding a key-shaped line is taken as the key.
            if ctrl.panel().view == PanelView::Onboarding && looks_like_key(&text) {
                debouncer.cancel();
                ctrl.save_onboarding_key(&text).await;
                render_notice(ctrl);
                return;
            }
            debouncer.call(text);
        }
        Input::Next => {
            ctrl.handle_next();
            render(ctrl);
        }
        Input::Previous => {
            ctrl.handle_previous();
            render(ctrl);
        }
        Input::Generate(description) => {
            if description.trim().is_empty() {
                println!("usage: :g <description>");
                return;
            }
            println!("generating...");
            if let Some(pattern) = ctrl.handle_generate(&description).await {
                println!("pattern: {pattern}");
            }
            render(ctrl);
        }
        Input::List => report(ctrl, false),
        Input::ShowSettings => {
            ctrl.open_settings().await;
            if let Some(snapshot) = &ctrl.panel().settings {
                let key = if snapshot.has_api_key {
                    mask_key(&snapshot.api_key)
                } else {
                    "(not set)".to_string()
                };
                println!("api key: {key}");
                println!("model:   {}", snapshot.model_preference);
            }
            ctrl.close_settings();
        }
        Input::SetKey(key) => {
            if ctrl.panel().view == PanelView::Onboarding {
                ctrl.save_onboarding_key(&key).await;
            } else {
                ctrl.save_settings(SettingsUpdate {
                    api_key: Some(key),
                    model_preference: None,
                })
                .await;
            }
            render_notice(ctrl);
        }
        Input::Model(pref) => {
            ctrl.save_settings(SettingsUpdate {
                api_key: None,
                model_preference: Some(pref),
            })
            .await;
            render_notice(ctrl);
        }
        Input::Close => {
            ctrl.handle_escape();
            println!("panel closed");
        }
        Input::Open => {
            ctrl.show().await;
            println!("panel open");
        }
        Input::Help => println!("{HELP}"),
        Input::Quit => {}
        Input::Unknown(line) => println!("unknown command {line:?}, :help for commands"),
    }
}

/// AI gateway keys are a single `vck_`-prefixed token.
fn looks_like_key(text: &str) -> bool {
    let text = text.trim();
    !text.contains(char::is_whitespace) && text.starts_with("vck_")
}

fn render(ctrl: &SearchController<Document>) {
    let panel = ctrl.panel();
    match &panel.error {
        Some(error) => println!("{} {error}", status_line(panel.status)),
        None => println!("{}", status_line(panel.status)),
    }
}

fn render_notice(ctrl: &SearchController<Document>) {
    if let Some(notice) = &ctrl.panel().notice {
        let tag = match notice.kind {
            NoticeKind::Success => "ok",
            NoticeKind::Error => "error",
        };
        println!("{tag}: {}", notice.message);
    }
}
