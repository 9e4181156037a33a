use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};

/// pagesearch: highlight and step through regex matches in a document.
#[derive(Parser, Debug)]
#[command(name = "pagesearch", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error, or a filter directive).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Highlight a pattern and report the matches.
    Search(SearchArgs),
    /// Generate a pattern from a description, then search with it.
    Generate(GenerateArgs),
    /// Interactive session: type a pattern to search live, `:help` for commands.
    Interactive(DocArgs),
    /// Show or change stored settings.
    #[command(subcommand)]
    Settings(SettingsCommand),
}

#[derive(ClapArgs, Debug)]
pub struct DocArgs {
    /// Document to search: `.json` tree or plain text.
    #[arg(long)]
    pub doc: PathBuf,
}

#[derive(ClapArgs, Debug)]
pub struct SearchArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// Pattern (case-insensitive).
    #[arg(short, long)]
    pub pattern: String,

    /// Advance N more matches after the search.
    #[arg(long, value_name = "N", conflicts_with = "previous")]
    pub next: Option<usize>,

    /// Step back N matches after the search.
    #[arg(long, value_name = "N")]
    pub previous: Option<usize>,

    /// Print the highlighted document structure.
    #[arg(long)]
    pub outline: bool,
}

#[derive(ClapArgs, Debug)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub doc: DocArgs,

    /// What to look for, in plain words.
    #[arg(short, long)]
    pub describe: String,
}

#[derive(Subcommand, Debug)]
pub enum SettingsCommand {
    /// Print the stored settings (the API key is masked).
    Show,
    /// Store the AI gateway API key.
    SetKey { key: String },
    /// Remove the stored API key.
    ClearKey,
    /// Choose the generation model.
    Model { preference: ModelArg },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelArg {
    Fast,
    Slow,
}

pub fn parse() -> Args {
    Args::parse()
}
