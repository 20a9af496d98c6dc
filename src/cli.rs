use crate::counter::DEFAULT_LOOKAHEAD;
use crate::locale::DEFAULT_PORTAL_URL;
use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "po-summary")]
#[command(about = "Summarize translation changes over a git commit range")]
#[command(version)]
pub struct Cli {
    #[clap(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Clone)]
pub struct CommonArgs {
    #[arg(
        long,
        global = true,
        help = "Log filter, e.g. debug or po_summary=trace (overrides PO_SUMMARY_LOG)"
    )]
    pub log_level: Option<String>,
}

/// The repository and commit range every command works on.
#[derive(Args, Clone)]
pub struct TargetArgs {
    #[arg(help = "Git commit range (e.g., v5.0.0...v5.0.2)")]
    pub commit_range: String,

    #[arg(long, help = "Path to git repository")]
    pub repo_path: PathBuf,
}

#[derive(Args, Clone)]
pub struct SummarizeArgs {
    #[clap(flatten)]
    pub target: TargetArgs,

    #[arg(long, default_value = "po/*.po", help = "Glob selecting translation catalogs")]
    pub glob: String,

    #[arg(
        long,
        default_value_t = DEFAULT_LOOKAHEAD,
        help = "Lines searched for the content of a wrapped msgstr"
    )]
    pub lookahead: usize,

    #[arg(
        long,
        default_value = DEFAULT_PORTAL_URL,
        help = "Translation portal URL template, {locale} is replaced by the locale code"
    )]
    pub portal_url: String,

    #[arg(long, help = "JSON file mapping locale codes to display names")]
    pub locale_names: Option<PathBuf>,

    #[arg(long, conflicts_with = "table", help = "Output as JSON")]
    pub json: bool,

    #[arg(long, help = "Print a per-language table before the summary")]
    pub table: bool,
}

#[derive(Args, Clone)]
pub struct CreditsArgs {
    #[clap(flatten)]
    pub target: TargetArgs,

    #[arg(long, default_value = "po", help = "Directory holding translation catalogs")]
    pub dir: String,

    #[arg(long, help = "Output as JSON")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count translated strings changed per language and print a summary
    Summarize(SummarizeArgs),
    /// Credit translators from commit titles as an HTML list
    Credits(CreditsArgs),
}

impl Cli {
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    pub fn execute(self) -> Result<()> {
        match self.command {
            Commands::Summarize(args) => crate::summarize::exec(args),
            Commands::Credits(args) => crate::credits::exec(args),
        }
    }
}
