pub mod aggregate;
pub mod exec;
pub mod fetch;
pub mod format;
pub mod output;

pub use aggregate::{aggregate, Aggregate, LanguageTally};
pub use exec::exec;
pub use fetch::{collect_outcomes, is_new_language};
pub use format::{render_summary, NO_CHANGES};
pub use output::{language_counts, output_json, output_table, output_text};

use crate::cli::SummarizeArgs;
use crate::error::{PoError, Result};
use crate::locale::LOCALE_PLACEHOLDER;
use globset::{Glob, GlobMatcher};
use std::path::PathBuf;

/// Validated options for one summarize run.
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub matcher: GlobMatcher,
    pub lookahead: usize,
    pub portal_url: String,
    pub locale_names: Option<PathBuf>,
}

impl SummaryConfig {
    pub fn from_args(args: &SummarizeArgs) -> Result<Self> {
        if args.lookahead == 0 {
            return Err(PoError::Configuration("--lookahead must be at least 1".to_string()));
        }
        if !args.portal_url.contains(LOCALE_PLACEHOLDER) {
            return Err(PoError::Configuration(format!(
                "--portal-url must contain {LOCALE_PLACEHOLDER}: {}",
                args.portal_url
            )));
        }

        Ok(Self {
            matcher: Glob::new(&args.glob)?.compile_matcher(),
            lookahead: args.lookahead,
            portal_url: args.portal_url.clone(),
            locale_names: args.locale_names.clone(),
        })
    }
}
