use super::{
    aggregate, collect_outcomes, output_json, output_table, output_text, render_summary,
    SummaryConfig,
};
use crate::cli::SummarizeArgs;
use crate::git::{CommitRange, GitRepo};
use crate::locale::{self, LocaleLinker};
use anyhow::Context;
use tracing::info;

pub fn exec(args: SummarizeArgs) -> anyhow::Result<()> {
    let config = SummaryConfig::from_args(&args).context("Invalid summarize options")?;
    let repo = GitRepo::open_existing(&args.target.repo_path)
        .context("Failed to open git repository")?;
    let range = CommitRange::parse(&args.target.commit_range).context("Invalid commit range")?;

    let resolved = repo
        .resolve_range(&range)
        .context("Failed to resolve commit range")?;

    let files = repo
        .changed_files(&resolved, &config.matcher)
        .context("Failed to list changed translation files")?;
    info!(count = files.len(), %range, "found changed translation files");

    // Progress goes to stderr; keep it off for machine-readable output.
    let outcomes = collect_outcomes(&repo, &range, &resolved, &files, &config, !args.json);
    let agg = aggregate(&outcomes);

    let names = locale::names(config.locale_names.as_deref())
        .context("Failed to load locale names")?;
    let linker = LocaleLinker::new(names, &config.portal_url);
    let summary = render_summary(&agg, &linker);

    if args.json {
        output_json(&agg, &linker, &summary, &repo, &range)?;
    } else if args.table {
        output_table(&agg, &linker, &summary)?;
    } else {
        output_text(&summary)?;
    }

    Ok(())
}
