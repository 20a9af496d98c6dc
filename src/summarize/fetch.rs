use super::SummaryConfig;
use crate::counter::count_msgstr_changes;
use crate::git::{CatalogChange, CommitRange, GitRepo, ResolvedRange};
use crate::model::{FileChanges, FileOutcome};
use crate::util::locale_from_path;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, warn};

/// Count every catalog file in `files`. Per-file diff failures are recorded
/// in the outcome instead of aborting the run.
pub fn collect_outcomes(
    repo: &GitRepo,
    range: &CommitRange,
    resolved: &ResolvedRange,
    files: &[CatalogChange],
    config: &SummaryConfig,
    show_progress: bool,
) -> Vec<FileOutcome> {
    let pb = if show_progress {
        ProgressBar::new(files.len() as u64)
    } else {
        ProgressBar::hidden()
    };
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut outcomes = Vec::with_capacity(files.len());
    for change in files {
        pb.set_message(change.path.clone());
        if let Some(outcome) = count_file(repo, range, resolved, change, config) {
            outcomes.push(outcome);
        }
        pb.inc(1);
    }

    pb.finish_and_clear();
    outcomes
}

fn count_file(
    repo: &GitRepo,
    range: &CommitRange,
    resolved: &ResolvedRange,
    change: &CatalogChange,
    config: &SummaryConfig,
) -> Option<FileOutcome> {
    let path = change.path.as_str();
    let Some(locale) = locale_from_path(path) else {
        debug!(path, "not a catalog file, skipping");
        return None;
    };

    let is_new = is_new_language(repo, range, path);

    let changes = match repo.diff_text(resolved, change) {
        Ok(diff) => FileChanges::Counted(count_msgstr_changes(&diff, config.lookahead)),
        Err(e) => {
            warn!(path, error = %e, "could not get diff, counting no changes");
            FileChanges::Failed(e.to_string())
        }
    };
    debug!(path, locale, is_new, ?changes, "counted catalog file");

    Some(FileOutcome {
        path: path.to_string(),
        locale: locale.to_string(),
        is_new,
        changes,
    })
}

/// True when `path` did not exist at the start of `range`. If the check
/// itself fails the file is reported as not new.
pub fn is_new_language(repo: &GitRepo, range: &CommitRange, path: &str) -> bool {
    match repo.existed_at(range.left(), path) {
        Ok(existed) => !existed,
        Err(e) => {
            warn!(path, error = %e, "could not check whether file is new, assuming not");
            false
        }
    }
}
