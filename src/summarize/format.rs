use super::aggregate::{Aggregate, LanguageTally};
use crate::locale::LocaleLinker;
use crate::util::plural;

pub const NO_CHANGES: &str = "No translation changes found in this range.";

/// Number of languages named in the "most active" clause.
const TOP_LANGUAGES: usize = 3;

/// Render the prose summary for release notes.
pub fn render_summary(agg: &Aggregate, linker: &LocaleLinker<'_>) -> String {
    if !agg.has_changes() {
        return NO_CHANGES.to_string();
    }

    let mut parts = Vec::new();
    let total_changes = agg.total_changes();

    if total_changes > 0 {
        parts.push(format_changes_clause(agg.tally.len(), total_changes));
        parts.push(format_top_languages(&agg.tally, linker));
    }

    if !agg.new_languages.is_empty() {
        let codes: Vec<&str> = agg.new_languages.iter().map(String::as_str).collect();
        parts.push(format_new_languages(&codes, linker));
    }

    parts.join(" ")
}

fn format_changes_clause(languages: usize, changes: usize) -> String {
    let verb = if languages == 1 { "was" } else { "were" };
    format!(
        "{languages} language{} {verb} updated with {changes} change{}.\n",
        plural(languages),
        plural(changes)
    )
}

fn format_top_languages(tally: &LanguageTally, linker: &LocaleLinker<'_>) -> String {
    let top: Vec<String> = tally
        .ranked()
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(locale, count)| format!("{} ({count})", linker.link(locale)))
        .collect();

    match top.split_last() {
        None => String::new(),
        Some((only, [])) => format!("The most active was {only}\n"),
        Some((last, rest)) => format!("The most active were {} and {last}\n", rest.join(", ")),
    }
}

/// `codes` must already be sorted by locale code.
fn format_new_languages(codes: &[&str], linker: &LocaleLinker<'_>) -> String {
    let names: Vec<String> = codes.iter().map(|code| linker.link(code)).collect();
    format!("New language{} added: {}\n", plural(codes.len()), names.join(", "))
}
