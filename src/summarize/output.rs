use super::aggregate::Aggregate;
use crate::git::{CommitRange, GitRepo};
use crate::locale::LocaleLinker;
use crate::model::{LanguageCount, SummaryOutput, SCHEMA_VERSION};
use anyhow::Result;
use chrono::Utc;
use console::style;

/// Ranked languages with changes, then new languages that had none.
pub fn language_counts(agg: &Aggregate, linker: &LocaleLinker<'_>) -> Vec<LanguageCount> {
    let mut counts: Vec<LanguageCount> = agg
        .tally
        .ranked()
        .into_iter()
        .map(|(locale, changes)| LanguageCount {
            locale: locale.to_string(),
            name: linker.name(locale).to_string(),
            changes,
            is_new: agg.new_languages.contains(locale),
        })
        .collect();

    for locale in &agg.new_languages {
        if agg.tally.get(locale).is_none() {
            counts.push(LanguageCount {
                locale: locale.clone(),
                name: linker.name(locale).to_string(),
                changes: 0,
                is_new: true,
            });
        }
    }

    counts
}

pub fn output_text(summary: &str) -> Result<()> {
    println!("{summary}");
    Ok(())
}

pub fn output_json(
    agg: &Aggregate,
    linker: &LocaleLinker<'_>,
    summary: &str,
    repo: &GitRepo,
    range: &CommitRange,
) -> Result<()> {
    let output = SummaryOutput {
        version: SCHEMA_VERSION,
        generated_at: Utc::now(),
        repository_path: repo.path().to_string_lossy().to_string(),
        commit_range: range.to_string(),
        total_changes: agg.total_changes(),
        languages: language_counts(agg, linker),
        new_languages: agg.new_languages.iter().cloned().collect(),
        failures: agg.failures.clone(),
        summary: summary.to_string(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

pub fn output_table(agg: &Aggregate, linker: &LocaleLinker<'_>, summary: &str) -> Result<()> {
    let counts = language_counts(agg, linker);
    if !counts.is_empty() {
        println!(
            "{:<10} {:<30} {:>8} {:>5}",
            style("Locale").bold(),
            style("Name").bold(),
            style("Changes").bold(),
            style("New").bold()
        );
        println!("{}", "─".repeat(56));
        for c in &counts {
            println!(
                "{:<10} {:<30} {:>8} {:>5}",
                c.locale,
                c.name,
                c.changes,
                if c.is_new { "yes" } else { "" }
            );
        }
        println!();
    }

    for failure in &agg.failures {
        println!("{} {}: {}", style("skipped").yellow(), failure.path, failure.reason);
    }

    println!("{summary}");
    Ok(())
}
