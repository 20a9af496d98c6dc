use crate::cli::CreditsArgs;
use crate::git::{CommitRange, GitRepo};
use crate::model::{CommitInfo, CreditEntry, CreditOutput, SCHEMA_VERSION};
use anyhow::Context;
use chrono::Utc;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

const TITLE_PREFIX: &str = "Update ";
const TITLE_SEPARATOR: &str = " translation thanks to ";

pub fn exec(args: CreditsArgs) -> anyhow::Result<()> {
    let repo = GitRepo::open_existing(&args.target.repo_path)
        .context("Failed to open git repository")?;
    let range = CommitRange::parse(&args.target.commit_range).context("Invalid commit range")?;

    let commits = repo
        .commits_in_range(&range)
        .context("Failed to walk commit range")?;

    let mut relevant = Vec::new();
    for commit in commits {
        if repo
            .commit_touches(&commit, &args.dir)
            .with_context(|| format!("Failed to diff commit {}", commit.short_id()))?
        {
            relevant.push(commit);
        }
    }
    info!(count = relevant.len(), dir = %args.dir, "commits touching translations");

    let credits = collect_credits(&relevant);

    if args.json {
        let output = CreditOutput {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            repository_path: repo.path().to_string_lossy().to_string(),
            commit_range: range.to_string(),
            credits: credits.entries(),
            unrecognized: credits.unrecognized.clone(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", credits.to_html());
    }

    Ok(())
}

/// Translators per language, plus commit lines that did not follow the
/// `Update <language> translation thanks to <names>` convention.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Credits {
    by_language: BTreeMap<String, BTreeSet<String>>,
    pub unrecognized: Vec<String>,
}

impl Credits {
    pub fn entries(&self) -> Vec<CreditEntry> {
        self.by_language
            .iter()
            .map(|(language, authors)| CreditEntry {
                language: language.clone(),
                authors: authors.iter().cloned().collect(),
            })
            .collect()
    }

    pub fn to_html(&self) -> String {
        let mut html = String::new();
        for entry in self.entries() {
            html.push_str(&format!(
                "<li>Update {} translation thanks to {}</li>\n",
                entry.language,
                entry.authors.join(", ")
            ));
        }
        for line in &self.unrecognized {
            html.push_str(&format!("<li>{line}</li>\n"));
        }
        html
    }
}

pub fn collect_credits(commits: &[CommitInfo]) -> Credits {
    let mut credits = Credits::default();

    for commit in commits {
        match parse_title(&commit.message) {
            Some((language, authors)) => {
                credits
                    .by_language
                    .entry(language.to_string())
                    .or_default()
                    .extend(authors.into_iter().map(str::to_string));
            }
            None => {
                debug!(id = commit.short_id(), "unrecognized translation commit");
                credits
                    .unrecognized
                    .push(format!("{} {}", commit.short_id(), commit.message));
            }
        }
    }

    credits.unrecognized.sort();
    credits
}

/// Split `Update German translation thanks to Ann, Bob` into the language
/// and its authors.
pub fn parse_title(title: &str) -> Option<(&str, Vec<&str>)> {
    let rest = title.trim().strip_prefix(TITLE_PREFIX)?;
    let (language, authors) = rest.split_once(TITLE_SEPARATOR)?;
    let language = language.trim();
    if language.is_empty() {
        return None;
    }
    let authors: Vec<&str> = authors
        .split(',')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .collect();
    Some((language, authors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn commit(id: &str, message: &str) -> CommitInfo {
        CommitInfo {
            id: id.to_string(),
            message: message.to_string(),
            parent_ids: Vec::new(),
        }
    }

    #[test]
    fn parses_credit_titles() {
        assert_eq!(
            parse_title("Update Brazilian Portuguese translation thanks to Ana, João"),
            Some(("Brazilian Portuguese", vec!["Ana", "João"]))
        );
        assert_eq!(parse_title("Fix typo in German"), None);
        assert_eq!(parse_title("Update  translation thanks to Ann"), None);
    }

    #[test]
    fn merges_and_sorts_authors_per_language() {
        let commits = [
            commit("aaaaaaaa11", "Update German translation thanks to Zoe, Bob"),
            commit("bbbbbbbb22", "Update Greek translation thanks to Nikos"),
            commit("cccccccc33", "Update German translation thanks to Bob"),
            commit("dddddddd44", "Rebuild catalogs"),
            commit("eeeeeeee55", "Add Sinhala"),
        ];

        let credits = collect_credits(&commits);
        assert_eq!(
            credits.to_html(),
            "<li>Update German translation thanks to Bob, Zoe</li>\n\
             <li>Update Greek translation thanks to Nikos</li>\n\
             <li>dddddddd Rebuild catalogs</li>\n\
             <li>eeeeeeee Add Sinhala</li>\n"
        );
    }
}
