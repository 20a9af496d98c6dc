use crate::model::{FileChanges, FileFailure, FileOutcome};
use std::collections::BTreeSet;

/// Contentful change counts per locale, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageTally {
    counts: Vec<(String, usize)>,
}

impl LanguageTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `count` changes for `locale`; zero counts are not recorded.
    pub fn add(&mut self, locale: &str, count: usize) {
        if count == 0 {
            return;
        }
        match self.counts.iter_mut().find(|(l, _)| l == locale) {
            Some((_, total)) => *total += count,
            None => self.counts.push((locale.to_string(), count)),
        }
    }

    pub fn get(&self, locale: &str) -> Option<usize> {
        self.counts.iter().find(|(l, _)| l == locale).map(|(_, c)| *c)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, c)| c).sum()
    }

    /// Locales by descending count; equal counts keep first-seen order.
    pub fn ranked(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> =
            self.counts.iter().map(|(l, c)| (l.as_str(), *c)).collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }
}

#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    pub tally: LanguageTally,
    pub new_languages: BTreeSet<String>,
    pub failures: Vec<FileFailure>,
}

impl Aggregate {
    pub fn total_changes(&self) -> usize {
        self.tally.total()
    }

    pub fn has_changes(&self) -> bool {
        self.total_changes() > 0 || !self.new_languages.is_empty()
    }
}

/// Fold per-file outcomes into a tally; failed files only contribute their
/// failure and their new-language flag.
pub fn aggregate(outcomes: &[FileOutcome]) -> Aggregate {
    let mut agg = Aggregate::default();

    for outcome in outcomes {
        if outcome.is_new {
            agg.new_languages.insert(outcome.locale.clone());
        }
        match &outcome.changes {
            FileChanges::Counted(count) => agg.tally.add(&outcome.locale, *count),
            FileChanges::Failed(reason) => agg.failures.push(FileFailure {
                path: outcome.path.clone(),
                reason: reason.clone(),
            }),
        }
    }

    agg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counted(locale: &str, count: usize, is_new: bool) -> FileOutcome {
        FileOutcome {
            path: format!("po/{locale}.po"),
            locale: locale.to_string(),
            is_new,
            changes: FileChanges::Counted(count),
        }
    }

    #[test]
    fn tally_skips_zero_counts() {
        let agg = aggregate(&[
            counted("de", 20, false),
            counted("el", 2, false),
            counted("fi", 0, false),
        ]);
        assert_eq!(agg.tally.get("de"), Some(20));
        assert_eq!(agg.tally.get("el"), Some(2));
        assert_eq!(agg.tally.get("fi"), None);
        assert_eq!(agg.tally.len(), 2);
        assert_eq!(agg.total_changes(), 22);
    }

    #[test]
    fn ranking_is_stable_for_ties() {
        let mut tally = LanguageTally::new();
        tally.add("sv", 3);
        tally.add("nl", 7);
        tally.add("it", 3);
        tally.add("pl", 7);
        assert_eq!(tally.ranked(), vec![("nl", 7), ("pl", 7), ("sv", 3), ("it", 3)]);
    }

    #[test]
    fn failures_keep_new_language_flag() {
        let failed = FileOutcome {
            path: "po/fr.po".to_string(),
            locale: "fr".to_string(),
            is_new: true,
            changes: FileChanges::Failed("object missing".to_string()),
        };
        let agg = aggregate(&[failed, counted("de", 1, false)]);

        assert_eq!(agg.total_changes(), 1);
        assert!(agg.new_languages.contains("fr"));
        assert_eq!(
            agg.failures,
            vec![FileFailure { path: "po/fr.po".to_string(), reason: "object missing".to_string() }]
        );
    }

    #[test]
    fn new_language_without_changes_still_counts_as_change() {
        let agg = aggregate(&[counted("si", 0, true)]);
        assert!(agg.tally.is_empty());
        assert!(agg.has_changes());
    }

    #[test]
    fn empty_outcomes_have_no_changes() {
        assert!(!aggregate(&[]).has_changes());
    }
}
