use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommitInfo {
    pub id: String,
    pub message: String,
    pub parent_ids: Vec<String>,
}

impl CommitInfo {
    pub fn short_id(&self) -> &str {
        self.id.get(..8).unwrap_or(&self.id)
    }
}

/// Result of counting one catalog file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileChanges {
    Counted(usize),
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub path: String,
    pub locale: String,
    pub is_new: bool,
    pub changes: FileChanges,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LanguageCount {
    pub locale: String,
    pub name: String,
    pub changes: usize,
    pub is_new: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FileFailure {
    pub path: String,
    pub reason: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commit_range: String,
    pub total_changes: usize,
    pub languages: Vec<LanguageCount>,
    pub new_languages: Vec<String>,
    pub failures: Vec<FileFailure>,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreditEntry {
    pub language: String,
    pub authors: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreditOutput {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub repository_path: String,
    pub commit_range: String,
    pub credits: Vec<CreditEntry>,
    pub unrecognized: Vec<String>,
}
