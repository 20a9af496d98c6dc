use crate::error::{PoError, Result};
use crate::git::range::{CommitRange, RangeKind};
use crate::model::CommitInfo;
use crate::util::expand_home;
use gix::object::tree::diff::ChangeDetached;
use gix::{discover, ObjectId, Repository};
use globset::GlobMatcher;
use similar::TextDiff;
use std::collections::{HashSet, VecDeque};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Lines of context around each hunk, as `git diff` prints by default.
const CONTEXT_LINES: usize = 3;

pub struct GitRepo {
    repo: Repository,
    path: PathBuf,
}

/// A catalog changed within a range. `source_path` is set when the file was
/// renamed or copied from another path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogChange {
    pub path: String,
    pub source_path: Option<String>,
}

impl CatalogChange {
    /// Path of the file at the start of the range.
    pub fn old_path(&self) -> &str {
        self.source_path.as_deref().unwrap_or(&self.path)
    }
}

/// The two trees a commit range compares.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedRange {
    pub base: ObjectId,
    pub head: ObjectId,
}

impl GitRepo {
    /// Open the repository containing `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = discover(path.as_ref())?;
        let path = repo.workdir().unwrap_or_else(|| repo.path()).to_path_buf();

        Ok(Self { repo, path })
    }

    /// Open a repository from an operator-supplied path, which must name an
    /// existing directory.
    pub fn open_existing(path: &Path) -> Result<Self> {
        let expanded = expand_home(path);
        if !expanded.is_dir() {
            return Err(PoError::Configuration(format!(
                "Repository path does not exist: {}",
                expanded.display()
            )));
        }
        let absolute = expanded.canonicalize()?;
        debug!(path = %absolute.display(), "opening repository");
        Self::open(absolute)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn resolve_commit(&self, rev: &str) -> Result<ObjectId> {
        let spec = format!("{rev}^{{commit}}");
        let id = self
            .repo
            .rev_parse_single(spec.as_str())
            .map_err(|e| PoError::VersionControl(format!("Invalid revision '{rev}': {e}")))?;
        Ok(id.detach())
    }

    fn merge_base(&self, one: ObjectId, two: ObjectId, range: &CommitRange) -> Result<ObjectId> {
        let base = self.repo.merge_base(one, two).map_err(|e| {
            PoError::VersionControl(format!("No merge base for '{}': {e}", range.as_str()))
        })?;
        Ok(base.detach())
    }

    /// Resolve both ends of `range` into the commits whose trees are diffed.
    pub fn resolve_range(&self, range: &CommitRange) -> Result<ResolvedRange> {
        let left = self.resolve_commit(range.left())?;
        let head = self.resolve_commit(range.right())?;

        let base = match range.kind() {
            RangeKind::Symmetric => self.merge_base(left, head, range)?,
            RangeKind::TwoDot | RangeKind::Single => left,
        };

        debug!(%range, %base, %head, "resolved commit range");
        Ok(ResolvedRange { base, head })
    }

    /// Catalogs matching `matcher` that differ between the two ends of
    /// `range`, in tree-diff order. Renamed or copied files keep their source
    /// path so they are diffed against their previous content.
    pub fn changed_files(
        &self,
        range: &ResolvedRange,
        matcher: &GlobMatcher,
    ) -> Result<Vec<CatalogChange>> {
        let base_tree = self.repo.find_commit(range.base)?.tree()?;
        let head_tree = self.repo.find_commit(range.head)?.tree()?;

        let changes: Vec<ChangeDetached> =
            self.repo.diff_tree_to_tree(Some(&base_tree), Some(&head_tree), None)?;

        let mut seen = HashSet::new();
        let mut files = Vec::new();
        for change in changes {
            let file = match change {
                ChangeDetached::Addition { location, .. }
                | ChangeDetached::Deletion { location, .. }
                | ChangeDetached::Modification { location, .. } => CatalogChange {
                    path: location.to_string(),
                    source_path: None,
                },
                ChangeDetached::Rewrite { source_location, location, .. } => CatalogChange {
                    path: location.to_string(),
                    source_path: Some(source_location.to_string()),
                },
            };
            if matcher.is_match(&file.path) && seen.insert(file.path.clone()) {
                files.push(file);
            }
        }

        Ok(files)
    }

    /// Whether `path` is present in the tree of revision `rev`.
    pub fn existed_at(&self, rev: &str, path: &str) -> Result<bool> {
        let commit_id = self.resolve_commit(rev)?;
        let tree = self.repo.find_commit(commit_id)?.tree()?;
        Ok(tree.lookup_entry_by_path(path)?.is_some())
    }

    /// Unified diff of a changed catalog between the two ends of `range`.
    ///
    /// A side where the file is missing is treated as empty. Binary content
    /// produces an empty diff.
    pub fn diff_text(&self, range: &ResolvedRange, change: &CatalogChange) -> Result<String> {
        let path = change.path.as_str();
        let old_path = change.old_path();
        let old = self.blob_at(range.base, old_path)?;
        let new = self.blob_at(range.head, path)?;

        if old.as_deref().is_some_and(is_binary) || new.as_deref().is_some_and(is_binary) {
            debug!(path, "skipping binary file");
            return Ok(String::new());
        }

        let old_header = match old {
            Some(_) => format!("a/{old_path}"),
            None => "/dev/null".to_string(),
        };
        let new_header = match new {
            Some(_) => format!("b/{path}"),
            None => "/dev/null".to_string(),
        };
        let old_text = old.map(|b| String::from_utf8_lossy(&b).into_owned()).unwrap_or_default();
        let new_text = new.map(|b| String::from_utf8_lossy(&b).into_owned()).unwrap_or_default();

        if old_text == new_text {
            return Ok(String::new());
        }

        let diff = TextDiff::from_lines(&old_text, &new_text);
        let rendered = diff
            .unified_diff()
            .context_radius(CONTEXT_LINES)
            .header(&old_header, &new_header)
            .to_string();
        Ok(rendered)
    }

    fn blob_at(&self, commit_id: ObjectId, path: &str) -> Result<Option<Vec<u8>>> {
        let tree = self.repo.find_commit(commit_id)?.tree()?;
        let Some(entry) = tree.lookup_entry_by_path(path)? else {
            return Ok(None);
        };
        let object = self.repo.find_object(entry.object_id())?;
        Ok(Some(object.data.clone()))
    }

    /// Commits reachable from the right end of `range` but not from its
    /// left end (for `A...B`, reachable from either end but not from their
    /// merge base), newest first.
    pub fn commits_in_range(&self, range: &CommitRange) -> Result<Vec<CommitInfo>> {
        let left = self.resolve_commit(range.left())?;
        let right = self.resolve_commit(range.right())?;

        let (tips, boundary) = match range.kind() {
            RangeKind::Symmetric => {
                let base = self.merge_base(left, right, range)?;
                (vec![left, right], base)
            }
            RangeKind::TwoDot | RangeKind::Single => (vec![right], left),
        };

        let hidden = self.ancestors(boundary)?;
        let mut commits = Vec::new();
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = tips.into_iter().collect();

        while let Some(commit_id) = stack.pop_back() {
            if hidden.contains(&commit_id) || !seen.insert(commit_id) {
                continue;
            }

            let commit = self.repo.find_commit(commit_id)?;
            let parents: Vec<ObjectId> = commit.parent_ids().map(|id| id.into()).collect();
            let message = commit.message()?;

            commits.push(CommitInfo {
                id: commit_id.to_string(),
                message: message.summary().to_string(),
                parent_ids: parents.iter().map(|id| id.to_string()).collect(),
            });

            for pid in parents {
                stack.push_back(pid);
            }
        }

        Ok(commits)
    }

    fn ancestors(&self, start: ObjectId) -> Result<HashSet<ObjectId>> {
        let mut seen: HashSet<ObjectId> = HashSet::new();
        let mut stack: VecDeque<ObjectId> = VecDeque::from([start]);

        while let Some(commit_id) = stack.pop_back() {
            if !seen.insert(commit_id) {
                continue;
            }
            let commit = self.repo.find_commit(commit_id)?;
            for pid in commit.parent_ids() {
                stack.push_back(pid.into());
            }
        }

        Ok(seen)
    }

    /// Whether the commit changes anything under `dir` relative to its
    /// first parent.
    pub fn commit_touches(&self, commit: &CommitInfo, dir: &str) -> Result<bool> {
        let commit_id = parse_oid(&commit.id)?;
        let commit_tree = self.repo.find_commit(commit_id)?.tree()?;

        let changes: Vec<ChangeDetached> = match commit.parent_ids.first() {
            Some(parent) => {
                let parent_tree = self.repo.find_commit(parse_oid(parent)?)?.tree()?;
                self.repo.diff_tree_to_tree(Some(&parent_tree), Some(&commit_tree), None)?
            }
            None => self.repo.diff_tree_to_tree(None, Some(&commit_tree), None)?,
        };

        let prefix = format!("{}/", dir.trim_end_matches('/'));
        Ok(changes.iter().any(|change| {
            let location = match change {
                ChangeDetached::Addition { location, .. }
                | ChangeDetached::Deletion { location, .. }
                | ChangeDetached::Modification { location, .. }
                | ChangeDetached::Rewrite { location, .. } => location.to_string(),
            };
            location.starts_with(&prefix)
        }))
    }
}

fn parse_oid(hex: &str) -> Result<ObjectId> {
    ObjectId::from_hex(hex.as_bytes())
        .map_err(|e| PoError::VersionControl(format!("Invalid commit ID: {e}")))
}

fn is_binary(data: &[u8]) -> bool {
    data.iter().take(8192).any(|&b| b == 0)
}
