use crate::error::{PoError, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeKind {
    /// `A...B`: compare the merge base of both ends with `B`.
    Symmetric,
    /// `A..B`: compare `A` with `B`.
    TwoDot,
    /// A lone revision, compared with `HEAD`.
    Single,
}

/// A commit range as given on the command line, with its endpoints split out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRange {
    raw: String,
    left: String,
    right: String,
    kind: RangeKind,
}

impl CommitRange {
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(PoError::Configuration("Commit range must not be empty".to_string()));
        }

        let (left, right, kind) = if let Some((l, r)) = raw.split_once("...") {
            (l, r, RangeKind::Symmetric)
        } else if let Some((l, r)) = raw.split_once("..") {
            (l, r, RangeKind::TwoDot)
        } else {
            (raw, "HEAD", RangeKind::Single)
        };

        Ok(Self {
            raw: raw.to_string(),
            left: endpoint_or_head(left),
            right: endpoint_or_head(right),
            kind,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The start commit: the file existence check is made against it.
    pub fn left(&self) -> &str {
        &self.left
    }

    pub fn right(&self) -> &str {
        &self.right
    }

    pub fn kind(&self) -> RangeKind {
        self.kind
    }
}

fn endpoint_or_head(endpoint: &str) -> String {
    let endpoint = endpoint.trim();
    if endpoint.is_empty() {
        "HEAD".to_string()
    } else {
        endpoint.to_string()
    }
}

impl fmt::Display for CommitRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}
