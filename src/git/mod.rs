pub mod range;
pub mod repo;

pub use range::{CommitRange, RangeKind};
pub use repo::{CatalogChange, GitRepo, ResolvedRange};
