//! Measure translation catalog changes over a git commit range.

pub mod cli;
pub mod counter;
pub mod credits;
pub mod error;
pub mod git;
pub mod locale;
pub mod logging;
pub mod model;
pub mod summarize;
pub mod util;
