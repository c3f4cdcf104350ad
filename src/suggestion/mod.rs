//! External protocol suggestion: lenient parsing and partial merge.

pub mod merge;
pub mod types;

pub use merge::apply_suggestion;
pub use types::*;
