//! Report completeness checks run before export.

pub mod code_jaune;
pub mod normalize;

pub use code_jaune::*;
pub use normalize::fold_for_matching;
