pub mod enums;
pub mod selection;

pub use enums::*;
pub use selection::*;
