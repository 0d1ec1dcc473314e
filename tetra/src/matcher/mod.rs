mod arm;
mod case_matcher;
mod error;
mod pattern_matcher;

pub use case_matcher::*;
pub use error::*;
pub use pattern_matcher::*;
