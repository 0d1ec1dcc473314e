mod error;
mod member;
mod union_;
mod variant;

pub use error::*;
pub use member::*;
pub use union_::*;
pub use variant::*;
