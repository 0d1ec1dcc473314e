pub mod matcher;
pub mod union;

pub use matcher::{ActionMatcher, MatchError, PatternMatcher};
pub use union::{Index1, Index2, Index3, Index4, IntoUnion, Member, Union, UnionError, Variant};
