use crate::union::{UnionError, Variant};
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatchError {
    NoMatch(Variant),
    Union(UnionError),
}

impl Display for MatchError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::NoMatch(case) => write!(formatter, "no pattern matched union holding {}", case),
            Self::Union(error) => write!(formatter, "{}", error),
        }
    }
}

impl Error for MatchError {}

impl From<UnionError> for MatchError {
    fn from(error: UnionError) -> Self {
        Self::Union(error)
    }
}
