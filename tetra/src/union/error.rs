use super::variant::Variant;
use std::error::Error;
use std::fmt::{self, Display, Formatter};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum UnionError {
    InvalidCase { expected: Variant, actual: Variant },
    InvalidCaseOfType(&'static str),
}

impl Display for UnionError {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        match self {
            Self::InvalidCase { expected, actual } => write!(
                formatter,
                "cannot access {} of union holding {}",
                expected, actual
            ),
            Self::InvalidCaseOfType(name) => {
                write!(formatter, "type {} is not a case of union", name)
            }
        }
    }
}

impl Error for UnionError {}
