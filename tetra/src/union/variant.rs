use std::fmt::{self, Display, Formatter};

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Variant {
    Case1,
    Case2,
    Case3,
    Case4,
}

impl Variant {
    pub const ALL: [Self; 4] = [Self::Case1, Self::Case2, Self::Case3, Self::Case4];

    pub const fn index(self) -> usize {
        match self {
            Self::Case1 => 1,
            Self::Case2 => 2,
            Self::Case3 => 3,
            Self::Case4 => 4,
        }
    }
}

impl Display for Variant {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        write!(formatter, "Case{}", self.index())
    }
}
