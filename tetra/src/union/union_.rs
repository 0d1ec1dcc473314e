use super::{error::UnionError, variant::Variant};
use crate::matcher::{ActionMatcher, PatternMatcher};
use fnv::FnvHasher;
use std::{
    any::{type_name, Any, TypeId},
    hash::{Hash, Hasher},
};
use tracing::trace;

/// Equality compares cases first and then payloads of the same case. Hashing
/// feeds only the active payload into a hasher, so a union hashes the same as
/// the bare value it wraps.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Union<T1, T2, T3, T4> {
    Case1(T1),
    Case2(T2),
    Case3(T3),
    Case4(T4),
}

impl<T1, T2, T3, T4> Union<T1, T2, T3, T4> {
    pub fn case(&self) -> Variant {
        match self {
            Self::Case1(_) => Variant::Case1,
            Self::Case2(_) => Variant::Case2,
            Self::Case3(_) => Variant::Case3,
            Self::Case4(_) => Variant::Case4,
        }
    }

    pub fn case1(&self) -> Result<&T1, UnionError> {
        self.try_case1().ok_or_else(|| self.invalid_case(Variant::Case1))
    }

    pub fn case2(&self) -> Result<&T2, UnionError> {
        self.try_case2().ok_or_else(|| self.invalid_case(Variant::Case2))
    }

    pub fn case3(&self) -> Result<&T3, UnionError> {
        self.try_case3().ok_or_else(|| self.invalid_case(Variant::Case3))
    }

    pub fn case4(&self) -> Result<&T4, UnionError> {
        self.try_case4().ok_or_else(|| self.invalid_case(Variant::Case4))
    }

    pub fn try_case1(&self) -> Option<&T1> {
        if let Self::Case1(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn try_case2(&self) -> Option<&T2> {
        if let Self::Case2(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn try_case3(&self) -> Option<&T3> {
        if let Self::Case3(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn try_case4(&self) -> Option<&T4> {
        if let Self::Case4(value) = self {
            Some(value)
        } else {
            None
        }
    }

    pub fn into_case1(self) -> Result<T1, Self> {
        match self {
            Self::Case1(value) => Ok(value),
            other => Err(other),
        }
    }

    pub fn into_case2(self) -> Result<T2, Self> {
        match self {
            Self::Case2(value) => Ok(value),
            other => Err(other),
        }
    }

    pub fn into_case3(self) -> Result<T3, Self> {
        match self {
            Self::Case3(value) => Ok(value),
            other => Err(other),
        }
    }

    pub fn into_case4(self) -> Result<T4, Self> {
        match self {
            Self::Case4(value) => Ok(value),
            other => Err(other),
        }
    }

    pub fn as_ref(&self) -> Union<&T1, &T2, &T3, &T4> {
        match self {
            Self::Case1(value) => Union::Case1(value),
            Self::Case2(value) => Union::Case2(value),
            Self::Case3(value) => Union::Case3(value),
            Self::Case4(value) => Union::Case4(value),
        }
    }

    pub fn matcher<R>(&self) -> PatternMatcher<'_, T1, T2, T3, T4, R> {
        PatternMatcher::new(self)
    }

    pub fn action_matcher(&self) -> ActionMatcher<'_, T1, T2, T3, T4> {
        PatternMatcher::new(self)
    }

    pub fn hash_code(&self) -> u64
    where
        Self: Hash,
    {
        let mut hasher = FnvHasher::default();

        self.hash(&mut hasher);

        hasher.finish()
    }

    fn invalid_case(&self, expected: Variant) -> UnionError {
        let actual = self.case();

        trace!(%expected, %actual, "union case mismatch");

        UnionError::InvalidCase { expected, actual }
    }
}

impl<T1: 'static, T2: 'static, T3: 'static, T4: 'static> Union<T1, T2, T3, T4> {
    /// Declared types are compared in declaration order and the first one
    /// equal to `T` decides which case is accessed. When several cases share
    /// a type, only the first of them is reachable here.
    pub fn value<T: 'static>(&self) -> Result<&T, UnionError> {
        let type_id = TypeId::of::<T>();
        let value: &dyn Any = if type_id == TypeId::of::<T1>() {
            self.case1()?
        } else if type_id == TypeId::of::<T2>() {
            self.case2()?
        } else if type_id == TypeId::of::<T3>() {
            self.case3()?
        } else if type_id == TypeId::of::<T4>() {
            self.case4()?
        } else {
            trace!(type_ = type_name::<T>(), "type not in union");

            return Err(UnionError::InvalidCaseOfType(type_name::<T>()));
        };

        value
            .downcast_ref()
            .ok_or_else(|| UnionError::InvalidCaseOfType(type_name::<T>()))
    }

    pub fn has_value_of<T: 'static>(&self) -> bool {
        self.active().type_id() == TypeId::of::<T>()
    }

    fn active(&self) -> &dyn Any {
        match self {
            Self::Case1(value) => value,
            Self::Case2(value) => value,
            Self::Case3(value) => value,
            Self::Case4(value) => value,
        }
    }
}

impl<T1: Hash, T2: Hash, T3: Hash, T4: Hash> Hash for Union<T1, T2, T3, T4> {
    fn hash<H: Hasher>(&self, hasher: &mut H) {
        match self {
            Self::Case1(value) => value.hash(hasher),
            Self::Case2(value) => value.hash(hasher),
            Self::Case3(value) => value.hash(hasher),
            Self::Case4(value) => value.hash(hasher),
        }
    }
}
