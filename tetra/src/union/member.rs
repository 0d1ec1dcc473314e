use super::{error::UnionError, union_::Union};

#[derive(Clone, Copy, Debug)]
pub struct Index1;

#[derive(Clone, Copy, Debug)]
pub struct Index2;

#[derive(Clone, Copy, Debug)]
pub struct Index3;

#[derive(Clone, Copy, Debug)]
pub struct Index4;

/// Relation between a union and one of its case types.
///
/// `I` is one of `Index1` to `Index4` and is normally inferred. Inference
/// fails when a union declares the same type in more than one case; name the
/// index explicitly then.
pub trait Member<T, I>: Sized {
    fn inject(value: T) -> Self;
    fn project(&self) -> Result<&T, UnionError>;
}

impl<T1, T2, T3, T4> Member<T1, Index1> for Union<T1, T2, T3, T4> {
    fn inject(value: T1) -> Self {
        Self::Case1(value)
    }

    fn project(&self) -> Result<&T1, UnionError> {
        self.case1()
    }
}

impl<T1, T2, T3, T4> Member<T2, Index2> for Union<T1, T2, T3, T4> {
    fn inject(value: T2) -> Self {
        Self::Case2(value)
    }

    fn project(&self) -> Result<&T2, UnionError> {
        self.case2()
    }
}

impl<T1, T2, T3, T4> Member<T3, Index3> for Union<T1, T2, T3, T4> {
    fn inject(value: T3) -> Self {
        Self::Case3(value)
    }

    fn project(&self) -> Result<&T3, UnionError> {
        self.case3()
    }
}

impl<T1, T2, T3, T4> Member<T4, Index4> for Union<T1, T2, T3, T4> {
    fn inject(value: T4) -> Self {
        Self::Case4(value)
    }

    fn project(&self) -> Result<&T4, UnionError> {
        self.case4()
    }
}

impl<T1, T2, T3, T4> Union<T1, T2, T3, T4> {
    pub fn new<T, I>(value: T) -> Self
    where
        Self: Member<T, I>,
    {
        <Self as Member<T, I>>::inject(value)
    }

    pub fn get<T, I>(&self) -> Result<&T, UnionError>
    where
        Self: Member<T, I>,
    {
        <Self as Member<T, I>>::project(self)
    }
}

pub trait IntoUnion<U, I> {
    fn into_union(self) -> U;
}

impl<T, U: Member<T, I>, I> IntoUnion<U, I> for T {
    fn into_union(self) -> U {
        <U as Member<T, I>>::inject(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::union::Variant;
    use pretty_assertions::assert_eq;

    type Scalar = Union<i64, String, bool, f64>;

    #[test]
    fn infer_case_from_type() {
        assert_eq!(Scalar::new(5i64), Scalar::Case1(5));
        assert_eq!(Scalar::new(String::from("foo")), Scalar::Case2("foo".into()));
        assert_eq!(Scalar::new(true), Scalar::Case3(true));
        assert_eq!(Scalar::new(0.5f64), Scalar::Case4(0.5));
    }

    #[test]
    fn convert_into_union() {
        let union: Scalar = false.into_union();

        assert_eq!(union, Scalar::Case3(false));
    }

    #[test]
    fn get_payload_by_static_type() {
        let union = Scalar::Case2("foo".into());

        assert_eq!(union.get::<String, _>(), Ok(&"foo".to_string()));
        assert_eq!(
            union.get::<bool, _>(),
            Err(UnionError::InvalidCase {
                expected: Variant::Case3,
                actual: Variant::Case2,
            })
        );
    }

    #[test]
    fn disambiguate_duplicate_types_by_index() {
        type Pair = Union<i32, i32, (), ()>;

        assert_eq!(Pair::new::<_, Index2>(1), Pair::Case2(1));
        assert_eq!(Pair::Case2(1).get::<i32, Index2>(), Ok(&1));
        assert_eq!(<Pair as Member<i32, Index1>>::inject(1), Pair::Case1(1));
    }
}
