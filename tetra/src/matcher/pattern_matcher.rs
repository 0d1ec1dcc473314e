use super::{
    arm::{evaluate, Arm},
    case_matcher::CaseMatcher,
    error::MatchError,
};
use crate::union::{Union, Variant};
use tracing::debug;

type Fallback<'a, T1, T2, T3, T4, R> = Box<dyn FnOnce(&Union<T1, T2, T3, T4>) -> R + 'a>;

/// Arms are tested in registration order and only the ones registered for
/// the case the union holds are looked at. The first matched arm wins. If no
/// arm matches, the `otherwise` handler runs when it is present.
pub struct PatternMatcher<'a, T1, T2, T3, T4, R> {
    union: &'a Union<T1, T2, T3, T4>,
    arms1: Vec<Arm<'a, T1, R>>,
    arms2: Vec<Arm<'a, T2, R>>,
    arms3: Vec<Arm<'a, T3, R>>,
    arms4: Vec<Arm<'a, T4, R>>,
    otherwise: Option<Fallback<'a, T1, T2, T3, T4, R>>,
}

pub type ActionMatcher<'a, T1, T2, T3, T4> = PatternMatcher<'a, T1, T2, T3, T4, ()>;

impl<'a, T1, T2, T3, T4, R> PatternMatcher<'a, T1, T2, T3, T4, R> {
    pub fn new(union: &'a Union<T1, T2, T3, T4>) -> Self {
        Self {
            union,
            arms1: vec![],
            arms2: vec![],
            arms3: vec![],
            arms4: vec![],
            otherwise: None,
        }
    }

    pub fn case1(self) -> CaseMatcher<'a, T1, T2, T3, T4, R, T1> {
        CaseMatcher::new(self, Self::arms1)
    }

    pub fn case2(self) -> CaseMatcher<'a, T1, T2, T3, T4, R, T2> {
        CaseMatcher::new(self, Self::arms2)
    }

    pub fn case3(self) -> CaseMatcher<'a, T1, T2, T3, T4, R, T3> {
        CaseMatcher::new(self, Self::arms3)
    }

    pub fn case4(self) -> CaseMatcher<'a, T1, T2, T3, T4, R, T4> {
        CaseMatcher::new(self, Self::arms4)
    }

    pub fn otherwise(mut self, handler: impl FnOnce(&Union<T1, T2, T3, T4>) -> R + 'a) -> Self {
        self.otherwise = Some(Box::new(handler));
        self
    }

    pub fn result(self) -> Result<R, MatchError> {
        let Self {
            union,
            arms1,
            arms2,
            arms3,
            arms4,
            otherwise,
        } = self;
        let case = union.case();

        let value = match case {
            Variant::Case1 => evaluate(arms1, union.case1()?),
            Variant::Case2 => evaluate(arms2, union.case2()?),
            Variant::Case3 => evaluate(arms3, union.case3()?),
            Variant::Case4 => evaluate(arms4, union.case4()?),
        };

        if let Some(value) = value {
            Ok(value)
        } else if let Some(handler) = otherwise {
            Ok(handler(union))
        } else {
            debug!(%case, "no pattern matched union");

            Err(MatchError::NoMatch(case))
        }
    }

    fn arms1(&mut self) -> &mut Vec<Arm<'a, T1, R>> {
        &mut self.arms1
    }

    fn arms2(&mut self) -> &mut Vec<Arm<'a, T2, R>> {
        &mut self.arms2
    }

    fn arms3(&mut self) -> &mut Vec<Arm<'a, T3, R>> {
        &mut self.arms3
    }

    fn arms4(&mut self) -> &mut Vec<Arm<'a, T4, R>> {
        &mut self.arms4
    }
}

impl<'a, T1, T2, T3, T4> PatternMatcher<'a, T1, T2, T3, T4, ()> {
    pub fn exec(self) -> Result<(), MatchError> {
        self.result()
    }

    pub fn ignore_otherwise(self) -> Self {
        self.otherwise(|_| {})
    }
}
