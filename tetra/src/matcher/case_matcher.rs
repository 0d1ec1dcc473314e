use super::{
    arm::{Arm, Predicate},
    pattern_matcher::PatternMatcher,
};

type ArmsOf<'a, T1, T2, T3, T4, R, T> =
    for<'b> fn(&'b mut PatternMatcher<'a, T1, T2, T3, T4, R>) -> &'b mut Vec<Arm<'a, T, R>>;

pub struct CaseMatcher<'a, T1, T2, T3, T4, R, T> {
    matcher: PatternMatcher<'a, T1, T2, T3, T4, R>,
    arms: ArmsOf<'a, T1, T2, T3, T4, R, T>,
    patterns: Vec<Predicate<'a, T>>,
    guard: Option<Predicate<'a, T>>,
}

impl<'a, T1, T2, T3, T4, R, T: 'a> CaseMatcher<'a, T1, T2, T3, T4, R, T> {
    pub(super) fn new(
        matcher: PatternMatcher<'a, T1, T2, T3, T4, R>,
        arms: ArmsOf<'a, T1, T2, T3, T4, R, T>,
    ) -> Self {
        Self {
            matcher,
            arms,
            patterns: vec![],
            guard: None,
        }
    }

    pub fn of(mut self, expected: T) -> Self
    where
        T: PartialEq,
    {
        self.patterns.push(Box::new(move |value: &T| value == &expected));
        self
    }

    pub fn or(self, expected: T) -> Self
    where
        T: PartialEq,
    {
        self.of(expected)
    }

    pub fn when(mut self, guard: impl Fn(&T) -> bool + 'a) -> Self {
        let guard: Predicate<'a, T> = match self.guard.take() {
            Some(previous) => Box::new(move |value: &T| previous(value) && guard(value)),
            None => Box::new(guard),
        };

        self.guard = Some(guard);
        self
    }

    pub fn then(
        self,
        handler: impl FnOnce(&T) -> R + 'a,
    ) -> PatternMatcher<'a, T1, T2, T3, T4, R> {
        let Self {
            mut matcher,
            arms,
            patterns,
            guard,
        } = self;

        arms(&mut matcher).push(Arm::new(patterns, guard, handler));

        matcher
    }
}
