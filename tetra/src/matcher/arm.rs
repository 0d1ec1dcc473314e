pub type Predicate<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

pub struct Arm<'a, T, R> {
    patterns: Vec<Predicate<'a, T>>,
    guard: Option<Predicate<'a, T>>,
    handler: Box<dyn FnOnce(&T) -> R + 'a>,
}

impl<'a, T, R> Arm<'a, T, R> {
    pub fn new(
        patterns: Vec<Predicate<'a, T>>,
        guard: Option<Predicate<'a, T>>,
        handler: impl FnOnce(&T) -> R + 'a,
    ) -> Self {
        Self {
            patterns,
            guard,
            handler: Box::new(handler),
        }
    }

    // An arm without patterns matches any value of its case.
    fn matches(&self, value: &T) -> bool {
        (self.patterns.is_empty() || self.patterns.iter().any(|pattern| pattern(value)))
            && self.guard.iter().all(|guard| guard(value))
    }
}

pub fn evaluate<T, R>(arms: Vec<Arm<T, R>>, value: &T) -> Option<R> {
    arms.into_iter()
        .find(|arm| arm.matches(value))
        .map(|arm| (arm.handler)(value))
}
