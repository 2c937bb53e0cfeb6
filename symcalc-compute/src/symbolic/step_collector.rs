/// A sink for the steps taken while transforming an expression.
///
/// Passing `()` discards every step. Passing a [`Vec`] records them in the order they were taken,
/// which is how the tests check that a particular rule fired.
pub trait StepCollector<S> {
    /// Records one step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
