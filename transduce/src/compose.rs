//! [`Compose`] of two [`Transform`] chains.
use crate::Transform;

/// Runs the stages of `First`, then the stages of `Second`.
///
/// Wrapping a terminal reducer `t` yields `First(Second(t))`: `First` is the outer wrapper, so
/// it is the first to see each pair.
pub struct Compose<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Compose<First, Second> {
    /// Creates from the two chains, in evaluation order.
    pub fn new(first: First, second: Second) -> Self
    where
        First: Transform,
        Second: Transform<Input = First::Item>,
    {
        Self { first, second }
    }
}

impl<First, Second> Transform for Compose<First, Second>
where
    First: Transform,
    Second: Transform<Input = First::Item>,
{
    type Input = First::Input;
    type Item = Second::Item;

    type Output<R> = First::Output<Second::Output<R>>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        self.first.wrap(self.second.wrap(reducing))
    }
}
