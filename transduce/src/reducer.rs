//! [`Reducer`] trait.

/// A reducing step: folds one item into a running accumulator.
///
/// The accumulator is moved into [`Self::step`] and the returned value replaces it, so an
/// implementation may either mutate and return the same accumulator or build a new one. The
/// driver always continues with the returned value.
///
/// A fresh accumulator is created by [`Self::init`] at the start of every transduction, so nothing
/// carries over from one invocation to the next.
pub trait Reducer<Item> {
    /// The accumulated result.
    type Acc;
    /// Error raised by this step or by any stage wrapped around it.
    type Error;

    /// Creates the empty accumulator for a new pass.
    fn init(&mut self) -> Self::Acc;

    /// Folds `item` into `acc`, returning the next accumulator.
    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error>;
}

impl<R, Item> Reducer<Item> for &mut R
where
    R: Reducer<Item> + ?Sized,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        (**self).step(acc, item)
    }
}

impl<R, Item> Reducer<Item> for Box<R>
where
    R: Reducer<Item> + ?Sized,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        (**self).init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        (**self).step(acc, item)
    }
}
