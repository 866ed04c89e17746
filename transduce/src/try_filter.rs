//! [`TryFilter`] and related items.
use crate::{Reducer, Transform};

/// Same as [`crate::filter::Filter`] but the predicate returns `Result<bool, Error>`.
///
/// An `Err` stops the transduction and is returned to the caller unchanged.
#[must_use = "reducers do nothing unless driven by `transduce`"]
pub struct TryFilter<R, Func> {
    reducing: R,
    func: Func,
}

impl<R, Func> TryFilter<R, Func> {
    /// Creates with fallible filtering `func` and next `reducing`.
    pub fn new<Item>(func: Func, reducing: R) -> Self
    where
        Self: Reducer<Item>,
    {
        Self { reducing, func }
    }
}

impl<R, Func, Item> Reducer<Item> for TryFilter<R, Func>
where
    R: Reducer<Item>,
    Func: FnMut(&Item) -> Result<bool, R::Error>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        self.reducing.init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        if (self.func)(&item)? {
            self.reducing.step(acc, item)
        } else {
            Ok(acc)
        }
    }
}

/// [`Transform`] for [`TryFilter`].
pub struct TryFilterTransform<Prev, Func> {
    pub(crate) prev: Prev,
    pub(crate) func: Func,
}
impl<Prev, Func> Transform for TryFilterTransform<Prev, Func>
where
    Prev: Transform,
{
    type Input = Prev::Input;
    type Item = Prev::Item;

    type Output<R> = Prev::Output<TryFilter<R, Func>>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        self.prev.wrap(TryFilter {
            reducing,
            func: self.func,
        })
    }
}
