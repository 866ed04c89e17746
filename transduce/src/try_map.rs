//! [`TryMap`] and related items.
use crate::{Reducer, Transform};

/// Same as [`crate::map::Map`] but the closure returns `Result<Item, Error>`.
///
/// An `Err` stops the transduction and is returned to the caller unchanged. `Error` must be the
/// error type of the following reducer.
#[must_use = "reducers do nothing unless driven by `transduce`"]
pub struct TryMap<R, Func> {
    reducing: R,
    func: Func,
}

impl<R, Func> TryMap<R, Func> {
    /// Creates with fallible mapping `func` and next `reducing`.
    pub fn new<Item>(func: Func, reducing: R) -> Self
    where
        Self: Reducer<Item>,
    {
        Self { reducing, func }
    }
}

impl<R, Func, Item, ItemOut> Reducer<Item> for TryMap<R, Func>
where
    R: Reducer<ItemOut>,
    Func: FnMut(Item) -> Result<ItemOut, R::Error>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        self.reducing.init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        let item = (self.func)(item)?;
        self.reducing.step(acc, item)
    }
}

/// [`Transform`] for [`TryMap`].
pub struct TryMapTransform<Prev, Func> {
    pub(crate) prev: Prev,
    pub(crate) func: Func,
}
impl<Prev, ItemOut, Error, Func> Transform for TryMapTransform<Prev, Func>
where
    Prev: Transform,
    Func: FnMut(Prev::Item) -> Result<ItemOut, Error>,
{
    type Input = Prev::Input;
    type Item = ItemOut;

    type Output<R> = Prev::Output<TryMap<R, Func>>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        self.prev.wrap(TryMap {
            reducing,
            func: self.func,
        })
    }
}
