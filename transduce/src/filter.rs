//! [`Filter`] and related items.
use crate::{Reducer, Transform};

/// Same as [`core::iter::Filter`] but as a [`Reducer`] adaptor.
///
/// Pairs rejected by the predicate are dropped: the accumulator passes through unchanged and the
/// following reducer never sees them.
#[must_use = "reducers do nothing unless driven by `transduce`"]
pub struct Filter<R, Func> {
    reducing: R,
    func: Func,
}

impl<R, Func> Filter<R, Func> {
    /// Creates with filtering `func` and next `reducing`.
    pub fn new<Item>(func: Func, reducing: R) -> Self
    where
        Self: Reducer<Item>,
    {
        Self { reducing, func }
    }
}

impl<R, Func, Item> Reducer<Item> for Filter<R, Func>
where
    R: Reducer<Item>,
    Func: FnMut(&Item) -> bool,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        self.reducing.init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        if (self.func)(&item) {
            self.reducing.step(acc, item)
        } else {
            Ok(acc)
        }
    }
}

/// [`Transform`] for [`Filter`].
pub struct FilterTransform<Prev, Func> {
    pub(crate) prev: Prev,
    pub(crate) func: Func,
}
impl<Prev, Func> Transform for FilterTransform<Prev, Func>
where
    Prev: Transform,
{
    type Input = Prev::Input;
    type Item = Prev::Item;

    type Output<R> = Prev::Output<Filter<R, Func>>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        self.prev.wrap(Filter {
            reducing,
            func: self.func,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{filter, save_entries, transduce};

    #[test]
    fn test_filter_keeps_order() {
        let input = vec![5, 2, 8, 1, 4];
        let result = transduce(
            &input,
            filter(|(_, value): &(usize, i32)| *value % 2 == 0, save_entries()),
        )
        .unwrap();

        assert_eq!(
            vec![(1, 2), (2, 8), (4, 4)],
            result.into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_filter_rejects_everything() {
        let input = vec![1, 3];
        let result = transduce(&input, filter(|_: &(usize, i32)| false, save_entries())).unwrap();
        assert!(result.is_empty());
    }
}
