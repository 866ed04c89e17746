//! [`Map`] and related items.
use crate::{Reducer, Transform};

/// Same as [`core::iter::Map`] but as a [`Reducer`] adaptor.
///
/// Maps each pair and folds the output into the following reducer. Every pair is forwarded; the
/// mapper may change the key as well as the value.
#[must_use = "reducers do nothing unless driven by `transduce`"]
pub struct Map<R, Func> {
    reducing: R,
    func: Func,
}

impl<R, Func> Map<R, Func> {
    /// Creates with mapping `func` and next `reducing`.
    pub fn new<Item>(func: Func, reducing: R) -> Self
    where
        Self: Reducer<Item>,
    {
        Self { reducing, func }
    }
}

impl<R, Func, Item, ItemOut> Reducer<Item> for Map<R, Func>
where
    R: Reducer<ItemOut>,
    Func: FnMut(Item) -> ItemOut,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        self.reducing.init()
    }

    fn step(&mut self, acc: Self::Acc, item: Item) -> Result<Self::Acc, Self::Error> {
        let item = (self.func)(item);
        self.reducing.step(acc, item)
    }
}

/// [`Transform`] for [`Map`].
pub struct MapTransform<Prev, Func> {
    pub(crate) prev: Prev,
    pub(crate) func: Func,
}
impl<Prev, ItemOut, Func> Transform for MapTransform<Prev, Func>
where
    Prev: Transform,
    Func: FnMut(Prev::Item) -> ItemOut,
{
    type Input = Prev::Input;
    type Item = ItemOut;

    type Output<R> = Prev::Output<Map<R, Func>>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        self.prev.wrap(Map {
            reducing,
            func: self.func,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::{map, save_entries, transduce};

    #[test]
    fn test_map_may_rewrite_keys() {
        let input = vec![10, 20, 30];
        let result = transduce(
            &input,
            map(|(index, value): (usize, i32)| (value, index), save_entries()),
        )
        .unwrap();

        assert_eq!(
            vec![(10, 0), (20, 1), (30, 2)],
            result.into_iter().collect::<Vec<_>>()
        );
    }

    #[test]
    fn test_map_colliding_keys_overwrite() {
        let input = vec![1, 2, 3, 4];
        let result = transduce(
            &input,
            map(|(_, value): (usize, i32)| (value % 2, value), save_entries()),
        )
        .unwrap();

        assert_eq!(vec![(1, 3), (0, 4)], result.into_iter().collect::<Vec<_>>());
    }
}
