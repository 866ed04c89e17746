//! [`PairTraversable`] inputs.
//!
//! Every input shape is seen by the engine as an ordered sequence of owned `(key, value)` pairs:
//!
//! | Shape | Key | Value | Order |
//! |-------|-----|-------|-------|
//! | sequence (`[T]`, `[T; N]`, `Vec`, `VecDeque`) | index | element | ascending index |
//! | set (`BTreeSet`, `HashSet`, `IndexSet`) | element | element | the set's own order |
//! | map (`IndexMap`, `BTreeMap`, `HashMap`, [`Canonical`]) | key | value | the map's own order |
//! | JSON array (`json` feature) | index as a number | element | ascending index |
//! | JSON object (`json` feature) | name as a string | value | insertion order |
//! | `imbl::Vector` / `OrdSet` / `OrdMap` / `HashSet` / `HashMap` (`persistent` feature) | as above | | as above |
//!
//! Traversal borrows the input and clones what it yields, so the input is never modified.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};

use indexmap::{IndexMap, IndexSet};

use crate::{Canonical, InputNotIterable};

/// A collection that can be traversed as ordered `(key, value)` pairs.
pub trait PairTraversable {
    /// Key type of the yielded pairs.
    type Key;
    /// Value type of the yielded pairs.
    type Value;

    /// Short name of this input's shape, used in diagnostics.
    fn kind(&self) -> &'static str;

    /// Iterates all pairs in order, exactly once each.
    ///
    /// Fails with [`InputNotIterable`] if this particular value has no pair structure.
    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable>;
}

impl<T> PairTraversable for &T
where
    T: PairTraversable + ?Sized,
{
    type Key = T::Key;
    type Value = T::Value;

    fn kind(&self) -> &'static str {
        (**self).kind()
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        (**self).pairs()
    }
}

/// Implements [`PairTraversable`] for sequence types, yielding `(index, element)`.
macro_rules! impl_sequence {
    (
        $( [$( $generics:tt )*] $ty:ty ),+ $(,)?
    ) => {
        $(
            impl<$( $generics )*> PairTraversable for $ty
            where
                T: Clone,
            {
                type Key = usize;
                type Value = T;

                fn kind(&self) -> &'static str {
                    "sequence"
                }

                fn pairs(
                    &self,
                ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
                    Ok(self.iter().cloned().enumerate())
                }
            }
        )+
    };
}
impl_sequence! {
    [T] [T],
    [T, const N: usize] [T; N],
    [T] Vec<T>,
    [T] VecDeque<T>,
}

/// Implements [`PairTraversable`] for set types, yielding `(element, element)`.
macro_rules! impl_set {
    (
        $( [$( $generics:tt )*] $ty:ty ),+ $(,)?
    ) => {
        $(
            impl<$( $generics )*> PairTraversable for $ty
            where
                T: Clone,
            {
                type Key = T;
                type Value = T;

                fn kind(&self) -> &'static str {
                    "set"
                }

                fn pairs(
                    &self,
                ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
                    Ok(self.iter().map(|item| (item.clone(), item.clone())))
                }
            }
        )+
    };
}
impl_set! {
    [T] BTreeSet<T>,
    [T, S] HashSet<T, S>,
    [T, S] IndexSet<T, S>,
}

/// Implements [`PairTraversable`] for map types, yielding their native pairs.
macro_rules! impl_map {
    (
        $( [$( $generics:tt )*] $ty:ty ),+ $(,)?
    ) => {
        $(
            impl<$( $generics )*> PairTraversable for $ty
            where
                K: Clone,
                V: Clone,
            {
                type Key = K;
                type Value = V;

                fn kind(&self) -> &'static str {
                    "map"
                }

                fn pairs(
                    &self,
                ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
                    Ok(self.iter().map(|(key, value)| (key.clone(), value.clone())))
                }
            }
        )+
    };
}
impl_map! {
    [K, V] BTreeMap<K, V>,
    [K, V, S] HashMap<K, V, S>,
    [K, V, S] IndexMap<K, V, S>,
    [K, V] Canonical<K, V>,
}

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl PairTraversable for serde_json::Value {
    type Key = serde_json::Value;
    type Value = serde_json::Value;

    fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Array(_) => "array",
            Self::Object(_) => "object",
        }
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        use either::Either;

        match self {
            Self::Array(array) => Ok(Either::Left(
                array
                    .iter()
                    .enumerate()
                    .map(|(index, value)| (Self::from(index), value.clone())),
            )),
            Self::Object(object) => Ok(Either::Right(
                object
                    .iter()
                    .map(|(name, value)| (Self::String(name.clone()), value.clone())),
            )),
            _ => Err(InputNotIterable { kind: self.kind() }),
        }
    }
}

#[cfg(feature = "json")]
#[cfg_attr(docsrs, doc(cfg(feature = "json")))]
impl PairTraversable for serde_json::Map<String, serde_json::Value> {
    type Key = String;
    type Value = serde_json::Value;

    fn kind(&self) -> &'static str {
        "object"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self
            .iter()
            .map(|(name, value)| (name.clone(), value.clone())))
    }
}

#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
impl<T> PairTraversable for imbl::Vector<T>
where
    T: Clone,
{
    type Key = usize;
    type Value = T;

    fn kind(&self) -> &'static str {
        "persistent sequence"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self.iter().cloned().enumerate())
    }
}

#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
impl<T> PairTraversable for imbl::OrdSet<T>
where
    T: Ord + Clone,
{
    type Key = T;
    type Value = T;

    fn kind(&self) -> &'static str {
        "persistent set"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self.iter().map(|item| (item.clone(), item.clone())))
    }
}

#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
impl<K, V> PairTraversable for imbl::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn kind(&self) -> &'static str {
        "persistent map"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self.iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}

#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
impl<T> PairTraversable for imbl::HashSet<T>
where
    T: core::hash::Hash + Eq + Clone,
{
    type Key = T;
    type Value = T;

    fn kind(&self) -> &'static str {
        "persistent set"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self.iter().map(|item| (item.clone(), item.clone())))
    }
}

#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
impl<K, V> PairTraversable for imbl::HashMap<K, V>
where
    K: core::hash::Hash + Eq + Clone,
    V: Clone,
{
    type Key = K;
    type Value = V;

    fn kind(&self) -> &'static str {
        "persistent map"
    }

    fn pairs(
        &self,
    ) -> Result<impl Iterator<Item = (Self::Key, Self::Value)>, InputNotIterable> {
        Ok(self.iter().map(|(key, value)| (key.clone(), value.clone())))
    }
}

#[cfg(test)]
mod test {
    #[cfg(feature = "json")]
    use serde_json::json;

    use super::*;

    fn collect<In: PairTraversable + ?Sized>(input: &In) -> Vec<(In::Key, In::Value)> {
        input.pairs().unwrap().collect()
    }

    #[test]
    fn test_sequence_pairs_are_indexed() {
        assert_eq!(vec![(0, 'x'), (1, 'y')], collect(&vec!['x', 'y']));
        assert_eq!(vec![(0, 'x'), (1, 'y')], collect(&['x', 'y']));
        assert_eq!(
            vec![(0, 'x'), (1, 'y')],
            collect(&VecDeque::from(['x', 'y']))
        );
        assert_eq!(vec![(0, 'x')], collect::<[char]>(&['x'][..]));
    }

    #[test]
    fn test_set_pairs_repeat_element() {
        let set: IndexSet<_> = ["b", "a"].into_iter().collect();
        assert_eq!(vec![("b", "b"), ("a", "a")], collect(&set));
    }

    #[test]
    fn test_map_pairs_keep_insertion_order() {
        let map: IndexMap<_, _> = [("id3", 3), ("id1", 1), ("id2", 2)].into_iter().collect();
        assert_eq!(vec![("id3", 3), ("id1", 1), ("id2", 2)], collect(&map));
    }

    #[test]
    fn test_std_sets_and_maps() {
        let mut set_pairs = collect(&HashSet::from([3, 1, 2]));
        set_pairs.sort();
        assert_eq!(vec![(1, 1), (2, 2), (3, 3)], set_pairs);

        let mut map_pairs = collect(&HashMap::from([("b", 2), ("a", 1)]));
        map_pairs.sort();
        assert_eq!(vec![("a", 1), ("b", 2)], map_pairs);

        let tree = BTreeMap::from([("b", 2), ("a", 1)]);
        assert_eq!(vec![("a", 1), ("b", 2)], collect(&tree));
        assert_eq!(vec![(1, 1), (2, 2)], collect(&BTreeSet::from([2, 1])));
        assert_eq!("map", tree.kind());
    }

    #[test]
    fn test_traversal_is_repeatable() {
        let input = vec![1, 2, 3];
        let first = collect(&input);
        let second = collect(&&input);
        assert_eq!(first, second);
        assert_eq!(vec![1, 2, 3], input);
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_array_and_object() {
        assert_eq!(
            vec![(json!(0), json!("a")), (json!(1), json!(true))],
            collect(&json!(["a", true]))
        );
        assert_eq!(
            vec![(json!("z"), json!(1)), (json!("a"), json!(2))],
            collect(&json!({ "z": 1, "a": 2 }))
        );
    }

    #[cfg(feature = "json")]
    #[test]
    fn test_json_scalar_is_not_iterable() {
        for (value, kind) in [
            (json!(null), "null"),
            (json!(1), "number"),
            (json!("abc"), "string"),
            (json!(false), "bool"),
        ] {
            let err = value.pairs().err().unwrap();
            assert_eq!(InputNotIterable { kind }, err);
        }
    }

    #[cfg(feature = "persistent")]
    #[test]
    fn test_persistent_inputs() {
        let vector: imbl::Vector<_> = [10, 20].into_iter().collect();
        assert_eq!(vec![(0, 10), (1, 20)], collect(&vector));

        let map: imbl::OrdMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_eq!(vec![("a", 1), ("b", 2)], collect(&map));

        let set: imbl::OrdSet<_> = [2, 1].into_iter().collect();
        assert_eq!(vec![(1, 1), (2, 2)], collect(&set));

        let hash_map: imbl::HashMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        let mut pairs = collect(&hash_map);
        pairs.sort();
        assert_eq!(vec![("a", 1), ("b", 2)], pairs);
        assert_eq!("persistent map", hash_map.kind());

        let hash_set: imbl::HashSet<_> = [2, 1].into_iter().collect();
        let mut pairs = collect(&hash_set);
        pairs.sort();
        assert_eq!(vec![(1, 1), (2, 2)], pairs);
    }
}
