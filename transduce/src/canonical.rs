//! [`Canonical`] ordered key-value accumulator.

use core::fmt::{self, Debug};
use core::hash::Hash;

use indexmap::{Equivalent, IndexMap};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ordered, key-unique mapping used as the intermediate result of every key-preserving pass.
///
/// Keys are unique and the latest write for a key wins. A key keeps the position of its first
/// insertion, so iteration follows the order in which keys were first seen in the input.
///
/// Outside this crate a `Canonical` is read-only: it is built by [`crate::SaveEntries`] during a
/// transduction, or collected with [`FromIterator`], and can then only be inspected or taken apart.
///
/// Equality is order-sensitive: two maps with the same entries in a different order are not equal.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        transparent,
        bound(
            serialize = "K: Serialize + Hash + Eq, V: Serialize",
            deserialize = "K: Deserialize<'de> + Hash + Eq, V: Deserialize<'de>"
        )
    )
)]
pub struct Canonical<K, V> {
    map: IndexMap<K, V>,
}

impl<K, V> Canonical<K, V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            map: IndexMap::new(),
        }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// `true` if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterates entries in order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, K, V> {
        self.map.iter()
    }

    /// Iterates keys in order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, K, V> {
        self.map.keys()
    }

    /// Iterates values in order.
    pub fn values(&self) -> indexmap::map::Values<'_, K, V> {
        self.map.values()
    }

    /// Consumes the map, yielding its values in order.
    pub fn into_values(self) -> indexmap::map::IntoValues<K, V> {
        self.map.into_values()
    }

    /// Entry at position `index`, if any.
    pub fn get_index(&self, index: usize) -> Option<(&K, &V)> {
        self.map.get_index(index)
    }

    /// Gets the inner map by value, consuming self.
    pub fn into_inner(self) -> IndexMap<K, V> {
        self.map
    }
}

impl<K, V> Canonical<K, V>
where
    K: Hash + Eq,
{
    /// Value stored for `key`.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.get(key)
    }

    /// `true` if `key` has an entry.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized + Hash + Equivalent<K>,
    {
        self.map.contains_key(key)
    }

    /// Writes `value` under `key`, returning the map.
    pub(crate) fn set(mut self, key: K, value: V) -> Self {
        self.map.insert(key, value);
        self
    }
}

impl<K, V> Default for Canonical<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for Canonical<K, V>
where
    K: Debug,
    V: Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.map.iter()).finish()
    }
}

impl<K, V> PartialEq for Canonical<K, V>
where
    K: PartialEq,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map.len() == other.map.len() && self.map.iter().eq(other.map.iter())
    }
}
impl<K, V> Eq for Canonical<K, V>
where
    K: Eq,
    V: Eq,
{
}

impl<K, V> From<IndexMap<K, V>> for Canonical<K, V> {
    fn from(map: IndexMap<K, V>) -> Self {
        Self { map }
    }
}

impl<K, V> FromIterator<(K, V)> for Canonical<K, V>
where
    K: Hash + Eq,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K, V> IntoIterator for Canonical<K, V> {
    type Item = (K, V);
    type IntoIter = indexmap::map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a Canonical<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = indexmap::map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_latest_write_wins_first_position_kept() {
        let map = Canonical::new().set("a", 1).set("b", 2).set("a", 3);

        assert_eq!(2, map.len());
        assert_eq!(Some(&3), map.get(&"a"));
        assert_eq!(vec![("a", 3), ("b", 2)], map.into_iter().collect::<Vec<_>>());
    }

    #[test]
    fn test_lookup_by_borrowed_key() {
        let map: Canonical<String, i32> = [("a".to_owned(), 1)].into_iter().collect();

        assert_eq!(Some(&1), map.get("a"));
        assert!(map.contains_key("a"));
        assert!(!map.contains_key("b"));
    }

    #[test]
    fn test_eq_is_order_sensitive() {
        let ab: Canonical<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let ba: Canonical<_, _> = [("b", 2), ("a", 1)].into_iter().collect();

        assert_ne!(ab, ba);
        assert_eq!(ab, ab.clone());
    }

    #[test]
    fn test_debug_is_map_like() {
        let map: Canonical<_, _> = [(1, "x"), (2, "y")].into_iter().collect();
        assert_eq!(r#"{1: "x", 2: "y"}"#, format!("{:?}", map));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_keeps_order() {
        let map: Canonical<String, i32> = [("z".to_owned(), 1), ("a".to_owned(), 2)]
            .into_iter()
            .collect();

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(r#"{"z":1,"a":2}"#, json);

        let back: Canonical<String, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
