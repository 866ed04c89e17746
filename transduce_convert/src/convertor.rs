//! [`Convertor`]s out of (and into) [`Canonical`].
use core::hash::Hash;

use indexmap::IndexSet;
use serde_json::{Map, Value};
use transduce::Canonical;

/// Turns a finished [`Canonical`] result into another collection.
///
/// Convertors are total: they consume the canonical map and never fail. Any
/// `Fn(Canonical<K, V>) -> Out` is a convertor, so the free functions in this module (e.g.
/// [`to_vec`]) can be passed wherever a `Convertor` is expected.
pub trait Convertor<K, V> {
    /// The produced collection.
    type Output;

    /// Converts `canonical`, preserving its order where `Self::Output` has one.
    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output;
}

impl<K, V, Func, Out> Convertor<K, V> for Func
where
    Func: Fn(Canonical<K, V>) -> Out,
{
    type Output = Out;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        (self)(canonical)
    }
}

/// Renders a key as a JSON object member name.
pub trait ObjectKey {
    /// Consumes the key, returning its member name.
    fn into_object_key(self) -> String;
}

impl ObjectKey for String {
    fn into_object_key(self) -> String {
        self
    }
}

impl ObjectKey for &str {
    fn into_object_key(self) -> String {
        self.to_owned()
    }
}

impl ObjectKey for char {
    fn into_object_key(self) -> String {
        self.to_string()
    }
}

impl ObjectKey for bool {
    fn into_object_key(self) -> String {
        self.to_string()
    }
}

macro_rules! impl_object_key_display {
    ( $( $ty:ty ),+ $(,)? ) => {
        $(
            impl ObjectKey for $ty {
                fn into_object_key(self) -> String {
                    self.to_string()
                }
            }
        )+
    };
}
impl_object_key_display!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

/// A JSON string key is used as-is; any other JSON key is rendered as its JSON text.
impl ObjectKey for Value {
    fn into_object_key(self) -> String {
        match self {
            Self::String(name) => name,
            other => other.to_string(),
        }
    }
}

/// Values of `canonical`, in order. Keys are discarded.
pub fn to_vec<K, V>(canonical: Canonical<K, V>) -> Vec<V> {
    canonical.into_values().collect()
}

/// Distinct values of `canonical`, in order of first occurrence.
pub fn to_set<K, V>(canonical: Canonical<K, V>) -> IndexSet<V>
where
    V: Hash + Eq,
{
    canonical.into_values().collect()
}

/// A JSON object with one member per entry of `canonical`, in order.
///
/// Member names are stored verbatim, so a key such as `"__proto__"` is just another member. If two
/// keys render to the same name, the later value wins and the first position is kept.
pub fn to_object<K, V>(canonical: Canonical<K, V>) -> Map<String, Value>
where
    K: ObjectKey,
    V: Into<Value>,
{
    canonical
        .into_iter()
        .map(|(key, value)| (key.into_object_key(), value.into()))
        .collect()
}

/// A [`Canonical`] holding the members of `object`, in order.
pub fn from_object(object: &Map<String, Value>) -> Canonical<String, Value> {
    object
        .iter()
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// A persistent sorted map holding the entries of `canonical`.
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub fn to_persistent_map<K, V>(canonical: Canonical<K, V>) -> imbl::OrdMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
{
    canonical.into_iter().collect()
}

/// A persistent vector holding the values of `canonical`, in order.
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub fn to_persistent_vector<K, V>(canonical: Canonical<K, V>) -> imbl::Vector<V>
where
    V: Clone,
{
    canonical.into_values().collect()
}

/// [`Convertor`] form of [`to_vec`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ToVec;
impl<K, V> Convertor<K, V> for ToVec {
    type Output = Vec<V>;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        to_vec(canonical)
    }
}

/// [`Convertor`] form of [`to_set`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ToSet;
impl<K, V> Convertor<K, V> for ToSet
where
    V: Hash + Eq,
{
    type Output = IndexSet<V>;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        to_set(canonical)
    }
}

/// [`Convertor`] form of [`to_object`].
#[derive(Clone, Copy, Debug, Default)]
pub struct ToObject;
impl<K, V> Convertor<K, V> for ToObject
where
    K: ObjectKey,
    V: Into<Value>,
{
    type Output = Map<String, Value>;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        to_object(canonical)
    }
}

/// [`Convertor`] form of [`to_persistent_map`].
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ToPersistentMap;
#[cfg(feature = "persistent")]
impl<K, V> Convertor<K, V> for ToPersistentMap
where
    K: Ord + Clone,
    V: Clone,
{
    type Output = imbl::OrdMap<K, V>;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        to_persistent_map(canonical)
    }
}

/// [`Convertor`] form of [`to_persistent_vector`].
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
#[derive(Clone, Copy, Debug, Default)]
pub struct ToPersistentVector;
#[cfg(feature = "persistent")]
impl<K, V> Convertor<K, V> for ToPersistentVector
where
    V: Clone,
{
    type Output = imbl::Vector<V>;

    fn convert(&self, canonical: Canonical<K, V>) -> Self::Output {
        to_persistent_vector(canonical)
    }
}
