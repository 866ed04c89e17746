//! Shorthands that run a transduction and convert its result in one call.
use core::convert::Infallible;
use core::hash::Hash;

use indexmap::IndexSet;
use serde_json::{Map, Value};
use transduce::engine::{PairOf, TransduceResult};
use transduce::{
    Canonical, PairTraversable, Reducer, SaveEntries, TransduceError, Transform,
    fold_values, save_entries, transduce, transduce_with,
};

#[cfg(feature = "persistent")]
use crate::{ToPersistentMap, ToPersistentVector};
use crate::{Convertor, ObjectKey, ToObject, ToSet, ToVec, from_object};

/// Pipes the `Ok` result of `engine_call` through `convertor`.
///
/// The returned closure forwards its single argument (use a tuple for several) to `engine_call`
/// unchanged. Errors are passed through without reaching `convertor`.
pub fn bind<Args, K, V, Error, Engine, C>(
    mut engine_call: Engine,
    convertor: C,
) -> impl FnMut(Args) -> Result<C::Output, Error>
where
    Engine: FnMut(Args) -> Result<Canonical<K, V>, Error>,
    C: Convertor<K, V>,
{
    move |args| {
        let canonical = engine_call(args)?;
        Ok(convertor.convert(canonical))
    }
}

/// Transduces `input` through `transformation` into a [`Canonical`] map.
pub fn trans<In, X>(input: &In, transformation: X) -> TransduceResult<In, X, SaveEntries>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>>,
{
    transduce_with(input, save_entries(), transformation)
}

/// Left-folds the values of `input`, starting from `init`.
pub fn reduce<In, Func, Accum>(
    input: &In,
    func: Func,
    init: Accum,
) -> Result<Accum, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    Func: FnMut(Accum, In::Value) -> Accum,
    Accum: Clone,
{
    transduce(input, fold_values(func, init))
}

/// Transduces `input` into a [`Canonical`] with `reducing` wrapped in `transformation`, then
/// converts the result with `convertor`.
pub fn transduce_into<In, X, R, C, K, V>(
    input: &In,
    reducing: R,
    transformation: X,
    convertor: C,
) -> Result<C::Output, TransduceError<<X::Output<R> as Reducer<PairOf<In>>>::Error>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<R>: Reducer<PairOf<In>, Acc = Canonical<K, V>>,
    C: Convertor<K, V>,
{
    let canonical = transduce_with(input, reducing, transformation)?;
    tracing::trace!(entries = canonical.len(), "converting canonical result");
    Ok(convertor.convert(canonical))
}

/// Transduces `input` and returns the surviving values, in order.
pub fn transduce_to_vec<In, X, K, V>(
    input: &In,
    transformation: X,
) -> Result<Vec<V>, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>, Acc = Canonical<K, V>, Error = Infallible>,
{
    transduce_into(input, save_entries(), transformation, ToVec)
}

/// Transduces `input` and returns the distinct surviving values, in order of first occurrence.
pub fn transduce_to_set<In, X, K, V>(
    input: &In,
    transformation: X,
) -> Result<IndexSet<V>, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>, Acc = Canonical<K, V>, Error = Infallible>,
    V: Hash + Eq,
{
    transduce_into(input, save_entries(), transformation, ToSet)
}

/// Transduces `input` and returns the surviving pairs as a JSON object.
pub fn transduce_to_object<In, X, K, V>(
    input: &In,
    transformation: X,
) -> Result<Map<String, Value>, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>, Acc = Canonical<K, V>, Error = Infallible>,
    K: ObjectKey,
    V: Into<Value>,
{
    transduce_into(input, save_entries(), transformation, ToObject)
}

/// Transduces `input` and returns the surviving pairs as a persistent sorted map.
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub fn transduce_to_persistent_map<In, X, K, V>(
    input: &In,
    transformation: X,
) -> Result<imbl::OrdMap<K, V>, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>, Acc = Canonical<K, V>, Error = Infallible>,
    K: Ord + Clone,
    V: Clone,
{
    transduce_into(input, save_entries(), transformation, ToPersistentMap)
}

/// Transduces `input` and returns the surviving values as a persistent vector.
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub fn transduce_to_persistent_vector<In, X, K, V>(
    input: &In,
    transformation: X,
) -> Result<imbl::Vector<V>, TransduceError<Infallible>>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<SaveEntries>: Reducer<PairOf<In>, Acc = Canonical<K, V>, Error = Infallible>,
    V: Clone,
{
    transduce_into(input, save_entries(), transformation, ToPersistentVector)
}

/// JSON object in, JSON object out: member names become keys, member values become values.
pub fn transduce_object_to_object<X, K, V>(
    object: &Map<String, Value>,
    transformation: X,
) -> Result<Map<String, Value>, TransduceError<Infallible>>
where
    X: Transform<Input = (String, Value)>,
    X::Output<SaveEntries>: Reducer<(String, Value), Acc = Canonical<K, V>, Error = Infallible>,
    K: ObjectKey,
    V: Into<Value>,
{
    transduce_to_object(&from_object(object), transformation)
}
