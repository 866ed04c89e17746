#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

use core::marker::PhantomData;

pub mod canonical;
pub mod compose;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fold_values;
pub mod map;
pub mod reducer;
pub mod save_entries;
pub mod stages;
pub mod traverse;
pub mod try_filter;
pub mod try_map;

pub use canonical::Canonical;
use compose::Compose;
pub use engine::{transduce, transduce_with};
pub use error::{InputNotIterable, TransduceError};
use filter::Filter;
pub use fold_values::{FoldValues, TryFoldValues, fold_values, try_fold_values};
use map::Map;
pub use reducer::Reducer;
pub use save_entries::{SaveEntries, save_entries};
pub use stages::{Stage, Stages};
pub use traverse::PairTraversable;
use try_filter::TryFilter;
use try_map::TryMap;

/// A helper trait for building reducer adaptor chains in forward order.
///
/// A `Transform` describes a sequence of stages without knowing the terminal [`Reducer`] yet.
/// Stages are evaluated in the order they are appended: in `identity().filter(p).map(f)` every
/// pair is first tested by `p`, and only the pairs it keeps are handed to `f`. Calling
/// [`Self::wrap`] attaches the terminal reducer, producing `Filter(p, Map(f, terminal))`, so the
/// first stage appended is the outermost wrapper.
///
/// To start a chain, use [`identity`] (or [`Identity::new`]).
pub trait Transform {
    /// The item type accepted by the first stage.
    type Input;
    /// The item type produced by the last stage.
    type Item;

    /// The composed [`Reducer`] type, if this chain is wrapped around `R`.
    type Output<R>;
    /// Complete this chain by wrapping it around the terminal `reducing` step.
    fn wrap<R>(self, reducing: R) -> Self::Output<R>;

    /// Appends a function which is called on each pair and passes along its output.
    fn map<Func, Out>(self, func: Func) -> map::MapTransform<Self, Func>
    where
        Self: Sized,
        Func: FnMut(Self::Item) -> Out,
    {
        map::MapTransform { prev: self, func }
    }

    /// Appends a predicate function which drops the pairs it rejects.
    fn filter<Func>(self, func: Func) -> filter::FilterTransform<Self, Func>
    where
        Self: Sized,
        Func: FnMut(&Self::Item) -> bool,
    {
        filter::FilterTransform { prev: self, func }
    }

    /// Appends a fallible mapping function. An `Err` aborts the whole transduction.
    fn try_map<Func, Out, Error>(self, func: Func) -> try_map::TryMapTransform<Self, Func>
    where
        Self: Sized,
        Func: FnMut(Self::Item) -> Result<Out, Error>,
    {
        try_map::TryMapTransform { prev: self, func }
    }

    /// Appends a fallible predicate function. An `Err` aborts the whole transduction.
    fn try_filter<Func, Error>(self, func: Func) -> try_filter::TryFilterTransform<Self, Func>
    where
        Self: Sized,
        Func: FnMut(&Self::Item) -> Result<bool, Error>,
    {
        try_filter::TryFilterTransform { prev: self, func }
    }

    /// Appends all stages of `next` after the stages of `self`.
    fn then<Next>(self, next: Next) -> Compose<Self, Next>
    where
        Self: Sized,
        Next: Transform<Input = Self::Item>,
    {
        Compose::new(self, next)
    }
}

/// Start a [`Transform`] chain, with `Item` as the input pair type.
///
/// Wrapping an `Identity` around a reducer returns the reducer unchanged.
pub struct Identity<Item>(PhantomData<fn(Item) -> Item>);
impl<Item> Default for Identity<Item> {
    fn default() -> Self {
        Self(PhantomData)
    }
}
impl<Item> Identity<Item> {
    /// Create a new, empty chain.
    pub fn new() -> Self {
        Self::default()
    }
}
impl<Item> Transform for Identity<Item> {
    type Input = Item;
    type Item = Item;

    type Output<R> = R;
    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        reducing
    }
}

/// Start a [`Transform`] chain over `Item`.
pub fn identity<Item>() -> Identity<Item> {
    Identity::new()
}

/// A one-stage [`Transform`] which maps every pair through `func`.
pub fn map_transformation<Item, Func, Out>(func: Func) -> map::MapTransform<Identity<Item>, Func>
where
    Func: FnMut(Item) -> Out,
{
    identity().map(func)
}

/// A one-stage [`Transform`] which keeps only the pairs accepted by `func`.
pub fn filter_transformation<Item, Func>(
    func: Func,
) -> filter::FilterTransform<Identity<Item>, Func>
where
    Func: FnMut(&Item) -> bool,
{
    identity().filter(func)
}

/// Composes two chains: pairs pass through `first`, then through `second`.
pub fn compose<First, Second>(first: First, second: Second) -> Compose<First, Second>
where
    First: Transform,
    Second: Transform<Input = First::Item>,
{
    Compose::new(first, second)
}

/// Creates a [`Map`] reducer that applies a function to each pair before `reducing`.
pub fn map<Func, In, Out, R>(func: Func, reducing: R) -> Map<R, Func>
where
    Func: FnMut(In) -> Out,
    R: Reducer<Out>,
{
    Map::new(func, reducing)
}

/// Creates a [`Filter`] reducer that only forwards pairs accepted by a predicate.
pub fn filter<Func, Item, R>(func: Func, reducing: R) -> Filter<R, Func>
where
    Func: FnMut(&Item) -> bool,
    R: Reducer<Item>,
{
    Filter::new(func, reducing)
}

/// Creates a [`TryMap`] reducer that applies a fallible function to each pair.
pub fn try_map<Func, In, Out, R>(func: Func, reducing: R) -> TryMap<R, Func>
where
    Func: FnMut(In) -> Result<Out, R::Error>,
    R: Reducer<Out>,
{
    TryMap::new(func, reducing)
}

/// Creates a [`TryFilter`] reducer that only forwards pairs accepted by a fallible predicate.
pub fn try_filter<Func, Item, R>(func: Func, reducing: R) -> TryFilter<R, Func>
where
    Func: FnMut(&Item) -> Result<bool, R::Error>,
    R: Reducer<Item>,
{
    TryFilter::new(func, reducing)
}
