//! [`Stages`]: a pipeline described as a runtime list of tagged stages.
//!
//! Use this instead of the [`Transform`] builder methods when the pipeline is assembled from data
//! (e.g. a list of user-selected steps) rather than written out in code. All stages work on the
//! same `(K, V)` pair type.
use core::fmt::{self, Debug};

use crate::{Reducer, Transform};

/// A boxed mapper stage.
pub type MapFn<'a, K, V> = Box<dyn FnMut((K, V)) -> (K, V) + 'a>;
/// A boxed predicate stage.
pub type FilterFn<'a, K, V> = Box<dyn FnMut(&(K, V)) -> bool + 'a>;

/// One stage of a [`Stages`] pipeline.
pub enum Stage<'a, K, V> {
    /// Replaces each pair with the mapper's output.
    Map(MapFn<'a, K, V>),
    /// Drops each pair the predicate rejects.
    Filter(FilterFn<'a, K, V>),
}

impl<K, V> Debug for Stage<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Map(_) => f.write_str("Map"),
            Self::Filter(_) => f.write_str("Filter"),
        }
    }
}

/// An ordered list of [`Stage`]s.
///
/// Stages run first to last: a pair is handed to stage `i + 1` only if stage `i` kept it.
/// Wrapping a reducer compiles the list into a single [`Staged`] step.
pub struct Stages<'a, K, V> {
    stages: Vec<Stage<'a, K, V>>,
}

impl<'a, K, V> Stages<'a, K, V> {
    /// Creates an empty pipeline, which forwards every pair unchanged.
    pub fn new() -> Self {
        Self { stages: Vec::new() }
    }

    /// Appends `stage` as the last stage.
    pub fn push(&mut self, stage: Stage<'a, K, V>) {
        self.stages.push(stage);
    }

    /// Appends a mapper stage.
    pub fn map(mut self, func: impl FnMut((K, V)) -> (K, V) + 'a) -> Self {
        self.push(Stage::Map(Box::new(func)));
        self
    }

    /// Appends a predicate stage.
    pub fn filter(mut self, func: impl FnMut(&(K, V)) -> bool + 'a) -> Self {
        self.push(Stage::Filter(Box::new(func)));
        self
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// `true` if there are no stages.
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl<K, V> Default for Stages<'_, K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> Debug for Stages<'_, K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.stages).finish()
    }
}

impl<'a, K, V> FromIterator<Stage<'a, K, V>> for Stages<'a, K, V> {
    fn from_iter<I: IntoIterator<Item = Stage<'a, K, V>>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<'a, K, V> Transform for Stages<'a, K, V> {
    type Input = (K, V);
    type Item = (K, V);

    type Output<R> = Staged<'a, R, K, V>;

    fn wrap<R>(self, reducing: R) -> Self::Output<R> {
        Staged {
            stages: self.stages,
            reducing,
        }
    }
}

/// A compiled [`Stages`] pipeline in front of the reducer `R`.
#[must_use = "reducers do nothing unless driven by `transduce`"]
pub struct Staged<'a, R, K, V> {
    stages: Vec<Stage<'a, K, V>>,
    reducing: R,
}

impl<R, K, V> Reducer<(K, V)> for Staged<'_, R, K, V>
where
    R: Reducer<(K, V)>,
{
    type Acc = R::Acc;
    type Error = R::Error;

    fn init(&mut self) -> Self::Acc {
        self.reducing.init()
    }

    fn step(&mut self, acc: Self::Acc, item: (K, V)) -> Result<Self::Acc, Self::Error> {
        let mut item = item;
        for stage in self.stages.iter_mut() {
            match stage {
                Stage::Map(func) => item = func(item),
                Stage::Filter(func) => {
                    if !func(&item) {
                        return Ok(acc);
                    }
                }
            }
        }
        self.reducing.step(acc, item)
    }
}
