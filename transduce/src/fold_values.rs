//! [`FoldValues`] and [`TryFoldValues`] reducing strategies.
use core::convert::Infallible;
use core::marker::PhantomData;

use crate::Reducer;

/// Left-folds the values of all pairs that reach it, ignoring keys.
///
/// The accumulator is a single value of type `Accum`, reset to a clone of `init` at the start of
/// every transduction. An empty pass therefore yields `init`.
pub struct FoldValues<Func, Accum, Error = Infallible> {
    func: Func,
    init: Accum,
    _phantom: PhantomData<fn() -> Error>,
}

impl<Func, Accum, Error> FoldValues<Func, Accum, Error> {
    /// Creates with fold function `func` and initial value `init`, for any error type.
    pub fn new(func: Func, init: Accum) -> Self {
        Self {
            func,
            init,
            _phantom: PhantomData,
        }
    }
}

impl<Func, Accum, Error, K, V> Reducer<(K, V)> for FoldValues<Func, Accum, Error>
where
    Func: FnMut(Accum, V) -> Accum,
    Accum: Clone,
{
    type Acc = Accum;
    type Error = Error;

    fn init(&mut self) -> Self::Acc {
        self.init.clone()
    }

    fn step(&mut self, acc: Self::Acc, (_key, value): (K, V)) -> Result<Self::Acc, Self::Error> {
        Ok((self.func)(acc, value))
    }
}

/// Creates an infallible [`FoldValues`].
pub fn fold_values<Func, Accum, V>(func: Func, init: Accum) -> FoldValues<Func, Accum>
where
    Func: FnMut(Accum, V) -> Accum,
{
    FoldValues::new(func, init)
}

/// Same as [`FoldValues`] but the fold function returns `Result<Accum, Error>`.
///
/// An `Err` stops the transduction and is returned to the caller unchanged.
pub struct TryFoldValues<Func, Accum> {
    func: Func,
    init: Accum,
}

impl<Func, Accum> TryFoldValues<Func, Accum> {
    /// Creates with fallible fold function `func` and initial value `init`.
    pub fn new(func: Func, init: Accum) -> Self {
        Self { func, init }
    }
}

impl<Func, Accum, Error, K, V> Reducer<(K, V)> for TryFoldValues<Func, Accum>
where
    Func: FnMut(Accum, V) -> Result<Accum, Error>,
    Accum: Clone,
{
    type Acc = Accum;
    type Error = Error;

    fn init(&mut self) -> Self::Acc {
        self.init.clone()
    }

    fn step(&mut self, acc: Self::Acc, (_key, value): (K, V)) -> Result<Self::Acc, Self::Error> {
        (self.func)(acc, value)
    }
}

/// Creates a [`TryFoldValues`].
pub fn try_fold_values<Func, Accum, V, Error>(
    func: Func,
    init: Accum,
) -> TryFoldValues<Func, Accum>
where
    Func: FnMut(Accum, V) -> Result<Accum, Error>,
{
    TryFoldValues::new(func, init)
}
