//! The transduction driver.
use crate::{PairTraversable, Reducer, TransduceError, Transform};

/// `(key, value)` pair type yielded by `In`.
pub type PairOf<In> = (<In as PairTraversable>::Key, <In as PairTraversable>::Value);

/// Result of wrapping `X` around `R` and transducing pairs of `In`.
pub type TransduceResult<In, X, R> = Result<
    <<X as Transform>::Output<R> as Reducer<PairOf<In>>>::Acc,
    TransduceError<<<X as Transform>::Output<R> as Reducer<PairOf<In>>>::Error>,
>;

/// Folds every pair of `input`, in traversal order, through `reducing`.
///
/// The accumulator is created fresh by [`Reducer::init`] and each step's return value becomes the
/// next accumulator. `input` is traversed exactly once and is never modified.
///
/// The first error returned by a step aborts the pass and is returned as
/// [`TransduceError::Step`]; no partial result is exposed.
pub fn transduce<In, R>(
    input: &In,
    mut reducing: R,
) -> Result<R::Acc, TransduceError<R::Error>>
where
    In: PairTraversable + ?Sized,
    R: Reducer<PairOf<In>>,
{
    let span = tracing::trace_span!("transduce", kind = input.kind());
    let _guard = span.enter();

    let pairs = input.pairs()?;
    let mut acc = reducing.init();
    let mut visited = 0_usize;
    for pair in pairs {
        acc = reducing.step(acc, pair).map_err(TransduceError::Step)?;
        visited += 1;
    }

    tracing::trace!(visited, "transduce complete");
    Ok(acc)
}

/// Same as [`transduce`], with the stages of `transformation` wrapped around `reducing`.
///
/// Each pair passes through the stages in the order they were appended to `transformation`, and
/// only pairs that survive every stage reach `reducing`.
pub fn transduce_with<In, X, R>(
    input: &In,
    reducing: R,
    transformation: X,
) -> TransduceResult<In, X, R>
where
    In: PairTraversable + ?Sized,
    X: Transform<Input = PairOf<In>>,
    X::Output<R>: Reducer<PairOf<In>>,
{
    transduce(input, transformation.wrap(reducing))
}
