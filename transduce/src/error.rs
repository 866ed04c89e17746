//! Error types.

/// The input cannot be traversed as ordered `(key, value)` pairs.
///
/// Statically typed inputs are checked by the [`crate::PairTraversable`] bound at compile time;
/// this error is only raised by dynamically typed inputs, such as a JSON scalar.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("input of kind `{kind}` does not support ordered pair traversal")]
pub struct InputNotIterable {
    /// Short name of the rejected input kind.
    pub kind: &'static str,
}

/// Failure of a single transduction.
///
/// Errors raised by a transformation stage or by the reducing step are carried in
/// [`TransduceError::Step`] exactly as they were returned.
#[derive(Debug, thiserror::Error)]
pub enum TransduceError<E> {
    /// The input cannot be traversed. No step has run.
    #[error(transparent)]
    InputNotIterable(#[from] InputNotIterable),
    /// A transformation or the reducing step failed. The partial result is discarded.
    #[error("{0}")]
    Step(E),
}

impl<E> TransduceError<E> {
    /// Returns the step error, if this is one.
    pub fn into_step(self) -> Option<E> {
        match self {
            Self::Step(err) => Some(err),
            Self::InputNotIterable(_) => None,
        }
    }
}
