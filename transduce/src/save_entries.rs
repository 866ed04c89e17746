//! [`SaveEntries`] reducing strategy.
use core::convert::Infallible;
use core::hash::Hash;
use core::marker::PhantomData;

use crate::{Canonical, Reducer};

/// Stores every pair that reaches it into a [`Canonical`] map.
///
/// Later pairs with an already-seen key overwrite the earlier value. The step itself never fails;
/// `Error` only names the error type shared with fallible stages wrapped around it.
pub struct SaveEntries<Error = Infallible> {
    _phantom: PhantomData<fn() -> Error>,
}

impl<Error> SaveEntries<Error> {
    /// Creates the strategy, for any error type.
    pub fn new() -> Self {
        Self {
            _phantom: PhantomData,
        }
    }
}

impl<Error> Default for SaveEntries<Error> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, Error> Reducer<(K, V)> for SaveEntries<Error>
where
    K: Hash + Eq,
{
    type Acc = Canonical<K, V>;
    type Error = Error;

    fn init(&mut self) -> Self::Acc {
        Canonical::new()
    }

    fn step(&mut self, acc: Self::Acc, (key, value): (K, V)) -> Result<Self::Acc, Self::Error> {
        Ok(acc.set(key, value))
    }
}

/// Creates an infallible [`SaveEntries`].
pub fn save_entries() -> SaveEntries {
    SaveEntries::new()
}
