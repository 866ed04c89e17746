#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod convertor;
pub mod helpers;

pub use convertor::{
    Convertor, ObjectKey, ToObject, ToSet, ToVec, from_object, to_object, to_set, to_vec,
};
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub use convertor::{ToPersistentMap, ToPersistentVector, to_persistent_map, to_persistent_vector};
pub use helpers::{
    bind, reduce, trans, transduce_into, transduce_object_to_object, transduce_to_object,
    transduce_to_set, transduce_to_vec,
};
#[cfg(feature = "persistent")]
#[cfg_attr(docsrs, doc(cfg(feature = "persistent")))]
pub use helpers::{transduce_to_persistent_map, transduce_to_persistent_vector};
