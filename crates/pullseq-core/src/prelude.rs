//! Convenient re-exports for downstream crates.

pub use crate::compare::{by_key, by_key_with, reverse, Comparer, Direction, FloatOrder, Natural};
pub use crate::config::SeqConfig;
pub use crate::enumerable::{BoxedEnumerable, Empty, Enumerable, OrEmpty};
pub use crate::equality::{equality_from_fns, key_equality, DefaultEquality, EqualityComparer};
pub use crate::error::{Error, Result, SeqError};
pub use crate::extremum::ExtremumKey;
pub use crate::source::{
    empty, from_fn, from_iter, from_slice, from_vec, or_empty, range, repeat,
};
