#![forbid(unsafe_code)]
//! pullseq-core: the enumeration protocol and the plugins every operator consumes.
//!
//! Design intent:
//! - An enumeration is a producer that pushes elements into a consumer callback
//!   and stops the moment the callback returns `false`.
//! - Absence is never an error: `Option<E>`, `OrEmpty<E>` and `Empty<T>` all
//!   behave as a sequence with zero elements.
//! - Ordering and equality are pluggable (`Comparer`, `EqualityComparer`) so
//!   operators never need reflection-style defaults.

pub mod compare;
pub mod config;
pub mod enumerable;
pub mod equality;
pub mod error;
pub mod extremum;
pub mod hash;
pub mod prelude;
pub mod source;

pub use compare::{Comparer, Direction, FloatOrder, Natural};
pub use config::SeqConfig;
pub use enumerable::{BoxedEnumerable, Empty, Enumerable, OrEmpty};
pub use equality::{DefaultEquality, EqualityComparer};
pub use error::{Error, Result, SeqError};
pub use extremum::ExtremumKey;
