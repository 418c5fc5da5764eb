#![forbid(unsafe_code)]
//! pullseq-operators: lazy adapters, set operations, reducers and the
//! deferred sort engine, all built on `pullseq_core::Enumerable`.
//!
//! Design intent:
//! - Adapters are plain structs that wrap their upstream by value and forward
//!   the stop signal; building a pipeline performs no work.
//! - Terminals (`to_vec`, `first`, `count`, ...) drive exactly one pass and
//!   stop pulling as soon as the answer is known.
//! - Ordering is deferred: `order_by` records a rule, `then_by` returns a new
//!   value with one more rule, and every terminal call sorts afresh.

pub mod concat;
pub mod filter;
pub mod map;
pub mod reduce;
pub mod set;
pub mod sort;
pub mod traits;
pub mod window;

pub use concat::Concat;
pub use filter::{Filter, SkipWhile, TakeWhile};
pub use map::{FlatMap, Inspect, Map};
pub use set::{Distinct, Except, Intersect, Union};
pub use sort::{CompositeOrder, OrderedEnumerable, OrderingRule, RuleChain};
pub use traits::EnumerableExt;
pub use window::{Skip, SkipLast, Take, TakeLast};
