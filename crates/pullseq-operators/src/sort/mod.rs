//! Deferred multi-key sort (`order_by` / `then_by`).
//!
//! Building an order only records rules. Each terminal call materializes the
//! source, sorts a private buffer with the composite comparator, and yields it
//! through the ordinary protocol.

pub mod ordered;
pub mod rules;

pub use ordered::OrderedEnumerable;
pub use rules::{CompositeOrder, OrderingRule, RuleChain};
