#![forbid(unsafe_code)]
//! pullseq: lazy, pull-based sequence operators with a deferred stable
//! multi-key sort.
//!
//! This crate only re-exports the workspace members. Most callers want
//! `use pullseq::prelude::*;`, which brings sources, plugins and the
//! `EnumerableExt` operator surface into scope.

pub use pullseq_core;
pub use pullseq_io;
pub use pullseq_operators;

pub use pullseq_core::{Enumerable, Error, Result, SeqConfig, SeqError};
pub use pullseq_io::{from_channel, to_channel, to_channel_with, ChannelStream};
pub use pullseq_operators::{EnumerableExt, OrderedEnumerable};

pub mod prelude {
    pub use pullseq_core::prelude::*;
    pub use pullseq_io::{from_channel, to_channel, to_channel_with, ChannelStream};
    pub use pullseq_operators::sort::OrderingRule;
    pub use pullseq_operators::{EnumerableExt, OrderedEnumerable};
}
