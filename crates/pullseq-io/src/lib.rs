#![forbid(unsafe_code)]
//! pullseq-io: bridges between enumerations and bounded channels.
//!
//! Design intent:
//! - `from_channel` turns a `tokio::sync::mpsc::Receiver` into an enumeration
//!   that blocks the calling thread between values.
//! - `to_channel` drains an enumeration on one named worker thread. The
//!   returned `ChannelStream` owns that thread: dropping it cancels the worker
//!   and joins it, so an abandoned stream never leaks a thread.
//! - Both sides use blocking channel calls and must not run inside an async
//!   runtime context.

pub mod channel;

pub use channel::{from_channel, to_channel, to_channel_with, ChannelStream, FromChannel};
