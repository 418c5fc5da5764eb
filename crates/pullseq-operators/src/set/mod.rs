//! Set operators backed by a hash-bucketed seen-set.
//!
//! Buckets are keyed by the equality plugin's `hash_code`; within a bucket,
//! membership is decided by `equals`. Each pass builds its set from scratch.

use std::collections::HashMap;

use pullseq_core::EqualityComparer;

pub mod distinct;
pub mod ops;

pub use distinct::Distinct;
pub use ops::{Except, Intersect, Union};

pub(crate) struct HashedSet<'c, T, C: ?Sized> {
    comparer: &'c C,
    buckets: HashMap<u64, Vec<T>>,
}

impl<'c, T, C> HashedSet<'c, T, C>
where
    C: EqualityComparer<T> + ?Sized,
{
    pub(crate) fn new(comparer: &'c C) -> Self {
        Self {
            comparer,
            buckets: HashMap::new(),
        }
    }

    /// Adds `value` unless an equal element is present. Returns true if added.
    pub(crate) fn insert(&mut self, value: T) -> bool {
        let code = self.comparer.hash_code(&value);
        let bucket = self.buckets.entry(code).or_default();
        if bucket.iter().any(|held| self.comparer.equals(held, &value)) {
            return false;
        }
        bucket.push(value);
        true
    }

    /// Removes the element equal to `value`. Returns true if one was present.
    pub(crate) fn remove(&mut self, value: &T) -> bool {
        let code = self.comparer.hash_code(value);
        let Some(bucket) = self.buckets.get_mut(&code) else {
            return false;
        };
        let Some(pos) = bucket.iter().position(|held| self.comparer.equals(held, value)) else {
            return false;
        };
        bucket.swap_remove(pos);
        if bucket.is_empty() {
            self.buckets.remove(&code);
        }
        true
    }
}
