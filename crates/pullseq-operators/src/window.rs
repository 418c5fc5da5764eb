//! Positional windows: take/skip from the front and from the back.
//!
//! `TakeLast`/`SkipLast` are the only buffering operators here. Which elements
//! are "the last n" is unknown until the source is exhausted, so they keep an
//! n-element ring buffer.

use std::collections::VecDeque;

use pullseq_core::Enumerable;

#[derive(Clone)]
pub struct Take<E> {
    source: E,
    count: usize,
}

impl<E> Take<E> {
    pub(crate) fn new(source: E, count: usize) -> Self {
        Self { source, count }
    }
}

impl<E: Enumerable> Enumerable for Take<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        if self.count == 0 {
            return;
        }
        let mut remaining = self.count;
        self.source.enumerate(&mut |item| {
            remaining -= 1;
            // Stop the source as soon as the quota is met, without pulling one more.
            yield_(item) && remaining > 0
        });
    }
}

#[derive(Clone)]
pub struct Skip<E> {
    source: E,
    count: usize,
}

impl<E> Skip<E> {
    pub(crate) fn new(source: E, count: usize) -> Self {
        Self { source, count }
    }
}

impl<E: Enumerable> Enumerable for Skip<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let mut to_skip = self.count;
        self.source.enumerate(&mut |item| {
            if to_skip > 0 {
                to_skip -= 1;
                return true;
            }
            yield_(item)
        });
    }
}

#[derive(Clone)]
pub struct TakeLast<E> {
    source: E,
    count: usize,
}

impl<E> TakeLast<E> {
    pub(crate) fn new(source: E, count: usize) -> Self {
        Self { source, count }
    }
}

impl<E: Enumerable> Enumerable for TakeLast<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        if self.count == 0 {
            return;
        }
        let mut ring: VecDeque<E::Item> = VecDeque::new();
        self.source.enumerate(&mut |item| {
            if ring.len() == self.count {
                ring.pop_front();
            }
            ring.push_back(item);
            true
        });
        for item in ring {
            if !yield_(item) {
                return;
            }
        }
    }
}

/// Yields everything except the final `count` elements. Each element is
/// released once `count` newer ones have been seen.
#[derive(Clone)]
pub struct SkipLast<E> {
    source: E,
    count: usize,
}

impl<E> SkipLast<E> {
    pub(crate) fn new(source: E, count: usize) -> Self {
        Self { source, count }
    }
}

impl<E: Enumerable> Enumerable for SkipLast<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        if self.count == 0 {
            self.source.enumerate(yield_);
            return;
        }
        // Sized by what arrives, never by `count`: the count may dwarf the source.
        let mut ring: VecDeque<E::Item> = VecDeque::new();
        self.source.enumerate(&mut |item| {
            ring.push_back(item);
            if ring.len() > self.count {
                if let Some(oldest) = ring.pop_front() {
                    return yield_(oldest);
                }
            }
            true
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::EnumerableExt;
    use pullseq_core::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_take_zero_never_touches_source() {
        let pulls = Cell::new(0);
        let seq = range(0, 10).inspect(|_| pulls.set(pulls.get() + 1)).take(0);
        assert!(seq.to_vec().is_empty());
        assert_eq!(pulls.get(), 0);
    }

    #[test]
    fn test_take_stops_without_extra_pull() {
        let pulls = Cell::new(0);
        let seq = range(0, 100).inspect(|_| pulls.set(pulls.get() + 1)).take(3);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_skip_past_end() {
        assert!(range(0, 3).skip(5).to_vec().is_empty());
        assert_eq!(range(0, 5).skip(3).to_vec(), vec![3, 4]);
    }

    #[test]
    fn test_take_last() {
        assert_eq!(range(0, 6).take_last(2).to_vec(), vec![4, 5]);
        assert_eq!(range(0, 2).take_last(5).to_vec(), vec![0, 1]);
        assert!(range(0, 6).take_last(0).to_vec().is_empty());
    }

    #[test]
    fn test_skip_last() {
        assert_eq!(range(0, 6).skip_last(2).to_vec(), vec![0, 1, 2, 3]);
        assert!(range(0, 2).skip_last(5).to_vec().is_empty());
        assert_eq!(range(0, 3).skip_last(0).to_vec(), vec![0, 1, 2]);
    }

    #[test]
    fn test_huge_counts_on_short_sources() {
        assert!(range(0, 3).skip_last(usize::MAX).to_vec().is_empty());
        assert!(range(0, 3).skip_last(1usize << 60).to_vec().is_empty());
        assert_eq!(range(0, 3).take_last(usize::MAX).to_vec(), vec![0, 1, 2]);
        assert_eq!(range(0, 3).take(usize::MAX).to_vec(), vec![0, 1, 2]);
        assert!(range(0, 3).skip(usize::MAX).to_vec().is_empty());
    }

    #[test]
    fn test_skip_last_streams_and_stops() {
        let pulls = Cell::new(0);
        let seq = range(0, 100)
            .inspect(|_| pulls.set(pulls.get() + 1))
            .skip_last(2)
            .take(3);
        assert_eq!(seq.to_vec(), vec![0, 1, 2]);
        assert_eq!(pulls.get(), 5);
    }
}
