//! Binary set operators. Results are distinct and keep the first input's
//! order (`Union` continues with the second input's order).

use std::cell::Cell;

use pullseq_core::{EqualityComparer, Enumerable};

use super::HashedSet;

/// Distinct elements of `first` that do not appear in `second`.
///
/// `second` is fully buffered before `first` is pulled.
#[derive(Clone)]
pub struct Except<A, B, C> {
    first: A,
    second: B,
    comparer: C,
}

impl<A, B, C> Except<A, B, C> {
    pub(crate) fn new(first: A, second: B, comparer: C) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<A, B, C> Enumerable for Except<A, B, C>
where
    A: Enumerable,
    A::Item: Clone,
    B: Enumerable<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    type Item = A::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(A::Item) -> bool) {
        let mut excluded = HashedSet::new(&self.comparer);
        self.second.enumerate(&mut |item| {
            excluded.insert(item);
            true
        });
        // Inserting what we yield also dedups `first`.
        self.first
            .enumerate(&mut |item| !excluded.insert(item.clone()) || yield_(item));
    }
}

/// Distinct elements of `first` that also appear in `second`.
#[derive(Clone)]
pub struct Intersect<A, B, C> {
    first: A,
    second: B,
    comparer: C,
}

impl<A, B, C> Intersect<A, B, C> {
    pub(crate) fn new(first: A, second: B, comparer: C) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<A, B, C> Enumerable for Intersect<A, B, C>
where
    A: Enumerable,
    B: Enumerable<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    type Item = A::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(A::Item) -> bool) {
        let mut candidates = HashedSet::new(&self.comparer);
        self.second.enumerate(&mut |item| {
            candidates.insert(item);
            true
        });
        // Removing on yield makes each match appear once.
        self.first
            .enumerate(&mut |item| !candidates.remove(&item) || yield_(item));
    }
}

/// Distinct elements of `first` followed by the distinct elements of `second`
/// not already produced.
#[derive(Clone)]
pub struct Union<A, B, C> {
    first: A,
    second: B,
    comparer: C,
}

impl<A, B, C> Union<A, B, C> {
    pub(crate) fn new(first: A, second: B, comparer: C) -> Self {
        Self {
            first,
            second,
            comparer,
        }
    }
}

impl<A, B, C> Enumerable for Union<A, B, C>
where
    A: Enumerable,
    A::Item: Clone,
    B: Enumerable<Item = A::Item>,
    C: EqualityComparer<A::Item>,
{
    type Item = A::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(A::Item) -> bool) {
        let mut seen = HashedSet::new(&self.comparer);
        let stopped = Cell::new(false);
        let mut step = |item: A::Item| {
            if !seen.insert(item.clone()) {
                return true;
            }
            stopped.set(!yield_(item));
            !stopped.get()
        };
        self.first.enumerate(&mut step);
        if !stopped.get() {
            self.second.enumerate(&mut step);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::EnumerableExt;
    use pullseq_core::prelude::*;
    use std::cell::Cell;

    #[test]
    fn test_except() {
        let seq = from_vec(vec![1, 2, 2, 3, 4]).except(from_vec(vec![2, 5]));
        assert_eq!(seq.to_vec(), vec![1, 3, 4]);
    }

    #[test]
    fn test_intersect() {
        let seq = from_vec(vec![4, 1, 2, 1, 3]).intersect(from_vec(vec![1, 3, 3, 9]));
        assert_eq!(seq.to_vec(), vec![1, 3]);
    }

    #[test]
    fn test_union() {
        let seq = from_vec(vec![1, 2, 1]).union(from_vec(vec![3, 2, 4]));
        assert_eq!(seq.to_vec(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_absent_operands() {
        let none: Option<pullseq_core::source::FromVec<i32>> = None;
        assert_eq!(from_vec(vec![1, 2]).except(none.clone()).to_vec(), vec![1, 2]);
        assert!(from_vec(vec![1, 2]).intersect(none.clone()).to_vec().is_empty());
        assert_eq!(or_empty(none.clone()).union(from_vec(vec![7])).to_vec(), vec![7]);
    }

    #[test]
    fn test_union_stop_skips_second() {
        let pulls = Cell::new(0);
        let seq = from_vec(vec![1, 2])
            .union(from_vec(vec![3]).inspect(|_| pulls.set(pulls.get() + 1)));
        assert_eq!(seq.first(), Some(1));
        assert_eq!(pulls.get(), 0);
    }
}
