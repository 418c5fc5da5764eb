//! In-memory sources: collections, generators, ranges and repeats.
//!
//! Every source here is re-enterable. Collections are yielded by clone in
//! their original order; the caller's backing data is borrowed, never copied
//! up front, so mutating it concurrently with a pass is the caller's problem.

use std::marker::PhantomData;

use crate::enumerable::{Empty, Enumerable, OrEmpty};

pub fn empty<T>() -> Empty<T> {
    Empty::new()
}

/// Wrap a possibly-absent enumeration so that `None` behaves as empty.
pub fn or_empty<E: Enumerable>(source: Option<E>) -> OrEmpty<E> {
    OrEmpty::new(source)
}

/// Borrowed slice source.
#[derive(Debug, Clone, Copy)]
pub struct FromSlice<'a, T> {
    items: &'a [T],
}

pub fn from_slice<T: Clone>(items: &[T]) -> FromSlice<'_, T> {
    FromSlice { items }
}

impl<T: Clone> Enumerable for FromSlice<'_, T> {
    type Item = T;

    fn enumerate(&self, yield_: &mut dyn FnMut(T) -> bool) {
        for item in self.items {
            if !yield_(item.clone()) {
                return;
            }
        }
    }
}

/// Owned vector source.
#[derive(Debug, Clone, Default)]
pub struct FromVec<T> {
    items: Vec<T>,
}

pub fn from_vec<T: Clone>(items: Vec<T>) -> FromVec<T> {
    FromVec { items }
}

impl<T> FromVec<T> {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Clone> Enumerable for FromVec<T> {
    type Item = T;

    fn enumerate(&self, yield_: &mut dyn FnMut(T) -> bool) {
        for item in &self.items {
            if !yield_(item.clone()) {
                return;
            }
        }
    }
}

/// Source over any cloneable `IntoIterator` (ranges, maps, adapters).
/// Each pass clones the iterable and walks it afresh.
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iterable: I,
}

pub fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iterable }
}

impl<I> Enumerable for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(I::Item) -> bool) {
        for item in self.iterable.clone() {
            if !yield_(item) {
                return;
            }
        }
    }
}

/// A raw producer closure: the direct form of the protocol.
///
/// The closure receives the consumer and is trusted to stop on `false`.
pub struct FromFn<F, T> {
    producer: F,
    _marker: PhantomData<fn() -> T>,
}

pub fn from_fn<T, F>(producer: F) -> FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    FromFn {
        producer,
        _marker: PhantomData,
    }
}

impl<F: Clone, T> Clone for FromFn<F, T> {
    fn clone(&self) -> Self {
        Self {
            producer: self.producer.clone(),
            _marker: PhantomData,
        }
    }
}

impl<F, T> Enumerable for FromFn<F, T>
where
    F: Fn(&mut dyn FnMut(T) -> bool),
{
    type Item = T;

    fn enumerate(&self, yield_: &mut dyn FnMut(T) -> bool) {
        (self.producer)(yield_)
    }
}

/// `count` consecutive integers starting at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Range {
    start: i64,
    count: i64,
}

/// Negative counts are treated as zero. Generation stops before overflowing
/// `i64` rather than wrapping.
pub fn range(start: i64, count: i64) -> Range {
    Range {
        start,
        count: count.max(0),
    }
}

impl Enumerable for Range {
    type Item = i64;

    fn enumerate(&self, yield_: &mut dyn FnMut(i64) -> bool) {
        for offset in 0..self.count {
            let Some(value) = self.start.checked_add(offset) else {
                return;
            };
            if !yield_(value) {
                return;
            }
        }
    }
}

/// One value yielded `count` times.
#[derive(Debug, Clone)]
pub struct Repeat<T> {
    value: T,
    count: i64,
}

/// Negative counts are treated as zero.
pub fn repeat<T: Clone>(value: T, count: i64) -> Repeat<T> {
    Repeat {
        value,
        count: count.max(0),
    }
}

impl<T: Clone> Enumerable for Repeat<T> {
    type Item = T;

    fn enumerate(&self, yield_: &mut dyn FnMut(T) -> bool) {
        for _ in 0..self.count {
            if !yield_(self.value.clone()) {
                return;
            }
        }
    }
}
