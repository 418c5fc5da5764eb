//! Shared fixtures for integration tests.
#![allow(dead_code)]

use std::cell::Cell;

use pullseq::Enumerable;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Row {
    pub cat: &'static str,
    pub v: i32,
}

pub fn row(cat: &'static str, v: i32) -> Row {
    Row { cat, v }
}

/// Yields `0..len` and counts how many elements were actually pulled.
pub struct CountingSource {
    len: i64,
    pulls: Cell<usize>,
}

impl CountingSource {
    pub fn new(len: i64) -> Self {
        Self {
            len,
            pulls: Cell::new(0),
        }
    }

    pub fn pulls(&self) -> usize {
        self.pulls.get()
    }

    pub fn reset(&self) {
        self.pulls.set(0);
    }
}

impl Enumerable for CountingSource {
    type Item = i64;

    fn enumerate(&self, yield_: &mut dyn FnMut(i64) -> bool) {
        for i in 0..self.len {
            self.pulls.set(self.pulls.get() + 1);
            if !yield_(i) {
                return;
            }
        }
    }
}

/// A producer that panics if it is ever asked for an element.
pub struct Untouchable;

impl Enumerable for Untouchable {
    type Item = i64;

    fn enumerate(&self, _yield: &mut dyn FnMut(i64) -> bool) {
        panic!("source was enumerated");
    }
}
