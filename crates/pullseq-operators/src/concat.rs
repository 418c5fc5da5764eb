//! Sequential concatenation of two enumerations.

use pullseq_core::Enumerable;

#[derive(Clone)]
pub struct Concat<A, B> {
    first: A,
    second: B,
}

impl<A, B> Concat<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Enumerable for Concat<A, B>
where
    A: Enumerable,
    B: Enumerable<Item = A::Item>,
{
    type Item = A::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(A::Item) -> bool) {
        let mut stopped = false;
        self.first.enumerate(&mut |item| {
            stopped = !yield_(item);
            !stopped
        });
        if !stopped {
            self.second.enumerate(yield_);
        }
    }
}
