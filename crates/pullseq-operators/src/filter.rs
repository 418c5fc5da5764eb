//! Predicate-driven operators: filter, take-while, skip-while.

use pullseq_core::Enumerable;

#[derive(Clone)]
pub struct Filter<E, P> {
    source: E,
    predicate: P,
}

impl<E, P> Filter<E, P> {
    pub(crate) fn new(source: E, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<E, P> Enumerable for Filter<E, P>
where
    E: Enumerable,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let predicate = &self.predicate;
        self.source
            .enumerate(&mut |item| !predicate(&item) || yield_(item));
    }
}

/// Yields the leading run of elements matching the predicate, then stops the
/// source at the first element that fails it.
#[derive(Clone)]
pub struct TakeWhile<E, P> {
    source: E,
    predicate: P,
}

impl<E, P> TakeWhile<E, P> {
    pub(crate) fn new(source: E, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<E, P> Enumerable for TakeWhile<E, P>
where
    E: Enumerable,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let predicate = &self.predicate;
        self.source
            .enumerate(&mut |item| predicate(&item) && yield_(item));
    }
}

/// Drops the leading run of elements matching the predicate; everything from
/// the first failing element on is yielded unchanged.
#[derive(Clone)]
pub struct SkipWhile<E, P> {
    source: E,
    predicate: P,
}

impl<E, P> SkipWhile<E, P> {
    pub(crate) fn new(source: E, predicate: P) -> Self {
        Self { source, predicate }
    }
}

impl<E, P> Enumerable for SkipWhile<E, P>
where
    E: Enumerable,
    P: Fn(&E::Item) -> bool,
{
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let predicate = &self.predicate;
        let mut skipping = true;
        self.source.enumerate(&mut |item| {
            if skipping {
                if predicate(&item) {
                    return true;
                }
                skipping = false;
            }
            yield_(item)
        });
    }
}
