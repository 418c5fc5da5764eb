//! Element-wise projections: map, flat-map, inspect.

use pullseq_core::Enumerable;

#[derive(Clone)]
pub struct Map<E, F> {
    source: E,
    selector: F,
}

impl<E, F> Map<E, F> {
    pub(crate) fn new(source: E, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<E, F, U> Enumerable for Map<E, F>
where
    E: Enumerable,
    F: Fn(E::Item) -> U,
{
    type Item = U;

    fn enumerate(&self, yield_: &mut dyn FnMut(U) -> bool) {
        let selector = &self.selector;
        self.source.enumerate(&mut |item| yield_(selector(item)));
    }
}

/// Projects each element to an inner enumeration and yields its elements in
/// turn. A stop inside an inner sequence also stops the outer source.
#[derive(Clone)]
pub struct FlatMap<E, F> {
    source: E,
    selector: F,
}

impl<E, F> FlatMap<E, F> {
    pub(crate) fn new(source: E, selector: F) -> Self {
        Self { source, selector }
    }
}

impl<E, F, I> Enumerable for FlatMap<E, F>
where
    E: Enumerable,
    F: Fn(E::Item) -> I,
    I: Enumerable,
{
    type Item = I::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(I::Item) -> bool) {
        let selector = &self.selector;
        self.source.enumerate(&mut |item| {
            let mut keep_going = true;
            selector(item).enumerate(&mut |inner| {
                keep_going = yield_(inner);
                keep_going
            });
            keep_going
        });
    }
}

/// Calls `observer` on each element as it passes through.
#[derive(Clone)]
pub struct Inspect<E, F> {
    source: E,
    observer: F,
}

impl<E, F> Inspect<E, F> {
    pub(crate) fn new(source: E, observer: F) -> Self {
        Self { source, observer }
    }
}

impl<E, F> Enumerable for Inspect<E, F>
where
    E: Enumerable,
    F: Fn(&E::Item),
{
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let observer = &self.observer;
        self.source.enumerate(&mut |item| {
            observer(&item);
            yield_(item)
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::EnumerableExt;
    use pullseq_core::prelude::*;

    #[test]
    fn test_map_changes_type() {
        let lens = from_vec(vec!["a", "bcd", "ef"]).map(|s| s.len());
        assert_eq!(lens.to_vec(), vec![1, 3, 2]);
    }

    #[test]
    fn test_flat_map_flattens_in_order() {
        let seq = from_vec(vec![1i64, 2, 3]).flat_map(|n| range(0, n));
        assert_eq!(seq.to_vec(), vec![0, 0, 1, 0, 1, 2]);
    }

    #[test]
    fn test_flat_map_stop_reaches_outer() {
        let outer_pulls = std::cell::Cell::new(0);
        let seq = from_vec(vec![3i64, 3, 3])
            .inspect(|_| outer_pulls.set(outer_pulls.get() + 1))
            .flat_map(|n| range(0, n));
        assert_eq!(seq.take(4).to_vec(), vec![0, 1, 2, 0]);
        assert_eq!(outer_pulls.get(), 2);
    }
}
