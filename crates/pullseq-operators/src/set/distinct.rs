use pullseq_core::{EqualityComparer, Enumerable};

use super::HashedSet;

/// Yields the first occurrence of each element, in source order.
#[derive(Clone)]
pub struct Distinct<E, C> {
    source: E,
    comparer: C,
}

impl<E, C> Distinct<E, C> {
    pub(crate) fn new(source: E, comparer: C) -> Self {
        Self { source, comparer }
    }
}

impl<E, C> Enumerable for Distinct<E, C>
where
    E: Enumerable,
    E::Item: Clone,
    C: EqualityComparer<E::Item>,
{
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        let mut seen = HashedSet::new(&self.comparer);
        self.source
            .enumerate(&mut |item| !seen.insert(item.clone()) || yield_(item));
    }
}
