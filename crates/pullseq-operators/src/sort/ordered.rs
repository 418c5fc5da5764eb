//! `OrderedEnumerable`: a source plus an accumulated, not-yet-applied order.
//!
//! For small inputs this is just a buffered sort. There is no spilling and no
//! memoization: every terminal call re-reads the source, because a
//! re-enterable source may produce different contents on the next pass.

use std::rc::Rc;

use pullseq_core::compare::{by_key, Comparer};
use pullseq_core::Enumerable;

use super::rules::{OrderingRule, RuleChain};

/// Not `Send`: rules are `Rc`-shared and may borrow locals.
pub struct OrderedEnumerable<'a, E: Enumerable> {
    source: Rc<E>,
    rules: RuleChain<'a, E::Item>,
}

impl<E: Enumerable> Clone for OrderedEnumerable<'_, E> {
    fn clone(&self) -> Self {
        Self {
            source: Rc::clone(&self.source),
            rules: self.rules.clone(),
        }
    }
}

impl<'a, E: Enumerable> OrderedEnumerable<'a, E> {
    pub fn new(source: E, primary: OrderingRule<'a, E::Item>) -> Self {
        Self {
            source: Rc::new(source),
            rules: RuleChain::new(primary),
        }
    }

    /// Extend the order with a tie-breaking rule. The receiver is unchanged;
    /// the returned value shares its source and rule prefix.
    pub fn then_by_rule(&self, rule: OrderingRule<'a, E::Item>) -> Self {
        Self {
            source: Rc::clone(&self.source),
            rules: self.rules.append(rule),
        }
    }

    pub fn then_by<C>(&self, comparer: C) -> Self
    where
        C: Comparer<E::Item> + 'a,
    {
        self.then_by_rule(OrderingRule::ascending(comparer))
    }

    pub fn then_by_descending<C>(&self, comparer: C) -> Self
    where
        C: Comparer<E::Item> + 'a,
    {
        self.then_by_rule(OrderingRule::descending(comparer))
    }

    pub fn then_by_key<K, F>(&self, selector: F) -> Self
    where
        F: Fn(&E::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.then_by(by_key(selector))
    }

    pub fn then_by_key_descending<K, F>(&self, selector: F) -> Self
    where
        F: Fn(&E::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.then_by_descending(by_key(selector))
    }

    pub fn rules(&self) -> &RuleChain<'a, E::Item> {
        &self.rules
    }

    /// Materialize the source and sort it. Runs in full on every call.
    ///
    /// Each element is buffered with its source position; full ties under
    /// every rule fall back to that position, so the result is stable.
    pub fn sorted(&self) -> Vec<E::Item> {
        let mut buffer: Vec<(usize, E::Item)> = Vec::new();
        let mut position = 0usize;
        self.source.enumerate(&mut |item| {
            buffer.push((position, item));
            position += 1;
            true
        });

        #[cfg(feature = "tracing")]
        tracing::trace!(
            rows = buffer.len(),
            rules = self.rules.len(),
            "sorting deferred order"
        );

        if buffer.len() > 1 {
            let order = self.rules.composite();
            buffer.sort_unstable_by(|(pa, a), (pb, b)| {
                order.compare(a, b).then_with(|| pa.cmp(pb))
            });
        }

        buffer.into_iter().map(|(_, item)| item).collect()
    }
}

impl<E: Enumerable> Enumerable for OrderedEnumerable<'_, E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(E::Item) -> bool) {
        for item in self.sorted() {
            if !yield_(item) {
                return;
            }
        }
    }
}
