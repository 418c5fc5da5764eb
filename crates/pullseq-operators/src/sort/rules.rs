//! Ordering rules and the persistent rule chain.

use std::cmp::Ordering;
use std::fmt;
use std::rc::Rc;

use pullseq_core::{Comparer, Direction};

/// One `(comparer, direction)` pair. Immutable once built.
///
/// `'a` bounds whatever the comparer borrows, so a comparer may capture a
/// stack-local table or a `Cell`. Rules are shared with `Rc` and never cross
/// threads.
pub struct OrderingRule<'a, T> {
    comparer: Rc<dyn Comparer<T> + 'a>,
    direction: Direction,
}

impl<'a, T> OrderingRule<'a, T> {
    pub fn new<C>(comparer: C, direction: Direction) -> Self
    where
        C: Comparer<T> + 'a,
    {
        Self {
            comparer: Rc::new(comparer),
            direction,
        }
    }

    pub fn ascending<C>(comparer: C) -> Self
    where
        C: Comparer<T> + 'a,
    {
        Self::new(comparer, Direction::Ascending)
    }

    pub fn descending<C>(comparer: C) -> Self
    where
        C: Comparer<T> + 'a,
    {
        Self::new(comparer, Direction::Descending)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Direction-adjusted comparison.
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.direction.apply(self.comparer.compare(a, b))
    }
}

impl<T> Clone for OrderingRule<'_, T> {
    fn clone(&self) -> Self {
        Self {
            comparer: Rc::clone(&self.comparer),
            direction: self.direction,
        }
    }
}

impl<T> fmt::Debug for OrderingRule<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OrderingRule")
            .field("direction", &self.direction)
            .finish_non_exhaustive()
    }
}

struct RuleNode<'a, T> {
    rule: OrderingRule<'a, T>,
    parent: Option<Rc<RuleNode<'a, T>>>,
}

/// Append-only list of rules with structural sharing.
///
/// `append` never touches the receiver: chains that fork from a common prefix
/// share its nodes and cannot observe each other's additions.
pub struct RuleChain<'a, T> {
    tail: Rc<RuleNode<'a, T>>,
    len: usize,
}

impl<T> Clone for RuleChain<'_, T> {
    fn clone(&self) -> Self {
        Self {
            tail: Rc::clone(&self.tail),
            len: self.len,
        }
    }
}

impl<T> fmt::Debug for RuleChain<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.rules()).finish()
    }
}

impl<'a, T> RuleChain<'a, T> {
    pub fn new(first: OrderingRule<'a, T>) -> Self {
        Self {
            tail: Rc::new(RuleNode {
                rule: first,
                parent: None,
            }),
            len: 1,
        }
    }

    pub fn append(&self, rule: OrderingRule<'a, T>) -> Self {
        Self {
            tail: Rc::new(RuleNode {
                rule,
                parent: Some(Rc::clone(&self.tail)),
            }),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// A chain always holds at least the primary rule.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Rules in application order: primary first, last tie-breaker last.
    pub fn rules(&self) -> Vec<&OrderingRule<'a, T>> {
        let mut out = Vec::with_capacity(self.len);
        let mut node = Some(&self.tail);
        while let Some(n) = node {
            out.push(&n.rule);
            node = n.parent.as_ref();
        }
        out.reverse();
        out
    }

    pub fn composite(&self) -> CompositeOrder<'_, 'a, T> {
        CompositeOrder {
            rules: self.rules(),
        }
    }
}

/// The chain flattened for one sort: the first non-equal rule decides.
pub struct CompositeOrder<'r, 'a, T> {
    rules: Vec<&'r OrderingRule<'a, T>>,
}

impl<T> CompositeOrder<'_, '_, T> {
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        for rule in &self.rules {
            match rule.compare(a, b) {
                Ordering::Equal => continue,
                other => return other,
            }
        }
        Ordering::Equal
    }
}
