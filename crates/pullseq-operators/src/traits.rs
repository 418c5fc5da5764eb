//! `EnumerableExt`: the fluent operator surface.
//!
//! Adapters take `self` and return a new lazy enumeration; nothing runs until
//! a terminal method is called. Terminals take `&self`, so one pipeline value
//! can be terminated repeatedly, each call being a fresh pass.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::Add;

use pullseq_core::compare::by_key;
use pullseq_core::equality::{key_equality, KeyEquality};
use pullseq_core::{
    BoxedEnumerable, Comparer, DefaultEquality, Enumerable, EqualityComparer, ExtremumKey,
    Result,
};

use crate::concat::Concat;
use crate::filter::{Filter, SkipWhile, TakeWhile};
use crate::map::{FlatMap, Inspect, Map};
use crate::reduce::{aggregate, element, extremum, materialize};
use crate::set::{Distinct, Except, Intersect, Union};
use crate::sort::{OrderedEnumerable, OrderingRule};
use crate::window::{Skip, SkipLast, Take, TakeLast};

pub trait EnumerableExt: Enumerable {
    // ----- stateless adapters -----

    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    fn map<U, F>(self, selector: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> U,
    {
        Map::new(self, selector)
    }

    fn flat_map<I, F>(self, selector: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> I,
        I: Enumerable,
    {
        FlatMap::new(self, selector)
    }

    fn inspect<F>(self, observer: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        Inspect::new(self, observer)
    }

    fn take(self, count: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, count)
    }

    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    fn take_last(self, count: usize) -> TakeLast<Self>
    where
        Self: Sized,
    {
        TakeLast::new(self, count)
    }

    fn skip_last(self, count: usize) -> SkipLast<Self>
    where
        Self: Sized,
    {
        SkipLast::new(self, count)
    }

    fn concat<B>(self, other: B) -> Concat<Self, B>
    where
        Self: Sized,
        B: Enumerable<Item = Self::Item>,
    {
        Concat::new(self, other)
    }

    // ----- set adapters -----

    fn distinct(self) -> Distinct<Self, DefaultEquality>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
    {
        Distinct::new(self, DefaultEquality)
    }

    fn distinct_with<C>(self, comparer: C) -> Distinct<Self, C>
    where
        Self: Sized,
        Self::Item: Clone,
        C: EqualityComparer<Self::Item>,
    {
        Distinct::new(self, comparer)
    }

    fn distinct_by<K, F>(self, selector: F) -> Distinct<Self, KeyEquality<F, K>>
    where
        Self: Sized,
        Self::Item: Clone,
        F: Fn(&Self::Item) -> K,
        K: Eq + Hash,
    {
        Distinct::new(self, key_equality(selector))
    }

    fn except<B>(self, other: B) -> Except<Self, B, DefaultEquality>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
        B: Enumerable<Item = Self::Item>,
    {
        Except::new(self, other, DefaultEquality)
    }

    fn except_with<B, C>(self, other: B, comparer: C) -> Except<Self, B, C>
    where
        Self: Sized,
        Self::Item: Clone,
        B: Enumerable<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        Except::new(self, other, comparer)
    }

    fn intersect<B>(self, other: B) -> Intersect<Self, B, DefaultEquality>
    where
        Self: Sized,
        Self::Item: Eq + Hash,
        B: Enumerable<Item = Self::Item>,
    {
        Intersect::new(self, other, DefaultEquality)
    }

    fn intersect_with<B, C>(self, other: B, comparer: C) -> Intersect<Self, B, C>
    where
        Self: Sized,
        B: Enumerable<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        Intersect::new(self, other, comparer)
    }

    fn union<B>(self, other: B) -> Union<Self, B, DefaultEquality>
    where
        Self: Sized,
        Self::Item: Eq + Hash + Clone,
        B: Enumerable<Item = Self::Item>,
    {
        Union::new(self, other, DefaultEquality)
    }

    fn union_with<B, C>(self, other: B, comparer: C) -> Union<Self, B, C>
    where
        Self: Sized,
        Self::Item: Clone,
        B: Enumerable<Item = Self::Item>,
        C: EqualityComparer<Self::Item>,
    {
        Union::new(self, other, comparer)
    }

    // ----- deferred ordering -----

    fn order_by_rule<'a>(self, rule: OrderingRule<'a, Self::Item>) -> OrderedEnumerable<'a, Self>
    where
        Self: Sized,
    {
        OrderedEnumerable::new(self, rule)
    }

    fn order_by<'a, C>(self, comparer: C) -> OrderedEnumerable<'a, Self>
    where
        Self: Sized,
        C: Comparer<Self::Item> + 'a,
    {
        self.order_by_rule(OrderingRule::ascending(comparer))
    }

    fn order_by_descending<'a, C>(self, comparer: C) -> OrderedEnumerable<'a, Self>
    where
        Self: Sized,
        C: Comparer<Self::Item> + 'a,
    {
        self.order_by_rule(OrderingRule::descending(comparer))
    }

    fn order_by_key<'a, K, F>(self, selector: F) -> OrderedEnumerable<'a, Self>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.order_by(by_key(selector))
    }

    fn order_by_key_descending<'a, K, F>(self, selector: F) -> OrderedEnumerable<'a, Self>
    where
        Self: Sized,
        F: Fn(&Self::Item) -> K + 'a,
        K: Ord + 'a,
    {
        self.order_by_descending(by_key(selector))
    }

    fn boxed<'a>(self) -> BoxedEnumerable<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }

    // ----- reducers -----

    fn count(&self) -> usize {
        aggregate::count(self)
    }

    fn count_where<P>(&self, predicate: P) -> usize
    where
        P: Fn(&Self::Item) -> bool,
    {
        aggregate::count_where(self, predicate)
    }

    fn sum(&self) -> Self::Item
    where
        Self::Item: Default + Add<Output = Self::Item>,
    {
        aggregate::sum_by(self, |item| item)
    }

    fn sum_by<N, F>(&self, selector: F) -> N
    where
        F: Fn(Self::Item) -> N,
        N: Default + Add<Output = N>,
    {
        aggregate::sum_by(self, selector)
    }

    fn average_by<F>(&self, selector: F) -> Option<f64>
    where
        F: Fn(Self::Item) -> f64,
    {
        aggregate::average_by(self, selector)
    }

    fn fold<A, F>(&self, init: A, folder: F) -> A
    where
        F: Fn(A, Self::Item) -> A,
    {
        aggregate::fold(self, init, folder)
    }

    fn reduce<F>(&self, folder: F) -> Option<Self::Item>
    where
        F: Fn(Self::Item, Self::Item) -> Self::Item,
    {
        aggregate::reduce(self, folder)
    }

    fn any(&self) -> bool {
        aggregate::any(self)
    }

    fn any_where<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        aggregate::any_where(self, predicate)
    }

    fn all<P>(&self, predicate: P) -> bool
    where
        P: Fn(&Self::Item) -> bool,
    {
        aggregate::all(self, predicate)
    }

    fn contains(&self, value: &Self::Item) -> bool
    where
        Self::Item: PartialEq,
    {
        aggregate::any_where(self, |item| item == value)
    }

    fn contains_with<C>(&self, value: &Self::Item, comparer: &C) -> bool
    where
        C: EqualityComparer<Self::Item> + ?Sized,
    {
        aggregate::contains_with(self, value, comparer)
    }

    fn first(&self) -> Option<Self::Item> {
        element::first(self)
    }

    fn first_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::first_where(self, predicate)
    }

    fn first_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.first().unwrap_or_default()
    }

    fn first_or(&self, default: Self::Item) -> Self::Item {
        self.first().unwrap_or(default)
    }

    fn last(&self) -> Option<Self::Item> {
        element::last(self)
    }

    fn last_where<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::last_where(self, predicate)
    }

    fn last_or_default(&self) -> Self::Item
    where
        Self::Item: Default,
    {
        self.last().unwrap_or_default()
    }

    fn last_or(&self, default: Self::Item) -> Self::Item {
        self.last().unwrap_or(default)
    }

    fn element_at(&self, index: usize) -> Option<Self::Item> {
        element::element_at(self, index)
    }

    fn element_at_or_default(&self, index: usize) -> Self::Item
    where
        Self::Item: Default,
    {
        self.element_at(index).unwrap_or_default()
    }

    fn single(&self) -> Result<Self::Item> {
        element::single(self)
    }

    fn single_where<P>(&self, predicate: P) -> Result<Option<Self::Item>>
    where
        P: Fn(&Self::Item) -> bool,
    {
        element::single_where(self, predicate)
    }

    /// Like `single`, but an empty source yields `T::default()`.
    fn single_or_default(&self) -> Result<Self::Item>
    where
        Self::Item: Default,
    {
        Ok(element::single_where(self, |_| true)?.unwrap_or_default())
    }

    fn min(&self) -> Option<Self::Item>
    where
        Self::Item: ExtremumKey,
    {
        extremum::min(self)
    }

    fn max(&self) -> Option<Self::Item>
    where
        Self::Item: ExtremumKey,
    {
        extremum::max(self)
    }

    fn min_by_key<K, F>(&self, selector: F) -> Option<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: ExtremumKey,
    {
        extremum::min_by_key(self, selector)
    }

    fn max_by_key<K, F>(&self, selector: F) -> Option<Self::Item>
    where
        F: Fn(&Self::Item) -> K,
        K: ExtremumKey,
    {
        extremum::max_by_key(self, selector)
    }

    // ----- materializers -----

    fn to_vec(&self) -> Vec<Self::Item> {
        materialize::to_vec(self)
    }

    fn to_map<K, V, KF, VF>(&self, key: KF, value: VF) -> HashMap<K, V>
    where
        K: Eq + Hash,
        KF: Fn(&Self::Item) -> K,
        VF: Fn(Self::Item) -> V,
    {
        materialize::to_map(self, key, value)
    }
}

impl<E: Enumerable + ?Sized> EnumerableExt for E {}

#[cfg(test)]
mod tests {
    use super::*;
    use pullseq_core::prelude::*;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Reading {
        sensor: &'static str,
        value: i32,
    }

    #[test]
    fn test_pipeline_reads_like_a_query() {
        let readings = from_vec(vec![
            Reading { sensor: "b", value: 7 },
            Reading { sensor: "a", value: 3 },
            Reading { sensor: "c", value: -1 },
            Reading { sensor: "a", value: 9 },
        ]);
        let top = readings
            .filter(|r| r.value > 0)
            .order_by_key_descending(|r: &Reading| r.value)
            .map(|r| r.sensor)
            .take(2);
        assert_eq!(top.to_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_or_default_distinguishes_from_or_nil() {
        let zeros = from_vec(vec![0]);
        let none = empty::<i32>();
        assert_eq!(zeros.first(), Some(0));
        assert_eq!(none.first(), None);
        assert_eq!(zeros.first_or_default(), none.first_or_default());
        assert_eq!(none.last_or(42), 42);
        assert_eq!(none.element_at_or_default(3), 0);
        assert_eq!(none.single_or_default(), Ok(0));
        assert_eq!(from_vec(vec![1, 2]).single_or_default(), Err(Error::MoreThanOne));
    }

    #[test]
    fn test_sum_and_contains() {
        let seq = range(1, 4);
        assert_eq!(seq.sum(), 6);
        assert!(seq.contains(&2));
        assert!(!seq.contains(&9));
        assert_eq!(seq.count(), 3);
    }

    #[test]
    fn test_boxed_chains_share_a_type() {
        let pick_evens = true;
        let seq: BoxedEnumerable<'_, i64> = if pick_evens {
            range(0, 6).filter(|x| x % 2 == 0).boxed()
        } else {
            range(0, 6).boxed()
        };
        assert_eq!(seq.to_vec(), vec![0, 2, 4]);
    }

    #[test]
    fn test_struct_default_for_or_default() {
        let none = empty::<Reading>();
        assert_eq!(none.first_or_default(), Reading::default());
    }
}
