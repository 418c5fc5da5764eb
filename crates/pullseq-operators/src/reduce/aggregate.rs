//! Counting, summing, folding and quantifiers.

use std::ops::Add;

use pullseq_core::{EqualityComparer, Enumerable};

pub fn count<E: Enumerable + ?Sized>(source: &E) -> usize {
    let mut n = 0usize;
    source.enumerate(&mut |_| {
        n += 1;
        true
    });
    n
}

pub fn count_where<E, P>(source: &E, predicate: P) -> usize
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut n = 0usize;
    source.enumerate(&mut |item| {
        if predicate(&item) {
            n += 1;
        }
        true
    });
    n
}

pub fn sum_by<E, F, N>(source: &E, selector: F) -> N
where
    E: Enumerable + ?Sized,
    F: Fn(E::Item) -> N,
    N: Default + Add<Output = N>,
{
    let mut total = Some(N::default());
    source.enumerate(&mut |item| {
        let value = selector(item);
        total = total.take().map(|t| t + value);
        true
    });
    total.unwrap_or_default()
}

/// Arithmetic mean of the selected values; `None` for an empty source.
pub fn average_by<E, F>(source: &E, selector: F) -> Option<f64>
where
    E: Enumerable + ?Sized,
    F: Fn(E::Item) -> f64,
{
    let mut sum = 0.0f64;
    let mut n = 0u64;
    source.enumerate(&mut |item| {
        sum += selector(item);
        n += 1;
        true
    });
    (n > 0).then(|| sum / n as f64)
}

/// Seeded left fold.
pub fn fold<E, A, F>(source: &E, init: A, folder: F) -> A
where
    E: Enumerable + ?Sized,
    F: Fn(A, E::Item) -> A,
{
    let mut acc = Some(init);
    source.enumerate(&mut |item| {
        acc = acc.take().map(|a| folder(a, item));
        true
    });
    acc.unwrap_or_else(|| unreachable!("fold accumulator is restored after every element"))
}

/// Unseeded fold: `None` when the source is empty.
pub fn reduce<E, F>(source: &E, folder: F) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    F: Fn(E::Item, E::Item) -> E::Item,
{
    let mut acc: Option<E::Item> = None;
    source.enumerate(&mut |item| {
        acc = Some(match acc.take() {
            None => item,
            Some(a) => folder(a, item),
        });
        true
    });
    acc
}

/// True if the source has at least one element. Pulls at most one.
pub fn any<E: Enumerable + ?Sized>(source: &E) -> bool {
    let mut found = false;
    source.enumerate(&mut |_| {
        found = true;
        false
    });
    found
}

pub fn any_where<E, P>(source: &E, predicate: P) -> bool
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut found = false;
    source.enumerate(&mut |item| {
        found = predicate(&item);
        !found
    });
    found
}

/// True if every element matches (vacuously true when empty). Stops at the
/// first failure.
pub fn all<E, P>(source: &E, predicate: P) -> bool
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut ok = true;
    source.enumerate(&mut |item| {
        ok = predicate(&item);
        ok
    });
    ok
}

pub fn contains_with<E, C>(source: &E, value: &E::Item, comparer: &C) -> bool
where
    E: Enumerable + ?Sized,
    C: EqualityComparer<E::Item> + ?Sized,
{
    any_where(source, |item| comparer.equals(item, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullseq_core::prelude::*;

    #[test]
    fn test_count_and_sum() {
        let seq = from_vec(vec![1, 2, 3, 4]);
        assert_eq!(count(&seq), 4);
        assert_eq!(count_where(&seq, |x| *x > 2), 2);
        assert_eq!(sum_by(&seq, |x| x * 10), 100);
        assert_eq!(sum_by(&empty::<i32>(), |x| x), 0);
    }

    #[test]
    fn test_average() {
        assert_eq!(average_by(&from_vec(vec![1, 2, 3, 6]), |x| x as f64), Some(3.0));
        assert_eq!(average_by(&empty::<i32>(), |x| x as f64), None);
    }

    #[test]
    fn test_fold_and_reduce() {
        let seq = from_vec(vec!["a", "b", "c"]);
        assert_eq!(fold(&seq, String::new(), |acc, s| acc + s), "abc");
        assert_eq!(reduce(&range(1, 4), |a, b| a * b), Some(6));
        assert_eq!(reduce(&empty::<i64>(), |a, b| a + b), None);
    }

    #[test]
    fn test_quantifiers_on_empty() {
        let none = empty::<i32>();
        assert!(!any(&none));
        assert!(!any_where(&none, |_| true));
        assert!(all(&none, |_| false));
    }

    #[test]
    fn test_contains_with() {
        let seq = from_vec(vec![1, 2, 3]);
        assert!(contains_with(&seq, &2, &DefaultEquality));
        assert!(!contains_with(&seq, &5, &DefaultEquality));
    }
}
