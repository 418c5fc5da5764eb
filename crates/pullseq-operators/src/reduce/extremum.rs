//! Min/max reducers over `ExtremumKey` keys.
//!
//! Ties keep the leftmost element. When a key reaches its type's floor (for
//! min) or ceiling (for max) nothing later can replace it, so the pass stops
//! there; the result is identical to a full traversal.

use std::cmp::Ordering;

use pullseq_core::{Enumerable, ExtremumKey};

fn extremum_by_key<E, K, F>(
    source: &E,
    selector: F,
    wanted: Ordering,
    is_bound: fn(&K) -> bool,
) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    F: Fn(&E::Item) -> K,
    K: ExtremumKey,
{
    let mut best: Option<(K, E::Item)> = None;
    source.enumerate(&mut |item| {
        let key = selector(&item);
        let better = match &best {
            None => true,
            Some((held, _)) => key.key_cmp(held) == wanted,
        };
        if better {
            let done = is_bound(&key);
            best = Some((key, item));
            return !done;
        }
        true
    });
    best.map(|(_, item)| item)
}

fn extremum<E>(source: &E, wanted: Ordering, is_bound: fn(&E::Item) -> bool) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    E::Item: ExtremumKey,
{
    let mut best: Option<E::Item> = None;
    source.enumerate(&mut |item| {
        let better = match &best {
            None => true,
            Some(held) => item.key_cmp(held) == wanted,
        };
        if better {
            let done = is_bound(&item);
            best = Some(item);
            return !done;
        }
        true
    });
    best
}

pub fn min<E>(source: &E) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    E::Item: ExtremumKey,
{
    extremum(source, Ordering::Less, <E::Item as ExtremumKey>::is_floor)
}

pub fn max<E>(source: &E) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    E::Item: ExtremumKey,
{
    extremum(source, Ordering::Greater, <E::Item as ExtremumKey>::is_ceiling)
}

/// Element with the smallest `selector` key.
pub fn min_by_key<E, K, F>(source: &E, selector: F) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    F: Fn(&E::Item) -> K,
    K: ExtremumKey,
{
    extremum_by_key(source, selector, Ordering::Less, K::is_floor)
}

/// Element with the largest `selector` key.
pub fn max_by_key<E, K, F>(source: &E, selector: F) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    F: Fn(&E::Item) -> K,
    K: ExtremumKey,
{
    extremum_by_key(source, selector, Ordering::Greater, K::is_ceiling)
}
