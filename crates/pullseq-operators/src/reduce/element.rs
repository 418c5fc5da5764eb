//! Positional access: first, last, element-at, single.
//!
//! `Option`-returning forms are the "or-nil" variants and let callers tell an
//! empty source apart from one holding `T::default()`. The `_or_default` and
//! `_or` forms collapse that distinction on request.

use pullseq_core::{Enumerable, Error, Result};

/// First element; pulls exactly one.
pub fn first<E: Enumerable + ?Sized>(source: &E) -> Option<E::Item> {
    let mut found = None;
    source.enumerate(&mut |item| {
        found = Some(item);
        false
    });
    found
}

pub fn first_where<E, P>(source: &E, predicate: P) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut found = None;
    source.enumerate(&mut |item| {
        if predicate(&item) {
            found = Some(item);
            return false;
        }
        true
    });
    found
}

/// Last element; consumes the whole source.
pub fn last<E: Enumerable + ?Sized>(source: &E) -> Option<E::Item> {
    let mut found = None;
    source.enumerate(&mut |item| {
        found = Some(item);
        true
    });
    found
}

pub fn last_where<E, P>(source: &E, predicate: P) -> Option<E::Item>
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut found = None;
    source.enumerate(&mut |item| {
        if predicate(&item) {
            found = Some(item);
        }
        true
    });
    found
}

/// Zero-based positional access; stops at `index`.
pub fn element_at<E: Enumerable + ?Sized>(source: &E, index: usize) -> Option<E::Item> {
    let mut position = 0usize;
    let mut found = None;
    source.enumerate(&mut |item| {
        if position == index {
            found = Some(item);
            return false;
        }
        position += 1;
        true
    });
    found
}

/// The only element matching `predicate`. Stops as soon as a second match is
/// seen. `Ok(None)` when nothing matched.
pub fn single_where<E, P>(source: &E, predicate: P) -> Result<Option<E::Item>>
where
    E: Enumerable + ?Sized,
    P: Fn(&E::Item) -> bool,
{
    let mut found = None;
    let mut duplicate = false;
    source.enumerate(&mut |item| {
        if !predicate(&item) {
            return true;
        }
        if found.is_some() {
            duplicate = true;
            return false;
        }
        found = Some(item);
        true
    });
    if duplicate {
        return Err(Error::MoreThanOne);
    }
    Ok(found)
}

/// The only element. `Error::Empty` or `Error::MoreThanOne` otherwise.
pub fn single<E: Enumerable + ?Sized>(source: &E) -> Result<E::Item> {
    single_where(source, |_| true)?.ok_or(Error::Empty)
}
