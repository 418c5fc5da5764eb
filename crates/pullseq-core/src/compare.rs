//! Three-way comparer plugins and sort direction.
//!
//! Any `Fn(&T, &T) -> Ordering` is a comparer. Pre-built natural orders cover
//! the built-in scalar types; floats get their own total order.

use std::cmp::Ordering;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

/// Consistent, antisymmetric, transitive three-way comparison.
pub trait Comparer<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparer<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    #[default]
    Ascending,
    Descending,
}

impl Direction {
    pub fn apply(self, ord: Ordering) -> Ordering {
        match self {
            Direction::Ascending => ord,
            Direction::Descending => ord.reverse(),
        }
    }
}

/// Natural order for every `Ord` type: integers, `u8`, `char`, `bool`,
/// `String`/`str`, `SystemTime`, `Duration`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Natural;

impl<T: Ord + ?Sized> Comparer<T> for Natural {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Total order for floats: numbers by value, NaN after every number,
/// NaN equal to NaN.
#[derive(Debug, Clone, Copy, Default)]
pub struct FloatOrder;

macro_rules! float_order {
    ($t:ty) => {
        impl Comparer<$t> for FloatOrder {
            fn compare(&self, a: &$t, b: &$t) -> Ordering {
                match (a.is_nan(), b.is_nan()) {
                    (true, true) => Ordering::Equal,
                    (true, false) => Ordering::Greater,
                    (false, true) => Ordering::Less,
                    (false, false) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
                }
            }
        }
    };
}

float_order!(f32);
float_order!(f64);

/// Compares elements by an extracted key using an inner comparer.
pub struct KeyComparer<F, C, K> {
    selector: F,
    inner: C,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, C: Clone, K> Clone for KeyComparer<F, C, K> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            inner: self.inner.clone(),
            _key: PhantomData,
        }
    }
}

impl<T, K, F, C> Comparer<T> for KeyComparer<F, C, K>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.inner.compare(&(self.selector)(a), &(self.selector)(b))
    }
}

/// Order by `selector(x)` in the key's natural order.
pub fn by_key<T, K, F>(selector: F) -> KeyComparer<F, Natural, K>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    KeyComparer {
        selector,
        inner: Natural,
        _key: PhantomData,
    }
}

/// Order by `selector(x)` using an explicit key comparer.
pub fn by_key_with<T, K, F, C>(selector: F, inner: C) -> KeyComparer<F, C, K>
where
    F: Fn(&T) -> K,
    C: Comparer<K>,
{
    KeyComparer {
        selector,
        inner,
        _key: PhantomData,
    }
}

/// Flips another comparer.
#[derive(Debug, Clone, Copy, Default)]
pub struct Reverse<C>(pub C);

impl<T: ?Sized, C: Comparer<T>> Comparer<T> for Reverse<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(a, b).reverse()
    }
}

pub fn reverse<C>(inner: C) -> Reverse<C> {
    Reverse(inner)
}
