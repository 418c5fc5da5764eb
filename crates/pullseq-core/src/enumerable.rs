//! The pull-loop contract every source and operator honors.
//!
//! A terminal call drives the outermost enumeration, which drives every inner
//! one on the same call stack. There is no background execution and no
//! intermediate collection unless an operator's semantics require buffering.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

/// A lazy producer of `Item`s.
///
/// Invariants:
/// - `enumerate` invokes `yield_` once per element, in a defined order.
/// - After `yield_` returns `false` it is never invoked again during that pass;
///   the producer returns as soon as it can.
/// - Each call is a fresh pass. Implementations keep no state between passes
///   (channel-backed sources are the documented exception: they drain).
pub trait Enumerable {
    type Item;

    /// Run one pass, pushing elements into `yield_` until it returns `false`
    /// or the source is exhausted.
    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool);
}

/// Type-erased enumeration, used where operator chains must share one type.
pub type BoxedEnumerable<'a, T> = Box<dyn Enumerable<Item = T> + 'a>;

impl<E: Enumerable + ?Sized> Enumerable for &E {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).enumerate(yield_)
    }
}

impl<E: Enumerable + ?Sized> Enumerable for Box<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).enumerate(yield_)
    }
}

impl<E: Enumerable + ?Sized> Enumerable for Arc<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool) {
        (**self).enumerate(yield_)
    }
}

/// `None` is the absent enumeration: it produces nothing.
impl<E: Enumerable> Enumerable for Option<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool) {
        if let Some(inner) = self {
            inner.enumerate(yield_);
        }
    }
}

/// The canonical empty producer. Never invokes the consumer.
pub struct Empty<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Empty<T> {
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Empty<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> Copy for Empty<T> {}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Empty")
    }
}

impl<T> Enumerable for Empty<T> {
    type Item = T;

    fn enumerate(&self, _yield: &mut dyn FnMut(T) -> bool) {}
}

/// A possibly-absent enumeration.
///
/// Behaves exactly like `Option<E>`, but does not carry `Option`'s inherent
/// `map`/`filter`/`take` methods, so operator calls resolve to the sequence
/// operators instead.
#[derive(Debug, Clone, Default)]
pub struct OrEmpty<E>(Option<E>);

impl<E> OrEmpty<E> {
    pub fn new(inner: Option<E>) -> Self {
        Self(inner)
    }

    pub fn absent() -> Self {
        Self(None)
    }

    pub fn is_absent(&self) -> bool {
        self.0.is_none()
    }

    pub fn into_inner(self) -> Option<E> {
        self.0
    }
}

impl<E> From<Option<E>> for OrEmpty<E> {
    fn from(inner: Option<E>) -> Self {
        Self(inner)
    }
}

impl<E: Enumerable> Enumerable for OrEmpty<E> {
    type Item = E::Item;

    fn enumerate(&self, yield_: &mut dyn FnMut(Self::Item) -> bool) {
        self.0.enumerate(yield_)
    }
}
