//! Equality + hash-code plugins consumed by dedup and set operators.
//!
//! Contract: `equals(a, b)` implies `hash_code(a) == hash_code(b)`. Breaking it
//! silently corrupts set results; nothing here can detect it.

use std::hash::Hash;
use std::marker::PhantomData;

use crate::hash::hash_code;

pub trait EqualityComparer<T: ?Sized> {
    fn equals(&self, a: &T, b: &T) -> bool;
    fn hash_code(&self, value: &T) -> u64;
}

/// `Eq` + structural `Hash`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEquality;

impl<T: Eq + Hash + ?Sized> EqualityComparer<T> for DefaultEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash_code(&self, value: &T) -> u64 {
        hash_code(value)
    }
}

/// Equality assembled from two caller closures.
#[derive(Clone)]
pub struct FnEquality<E, H> {
    eq: E,
    hash: H,
}

pub fn equality_from_fns<T, E, H>(eq: E, hash: H) -> FnEquality<E, H>
where
    T: ?Sized,
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    FnEquality { eq, hash }
}

impl<T: ?Sized, E, H> EqualityComparer<T> for FnEquality<E, H>
where
    E: Fn(&T, &T) -> bool,
    H: Fn(&T) -> u64,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.eq)(a, b)
    }

    fn hash_code(&self, value: &T) -> u64 {
        (self.hash)(value)
    }
}

/// Two elements are equal when their selected keys are.
pub struct KeyEquality<F, K> {
    selector: F,
    _key: PhantomData<fn() -> K>,
}

impl<F: Clone, K> Clone for KeyEquality<F, K> {
    fn clone(&self) -> Self {
        Self {
            selector: self.selector.clone(),
            _key: PhantomData,
        }
    }
}

pub fn key_equality<T, K, F>(selector: F) -> KeyEquality<F, K>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    KeyEquality {
        selector,
        _key: PhantomData,
    }
}

impl<T, K, F> EqualityComparer<T> for KeyEquality<F, K>
where
    F: Fn(&T) -> K,
    K: Eq + Hash,
{
    fn equals(&self, a: &T, b: &T) -> bool {
        (self.selector)(a) == (self.selector)(b)
    }

    fn hash_code(&self, value: &T) -> u64 {
        hash_code(&(self.selector)(value))
    }
}
