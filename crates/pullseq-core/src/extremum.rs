//! Natural key order for min/max-by-key reducers, with domain bounds.
//!
//! When a key type has a smallest (floor) or largest (ceiling) possible value,
//! a reducer that observes it can stop pulling: nothing later can beat it.

use std::cmp::Ordering;
use std::time::Duration;

use crate::compare::{Comparer, FloatOrder};

pub trait ExtremumKey {
    /// Natural order of the key type.
    fn key_cmp(&self, other: &Self) -> Ordering;

    /// True when no value of this type orders strictly before `self`.
    fn is_floor(&self) -> bool {
        false
    }

    /// True when no value of this type orders strictly after `self`.
    fn is_ceiling(&self) -> bool {
        false
    }
}

macro_rules! bounded_int_key {
    ($($t:ty),*) => {
        $(
            impl ExtremumKey for $t {
                fn key_cmp(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
                fn is_floor(&self) -> bool {
                    *self == <$t>::MIN
                }
                fn is_ceiling(&self) -> bool {
                    *self == <$t>::MAX
                }
            }
        )*
    };
}

bounded_int_key!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl ExtremumKey for bool {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    fn is_floor(&self) -> bool {
        !*self
    }
    fn is_ceiling(&self) -> bool {
        *self
    }
}

impl ExtremumKey for char {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    fn is_floor(&self) -> bool {
        *self == '\0'
    }
    fn is_ceiling(&self) -> bool {
        *self == char::MAX
    }
}

impl ExtremumKey for String {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    fn is_floor(&self) -> bool {
        self.is_empty()
    }
}

impl ExtremumKey for &str {
    fn key_cmp(&self, other: &Self) -> Ordering {
        (*self).cmp(*other)
    }
    fn is_floor(&self) -> bool {
        self.is_empty()
    }
}

impl ExtremumKey for Duration {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
    fn is_floor(&self) -> bool {
        self.is_zero()
    }
    fn is_ceiling(&self) -> bool {
        *self == Duration::MAX
    }
}

impl ExtremumKey for std::time::SystemTime {
    fn key_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

// Floats never short-circuit: -inf is not a floor once NaN ordering is involved.
impl ExtremumKey for f32 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        FloatOrder.compare(self, other)
    }
}

impl ExtremumKey for f64 {
    fn key_cmp(&self, other: &Self) -> Ordering {
        FloatOrder.compare(self, other)
    }
}
