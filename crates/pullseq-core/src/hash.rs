//! Stable hashing helpers for equality plugins and set operators.
//!
//! Hash codes come from blake3 so they are identical across runs and
//! platforms. Composite types hash structurally through `std::hash::Hash`;
//! there is no string-formatting fallback.

use std::hash::{Hash, Hasher};

/// A `Hasher` that feeds every write into blake3 and folds the digest to u64.
#[derive(Clone, Default)]
pub struct StableHasher {
    inner: blake3::Hasher,
}

impl StableHasher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Hasher for StableHasher {
    fn write(&mut self, bytes: &[u8]) {
        self.inner.update(bytes);
    }

    fn finish(&self) -> u64 {
        digest_to_u64(&self.inner.finalize())
    }
}

fn digest_to_u64(hash: &blake3::Hash) -> u64 {
    let mut head = [0u8; 8];
    head.copy_from_slice(&hash.as_bytes()[..8]);
    u64::from_le_bytes(head)
}

/// Structural hash code of any `Hash` value.
pub fn hash_code<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut h = StableHasher::new();
    value.hash(&mut h);
    h.finish()
}

pub fn hash_bytes(bytes: &[u8]) -> u64 {
    digest_to_u64(&blake3::hash(bytes))
}

pub fn hash_str(s: &str) -> u64 {
    hash_bytes(s.as_bytes())
}

/// Fold two hash codes into one, order-sensitive.
pub fn combine_hash_codes(seed: u64, next: u64) -> u64 {
    // boost::hash_combine mixing constant
    seed ^ next
        .wrapping_add(0x9e37_79b9_7f4a_7c15)
        .wrapping_add(seed << 6)
        .wrapping_add(seed >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Hash)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_hash_code_is_deterministic() {
        assert_eq!(hash_code(&42u64), hash_code(&42u64));
        assert_eq!(hash_code("abc"), hash_code(&"abc".to_string()));
        assert_ne!(hash_code(&1i32), hash_code(&2i32));
    }

    #[test]
    fn test_structural_hash() {
        assert_eq!(
            hash_code(&Point { x: 1, y: 2 }),
            hash_code(&Point { x: 1, y: 2 })
        );
        assert_ne!(
            hash_code(&Point { x: 1, y: 2 }),
            hash_code(&Point { x: 2, y: 1 })
        );
    }

    #[test]
    fn test_combine_is_order_sensitive() {
        let a = hash_str("a");
        let b = hash_str("b");
        assert_ne!(combine_hash_codes(a, b), combine_hash_codes(b, a));
    }
}
