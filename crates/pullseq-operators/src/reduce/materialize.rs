//! Materializers: collect a pass into a concrete collection.

use std::collections::HashMap;
use std::hash::Hash;

use pullseq_core::Enumerable;

pub fn to_vec<E: Enumerable + ?Sized>(source: &E) -> Vec<E::Item> {
    let mut out = Vec::new();
    source.enumerate(&mut |item| {
        out.push(item);
        true
    });
    out
}

/// Build a map from each element. A later element with an already-seen key
/// overwrites the earlier entry.
pub fn to_map<E, K, V, KF, VF>(source: &E, key: KF, value: VF) -> HashMap<K, V>
where
    E: Enumerable + ?Sized,
    K: Eq + Hash,
    KF: Fn(&E::Item) -> K,
    VF: Fn(E::Item) -> V,
{
    let mut out = HashMap::new();
    source.enumerate(&mut |item| {
        out.insert(key(&item), value(item));
        true
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullseq_core::prelude::*;

    #[test]
    fn test_round_trip() {
        let data = vec![3, 1, 2];
        assert_eq!(to_vec(&from_slice(&data)), data);
    }

    #[test]
    fn test_to_map_last_wins() {
        let seq = from_vec(vec![("a", 1), ("b", 2), ("a", 3)]);
        let map = to_map(&seq, |p| p.0, |p| p.1);
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"], 3);
        assert_eq!(map["b"], 2);
    }

    #[test]
    fn test_absent_materializes_empty() {
        let none: Option<pullseq_core::source::FromVec<(i32, i32)>> = None;
        assert!(to_vec(&none).is_empty());
        assert!(to_map(&none, |p| p.0, |p| p.1).is_empty());
    }
}
