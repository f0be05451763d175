//! Order-preserving grouping by a derived key.
//!
//! Groups appear in the order their key was first seen, and members keep
//! their input order within each group.

use indexmap::IndexMap;
use std::hash::Hash;

/// Key to ordered-members mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping<K: Hash + Eq, V> {
    groups: IndexMap<K, Vec<V>>,
}

impl<K: Hash + Eq, V> Grouping<K, V> {
    pub fn new() -> Self {
        Self {
            groups: IndexMap::new(),
        }
    }

    /// Append `value` to the group for `key`, creating the group if needed.
    pub fn push(&mut self, key: K, value: V) {
        self.groups.entry(key).or_default().push(value);
    }

    /// Members of the group for `key`. Absent keys yield an empty slice.
    pub fn get(&self, key: &K) -> &[V] {
        self.groups.get(key).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.keys()
    }

    /// `(key, members)` pairs in first-seen key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &[V])> {
        self.groups.iter().map(|(k, v)| (k, v.as_slice()))
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Concatenate all groups, group by group.
    pub fn into_flattened(self) -> Vec<V> {
        self.groups.into_values().flatten().collect()
    }
}

impl<K: Hash + Eq, V: Clone> Grouping<K, V> {
    /// Cloning variant of [`Grouping::into_flattened`].
    pub fn flatten(&self) -> Vec<V> {
        self.groups.values().flatten().cloned().collect()
    }
}

impl<K: Hash + Eq, V> Default for Grouping<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for Grouping<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut grouping = Grouping::new();
        for (k, v) in iter {
            grouping.push(k, v);
        }
        grouping
    }
}

/// Bucket `items` by `key`, keeping first-seen group order and input order
/// within each group.
pub fn group_by<I, K, F>(items: I, mut key: F) -> Grouping<K, I::Item>
where
    I: IntoIterator,
    K: Hash + Eq,
    F: FnMut(&I::Item) -> K,
{
    items
        .into_iter()
        .map(|item| (key(&item), item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_seen_key_order() {
        let g = group_by(["b1", "a1", "b2", "c1", "a2"], |s| s.as_bytes()[0]);
        let keys: Vec<u8> = g.keys().copied().collect();
        assert_eq!(keys, vec![b'b', b'a', b'c']);
        assert_eq!(g.get(&b'b'), &["b1", "b2"]);
        assert_eq!(g.get(&b'a'), &["a1", "a2"]);
        assert_eq!(g.member_count(), 5);
    }

    #[test]
    fn test_absent_key_is_empty() {
        let g: Grouping<u8, &str> = group_by(["x"], |_| 1);
        assert!(g.get(&2).is_empty());
    }

    #[test]
    fn test_flatten_concatenates_groups() {
        let g = group_by(vec![1, 10, 2, 20, 3], |n| *n >= 10);
        assert_eq!(g.flatten(), vec![1, 2, 3, 10, 20]);
        assert_eq!(g.into_flattened(), vec![1, 2, 3, 10, 20]);
    }

    #[test]
    fn test_empty_input() {
        let g = group_by(Vec::<u32>::new(), |n| *n);
        assert!(g.is_empty());
        assert_eq!(g.len(), 0);
        assert!(g.flatten().is_empty());
    }
}
