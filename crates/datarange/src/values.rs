//! Collaborator contracts for tabular and keyed data
//!
//! This module defines the read-only views the aggregation functions in
//! [`crate::stats`] consume: a two-dimensional numeric table and an ordered
//! keyed numeric sequence. Hosting programs supply the table implementation;
//! [`KeyedList`] is provided as the crate's own ordered keyed sequence and
//! serves as the output type for cumulative percentages.
//!
//! An absent value (`None`) represents a missing cell, which aggregation
//! treats as skipped rather than zero.

/// Read-only view of a two-dimensional numeric table
///
/// Indices are zero-based; callers must keep `row < row_count()` and
/// `column < column_count()`.
pub trait TableSource {
    /// Number of rows in the table
    fn row_count(&self) -> usize;

    /// Number of columns in the table
    fn column_count(&self) -> usize;

    /// Value at the given cell, or `None` for a missing cell
    fn cell(&self, row: usize, column: usize) -> Option<f64>;
}

/// Read-only view of an ordered sequence of `(key, value)` pairs
///
/// Keys are opaque labels carried through to output pairs; no ordering or
/// comparability is required of them. The sequence order is the iteration
/// order, addressed by index `0..item_count()`.
pub trait KeyedSource {
    /// Key type used to label entries
    type Key: Clone;

    /// Number of entries in the sequence
    fn item_count(&self) -> usize;

    /// Key at the given position
    fn key_at(&self, index: usize) -> Self::Key;

    /// Value at the given position, or `None` for a missing value
    fn value_at(&self, index: usize) -> Option<f64>;
}

/// Ordered keyed sequence backed by an insertion-ordered list
///
/// The default [`KeyedSource`] implementation, and the concrete output type
/// of [`crate::stats::cumulative_percentages`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyedList<K> {
    entries: Vec<(K, Option<f64>)>,
}

impl<K: Clone> KeyedList<K> {
    /// Create an empty list
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Create an empty list with room for `capacity` entries
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append an entry, preserving insertion order
    pub fn push(&mut self, key: K, value: Option<f64>) {
        self.entries.push((key, value));
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &(K, Option<f64>)> {
        self.entries.iter()
    }

    /// Value stored under the first entry matching `key`
    ///
    /// Returns `None` both for an unknown key and for a present key with a
    /// missing value.
    pub fn value_for(&self, key: &K) -> Option<f64>
    where
        K: PartialEq,
    {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .and_then(|(_, v)| *v)
    }
}

impl<K: Clone> KeyedSource for KeyedList<K> {
    type Key = K;

    fn item_count(&self) -> usize {
        self.entries.len()
    }

    fn key_at(&self, index: usize) -> K {
        self.entries[index].0.clone()
    }

    fn value_at(&self, index: usize) -> Option<f64> {
        self.entries[index].1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyed_list_preserves_insertion_order() {
        let mut list = KeyedList::new();
        list.push("b", Some(2.0));
        list.push("a", Some(1.0));
        list.push("c", None);

        assert_eq!(list.item_count(), 3);
        assert_eq!(list.key_at(0), "b");
        assert_eq!(list.key_at(1), "a");
        assert_eq!(list.key_at(2), "c");
        assert_eq!(list.value_at(0), Some(2.0));
        assert_eq!(list.value_at(2), None);
    }

    #[test]
    fn test_value_for_lookup() {
        let mut list = KeyedList::new();
        list.push("a", Some(1.0));
        list.push("b", None);

        assert_eq!(list.value_for(&"a"), Some(1.0));
        assert_eq!(list.value_for(&"b"), None);
        assert_eq!(list.value_for(&"missing"), None);
    }

    #[test]
    fn test_empty_list() {
        let list: KeyedList<&str> = KeyedList::new();
        assert!(list.is_empty());
        assert_eq!(list.item_count(), 0);
    }
}
