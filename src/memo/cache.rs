// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Append-only memo table.

use std::collections::HashMap;
use std::hash::Hash;

/// A mapping from a canonical key to a computed value.
///
/// Entries are never evicted or overwritten: a value computed once for a key
/// is the value for that key for the lifetime of the table. Callers are
/// responsible for canonicalizing keys before lookup.
///
/// # Example
///
/// ```
/// use prime_pair_search::memo::Memo;
///
/// let mut squares: Memo<u64, u64> = Memo::new();
/// assert_eq!(squares.get_or_insert_with(7, |n| n * n), 49);
/// assert_eq!(squares.get_or_insert_with(7, |_| unreachable!()), 49);
/// assert_eq!((squares.hits(), squares.misses()), (1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct Memo<K, V> {
    table: HashMap<K, V>,
    hits: u64,
    misses: u64,
}

impl<K: Eq + Hash + Copy, V: Copy> Memo<K, V> {
    pub fn new() -> Self {
        Self {
            table: HashMap::new(),
            hits: 0,
            misses: 0,
        }
    }

    /// Cached value for `key`, if any. Does not count as a hit or miss.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.table.get(key).copied()
    }

    /// Look up `key`, computing and storing the value on a miss.
    pub fn get_or_insert_with(&mut self, key: K, compute: impl FnOnce(K) -> V) -> V {
        if let Some(&value) = self.table.get(&key) {
            self.hits += 1;
            return value;
        }
        self.misses += 1;
        let value = compute(key);
        self.table.insert(key, value);
        value
    }

    /// Store a value computed outside the table.
    ///
    /// Used when the computation itself needs mutable access to other caches.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        self.misses += 1;
        self.table.insert(key, value);
    }

    /// Count a lookup answered by [`Memo::peek`].
    pub(crate) fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}

impl<K: Eq + Hash + Copy, V: Copy> Default for Memo<K, V> {
    fn default() -> Self {
        Self::new()
    }
}
