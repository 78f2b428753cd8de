use std::collections::BTreeMap;

use crate::OrderedSymbolTable;

/// `std::collections::BTreeMap` behind [`OrderedSymbolTable`], used as a
/// reference and a benchmark baseline. `rank` and `select` are linear here.
pub struct StdBTreeTable<K: Ord, V> {
    inner: BTreeMap<K, V>,
}

impl<K: Ord, V> StdBTreeTable<K, V> {
    pub fn into_inner(self) -> BTreeMap<K, V> {
        self.inner
    }
}

impl<K: Ord, V> OrderedSymbolTable for StdBTreeTable<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self {
            inner: BTreeMap::new(),
        }
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        self.inner.get(key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        self.inner.insert(key, value)
    }

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value> {
        self.inner.remove(key)
    }

    fn min(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.inner.first_key_value()
    }

    fn max(&self) -> Option<(&Self::Key, &Self::Value)> {
        self.inner.last_key_value()
    }

    fn floor(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.inner.range(..=key).next_back().map(|(k, _)| k)
    }

    fn ceiling(&self, key: &Self::Key) -> Option<&Self::Key> {
        self.inner.range(key..).next().map(|(k, _)| k)
    }

    fn rank(&self, key: &Self::Key) -> usize {
        self.inner.range(..key).count()
    }

    fn select(&self, k: usize) -> Option<&Self::Key> {
        self.inner.keys().nth(k)
    }
}
