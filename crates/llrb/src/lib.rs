mod integrity;
mod iter;
mod node;
mod query;
mod render;
mod std_btree;
mod tree;

pub use integrity::IntegrityError;
pub use iter::{IntoIter, Iter, Order, PreOrder};
pub use node::Color;
pub use std_btree::StdBTreeTable;
pub use tree::LlrbTree;

/// Ordered symbol table interface.
///
/// - Keys are unique.
/// - `insert` overwrites the existing value and returns the old one.
/// - `rank(key)` counts keys strictly less than `key`; `select(k)` is the key
///   of rank `k`, or `None` when `k >= len()`.
/// - `floor`/`ceiling` return the largest key `<= key` / smallest key `>= key`.
pub trait OrderedSymbolTable {
    type Key: Ord;
    type Value;

    fn new() -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value>;

    fn contains_key(&self, key: &Self::Key) -> bool {
        self.get(key).is_some()
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value>;

    fn remove(&mut self, key: &Self::Key) -> Option<Self::Value>;

    fn min(&self) -> Option<(&Self::Key, &Self::Value)>;

    fn max(&self) -> Option<(&Self::Key, &Self::Value)>;

    fn floor(&self, key: &Self::Key) -> Option<&Self::Key>;

    fn ceiling(&self, key: &Self::Key) -> Option<&Self::Key>;

    fn rank(&self, key: &Self::Key) -> usize;

    fn select(&self, k: usize) -> Option<&Self::Key>;
}

impl<K: Ord, V> OrderedSymbolTable for LlrbTree<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        LlrbTree::new()
    }

    fn len(&self) -> usize {
        LlrbTree::len(self)
    }

    fn get(&self, key: &K) -> Option<&V> {
        LlrbTree::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LlrbTree::insert(self, key, value)
    }

    fn remove(&mut self, key: &K) -> Option<V> {
        LlrbTree::remove(self, key)
    }

    fn min(&self) -> Option<(&K, &V)> {
        LlrbTree::min(self)
    }

    fn max(&self) -> Option<(&K, &V)> {
        LlrbTree::max(self)
    }

    fn floor(&self, key: &K) -> Option<&K> {
        LlrbTree::floor(self, key)
    }

    fn ceiling(&self, key: &K) -> Option<&K> {
        LlrbTree::ceiling(self, key)
    }

    fn rank(&self, key: &K) -> usize {
        LlrbTree::rank(self, key)
    }

    fn select(&self, k: usize) -> Option<&K> {
        LlrbTree::select(self, k)
    }
}
