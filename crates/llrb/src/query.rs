use std::cmp::Ordering;

use crate::node::Node;
use crate::tree::LlrbTree;

impl<K, V> LlrbTree<K, V> {
    pub fn min(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    pub fn max(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// The key of rank `k`, i.e. the `k`-th smallest key counting from zero.
    pub fn select(&self, mut k: usize) -> Option<&K> {
        if k >= self.len() {
            return None;
        }
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            let t = Node::size(&node.left);
            match k.cmp(&t) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => {
                    k -= t + 1;
                    cur = node.right.as_deref();
                }
                Ordering::Equal => return Some(&node.key),
            }
        }
        None
    }
}

impl<K: Ord, V> LlrbTree<K, V> {
    /// Number of keys strictly less than `key`.
    pub fn rank(&self, key: &K) -> usize {
        let mut rank = 0;
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => {
                    rank += 1 + Node::size(&node.left);
                    cur = node.right.as_deref();
                }
                Ordering::Equal => return rank + Node::size(&node.left),
            }
        }
        rank
    }

    /// Largest key less than or equal to `key`.
    pub fn floor(&self, key: &K) -> Option<&K> {
        let mut cur = self.root.as_deref();
        let mut candidate = None;
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Greater => {
                    candidate = Some(&node.key);
                    cur = node.right.as_deref();
                }
            }
        }
        candidate
    }

    /// Smallest key greater than or equal to `key`.
    pub fn ceiling(&self, key: &K) -> Option<&K> {
        let mut cur = self.root.as_deref();
        let mut candidate = None;
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.key),
                Ordering::Less => {
                    candidate = Some(&node.key);
                    cur = node.left.as_deref();
                }
            }
        }
        candidate
    }
}

#[cfg(test)]
mod tests {
    use crate::LlrbTree;

    fn evens(n: u32) -> LlrbTree<u32, u32> {
        (0..n).map(|i| (2 * i, i)).collect()
    }

    #[test]
    fn min_max_on_empty() {
        let tree: LlrbTree<u32, u32> = LlrbTree::new();
        assert_eq!(tree.min(), None);
        assert_eq!(tree.max(), None);
        assert_eq!(tree.select(0), None);
        assert_eq!(tree.rank(&5), 0);
        assert_eq!(tree.floor(&5), None);
        assert_eq!(tree.ceiling(&5), None);
    }

    #[test]
    fn rank_counts_strictly_smaller_keys() {
        let tree = evens(50);
        assert_eq!(tree.rank(&0), 0);
        assert_eq!(tree.rank(&1), 1);
        assert_eq!(tree.rank(&2), 1);
        assert_eq!(tree.rank(&3), 2);
        assert_eq!(tree.rank(&98), 49);
        assert_eq!(tree.rank(&99), 50);
        assert_eq!(tree.rank(&1000), 50);
    }

    #[test]
    fn select_inverts_rank() {
        let tree = evens(50);
        for k in 0..tree.len() {
            let key = tree.select(k).copied().unwrap();
            assert_eq!(key, 2 * k as u32);
            assert_eq!(tree.rank(&key), k);
        }
        assert_eq!(tree.select(50), None);
        assert_eq!(tree.select(usize::MAX), None);
    }

    #[test]
    fn floor_and_ceiling_between_keys() {
        let tree = evens(10);
        assert_eq!(tree.floor(&7), Some(&6));
        assert_eq!(tree.floor(&8), Some(&8));
        assert_eq!(tree.floor(&100), Some(&18));
        assert_eq!(tree.ceiling(&7), Some(&8));
        assert_eq!(tree.ceiling(&8), Some(&8));
        assert_eq!(tree.ceiling(&19), None);
    }

    #[test]
    fn floor_below_minimum_is_absent() {
        let tree: LlrbTree<i32, ()> = [(5, ()), (9, ())].into_iter().collect();
        assert_eq!(tree.floor(&4), None);
        assert_eq!(tree.ceiling(&10), None);
    }
}
