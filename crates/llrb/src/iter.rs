use std::iter::FusedIterator;

use crate::node::{Link, Node};
use crate::tree::LlrbTree;

/// Visiting order for [`LlrbTree::traverse`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    PreOrder,
    InOrder,
    PostOrder,
}

/// Ascending in-order iterator over `(&K, &V)`.
///
/// Holds the path of nodes whose left subtree has been entered but whose own
/// entry has not been yielded yet.
pub struct Iter<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn new(root: &'a Link<K, V>) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: Node::size(root),
        };
        iter.push_left_spine(root.as_deref());
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<K, V>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// Pre-order iterator: each node before its left subtree, then its right.
pub struct PreOrder<'a, K, V> {
    stack: Vec<&'a Node<K, V>>,
}

impl<'a, K, V> Iterator for PreOrder<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Some(right) = node.right.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            self.stack.push(left);
        }
        Some((&node.key, &node.value))
    }
}

impl<K, V> FusedIterator for PreOrder<'_, K, V> {}

/// Owning ascending iterator, consuming the tree.
pub struct IntoIter<K, V> {
    stack: Vec<Box<Node<K, V>>>,
    remaining: usize,
}

impl<K, V> IntoIter<K, V> {
    fn push_left_spine(&mut self, mut node: Link<K, V>) {
        while let Some(mut n) = node {
            node = n.left.take();
            self.stack.push(n);
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;
        self.push_left_spine(node.right.take());
        self.remaining -= 1;
        let Node { key, value, .. } = *node;
        Some((key, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

impl<K, V> LlrbTree<K, V> {
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(&self.root)
    }

    pub fn pre_order(&self) -> PreOrder<'_, K, V> {
        PreOrder {
            stack: self.root.as_deref().into_iter().collect(),
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.iter().map(|(_, v)| v)
    }

    /// Calls `f` on every entry in the given order.
    pub fn traverse<F: FnMut(&K, &V)>(&self, order: Order, mut f: F) {
        fn walk<K, V, F: FnMut(&K, &V)>(node: &Link<K, V>, order: Order, f: &mut F) {
            let Some(n) = node else {
                return;
            };
            if order == Order::PreOrder {
                f(&n.key, &n.value);
            }
            walk(&n.left, order, f);
            if order == Order::InOrder {
                f(&n.key, &n.value);
            }
            walk(&n.right, order, f);
            if order == Order::PostOrder {
                f(&n.key, &n.value);
            }
        }
        walk(&self.root, order, &mut f);
    }
}

impl<'a, K, V> IntoIterator for &'a LlrbTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for LlrbTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let root = self.root.take();
        let mut iter = IntoIter {
            stack: Vec::new(),
            remaining: Node::size(&root),
        };
        iter.push_left_spine(root);
        iter
    }
}

#[cfg(test)]
mod tests {
    use crate::{LlrbTree, Order};

    fn sample() -> LlrbTree<u32, char> {
        [(4, 'd'), (2, 'b'), (6, 'f'), (1, 'a'), (3, 'c'), (5, 'e'), (7, 'g')]
            .into_iter()
            .collect()
    }

    #[test]
    fn iter_is_ascending_and_exact() {
        let tree = sample();
        let iter = tree.iter();
        assert_eq!(iter.len(), 7);
        let pairs: Vec<(u32, char)> = iter.map(|(k, v)| (*k, *v)).collect();
        assert_eq!(
            pairs,
            vec![(1, 'a'), (2, 'b'), (3, 'c'), (4, 'd'), (5, 'e'), (6, 'f'), (7, 'g')]
        );
    }

    #[test]
    fn iter_leaves_tree_intact() {
        let tree = sample();
        let first: Vec<u32> = tree.keys().copied().collect();
        let second: Vec<u32> = tree.keys().copied().collect();
        assert_eq!(first, second);
        tree.check_integrity().unwrap();
    }

    #[test]
    fn iter_on_empty_tree() {
        let tree: LlrbTree<u32, u32> = LlrbTree::new();
        assert_eq!(tree.iter().next(), None);
        assert_eq!(tree.pre_order().next(), None);
        assert_eq!(tree.into_iter().next(), None);
    }

    #[test]
    fn pre_order_matches_traverse() {
        let tree: LlrbTree<u32, u32> = (0..40).map(|k| (k, k)).collect();
        let lazy: Vec<u32> = tree.pre_order().map(|(k, _)| *k).collect();
        let mut eager = Vec::new();
        tree.traverse(Order::PreOrder, |k, _| eager.push(*k));
        assert_eq!(lazy, eager);
        assert_eq!(lazy.len(), 40);
        assert_eq!(lazy.first(), tree.root.as_ref().map(|n| &n.key));
    }

    #[test]
    fn traverse_orders_on_small_tree() {
        // Inserting 1, 2, 3 yields 2 at the root with two black children.
        let tree: LlrbTree<u32, ()> = [(1, ()), (2, ()), (3, ())].into_iter().collect();
        let mut pre = Vec::new();
        let mut ino = Vec::new();
        let mut post = Vec::new();
        tree.traverse(Order::PreOrder, |k, _| pre.push(*k));
        tree.traverse(Order::InOrder, |k, _| ino.push(*k));
        tree.traverse(Order::PostOrder, |k, _| post.push(*k));
        assert_eq!(pre, vec![2, 1, 3]);
        assert_eq!(ino, vec![1, 2, 3]);
        assert_eq!(post, vec![1, 3, 2]);
    }

    #[test]
    fn into_iter_consumes_in_order() {
        let tree = sample();
        let iter = tree.into_iter();
        assert_eq!(iter.size_hint(), (7, Some(7)));
        let keys: Vec<u32> = iter.map(|(k, _)| k).collect();
        assert_eq!(keys, (1..=7).collect::<Vec<_>>());
    }

    #[test]
    fn borrowed_into_iterator_in_for_loop() {
        let tree = sample();
        let mut count = 0;
        for (k, v) in &tree {
            assert_eq!(*v, (b'a' + (*k as u8) - 1) as char);
            count += 1;
        }
        assert_eq!(count, 7);
    }
}
