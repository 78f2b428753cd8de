use std::cmp::Ordering;
use std::fmt;

use log::trace;

use crate::node::{Color, Link, Node};

/// Ordered symbol table backed by a left-leaning red-black tree.
///
/// The tree is the binary encoding of a 2-3 tree: a red link glues a node to
/// its parent into a 3-node. Red links always lean left, never appear twice in
/// a row, and every path from the root to an empty link crosses the same
/// number of black links, which bounds the height by `2 * log2(n + 1)`.
///
/// Every node also records the size of its subtree, so `rank` and `select`
/// run in logarithmic time.
#[derive(Clone)]
pub struct LlrbTree<K, V> {
    pub(crate) root: Link<K, V>,
}

impl<K, V> LlrbTree<K, V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Number of nodes on the longest root-to-leaf path; `0` when empty.
    pub fn height(&self) -> usize {
        fn height<K, V>(node: &Link<K, V>) -> usize {
            match node {
                Some(n) => 1 + height(&n.left).max(height(&n.right)),
                None => 0,
            }
        }
        height(&self.root)
    }

    /// Color of the root link, `None` when the tree is empty.
    pub fn root_color(&self) -> Option<Color> {
        self.root.as_ref().map(|n| n.color)
    }

    fn blacken_root(&mut self) {
        if let Some(r) = self.root.as_deref_mut() {
            r.color = Color::Black;
        }
    }
}

impl<K: Ord, V> LlrbTree<K, V> {
    pub fn get(&self, key: &K) -> Option<&V> {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref(),
                Ordering::Greater => cur = node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            }
        }
        None
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let mut cur = self.root.as_deref_mut();
        while let Some(node) = cur {
            match key.cmp(&node.key) {
                Ordering::Less => cur = node.left.as_deref_mut(),
                Ordering::Greater => cur = node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            }
        }
        None
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old) = Self::insert_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        self.verify();
        old
    }

    fn insert_node(h: Link<K, V>, key: K, value: V) -> (Box<Node<K, V>>, Option<V>) {
        let Some(mut h) = h else {
            return (Box::new(Node::new(key, value)), None);
        };

        let old = match key.cmp(&h.key) {
            Ordering::Less => {
                let (left, old) = Self::insert_node(h.left.take(), key, value);
                h.left = Some(left);
                old
            }
            Ordering::Greater => {
                let (right, old) = Self::insert_node(h.right.take(), key, value);
                h.right = Some(right);
                old
            }
            Ordering::Equal => Some(std::mem::replace(&mut h.value, value)),
        };

        (h.fix_up(), old)
    }

    /// Removes `key`, returning its value. Absent keys leave the tree untouched.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        if !self.contains_key(key) {
            return None;
        }
        let mut root = self.root.take()?;
        if !Node::is_red(&root.left) && !Node::is_red(&root.right) {
            root.color = Color::Red;
        }

        let (root, removed) = Self::remove_node(root, key);
        self.root = root;
        self.blacken_root();
        trace!("removed entry, {} remaining", self.len());
        self.verify();
        removed
    }

    fn remove_node(mut h: Box<Node<K, V>>, key: &K) -> (Link<K, V>, Option<V>) {
        let removed = if key < &h.key {
            if h.left.is_none() {
                return (Some(h), None);
            }
            if !Node::is_red(&h.left) && !h.left_left_is_red() {
                h = h.move_red_left();
            }
            match h.left.take() {
                Some(left) => {
                    let (left, removed) = Self::remove_node(left, key);
                    h.left = left;
                    removed
                }
                None => None,
            }
        } else {
            if Node::is_red(&h.left) {
                h = h.rotate_right();
            }
            if key == &h.key && h.right.is_none() {
                return (None, Some(h.value));
            }
            if h.right.is_some() && !Node::is_red(&h.right) && !h.right_left_is_red() {
                h = h.move_red_right();
            }

            match h.right.take() {
                Some(right) if key == &h.key => {
                    let (right, successor) = right.delete_min();
                    h.right = right;
                    let Node { key, value, .. } = *successor;
                    h.key = key;
                    Some(std::mem::replace(&mut h.value, value))
                }
                Some(right) => {
                    let (right, removed) = Self::remove_node(right, key);
                    h.right = right;
                    removed
                }
                None => None,
            }
        };

        (Some(h.balance()), removed)
    }

    pub fn delete_min(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !Node::is_red(&root.left) && !Node::is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, min) = root.delete_min();
        self.root = root;
        self.blacken_root();
        trace!("deleted minimum entry, {} remaining", self.len());
        self.verify();
        let Node { key, value, .. } = *min;
        Some((key, value))
    }

    pub fn delete_max(&mut self) -> Option<(K, V)> {
        let mut root = self.root.take()?;
        if !Node::is_red(&root.left) && !Node::is_red(&root.right) {
            root.color = Color::Red;
        }
        let (root, max) = root.delete_max();
        self.root = root;
        self.blacken_root();
        trace!("deleted maximum entry, {} remaining", self.len());
        self.verify();
        let Node { key, value, .. } = *max;
        Some((key, value))
    }

    #[inline]
    fn verify(&self) {
        #[cfg(feature = "verify")]
        {
            log::debug!("verifying tree of {} entries", self.len());
            if let Err(err) = self.check_integrity() {
                panic!("llrb invariant violated: {err}");
            }
        }
    }
}

impl<K, V> Default for LlrbTree<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for LlrbTree<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LlrbTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V> Extend<(K, V)> for LlrbTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}
