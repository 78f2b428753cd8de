//! Structural invariant checks.
//!
//! These predicates walk the whole tree and are meant for tests and the
//! `verify` feature, not for regular operation.

use thiserror::Error;

use crate::node::{Color, Link, Node};
use crate::tree::LlrbTree;

/// A violated tree invariant. Any of these indicates a bug in the balancing
/// code, never a problem with the caller's input.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum IntegrityError {
    #[error("tree is not in symmetric order")]
    NotSymmetric,
    #[error("subtree sizes are not consistent")]
    InconsistentSize,
    #[error("tree is not a 2-3 tree")]
    Not23,
    #[error("tree is not black-balanced")]
    Unbalanced,
    #[error("root link is red")]
    RedRoot,
}

impl<K: Ord, V> LlrbTree<K, V> {
    /// Runs every invariant check, reporting the first one that fails.
    pub fn check_integrity(&self) -> Result<(), IntegrityError> {
        if !self.is_bst() {
            return Err(IntegrityError::NotSymmetric);
        }
        if !self.is_size_consistent() {
            return Err(IntegrityError::InconsistentSize);
        }
        if !self.is_23() {
            return Err(IntegrityError::Not23);
        }
        if !self.is_balanced() {
            return Err(IntegrityError::Unbalanced);
        }
        if self.root_color() == Some(Color::Red) {
            return Err(IntegrityError::RedRoot);
        }
        Ok(())
    }

    /// Symmetric order, checked by narrowing the open key range on descent.
    pub fn is_bst(&self) -> bool {
        fn check<K: Ord, V>(node: &Link<K, V>, min: Option<&K>, max: Option<&K>) -> bool {
            let Some(n) = node else {
                return true;
            };
            if min.is_some_and(|min| n.key <= *min) || max.is_some_and(|max| n.key >= *max) {
                return false;
            }
            check(&n.left, min, Some(&n.key)) && check(&n.right, Some(&n.key), max)
        }
        check(&self.root, None, None)
    }

    /// Symmetric order, checked by comparing every node against the largest
    /// key of its left subtree and the smallest key of its right subtree.
    pub fn is_bst_by_subtree_extremes(&self) -> bool {
        fn leftmost<K, V>(mut n: &Node<K, V>) -> &K {
            while let Some(left) = n.left.as_deref() {
                n = left;
            }
            &n.key
        }
        fn rightmost<K, V>(mut n: &Node<K, V>) -> &K {
            while let Some(right) = n.right.as_deref() {
                n = right;
            }
            &n.key
        }
        fn check<K: Ord, V>(node: &Link<K, V>) -> bool {
            let Some(n) = node else {
                return true;
            };
            if n.left.as_deref().is_some_and(|l| *rightmost(l) >= n.key) {
                return false;
            }
            if n.right.as_deref().is_some_and(|r| *leftmost(r) <= n.key) {
                return false;
            }
            check(&n.left) && check(&n.right)
        }
        check(&self.root)
    }

    /// Symmetric order, checked by requiring strictly increasing keys in an
    /// in-order walk.
    pub fn is_bst_in_order(&self) -> bool {
        let mut prev: Option<&K> = None;
        for (key, _) in self.iter() {
            if prev.is_some_and(|p| p >= key) {
                return false;
            }
            prev = Some(key);
        }
        true
    }

    pub fn is_size_consistent(&self) -> bool {
        fn check<K, V>(node: &Link<K, V>) -> bool {
            let Some(n) = node else {
                return true;
            };
            n.size == 1 + Node::size(&n.left) + Node::size(&n.right)
                && check(&n.left)
                && check(&n.right)
        }
        check(&self.root)
    }

    /// No red right links and no node that is red along with its left child.
    pub fn is_23(&self) -> bool {
        fn check<K, V>(node: &Link<K, V>) -> bool {
            let Some(n) = node else {
                return true;
            };
            if Node::is_red(&n.right) {
                return false;
            }
            if n.color == Color::Red && Node::is_red(&n.left) {
                return false;
            }
            check(&n.left) && check(&n.right)
        }
        check(&self.root)
    }

    /// Every root-to-empty-link path crosses as many black links as the
    /// leftmost path does.
    pub fn is_balanced(&self) -> bool {
        fn check<K, V>(node: &Link<K, V>, mut black: usize) -> bool {
            let Some(n) = node else {
                return black == 0;
            };
            if n.color == Color::Black {
                if black == 0 {
                    return false;
                }
                black -= 1;
            }
            check(&n.left, black) && check(&n.right, black)
        }

        let mut black = 0;
        let mut cur = self.root.as_deref();
        while let Some(n) = cur {
            if n.color == Color::Black {
                black += 1;
            }
            cur = n.left.as_deref();
        }
        check(&self.root, black)
    }
}
