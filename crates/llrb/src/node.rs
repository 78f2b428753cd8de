/// Color of the link from a node's parent to the node.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    fn flipped(self) -> Self {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) size: usize,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
}

impl<K, V> Node<K, V> {
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            size: 1,
            left: None,
            right: None,
        }
    }

    pub(crate) fn size(node: &Link<K, V>) -> usize {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    pub(crate) fn is_red(node: &Link<K, V>) -> bool {
        node.as_ref().is_some_and(|n| n.color == Color::Red)
    }

    pub(crate) fn left_left_is_red(&self) -> bool {
        self.left.as_ref().is_some_and(|l| Self::is_red(&l.left))
    }

    pub(crate) fn right_left_is_red(&self) -> bool {
        self.right.as_ref().is_some_and(|r| Self::is_red(&r.left))
    }

    pub(crate) fn recalc(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }

    pub(crate) fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut x = match self.right.take() {
            Some(node) => node,
            None => return self,
        };
        self.right = x.left.take();
        x.color = self.color;
        self.color = Color::Red;
        self.recalc();
        x.left = Some(self);
        x.recalc();
        x
    }

    pub(crate) fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut x = match self.left.take() {
            Some(node) => node,
            None => return self,
        };
        self.left = x.right.take();
        x.color = self.color;
        self.color = Color::Red;
        self.recalc();
        x.right = Some(self);
        x.recalc();
        x
    }

    pub(crate) fn flip_colors(&mut self) {
        self.color = self.color.flipped();
        if let Some(left) = self.left.as_deref_mut() {
            left.color = left.color.flipped();
        }
        if let Some(right) = self.right.as_deref_mut() {
            right.color = right.color.flipped();
        }
    }

    /// Local repair applied on the way back up from an insertion.
    pub(crate) fn fix_up(self: Box<Self>) -> Box<Self> {
        let mut h = self;
        if Self::is_red(&h.right) && !Self::is_red(&h.left) {
            h = h.rotate_left();
        }
        if Self::is_red(&h.left) && h.left_left_is_red() {
            h = h.rotate_right();
        }
        if Self::is_red(&h.left) && Self::is_red(&h.right) {
            h.flip_colors();
        }
        h.recalc();
        h
    }

    /// Local repair applied on the way back up from a deletion. Unlike
    /// [`Node::fix_up`] a red right link is rotated even when the left link is
    /// red too, since deletion may leave both.
    pub(crate) fn balance(self: Box<Self>) -> Box<Self> {
        let mut h = self;
        if Self::is_red(&h.right) {
            h = h.rotate_left();
        }
        if Self::is_red(&h.left) && h.left_left_is_red() {
            h = h.rotate_right();
        }
        if Self::is_red(&h.left) && Self::is_red(&h.right) {
            h.flip_colors();
        }
        h.recalc();
        h
    }

    /// Assuming `self` is red and both `self.left` and `self.left.left` are
    /// black, make `self.left` or one of its children red.
    pub(crate) fn move_red_left(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();
        if self.right_left_is_red() {
            if let Some(right) = self.right.take() {
                self.right = Some(right.rotate_right());
            }
            let mut h = self.rotate_left();
            h.flip_colors();
            return h;
        }
        self
    }

    /// Assuming `self` is red and both `self.right` and `self.right.left` are
    /// black, make `self.right` or one of its children red.
    pub(crate) fn move_red_right(mut self: Box<Self>) -> Box<Self> {
        self.flip_colors();
        if self.left_left_is_red() {
            let mut h = self.rotate_right();
            h.flip_colors();
            return h;
        }
        self
    }

    /// Detaches the minimum node of the subtree rooted at `self`.
    pub(crate) fn delete_min(mut self: Box<Self>) -> (Link<K, V>, Box<Self>) {
        if self.left.is_none() {
            let right = self.right.take();
            return (right, self);
        }
        if !Self::is_red(&self.left) && !self.left_left_is_red() {
            self = self.move_red_left();
        }
        let Some(left) = self.left.take() else {
            return (self.right.take(), self);
        };
        let (left, min) = left.delete_min();
        self.left = left;
        (Some(self.balance()), min)
    }

    /// Detaches the maximum node of the subtree rooted at `self`.
    pub(crate) fn delete_max(mut self: Box<Self>) -> (Link<K, V>, Box<Self>) {
        if Self::is_red(&self.left) {
            self = self.rotate_right();
        }
        if self.right.is_none() {
            let left = self.left.take();
            return (left, self);
        }
        if !Self::is_red(&self.right) && !self.right_left_is_red() {
            self = self.move_red_right();
        }
        let Some(right) = self.right.take() else {
            return (self.left.take(), self);
        };
        let (right, max) = right.delete_max();
        self.right = right;
        (Some(self.balance()), max)
    }
}
