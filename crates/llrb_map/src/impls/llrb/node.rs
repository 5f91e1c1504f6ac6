#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Color {
    Red,
    Black,
}

pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// `color` is the color of the link from the parent to this node.
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

    pub(crate) fn is_red(node: &Link<K, V>) -> bool {
        node.as_ref().is_some_and(|n| n.color == Color::Red)
    }

    pub(crate) fn size(node: &Link<K, V>) -> usize {
        node.as_ref().map(|n| n.size).unwrap_or(0)
    }

    pub(crate) fn height(node: &Link<K, V>) -> isize {
        match node.as_deref() {
            None => -1,
            Some(n) => 1 + Self::height(&n.left).max(Self::height(&n.right)),
        }
    }

    fn update_size(&mut self) {
        self.size = 1 + Self::size(&self.left) + Self::size(&self.right);
    }

    /// Turns a right-leaning red link into a left-leaning one.
    pub(crate) fn rotate_left(mut h: Box<Self>) -> Box<Self> {
        let Some(mut x) = h.right.take() else {
            return h;
        };
        h.right = x.left.take();
        x.color = h.color;
        h.color = Color::Red;
        x.size = h.size;
        h.update_size();
        x.left = Some(h);
        x
    }

    pub(crate) fn rotate_right(mut h: Box<Self>) -> Box<Self> {
        let Some(mut x) = h.left.take() else {
            return h;
        };
        h.left = x.right.take();
        x.color = h.color;
        h.color = Color::Red;
        x.size = h.size;
        h.update_size();
        x.right = Some(h);
        x
    }

    /// Splits a temporary 4-node, passing the red link up to the parent.
    pub(crate) fn flip_colors(h: &mut Self) {
        h.color = Color::Red;
        if let Some(left) = h.left.as_deref_mut() {
            left.color = Color::Black;
        }
        if let Some(right) = h.right.as_deref_mut() {
            right.color = Color::Black;
        }
    }

    /// Restores the local invariants on the way back up from an insertion.
    ///
    /// The three rules are not commutative and must run in this order.
    pub(crate) fn balance(mut h: Box<Self>) -> Box<Self> {
        if Self::is_red(&h.right) && !Self::is_red(&h.left) {
            h = Self::rotate_left(h);
        }
        if Self::is_red(&h.left) && h.left.as_ref().is_some_and(|l| Self::is_red(&l.left)) {
            h = Self::rotate_right(h);
        }
        if Self::is_red(&h.left) && Self::is_red(&h.right) {
            Self::flip_colors(&mut h);
        }
        h.update_size();
        h
    }
}
