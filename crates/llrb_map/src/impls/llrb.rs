use std::cmp::Ordering;
use std::fmt;

use tracing::{debug, trace, warn};

use crate::OrderedMap;
use crate::error::{LlrbError, Result};
use crate::queue::Queue;

mod check;
mod node;
mod traverse;

use node::{Color, Link, Node};

/// Ordered map backed by a left-leaning red-black tree.
///
/// Red links only lean left and every root-to-leaf path crosses the same
/// number of black links, so the height stays within `2 * log2(n + 1)`.
/// Entries can be added and updated but not removed.
pub struct LlrbMap<K: Ord, V> {
    root: Link<K, V>,
}

impl<K: Ord, V> LlrbMap<K, V> {
    pub fn new() -> Self {
        Self { root: None }
    }

    pub fn len(&self) -> usize {
        Node::size(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of edges on the longest root-to-leaf path; `-1` when empty.
    pub fn height(&self) -> isize {
        Node::height(&self.root)
    }

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

    pub fn contains_key(&self, key: &K) -> bool {
        self.get(key).is_some()
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    ///
    /// An existing key keeps its node; only the value is overwritten.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let (mut root, old) = Self::insert_node(self.root.take(), key, value);
        root.color = Color::Black;
        self.root = Some(root);
        if old.is_some() {
            trace!(len = self.len(), "llrb: overwrote value");
        } else {
            trace!(len = self.len(), "llrb: inserted key");
        }
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

        (Node::balance(h), old)
    }

    /// Insertion for callers holding optional keys and values.
    ///
    /// A missing key or value is rejected before the map is touched; a
    /// missing value never means "delete".
    pub fn try_put(&mut self, key: Option<K>, value: Option<V>) -> Result<()> {
        let Some(key) = key else {
            debug!("llrb: put rejected, key is absent");
            return Err(LlrbError::InvalidArgument("put called with an absent key"));
        };
        let Some(value) = value else {
            debug!("llrb: put rejected, value is absent");
            return Err(LlrbError::InvalidArgument("put called with an absent value"));
        };
        self.insert(key, value);
        Ok(())
    }

    pub fn try_get(&self, key: Option<&K>) -> Result<Option<&V>> {
        let Some(key) = key else {
            debug!("llrb: get rejected, key is absent");
            return Err(LlrbError::InvalidArgument("get called with an absent key"));
        };
        Ok(self.get(key))
    }

    /// Always fails: the tree has no deletion algorithm.
    pub fn remove(&mut self, _key: &K) -> Result<V> {
        debug!(len = self.len(), "llrb: remove is not supported");
        Err(LlrbError::Unsupported("remove is not implemented for LlrbMap"))
    }

    /// Keys in ascending order.
    pub fn keys(&self) -> Queue<&K> {
        self.in_order()
    }

    pub fn in_order(&self) -> Queue<&K> {
        let mut out = Queue::with_capacity(self.len());
        traverse::in_order(&self.root, &mut out);
        out
    }

    pub fn pre_order(&self) -> Queue<&K> {
        let mut out = Queue::with_capacity(self.len());
        traverse::pre_order(&self.root, &mut out);
        out
    }

    pub fn post_order(&self) -> Queue<&K> {
        let mut out = Queue::with_capacity(self.len());
        traverse::post_order(&self.root, &mut out);
        out
    }

    pub fn level_order(&self) -> Queue<&K> {
        let mut out = Queue::with_capacity(self.len());
        traverse::level_order(&self.root, &mut out);
        out
    }

    /// Whether child heights differ by at most one at every node.
    ///
    /// This is a coarse diagnostic. It says nothing about link colors, so a
    /// tree can pass it while breaking the red-black rules; use
    /// [`LlrbMap::check`] for that.
    pub fn is_balanced(&self) -> bool {
        traverse::balanced_height(&self.root).is_some()
    }

    /// Verifies key order, link colors, black balance and subtree sizes.
    pub fn check(&self) -> Result<()> {
        check::check(&self.root).inspect_err(|err| warn!(%err, "llrb: invariant check failed"))
    }
}

impl<K: Ord, V> Default for LlrbMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord + fmt::Debug, V: fmt::Debug> fmt::Debug for LlrbMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn entries<K: fmt::Debug, V: fmt::Debug>(node: &Link<K, V>, out: &mut fmt::DebugMap<'_, '_>) {
            if let Some(n) = node.as_deref() {
                entries(&n.left, out);
                out.entry(&n.key, &n.value);
                entries(&n.right, out);
            }
        }

        let mut map = f.debug_map();
        entries(&self.root, &mut map);
        map.finish()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for LlrbMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Ord, V> Extend<(K, V)> for LlrbMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> OrderedMap for LlrbMap<K, V> {
    type Key = K;
    type Value = V;

    fn new() -> Self {
        Self { root: None }
    }

    fn len(&self) -> usize {
        Node::size(&self.root)
    }

    fn get(&self, key: &Self::Key) -> Option<&Self::Value> {
        LlrbMap::get(self, key)
    }

    fn insert(&mut self, key: Self::Key, value: Self::Value) -> Option<Self::Value> {
        LlrbMap::insert(self, key, value)
    }

    fn keys(&self) -> Queue<&Self::Key> {
        self.in_order()
    }
}
