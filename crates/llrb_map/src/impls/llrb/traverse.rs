use super::node::{Link, Node};
use crate::queue::Queue;

pub(crate) fn in_order<'a, K, V>(node: &'a Link<K, V>, out: &mut Queue<&'a K>) {
    let Some(n) = node.as_deref() else {
        return;
    };
    in_order(&n.left, out);
    out.enqueue(&n.key);
    in_order(&n.right, out);
}

pub(crate) fn pre_order<'a, K, V>(node: &'a Link<K, V>, out: &mut Queue<&'a K>) {
    let Some(n) = node.as_deref() else {
        return;
    };
    out.enqueue(&n.key);
    pre_order(&n.left, out);
    pre_order(&n.right, out);
}

pub(crate) fn post_order<'a, K, V>(node: &'a Link<K, V>, out: &mut Queue<&'a K>) {
    let Some(n) = node.as_deref() else {
        return;
    };
    post_order(&n.left, out);
    post_order(&n.right, out);
    out.enqueue(&n.key);
}

/// Breadth-first. Empty child slots go through the work queue too and are
/// dropped when they come out.
pub(crate) fn level_order<'a, K, V>(root: &'a Link<K, V>, out: &mut Queue<&'a K>) {
    let mut work: Queue<Option<&'a Node<K, V>>> = Queue::new();
    work.enqueue(root.as_deref());
    while let Ok(next) = work.dequeue() {
        let Some(node) = next else {
            continue;
        };
        out.enqueue(&node.key);
        work.enqueue(node.left.as_deref());
        work.enqueue(node.right.as_deref());
    }
}

/// Height of `node` if every subtree below it has child heights differing
/// by at most one.
pub(crate) fn balanced_height<K, V>(node: &Link<K, V>) -> Option<isize> {
    let Some(n) = node.as_deref() else {
        return Some(-1);
    };
    let left = balanced_height(&n.left)?;
    let right = balanced_height(&n.right)?;
    if (left - right).abs() > 1 {
        return None;
    }
    Some(1 + left.max(right))
}
