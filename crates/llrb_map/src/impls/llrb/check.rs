use super::node::{Color, Link, Node};
use crate::error::{LlrbError, Result};

pub(crate) fn check<K: Ord, V>(root: &Link<K, V>) -> Result<()> {
    if Node::is_red(root) {
        return Err(violation("root is red"));
    }
    walk(root, None, None, 0).map(|_| ())
}

fn violation(what: &str) -> LlrbError {
    LlrbError::InvariantViolation(what.to_string())
}

/// Returns the number of black links from `node` down to any empty slot.
fn walk<K: Ord, V>(
    node: &Link<K, V>,
    lower: Option<&K>,
    upper: Option<&K>,
    depth: usize,
) -> Result<usize> {
    let Some(n) = node.as_deref() else {
        return Ok(0);
    };

    if lower.is_some_and(|lo| n.key <= *lo) || upper.is_some_and(|hi| n.key >= *hi) {
        return Err(LlrbError::InvariantViolation(format!(
            "key out of order at depth {depth}"
        )));
    }
    if Node::is_red(&n.right) {
        return Err(LlrbError::InvariantViolation(format!(
            "red right link at depth {depth}"
        )));
    }
    if n.color == Color::Red && Node::is_red(&n.left) {
        return Err(LlrbError::InvariantViolation(format!(
            "two consecutive red links at depth {depth}"
        )));
    }
    if n.size != 1 + Node::size(&n.left) + Node::size(&n.right) {
        return Err(LlrbError::InvariantViolation(format!(
            "size {} does not match children at depth {depth}",
            n.size
        )));
    }

    let left = walk(&n.left, lower, Some(&n.key), depth + 1)?;
    let right = walk(&n.right, Some(&n.key), upper, depth + 1)?;
    if left != right {
        return Err(LlrbError::InvariantViolation(format!(
            "black heights {left} and {right} differ at depth {depth}"
        )));
    }
    Ok(left + usize::from(n.color == Color::Black))
}
