//! Exercises over binary trees.
//!
//! Traversals use explicit stacks and queues rather than recursion, so deep,
//! skewed trees are fine.

use std::collections::VecDeque;

use drills_core::TreeNode;

/// Returns `true` if the tree is a strict binary search tree.
///
/// Every node must lie strictly between the bounds inherited from its
/// ancestors, not only between its parent and its children. An empty tree is
/// valid.
#[must_use]
pub fn is_valid_bst(root: Option<&TreeNode>) -> bool {
    // Each entry carries the exclusive bounds inherited from its ancestors.
    let mut pending: Vec<(&TreeNode, Option<i32>, Option<i32>)> =
        root.map(|node| (node, None, None)).into_iter().collect();

    while let Some((node, lower, upper)) = pending.pop() {
        let above_lower = lower.is_none_or(|lower| node.val > lower);
        let below_upper = upper.is_none_or(|upper| node.val < upper);
        if !(above_lower && below_upper) {
            return false;
        }
        if let Some(left) = node.left.as_deref() {
            pending.push((left, lower, Some(node.val)));
        }
        if let Some(right) = node.right.as_deref() {
            pending.push((right, Some(node.val), upper));
        }
    }

    true
}

/// Returns node values grouped by depth, top to bottom and left to right.
#[must_use]
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut levels = Vec::new();
    let mut queue: VecDeque<&TreeNode> = root.into_iter().collect();

    while !queue.is_empty() {
        let mut level = Vec::with_capacity(queue.len());
        for _ in 0..queue.len() {
            let Some(node) = queue.pop_front() else {
                break;
            };
            level.push(node.val);
            queue.extend(node.left.as_deref());
            queue.extend(node.right.as_deref());
        }
        levels.push(level);
    }

    levels
}

/// Returns the deepest node of a binary search tree that has both `p` and `q`
/// in its subtree.
///
/// Walks down from the root while both values lie on the same side and stops
/// where they split (or where one of them is the current node). Presence of
/// the values is not checked: for values missing from the tree the result is
/// the node where their search paths would diverge.
#[must_use]
pub fn lowest_common_ancestor(root: Option<&TreeNode>, p: i32, q: i32) -> Option<&TreeNode> {
    let mut current = root;

    while let Some(node) = current {
        current = if p < node.val && q < node.val {
            node.left.as_deref()
        } else if p > node.val && q > node.val {
            node.right.as_deref()
        } else {
            return Some(node);
        };
    }

    None
}
