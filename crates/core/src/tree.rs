/// A node of an owned binary tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    /// Creates a node with no children.
    #[must_use]
    pub fn leaf(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    /// Creates a node with the given children.
    #[must_use]
    pub fn with_children(val: i32, left: Option<TreeNode>, right: Option<TreeNode>) -> Self {
        Self {
            val,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// Builds a tree from its breadth-first layout, where `None` marks a
    /// missing child.
    ///
    /// Children are assigned to present nodes in order, so missing nodes do
    /// not reserve slots for their own children: `[1, None, 2, 3]` is
    /// `1 -> right 2 -> left 3`. Trailing entries with no parent are ignored.
    #[must_use]
    pub fn from_level_order(values: &[Option<i32>]) -> Option<Box<TreeNode>> {
        if values.first().copied().flatten().is_none() {
            return None;
        }

        // Slot `i` of `children` holds the positions of node `i`'s children.
        let mut children = vec![(None, None); values.len()];
        let mut attached = vec![false; values.len()];
        attached[0] = true;
        let mut cursor = 1;
        for (parent, value) in values.iter().enumerate() {
            if cursor >= values.len() {
                break;
            }
            if value.is_none() || !attached[parent] {
                continue;
            }
            let left = cursor;
            let right = (cursor + 1 < values.len()).then_some(cursor + 1);
            attached[left] = true;
            if let Some(right) = right {
                attached[right] = true;
            }
            children[parent] = (Some(left), right);
            cursor += 2;
        }

        // Children always sit after their parent, so building back to front
        // finishes every subtree before it is attached.
        let mut built: Vec<Option<Box<TreeNode>>> = vec![None; values.len()];
        for index in (0..values.len()).rev() {
            let Some(val) = values[index].filter(|_| attached[index]) else {
                continue;
            };
            let (left, right) = children[index];
            let mut node = TreeNode::leaf(val);
            node.left = left.and_then(|i| built[i].take());
            node.right = right.and_then(|i| built[i].take());
            built[index] = Some(Box::new(node));
        }

        built.swap_remove(0)
    }
}
