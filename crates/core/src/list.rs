use thiserror::Error;

/// A node of an owned singly linked list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    /// Builds a list holding `values` in order, returning its head.
    #[must_use]
    pub fn from_values(values: &[i32]) -> Option<Box<ListNode>> {
        values.iter().rev().fold(None, |next, &val| {
            Some(Box::new(ListNode { val, next }))
        })
    }

    /// Collects the values of the list starting at `head`.
    #[must_use]
    pub fn to_values(head: Option<&ListNode>) -> Vec<i32> {
        head.map_or_else(Vec::new, |node| node.iter().collect())
    }

    /// Iterates over the values from this node to the tail.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        std::iter::successors(Some(self), |node| node.next.as_deref()).map(|node| node.val)
    }
}

// Unlinks iteratively so long lists don't overflow the stack on drop.
impl Drop for ListNode {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.next.take();
        }
    }
}

/// A singly linked list stored as parallel arrays of values and links.
///
/// Unlike [`ListNode`], a link table can express a tail that points back into
/// the list, which is what cycle detection needs as input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkTable {
    values: Vec<i32>,
    next: Vec<Option<usize>>,
    head: Option<usize>,
}

/// Errors that can occur when constructing a [`LinkTable`].
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    #[error("{values} values but {links} links")]
    LengthMismatch { values: usize, links: usize },

    #[error("node {from} links to missing node {to}")]
    DanglingLink { from: usize, to: usize },

    #[error("head {head} is not a node")]
    DanglingHead { head: usize },
}

impl LinkTable {
    /// Creates a link table from explicit links.
    ///
    /// `next[i]` is the index of the node following node `i`.
    ///
    /// # Errors
    ///
    /// Returns an error if the arrays differ in length or any link (including
    /// the head) refers to a node that does not exist.
    pub fn new(
        values: Vec<i32>,
        next: Vec<Option<usize>>,
        head: Option<usize>,
    ) -> Result<Self, LinkError> {
        if values.len() != next.len() {
            return Err(LinkError::LengthMismatch {
                values: values.len(),
                links: next.len(),
            });
        }
        if let Some(head) = head.filter(|&head| head >= values.len()) {
            return Err(LinkError::DanglingHead { head });
        }
        for (from, link) in next.iter().enumerate() {
            if let Some(to) = link.filter(|&to| to >= values.len()) {
                return Err(LinkError::DanglingLink { from, to });
            }
        }

        Ok(Self { values, next, head })
    }

    /// Creates a straight list over `values` whose tail optionally links back
    /// to the node at `tail_to`.
    ///
    /// # Errors
    ///
    /// Returns [`LinkError::DanglingLink`] if `tail_to` is out of range.
    pub fn from_values(values: &[i32], tail_to: Option<usize>) -> Result<Self, LinkError> {
        let len = values.len();
        let mut next: Vec<Option<usize>> = (1..=len).map(Some).collect();
        if let Some(last) = next.last_mut() {
            *last = tail_to;
        } else if let Some(to) = tail_to {
            return Err(LinkError::DanglingLink { from: 0, to });
        }
        let head = (len > 0).then_some(0);

        Self::new(values.to_vec(), next, head)
    }

    /// Returns the index of the first node.
    #[must_use]
    pub fn head(&self) -> Option<usize> {
        self.head
    }

    /// Returns the index of the node after `index`.
    #[must_use]
    pub fn next(&self, index: usize) -> Option<usize> {
        self.next.get(index).copied().flatten()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the table has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
