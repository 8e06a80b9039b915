use thiserror::Error;

/// Identifies a node within one [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Creates an id for the node at zero-based `index`.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the zero-based index of the node.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An undirected graph of integer-valued nodes.
///
/// Neighbour lists keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
    values: Vec<i32>,
    adjacency: Vec<Vec<NodeId>>,
}

/// Errors that can occur when building a [`Graph`].
///
/// Nodes are numbered the way the rejected input numbered them: 1-based for
/// [`Graph::from_adjacency`], zero-based indices everywhere else.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    #[error("{values} node values but {lists} neighbour lists")]
    LengthMismatch { values: usize, lists: usize },

    #[error("node {index} does not exist")]
    UnknownNode { index: usize },

    #[error("node {index} cannot neighbour itself")]
    SelfLoop { index: usize },

    #[error("node {from} lists {to} as a neighbour more than once")]
    DuplicateEdge { from: usize, to: usize },

    #[error("node {from} lists {to} but {to} does not list {from}")]
    Asymmetric { from: usize, to: usize },
}

impl GraphError {
    fn one_based(self) -> Self {
        match self {
            Self::LengthMismatch { .. } => self,
            Self::UnknownNode { index } => Self::UnknownNode { index: index + 1 },
            Self::SelfLoop { index } => Self::SelfLoop { index: index + 1 },
            Self::DuplicateEdge { from, to } => Self::DuplicateEdge {
                from: from + 1,
                to: to + 1,
            },
            Self::Asymmetric { from, to } => Self::Asymmetric {
                from: from + 1,
                to: to + 1,
            },
        }
    }
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from node values and ordered neighbour lists.
    ///
    /// `adjacency[i]` lists the neighbours of the node with value `values[i]`.
    /// Every edge must be listed from both ends.
    ///
    /// # Errors
    ///
    /// Returns an error if the lengths differ, or for unknown ids, self loops,
    /// repeated neighbours, or an edge listed from only one end.
    pub fn from_parts(values: Vec<i32>, adjacency: Vec<Vec<NodeId>>) -> Result<Self, GraphError> {
        if values.len() != adjacency.len() {
            return Err(GraphError::LengthMismatch {
                values: values.len(),
                lists: adjacency.len(),
            });
        }

        for (from, neighbours) in adjacency.iter().enumerate() {
            for (position, &NodeId(to)) in neighbours.iter().enumerate() {
                if to >= values.len() {
                    return Err(GraphError::UnknownNode { index: to });
                }
                if to == from {
                    return Err(GraphError::SelfLoop { index: from });
                }
                if neighbours[..position].contains(&NodeId(to)) {
                    return Err(GraphError::DuplicateEdge { from, to });
                }
                if !adjacency[to].contains(&NodeId(from)) {
                    return Err(GraphError::Asymmetric { from, to });
                }
            }
        }

        Ok(Self { values, adjacency })
    }

    /// Builds a graph from a 1-based adjacency list.
    ///
    /// Node `i` (1-based) gets value `i`, and `adjacency[i - 1]` lists its
    /// neighbours in order. Every edge must be listed from both ends.
    ///
    /// # Errors
    ///
    /// Returns an error for out-of-range entries, self loops, repeated
    /// neighbours, or an edge listed from only one end.
    pub fn from_adjacency(adjacency: &[Vec<usize>]) -> Result<Self, GraphError> {
        let len = adjacency.len();
        let values: Vec<i32> = (1..).take(len).collect();

        let lists = adjacency
            .iter()
            .map(|neighbours| {
                neighbours
                    .iter()
                    .map(|&to| {
                        if (1..=len).contains(&to) {
                            Ok(NodeId(to - 1))
                        } else {
                            Err(GraphError::UnknownNode { index: to })
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_parts(values, lists).map_err(GraphError::one_based)
    }

    /// Returns the 1-based adjacency list, the inverse of [`Graph::from_adjacency`].
    #[must_use]
    pub fn to_adjacency(&self) -> Vec<Vec<usize>> {
        self.adjacency
            .iter()
            .map(|neighbours| neighbours.iter().map(|id| id.0 + 1).collect())
            .collect()
    }

    /// Adds an isolated node and returns its id.
    pub fn add_node(&mut self, value: i32) -> NodeId {
        let id = NodeId(self.values.len());
        self.values.push(value);
        self.adjacency.push(Vec::new());
        id
    }

    /// Connects `a` and `b`. Connecting an existing pair again is a no-op.
    ///
    /// # Errors
    ///
    /// Returns an error if either node is unknown or `a == b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        for id in [a, b] {
            if id.0 >= self.len() {
                return Err(GraphError::UnknownNode { index: id.0 });
            }
        }
        if a == b {
            return Err(GraphError::SelfLoop { index: a.0 });
        }
        if !self.adjacency[a.0].contains(&b) {
            self.adjacency[a.0].push(b);
            self.adjacency[b.0].push(a);
        }
        Ok(())
    }

    /// Returns the value stored at `id`.
    #[must_use]
    pub fn value(&self, id: NodeId) -> Option<i32> {
        self.values.get(id.0).copied()
    }

    /// Returns the neighbours of `id`, empty for unknown ids.
    #[must_use]
    pub fn neighbors(&self, id: NodeId) -> &[NodeId] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or_default()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` if the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
