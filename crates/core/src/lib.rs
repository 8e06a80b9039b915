//! Input data structures for the Drills exercises.
//!
//! The exercises in `drills-solutions` are pure functions; this crate holds
//! the shapes they take as input:
//!
//! - [`Interval`] — a closed integer range with `start <= end`
//! - [`ListNode`] — an owned singly linked list
//! - [`LinkTable`] — an index-linked list that may contain a cycle
//! - [`TreeNode`] — an owned binary tree
//! - [`Graph`] — an undirected graph with stable [`NodeId`]s
//! - [`Grid`] — a rectangular map of land and water cells
//!
//! Types with invariants are built through fallible constructors that return
//! a dedicated error type.

mod graph;
mod grid;
mod interval;
mod list;
mod tree;

pub use graph::{Graph, GraphError, NodeId};
pub use grid::{Cell, Grid, GridError};
pub use interval::{Interval, IntervalError};
pub use list::{LinkError, LinkTable, ListNode};
pub use tree::TreeNode;
