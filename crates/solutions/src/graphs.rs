//! Exercises over grids and undirected graphs.
//!
//! - [`count_islands`] — connected land components of a [`Grid`](drills_core::Grid)
//! - [`clone_graph`] — deep copy of the component around one node

mod clone;
mod islands;

pub use clone::clone_graph;
pub use islands::count_islands;
