use std::collections::HashMap;

use drills_core::{Graph, NodeId};

/// Deep-copies the part of `graph` reachable from `start`.
///
/// Copies are numbered in depth-first discovery order, so `start` becomes
/// node 0 of the new graph. Values and neighbour order are preserved. Returns
/// `None` if `start` is not a node of `graph`.
#[must_use]
pub fn clone_graph(graph: &Graph, start: NodeId) -> Option<Graph> {
    let start_value = graph.value(start)?;

    // Original id -> id of its copy.
    let mut copies: HashMap<NodeId, NodeId> = HashMap::from([(start, NodeId::new(0))]);
    let mut originals = vec![start];
    let mut values = vec![start_value];

    // Each frame is a node and how many of its neighbours have been explored.
    let mut stack = vec![(start, 0)];
    while let Some(&(node, explored)) = stack.last() {
        let Some(&neighbor) = graph.neighbors(node).get(explored) else {
            stack.pop();
            continue;
        };
        if let Some(frame) = stack.last_mut() {
            frame.1 += 1;
        }

        if !copies.contains_key(&neighbor) {
            copies.insert(neighbor, NodeId::new(originals.len()));
            originals.push(neighbor);
            values.push(graph.value(neighbor)?);
            stack.push((neighbor, 0));
        }
    }

    let adjacency = originals
        .iter()
        .map(|&original| {
            graph
                .neighbors(original)
                .iter()
                .filter_map(|neighbor| copies.get(neighbor).copied())
                .collect()
        })
        .collect();

    Graph::from_parts(values, adjacency).ok()
}
