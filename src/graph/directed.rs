//! Sparse directed graph with weighted arcs.

use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// Errors reported by graph construction and traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GraphError {
    /// Arc weights must be finite and non-negative.
    InvalidWeight(f64),

    /// The node index is not part of the graph.
    UnknownNode(usize),
}

impl Display for GraphError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWeight(weight) => write!(f, "invalid arc weight {}", weight),
            Self::UnknownNode(node) => write!(f, "unknown node {}", node),
        }
    }
}

impl std::error::Error for GraphError {}

/// A directed graph over `usize` node indices.
///
/// Nodes are implicit: a graph has every node from 0 up to the largest
/// index ever passed to [`DirectedGraph::add_arc`]. Arcs keep their
/// insertion order and parallel arcs are allowed.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraph {
    arcs: HashMap<usize, Vec<(usize, f64)>>,
    max_node: Option<usize>,
}

impl DirectedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an arc `from -> to` with the given weight.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidWeight`] if `weight` is negative, NaN or
    /// infinite.
    pub fn add_arc(&mut self, from: usize, to: usize, weight: f64) -> Result<(), GraphError> {
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        self.arcs.entry(from).or_default().push((to, weight));

        let highest = from.max(to);
        if self.max_node.is_none_or(|max| highest > max) {
            self.max_node = Some(highest);
        }

        Ok(())
    }

    /// Returns 1 + the highest node index ever used, or 0 for an empty graph.
    pub fn num_nodes(&self) -> usize {
        self.max_node.map_or(0, |max| max + 1)
    }

    /// Returns the number of arcs leaving `node`.
    pub fn out_degree(&self, node: usize) -> usize {
        self.neighbors(node).len()
    }

    /// Returns the `(destination, weight)` pairs of the arcs leaving `node`,
    /// in insertion order. Unknown nodes have no neighbors.
    pub fn neighbors(&self, node: usize) -> &[(usize, f64)] {
        self.arcs.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }
}
