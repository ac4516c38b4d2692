//! Single-source shortest paths.

use crate::graph::directed::{DirectedGraph, GraphError};

use log::debug;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Frontier entry, ordered so that `BinaryHeap` pops the closest node first.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    node: usize,
    distance: f64,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes a shortest-path tree rooted at `source`.
///
/// Returns, for every node `0..graph.num_nodes()`, its predecessor on a
/// shortest path from `source`: `Some(source)` for the source itself and
/// `None` for nodes that cannot be reached.
///
/// Stale frontier entries are skipped when popped instead of being
/// updated in place.
///
/// # Errors
///
/// Returns [`GraphError::UnknownNode`] if `source` is not a node of the graph.
pub fn dijkstra(graph: &DirectedGraph, source: usize) -> Result<Vec<Option<usize>>, GraphError> {
    let num_nodes = graph.num_nodes();
    if source >= num_nodes {
        return Err(GraphError::UnknownNode(source));
    }

    let mut parent = vec![None; num_nodes];
    let mut distance = vec![f64::INFINITY; num_nodes];
    let mut settled = vec![false; num_nodes];
    let mut frontier = BinaryHeap::new();

    parent[source] = Some(source);
    distance[source] = 0.0;
    frontier.push(Frontier {
        node: source,
        distance: 0.0,
    });

    while let Some(Frontier { node: current, .. }) = frontier.pop() {
        if settled[current] {
            continue;
        }
        settled[current] = true;

        for &(next, weight) in graph.neighbors(current) {
            if settled[next] {
                continue;
            }

            let through = distance[current] + weight;
            if through < distance[next] {
                distance[next] = through;
                parent[next] = Some(current);
                frontier.push(Frontier {
                    node: next,
                    distance: through,
                });
            }
        }
    }

    debug!(
        "dijkstra from {}: {} of {} nodes reachable",
        source,
        settled.iter().filter(|&&s| s).count(),
        num_nodes
    );

    Ok(parent)
}
