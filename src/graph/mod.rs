//! Weighted directed graphs
//!
//! - [`DirectedGraph`]  
//!   Adjacency-list graph over implicit `usize` nodes with non-negative
//!   `f64` arc weights.
//!
//! - [`dijkstra`]  
//!   Shortest-path predecessor tree from a single source.

mod dijkstra;
mod directed;

pub use dijkstra::dijkstra;
pub use directed::{DirectedGraph, GraphError};
