//! Graph Paths - weighted graphs and single-source shortest paths
//!
//! This library models directed and undirected weighted graphs built from
//! individually added nodes and edges (or from a dense adjacency matrix) and
//! computes shortest distances and shortest paths from a start node with
//! Dijkstra's algorithm.
//!
//! Undirected graphs store every edge twice: once as inserted and once
//! reversed, so adjacency lookups are always a single directed lookup.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::{Dijkstra, DijkstraOptions, Selection},
    positive_search::{NonPositivePolicy, PositiveWeightSearch, SearchOptions},
    shortest_path::ShortestPath,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::{Edge, Edges, Graph, GraphId, GraphOptions, Node, DEFAULT_WEIGHT};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Node already exists: {0}")]
    NodeAlreadyExists(String),

    #[error("Edge already exists: from {from} to {to}")]
    EdgeAlreadyExists { from: String, to: String },

    #[error("Node not found in graph: {0}")]
    NodeNotFound(String),

    #[error("Start node is not part of the graph: {0}")]
    InvalidStartNode(String),

    #[error("Non-positive edge weight: from {from} to {to}")]
    NonPositiveWeight { from: String, to: String },

    #[error("Malformed adjacency matrix at line {line}: {reason}")]
    MalformedMatrix { line: usize, reason: String },

    #[error("Adjacency matrix is not symmetric at row {row}, column {col}")]
    AsymmetricMatrix { row: usize, col: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
