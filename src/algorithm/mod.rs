pub mod dijkstra;
pub mod positive_search;
pub mod shortest_path;
pub mod traits;

pub use dijkstra::Dijkstra;
pub use traits::{ShortestPathAlgorithm, ShortestPathResult};
