pub mod edge;
pub mod generators;
pub mod matrix;
pub mod node;
pub mod weighted;

pub use edge::{sort_by_weight, Edge, DEFAULT_WEIGHT};
pub use node::Node;
pub use weighted::{Edges, Graph, GraphId, GraphOptions};
