use std::fmt::{self, Debug};
use std::hash::{Hash, Hasher};

use num_traits::Float;

use crate::graph::{Edge, Graph, GraphId};

/// A named vertex, optionally carrying an attached payload.
///
/// The name is the node's identity: two nodes are equal iff their names are
/// equal, regardless of payload or owning graph.
#[derive(Debug, Clone)]
pub struct Node<P = ()> {
    name: String,
    payload: Option<P>,
    /// Owning graph, set once by `Graph::add_node`
    graph: Option<GraphId>,
}

impl<P> Node<P> {
    /// Creates a standalone node without payload
    pub fn new(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            payload: None,
            graph: None,
        }
    }

    /// Creates a standalone node carrying `payload`
    pub fn with_payload(name: impl Into<String>, payload: P) -> Self {
        Node {
            name: name.into(),
            payload: Some(payload),
            graph: None,
        }
    }

    /// Name identifying the node within a graph
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Attached payload, if any
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// The graph this node was inserted into, if any
    pub fn graph(&self) -> Option<GraphId> {
        self.graph
    }

    pub(crate) fn attach(&mut self, graph: GraphId) {
        self.graph = Some(graph);
    }

    /// Returns the edges starting from this node.
    ///
    /// `None` when the node is not owned by `graph`.
    pub fn edges<'g, W>(&self, graph: &'g Graph<W, P>) -> Option<Vec<&'g Edge<W>>>
    where
        W: Float + Debug,
    {
        if self.graph != Some(graph.id()) {
            return None;
        }
        Some(graph.edges_for_node(self))
    }

    /// Returns the distinct nodes reachable through one outgoing edge.
    pub fn neighbours<'g, W>(&self, graph: &'g Graph<W, P>) -> Vec<&'g Node<P>>
    where
        W: Float + Debug,
    {
        if self.graph != Some(graph.id()) {
            return Vec::new();
        }
        graph.neighbours(self)
    }
}

impl<P> PartialEq for Node<P> {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl<P> Eq for Node<P> {}

impl<P> Hash for Node<P> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl<P> fmt::Display for Node<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
