use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::atomic::{AtomicU64, Ordering};

use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::{Edge, Node};
use crate::{Error, Result};

/// Process-unique handle of a graph, used as a node's non-owning back-reference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphId(u64);

impl GraphId {
    fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        GraphId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Construction options for a [`Graph`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphOptions {
    /// Directed graphs store edges one-way; undirected graphs mirror them
    pub directed: bool,
}

impl GraphOptions {
    /// Options for a directed graph
    pub fn directed() -> Self {
        GraphOptions { directed: true }
    }

    /// Options for an undirected graph
    pub fn undirected() -> Self {
        GraphOptions { directed: false }
    }

    /// Set whether edges are stored one-way
    pub fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }
}

/// The edges of a graph, shaped by the graph's direction mode
#[derive(Debug, Clone)]
pub enum Edges<'a, W>
where
    W: Float,
{
    /// Every stored edge of a directed graph
    Directed(Vec<&'a Edge<W>>),
    /// Every stored edge of an undirected graph paired with its mirror
    Undirected(Vec<(&'a Edge<W>, &'a Edge<W>)>),
}

impl<'a, W> Edges<'a, W>
where
    W: Float,
{
    /// Number of stored edge records; a mirrored pair counts twice
    pub fn len(&self) -> usize {
        match self {
            Edges::Directed(edges) => edges.len(),
            Edges::Undirected(pairs) => pairs.len() * 2,
        }
    }

    /// Returns true if there are no edges
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every stored edge record
    pub fn iter(&self) -> Box<dyn Iterator<Item = &'a Edge<W>> + '_> {
        match self {
            Edges::Directed(edges) => Box::new(edges.iter().copied()),
            Edges::Undirected(pairs) => {
                Box::new(pairs.iter().flat_map(|&(edge, mirror)| [edge, mirror]))
            }
        }
    }
}

/// A weighted graph owning its nodes and edges.
///
/// Nodes are keyed by name and edges by ordered (from, to) pair. In an
/// undirected graph every inserted edge is stored together with its reversed
/// counterpart, so for each stored `(A, B, w)` there is a stored `(B, A, w)`.
/// Graphs only grow: there are no removal operations.
#[derive(Debug)]
pub struct Graph<W = f64, P = ()>
where
    W: Float,
{
    id: GraphId,

    directed: bool,

    /// Nodes in insertion order; the position is the node's index
    nodes: Vec<Node<P>>,

    /// Node name -> node index
    node_index: HashMap<String, usize>,

    /// Every stored edge record in insertion order (mirrors follow their edge)
    edges: Vec<Edge<W>>,

    /// Outgoing edges for each node index: [(target_index, edge_id)]
    outgoing: Vec<Vec<(usize, usize)>>,

    /// (from_index, to_index) -> edge_id
    edge_index: HashMap<(usize, usize), usize>,
}

impl<W, P> Graph<W, P>
where
    W: Float + Debug,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        Self::with_options(GraphOptions::default())
    }

    /// Creates a new empty directed graph
    pub fn directed() -> Self {
        Self::with_options(GraphOptions::directed())
    }

    /// Creates a new empty undirected graph
    pub fn undirected() -> Self {
        Self::with_options(GraphOptions::undirected())
    }

    /// Creates a new empty graph with the given options
    pub fn with_options(options: GraphOptions) -> Self {
        Graph {
            id: GraphId::next(),
            directed: options.directed,
            nodes: Vec::new(),
            node_index: HashMap::new(),
            edges: Vec::new(),
            outgoing: Vec::new(),
            edge_index: HashMap::new(),
        }
    }

    /// Handle stamped on the nodes of this graph
    pub fn id(&self) -> GraphId {
        self.id
    }

    /// Options this graph was built with
    pub fn options(&self) -> GraphOptions {
        GraphOptions {
            directed: self.directed,
        }
    }

    /// Returns true if edges are stored one-way
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns true if edges are mirrored
    pub fn is_undirected(&self) -> bool {
        !self.directed
    }

    /// Number of nodes
    pub fn order(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored edge records (both halves of a mirrored pair count)
    pub fn size(&self) -> usize {
        self.edges.len()
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> &[Node<P>] {
        &self.nodes
    }

    /// Index of the node with the given name
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.node_index.get(name).copied()
    }

    /// Node stored at `index`
    pub fn node_at(&self, index: usize) -> Option<&Node<P>> {
        self.nodes.get(index)
    }

    /// Adds a node to the graph and attaches it to this graph.
    pub fn add_node(&mut self, mut node: Node<P>) -> Result<&mut Self> {
        if self.has_node(&node) {
            return Err(Error::NodeAlreadyExists(node.name().to_string()));
        }

        let index = self.nodes.len();
        node.attach(self.id);
        self.node_index.insert(node.name().to_string(), index);
        self.outgoing.push(Vec::new());
        debug!("added node {} at index {}", node.name(), index);
        self.nodes.push(node);

        Ok(self)
    }

    /// True if a node with the same name is stored
    pub fn has_node(&self, node: &Node<P>) -> bool {
        self.has_node_named(node.name())
    }

    /// True if a node named `name` is stored
    pub fn has_node_named(&self, name: &str) -> bool {
        self.node_index.contains_key(name)
    }

    /// Stored node named `name`
    pub fn find_node_by_name(&self, name: &str) -> Option<&Node<P>> {
        self.index_of(name).map(|index| &self.nodes[index])
    }

    /// Adds an edge to the graph.
    ///
    /// In an undirected graph the reversed edge is added as well. Either both
    /// records are stored or, on error, neither is.
    pub fn add_edge(&mut self, edge: Edge<W>) -> Result<&mut Self> {
        let from = self
            .index_of(edge.from())
            .ok_or_else(|| Error::NodeNotFound(edge.from().to_string()))?;
        let to = self
            .index_of(edge.to())
            .ok_or_else(|| Error::NodeNotFound(edge.to().to_string()))?;

        // The mirror of a self-loop is the loop itself.
        let collides = self.edge_index.contains_key(&(from, to))
            || (!self.directed && (from == to || self.edge_index.contains_key(&(to, from))));
        if collides {
            return Err(Error::EdgeAlreadyExists {
                from: edge.from().to_string(),
                to: edge.to().to_string(),
            });
        }

        debug!(
            "added edge {} -> {} with weight {:?}",
            edge.from(),
            edge.to(),
            edge.weight()
        );
        let mirror = (!self.directed).then(|| edge.reversed());
        self.insert_record(from, to, edge);
        if let Some(mirror) = mirror {
            self.insert_record(to, from, mirror);
        }

        Ok(self)
    }

    fn insert_record(&mut self, from: usize, to: usize, edge: Edge<W>) {
        let id = self.edges.len();
        self.edges.push(edge);
        self.outgoing[from].push((to, id));
        self.edge_index.insert((from, to), id);
    }

    /// True if an edge with the same ordered node pair is stored; the weight
    /// is not compared.
    pub fn has_edge(&self, edge: &Edge<W>) -> bool {
        self.find_edge_named(edge.from(), edge.to()).is_some()
    }

    /// Stored edge from `from` to `to`
    pub fn find_edge(&self, from: &Node<P>, to: &Node<P>) -> Option<&Edge<W>> {
        self.find_edge_named(from.name(), to.name())
    }

    /// Stored edge between the nodes named `from` and `to`
    pub fn find_edge_named(&self, from: &str, to: &str) -> Option<&Edge<W>> {
        let from = self.index_of(from)?;
        let to = self.index_of(to)?;
        self.edge_index.get(&(from, to)).map(|&id| &self.edges[id])
    }

    /// All edges starting from `node`, in insertion order
    pub fn edges_for_node(&self, node: &Node<P>) -> Vec<&Edge<W>> {
        match self.index_of(node.name()) {
            Some(index) => self.outgoing[index]
                .iter()
                .map(|&(_, id)| &self.edges[id])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Distinct end nodes of the edges starting from `node`
    pub fn neighbours(&self, node: &Node<P>) -> Vec<&Node<P>> {
        match self.index_of(node.name()) {
            Some(index) => self.outgoing[index]
                .iter()
                .map(|&(target, _)| &self.nodes[target])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Returns an iterator over the outgoing edges of the node at `index`
    /// as `(target_index, weight)`
    pub fn outgoing_edges(&self, index: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing.get(index) {
            Box::new(
                edges
                    .iter()
                    .map(move |&(target, id)| (target, self.edges[id].weight())),
            )
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// All edges, or all mirrored pairs when the graph is undirected
    pub fn edges(&self) -> Edges<'_, W> {
        if self.directed {
            Edges::Directed(self.edges.iter().collect())
        } else {
            Edges::Undirected(
                self.edges
                    .chunks_exact(2)
                    .map(|pair| (&pair[0], &pair[1]))
                    .collect(),
            )
        }
    }
}

impl<W, P> Default for Graph<W, P>
where
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}
