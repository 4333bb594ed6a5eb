use std::cmp::Ordering;
use std::fmt;

use num_traits::Float;
use ordered_float::OrderedFloat;

use crate::graph::Node;

/// Weight given to edges created without an explicit weight
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed, weighted connection between two nodes.
///
/// Endpoints are held by node name, the identity key the graph indexes by,
/// so an edge never owns or borrows the nodes it connects.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge<W = f64>
where
    W: Float,
{
    from: String,
    to: String,
    weight: W,
}

impl<W> Edge<W>
where
    W: Float,
{
    /// Creates an edge from `from` to `to` with [`DEFAULT_WEIGHT`]
    pub fn new<P>(from: &Node<P>, to: &Node<P>) -> Self {
        let weight = num_traits::cast(DEFAULT_WEIGHT).unwrap_or_else(W::one);
        Self::weighted(from, to, weight)
    }

    /// Creates an edge from `from` to `to` with the given weight
    pub fn weighted<P>(from: &Node<P>, to: &Node<P>, weight: W) -> Self {
        Self::between(from.name(), to.name(), weight)
    }

    /// Creates an edge between two node names
    pub fn between(from: impl Into<String>, to: impl Into<String>, weight: W) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Replaces the weight of the edge
    pub fn with_weight(mut self, weight: W) -> Self {
        self.weight = weight;
        self
    }

    /// Name of the start node
    pub fn from(&self) -> &str {
        &self.from
    }

    /// Name of the end node
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Weight of the edge
    pub fn weight(&self) -> W {
        self.weight
    }

    /// Returns a new edge with the same weight and swapped endpoints
    pub fn reversed(&self) -> Self {
        Edge {
            from: self.to.clone(),
            to: self.from.clone(),
            weight: self.weight,
        }
    }

    /// Total order by weight alone; NaN sorts after every number.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        OrderedFloat(self.weight).cmp(&OrderedFloat(other.weight))
    }
}

/// Sorts edges by ascending weight
pub fn sort_by_weight<W: Float>(edges: &mut [Edge<W>]) {
    edges.sort_by(|a, b| a.cmp_weight(b));
}

impl<W> fmt::Display for Edge<W>
where
    W: Float + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} with weight {}", self.from, self.to, self.weight)
    }
}
