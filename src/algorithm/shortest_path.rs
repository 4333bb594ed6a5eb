use std::fmt::Debug;

use num_traits::Float;

use crate::algorithm::{Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Node};
use crate::{Error, Result};

/// Shortest distances and paths from one start node of a graph.
///
/// The run is performed eagerly on construction. It borrows the graph for
/// its whole lifetime, so the graph cannot change under the results.
#[derive(Debug)]
pub struct ShortestPath<'g, W = f64, P = ()>
where
    W: Float,
{
    graph: &'g Graph<W, P>,
    start: &'g Node<P>,
    result: ShortestPathResult<W>,
}

impl<'g, W, P> ShortestPath<'g, W, P>
where
    W: Float + Debug,
{
    /// Runs Dijkstra's algorithm from `start`.
    ///
    /// Fails with `InvalidStartNode` when `start` is not a node of `graph`.
    pub fn new(graph: &'g Graph<W, P>, start: &Node<P>) -> Result<Self> {
        Self::with_algorithm(graph, start, &Dijkstra::new())
    }

    /// Runs `algorithm` from `start`.
    ///
    /// Fails with `InvalidStartNode` when `start` is not a node of `graph` or
    /// when the result is not rooted at `start`.
    pub fn with_algorithm<A>(graph: &'g Graph<W, P>, start: &Node<P>, algorithm: &A) -> Result<Self>
    where
        A: ShortestPathAlgorithm<W, P>,
    {
        let result = algorithm.compute_shortest_paths(graph, start)?;
        let start = graph
            .index_of(start.name())
            .filter(|&index| index == result.source)
            .and_then(|index| graph.node_at(index))
            .ok_or_else(|| Error::InvalidStartNode(start.name().to_string()))?;
        Ok(ShortestPath {
            graph,
            start,
            result,
        })
    }

    /// The node the run started from
    pub fn start(&self) -> &'g Node<P> {
        self.start
    }

    /// Raw distances and predecessors, indexed by node index
    pub fn result(&self) -> &ShortestPathResult<W> {
        &self.result
    }

    /// Distance from the start node.
    ///
    /// Zero for the start node, infinity for an unreachable node and `None`
    /// for a node that is not part of the graph.
    pub fn shortest_distance_to(&self, node: &Node<P>) -> Option<W> {
        let index = self.graph.index_of(node.name())?;
        self.result.distance(index)
    }

    /// Nodes of a shortest path from the start node to `node`, both included.
    ///
    /// `None` for the start node itself, for unreachable nodes and for nodes
    /// that are not part of the graph.
    pub fn shortest_path_to(&self, node: &Node<P>) -> Option<Vec<&'g Node<P>>> {
        let index = self.graph.index_of(node.name())?;
        let path = self.result.path(index)?;
        Some(
            path.into_iter()
                .filter_map(|i| self.graph.node_at(i))
                .collect(),
        )
    }
}
