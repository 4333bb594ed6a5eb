use std::collections::HashSet;
use std::fmt::Debug;

use log::warn;
use num_traits::Float;

use crate::graph::{Graph, Node};
use crate::Result;

/// Result of a shortest path algorithm execution, indexed by node index
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPathResult<W>
where
    W: Float,
{
    /// Distances from source to each node; infinity when unreachable
    pub distances: Vec<W>,

    /// Predecessor nodes in the shortest path tree
    pub predecessors: Vec<Option<usize>>,

    /// Source node index
    pub source: usize,
}

impl<W> ShortestPathResult<W>
where
    W: Float,
{
    /// Distance from the source to `target`, `None` if out of range
    pub fn distance(&self, target: usize) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Returns true if `target` has a finite distance
    pub fn is_reachable(&self, target: usize) -> bool {
        self.distance(target).map_or(false, |d| d < W::infinity())
    }

    /// Get the shortest path from source to target as a sequence of node
    /// indices, source first.
    ///
    /// `None` for the source itself, for unreachable targets and for indices
    /// outside the result.
    pub fn path(&self, target: usize) -> Option<Vec<usize>> {
        if target == self.source {
            return None;
        }
        self.predecessors.get(target).copied().flatten()?;

        let mut path = vec![target];
        let mut current = target;
        let mut visited = HashSet::new();

        while current != self.source {
            if !visited.insert(current) {
                warn!("cycle detected in path reconstruction at node {}", current);
                return None;
            }
            let pred = self.predecessors.get(current).copied().flatten()?;
            path.push(pred);
            current = pred;
        }

        path.reverse();
        Some(path)
    }
}

/// Trait for single-source shortest path algorithms
pub trait ShortestPathAlgorithm<W, P>
where
    W: Float + Debug,
{
    /// Compute shortest paths from `start` to every node of the graph
    fn compute_shortest_paths(
        &self,
        graph: &Graph<W, P>,
        start: &Node<P>,
    ) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
