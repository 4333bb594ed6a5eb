use std::collections::VecDeque;
use std::fmt::Debug;

use log::debug;
use num_traits::Float;
use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Node};
use crate::{Error, Result};

/// What to do with an edge whose weight is zero, negative or NaN
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NonPositivePolicy {
    /// Leave the edge out of the traversal
    #[default]
    Skip,
    /// Fail with `NonPositiveWeight`
    Reject,
}

/// Options for [`PositiveWeightSearch`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub non_positive: NonPositivePolicy,
}

/// Breadth-first relaxation restricted to strictly positive edge weights.
///
/// Nodes are processed in first-in first-out order, each at most once, and
/// edges into processed nodes are ignored. Only distances are produced.
///
/// Precondition: every edge that takes part in the search has a weight
/// greater than zero. Under [`NonPositivePolicy::Skip`] other edges are
/// treated as absent; under [`NonPositivePolicy::Reject`] the search fails on
/// the first one it meets.
#[derive(Debug, Default, Clone)]
pub struct PositiveWeightSearch {
    options: SearchOptions,
}

impl PositiveWeightSearch {
    /// Creates a search with the default options
    pub fn new() -> Self {
        PositiveWeightSearch::default()
    }

    /// Creates a search with the given options
    pub fn with_options(options: SearchOptions) -> Self {
        PositiveWeightSearch { options }
    }

    /// Set how non-positive edges are handled
    pub fn with_policy(mut self, policy: NonPositivePolicy) -> Self {
        self.options.non_positive = policy;
        self
    }

    /// Options of this search
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// Length of the path found from `from` to `to`.
    ///
    /// `None` when `to` is not part of the graph, infinity when it is not
    /// reached.
    pub fn find_distance<W, P>(
        &self,
        graph: &Graph<W, P>,
        from: &Node<P>,
        to: &Node<P>,
    ) -> Result<Option<W>>
    where
        W: Float + Debug,
    {
        let lengths = self.path_lengths(graph, from)?;
        Ok(graph.index_of(to.name()).map(|index| lengths[index]))
    }

    /// Path lengths from `from` to every node, indexed by node index
    pub fn path_lengths<W, P>(&self, graph: &Graph<W, P>, from: &Node<P>) -> Result<Vec<W>>
    where
        W: Float + Debug,
    {
        let source = graph
            .index_of(from.name())
            .ok_or_else(|| Error::InvalidStartNode(from.name().to_string()))?;

        let n = graph.order();
        let mut lengths = vec![W::infinity(); n];
        let mut visited = vec![false; n];
        lengths[source] = W::zero();

        let mut frontier = VecDeque::from([source]);
        while let Some(u) = frontier.pop_front() {
            if visited[u] {
                continue;
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if visited[v] {
                    continue;
                }
                if !(weight > W::zero()) {
                    let (from, to) = (node_name(graph, u), node_name(graph, v));
                    match self.options.non_positive {
                        NonPositivePolicy::Skip => {
                            debug!("skipping edge {} -> {} with weight {:?}", from, to, weight);
                            continue;
                        }
                        NonPositivePolicy::Reject => {
                            return Err(Error::NonPositiveWeight { from, to });
                        }
                    }
                }

                let alternative = lengths[u] + weight;
                if alternative < lengths[v] {
                    lengths[v] = alternative;
                }
                frontier.push_back(v);
            }

            visited[u] = true;
        }

        Ok(lengths)
    }
}

fn node_name<W, P>(graph: &Graph<W, P>, index: usize) -> String
where
    W: Float + Debug,
{
    graph
        .node_at(index)
        .map(|node| node.name().to_string())
        .unwrap_or_default()
}
