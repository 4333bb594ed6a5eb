use std::fmt::Debug;

use log::{debug, trace};
use num_traits::Float;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::MinPriorityQueue;
use crate::graph::{Graph, Node};
use crate::{Error, Result};

/// How the next node to settle is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selection {
    /// Scan every unsettled node, O(V^2)
    #[default]
    LinearScan,
    /// Pop from a binary heap with lazy deletion, O((V + E) log V)
    BinaryHeap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DijkstraOptions {
    pub selection: Selection,
}

/// Classic Dijkstra's algorithm with a settled/unsettled partition.
///
/// Among unsettled nodes at equal distance the one inserted into the graph
/// first is settled first, whatever the selection strategy.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    options: DijkstraOptions,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra::default()
    }

    /// Creates a Dijkstra algorithm instance with the given options
    pub fn with_options(options: DijkstraOptions) -> Self {
        Dijkstra { options }
    }

    /// Set the strategy used to pick the next node to settle
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.options.selection = selection;
        self
    }

    /// Options of this instance
    pub fn options(&self) -> DijkstraOptions {
        self.options
    }
}

/// Working state of one run
struct Run<W> {
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    settled: Vec<bool>,
}

impl<W> Run<W>
where
    W: Float + Debug,
{
    fn new(node_count: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); node_count];
        distances[source] = W::zero();
        Run {
            distances,
            predecessors: vec![None; node_count],
            settled: vec![false; node_count],
        }
    }

    /// Settles `u` and relaxes its edges into unsettled nodes, returning the
    /// nodes whose distance improved
    fn settle<P>(&mut self, graph: &Graph<W, P>, u: usize) -> Vec<usize> {
        self.settled[u] = true;
        let mut improved = Vec::new();

        for (v, weight) in graph.outgoing_edges(u) {
            if self.settled[v] {
                continue;
            }
            let alternative = self.distances[u] + weight;
            if alternative < self.distances[v] {
                trace!("relax {} -> {}: {:?} -> {:?}", u, v, self.distances[v], alternative);
                self.distances[v] = alternative;
                self.predecessors[v] = Some(u);
                improved.push(v);
            }
        }

        improved
    }

    fn unsettled_minimum(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for v in 0..self.distances.len() {
            if self.settled[v] {
                continue;
            }
            match best {
                Some(b) if self.distances[v] >= self.distances[b] => {}
                _ => best = Some(v),
            }
        }
        best
    }

    fn run_linear_scan<P>(&mut self, graph: &Graph<W, P>) {
        while let Some(u) = self.unsettled_minimum() {
            self.settle(graph, u);
        }
    }

    fn run_binary_heap<P>(&mut self, graph: &Graph<W, P>, source: usize) {
        let mut queue = MinPriorityQueue::with_capacity(graph.order());
        queue.push(source, OrderedFloat(W::zero()));

        while let Some((u, dist_u)) = queue.pop() {
            // Stale entry or already settled
            if self.settled[u] || dist_u.into_inner() > self.distances[u] {
                continue;
            }
            for v in self.settle(graph, u) {
                queue.push(v, OrderedFloat(self.distances[v]));
            }
        }
    }
}

impl<W, P> ShortestPathAlgorithm<W, P> for Dijkstra
where
    W: Float + Debug,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(
        &self,
        graph: &Graph<W, P>,
        start: &Node<P>,
    ) -> Result<ShortestPathResult<W>> {
        let source = graph
            .index_of(start.name())
            .ok_or_else(|| Error::InvalidStartNode(start.name().to_string()))?;

        let mut run = Run::new(graph.order(), source);
        match self.options.selection {
            Selection::LinearScan => run.run_linear_scan(graph),
            Selection::BinaryHeap => run.run_binary_heap(graph, source),
        }

        debug!(
            "Dijkstra ({:?}) from {} over {} nodes",
            self.options.selection,
            start.name(),
            graph.order()
        );

        Ok(ShortestPathResult {
            distances: run.distances,
            predecessors: run.predecessors,
            source,
        })
    }
}
