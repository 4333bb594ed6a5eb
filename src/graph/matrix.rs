//! Graph construction from a dense adjacency matrix.
//!
//! Row `i` and column `j` (both 1-based) describe the edge from node `i` to
//! node `j`; a zero cell means "no edge". Nodes are named `node 1`,
//! `node 2`, ... in row order.

use std::fmt::Debug;

use num_traits::Float;

use crate::graph::{Edge, Graph, GraphOptions, Node};
use crate::{Error, Result};

/// Name given to the node of the 1-based matrix row `row`
pub fn node_name(row: usize) -> String {
    format!("node {}", row)
}

/// Parses whitespace-separated numeric rows, ignoring blank lines.
///
/// Infinite and NaN tokens are rejected.
pub fn parse_matrix<W: Float>(text: &str) -> Result<Vec<Vec<W>>> {
    let mut rows = Vec::new();

    for (line_no, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                W::from_str_radix(token, 10)
                    .ok()
                    .filter(|weight| weight.is_finite())
                    .ok_or_else(|| Error::MalformedMatrix {
                        line: line_no + 1,
                        reason: format!("invalid number {:?}", token),
                    })
            })
            .collect::<Result<Vec<W>>>()?;
        rows.push(row);
    }

    Ok(rows)
}

impl<W, P> Graph<W, P>
where
    W: Float + Debug,
{
    /// Builds a graph from the textual form of an adjacency matrix
    pub fn from_adjacency_matrix(text: &str, options: GraphOptions) -> Result<Self> {
        let rows = parse_matrix(text)?;
        Self::from_matrix(&rows, options)
    }

    /// Builds a graph from a square matrix of weights.
    ///
    /// For an undirected graph a cell whose mirror was already inserted from
    /// the opposite cell is skipped when both weights agree. Every cell must
    /// be finite.
    pub fn from_matrix(rows: &[Vec<W>], options: GraphOptions) -> Result<Self> {
        let n = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != n {
                return Err(Error::MalformedMatrix {
                    line: row + 1,
                    reason: format!("expected {} cells, found {}", n, cells.len()),
                });
            }
            if let Some(col) = cells.iter().position(|weight| !weight.is_finite()) {
                return Err(Error::MalformedMatrix {
                    line: row + 1,
                    reason: format!("non-finite weight in column {}", col + 1),
                });
            }
        }

        let mut graph = Self::with_options(options);
        for row in 1..=n {
            graph.add_node(Node::new(node_name(row)))?;
        }

        for (i, cells) in rows.iter().enumerate() {
            for (j, &weight) in cells.iter().enumerate() {
                if weight == W::zero() {
                    continue;
                }

                let (from, to) = (node_name(i + 1), node_name(j + 1));
                if graph.is_undirected() && i != j {
                    if let Some(existing) = graph.find_edge_named(&from, &to) {
                        if existing.weight() == weight {
                            continue;
                        }
                        return Err(Error::AsymmetricMatrix {
                            row: i + 1,
                            col: j + 1,
                        });
                    }
                }

                graph.add_edge(Edge::between(from, to, weight))?;
            }
        }

        Ok(graph)
    }
}
