use rand::prelude::*;

use crate::graph::matrix::node_name;
use crate::graph::{Edge, Graph, GraphOptions, Node};
use crate::Result;

/// Generates a random graph with n nodes and about `edge_factor * n` edges
/// with weights in [1, 100).
pub fn generate_random(n: usize, edge_factor: f64, options: GraphOptions) -> Result<Graph> {
    generate_random_with(&mut rand::thread_rng(), n, edge_factor, options)
}

/// Same as [`generate_random`] with a caller-supplied random generator
pub fn generate_random_with<R: Rng>(
    rng: &mut R,
    n: usize,
    edge_factor: f64,
    options: GraphOptions,
) -> Result<Graph> {
    let mut graph = Graph::with_options(options);
    for row in 1..=n {
        graph.add_node(Node::new(node_name(row)))?;
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(1..=n);
        let v = rng.gen_range(1..=n);
        // Avoid self-loops and pairs that already exist in either direction
        if u == v {
            continue;
        }
        let (from, to) = (node_name(u), node_name(v));
        if graph.find_edge_named(&from, &to).is_some()
            || (graph.is_undirected() && graph.find_edge_named(&to, &from).is_some())
        {
            continue;
        }
        let weight = rng.gen_range(1.0..100.0);
        graph.add_edge(Edge::between(from, to, weight))?;
    }

    Ok(graph)
}

/// Generates a width*height grid with unit weights between orthogonal neighbours.
///
/// Nodes are named `node 1` .. `node width*height` row by row. A directed grid
/// gets one edge in each direction between neighbours.
pub fn generate_grid(width: usize, height: usize, options: GraphOptions) -> Result<Graph> {
    let mut graph = Graph::with_options(options);
    let name = |x: usize, y: usize| node_name(y * width + x + 1);

    for y in 0..height {
        for x in 0..width {
            graph.add_node(Node::new(name(x, y)))?;
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut neighbours = Vec::with_capacity(2);
            if x + 1 < width {
                neighbours.push(name(x + 1, y));
            }
            if y + 1 < height {
                neighbours.push(name(x, y + 1));
            }

            for neighbour in neighbours {
                graph.add_edge(Edge::between(name(x, y), neighbour.clone(), 1.0))?;
                if graph.is_directed() {
                    graph.add_edge(Edge::between(neighbour, name(x, y), 1.0))?;
                }
            }
        }
    }

    Ok(graph)
}
