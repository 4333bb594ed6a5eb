use colored::*;
use graph_paths::{Graph, GraphOptions, ShortestPath};

// Example from https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
const MATRIX: &str = "
    0  7  9  0  0 14
    7  0  10 15 0 0
    9  10 0  11 0 2
    0  15 11 0  6 0
    0  0  0  6  0 9
    14 0  2  0  9 0
";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let graph: Graph = Graph::from_adjacency_matrix(MATRIX, GraphOptions::undirected())?;
    let start = &graph.nodes()[0];

    println!(
        "Graph has {} nodes and {} edge records",
        graph.order(),
        graph.size()
    );
    println!("Routes from {}:", start.to_string().bright_white());

    let dijkstra = ShortestPath::new(&graph, start)?;
    for node in graph.nodes() {
        let distance = dijkstra.shortest_distance_to(node).unwrap_or(f64::INFINITY);
        match dijkstra.shortest_path_to(node) {
            Some(path) => {
                let hops: Vec<String> = path.iter().map(|n| n.to_string()).collect();
                println!(
                    "  {} {} via {}",
                    node.to_string().green(),
                    format!("{:.1}", distance).yellow(),
                    hops.join(" -> ")
                );
            }
            None if distance == 0.0 => println!("  {} is the start", node.to_string().cyan()),
            None => println!("  {} unreachable", node.to_string().red()),
        }
    }

    Ok(())
}
