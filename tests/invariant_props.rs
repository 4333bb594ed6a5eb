use graph_paths::graph::generators::generate_random_with;
use graph_paths::graph::matrix::node_name;
use graph_paths::{
    Dijkstra, Edge, Error, Graph, GraphOptions, Node, Selection, ShortestPathAlgorithm,
};
use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

const NODES: usize = 8;

fn build(directed: bool, edges: &[(usize, usize, u32)]) -> Graph {
    let mut graph = Graph::with_options(GraphOptions::default().with_directed(directed));
    for row in 1..=NODES {
        graph.add_node(Node::new(node_name(row))).unwrap();
    }
    for &(from, to, weight) in edges {
        let size_before = graph.size();
        let edge = Edge::between(node_name(from), node_name(to), weight as f64);
        if graph.add_edge(edge).is_err() {
            assert_eq!(graph.size(), size_before);
        }
    }
    graph
}

fn edge_list() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
    prop::collection::vec((1..=NODES, 1..=NODES, 1u32..50), 0..40)
}

proptest! {
    #[test]
    fn order_and_size_match_contents(directed in any::<bool>(), edges in edge_list()) {
        let graph = build(directed, &edges);
        prop_assert_eq!(graph.order(), graph.nodes().len());
        prop_assert_eq!(graph.size(), graph.edges().len());
        prop_assert_eq!(graph.size(), graph.edges().iter().count());
    }

    #[test]
    fn undirected_edges_are_mirrored(edges in edge_list()) {
        let graph = build(false, &edges);
        for edge in graph.edges().iter() {
            let mirror = graph.find_edge_named(edge.to(), edge.from());
            prop_assert_eq!(mirror.map(|m| m.weight()), Some(edge.weight()));
        }
    }

    #[test]
    fn duplicate_node_names_are_rejected(row in 1..=NODES) {
        let mut graph = build(true, &[]);
        let result = graph.add_node(Node::new(node_name(row)));
        prop_assert_eq!(result.err(), Some(Error::NodeAlreadyExists(node_name(row))));
        prop_assert_eq!(graph.order(), NODES);
    }

    #[test]
    fn reversed_twice_is_identity(from in "[a-z]{1,6}", to in "[a-z]{1,6}", weight in -1e6f64..1e6) {
        let edge = Edge::between(from, to, weight);
        prop_assert_eq!(edge.reversed().reversed(), edge);
    }

    #[test]
    fn heap_and_scan_agree(seed in any::<u64>(), directed in any::<bool>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let options = GraphOptions::default().with_directed(directed);
        let graph = generate_random_with(&mut rng, 40, 2.0, options).unwrap();
        let start = &graph.nodes()[0];

        let scan = Dijkstra::new().compute_shortest_paths(&graph, start).unwrap();
        let heap = Dijkstra::new()
            .with_selection(Selection::BinaryHeap)
            .compute_shortest_paths(&graph, start)
            .unwrap();
        prop_assert_eq!(scan, heap);
    }

    #[test]
    fn start_distance_is_zero(directed in any::<bool>(), edges in edge_list(), start in 1..=NODES) {
        let graph = build(directed, &edges);
        let start = graph.find_node_by_name(&node_name(start)).unwrap();
        let run = graph_paths::ShortestPath::new(&graph, start).unwrap();
        prop_assert_eq!(run.shortest_distance_to(start), Some(0.0));
        prop_assert!(run.shortest_path_to(start).is_none());
    }
}
