use graph_paths::graph::matrix::node_name;
use graph_paths::{Edge, Graph, GraphOptions, Node};

#[test]
fn test_node_without_payload() {
    let node: Node = Node::new("node 1");
    assert_eq!(node.name(), "node 1");
    assert!(node.payload().is_none());
    assert!(node.graph().is_none());
}

#[test]
fn test_node_with_payload() {
    let node = Node::with_payload("depot", vec![1, 2, 3]);
    assert_eq!(node.payload(), Some(&vec![1, 2, 3]));
}

#[test]
fn test_node_equality_uses_name_only() {
    let a = Node::with_payload("node 1", 1);
    let b = Node::with_payload("node 1", 2);
    let c = Node::with_payload("node 2", 1);
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_node_display_is_name() {
    let node: Node = Node::new("node 1");
    assert_eq!(node.to_string(), "node 1");
}

#[test]
fn test_add_node_attaches_graph() {
    let mut graph: Graph = Graph::new();
    graph.add_node(Node::new("node 1")).unwrap();

    let stored = graph.find_node_by_name("node 1").unwrap();
    assert_eq!(stored.graph(), Some(graph.id()));
}

#[test]
fn test_edges_is_none_without_owning_graph() {
    let mut graph: Graph = Graph::new();
    let standalone = Node::new("node 1");
    graph.add_node(standalone.clone()).unwrap();

    // The caller's copy was never inserted
    assert!(standalone.edges(&graph).is_none());

    let other: Graph = Graph::new();
    let stored = graph.find_node_by_name("node 1").unwrap();
    assert!(stored.edges(&other).is_none());
    assert_eq!(stored.edges(&graph).unwrap().len(), 0);
}

#[test]
fn test_edges_lists_outgoing_edges() {
    let mut graph: Graph = Graph::directed();
    let a = Node::new("a");
    let b = Node::new("b");
    graph.add_node(a.clone()).unwrap().add_node(b.clone()).unwrap();
    graph.add_edge(Edge::weighted(&a, &b, 4.0)).unwrap();

    let stored = graph.find_node_by_name("a").unwrap();
    assert_eq!(stored.edges(&graph).unwrap(), vec![&Edge::weighted(&a, &b, 4.0)]);
}

#[test]
fn test_neighbours_from_matrix() {
    let matrix = "
        0 1 1
        0 0 0
        0 0 0
    ";
    let graph: Graph = Graph::from_adjacency_matrix(matrix, GraphOptions::directed()).unwrap();
    let node_1 = graph.find_node_by_name(&node_name(1)).unwrap();
    let node_2 = graph.find_node_by_name(&node_name(2)).unwrap();
    let node_3 = graph.find_node_by_name(&node_name(3)).unwrap();

    assert_eq!(node_1.neighbours(&graph), vec![node_2, node_3]);
    assert!(node_2.neighbours(&graph).is_empty());
    assert!(node_3.neighbours(&graph).is_empty());
}
