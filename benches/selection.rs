use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use graph_paths::graph::generators::{generate_grid, generate_random_with};
use graph_paths::{Dijkstra, Graph, GraphOptions, Selection, ShortestPathAlgorithm};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_graph(c: &mut Criterion, group_name: &str, graphs: Vec<(usize, Graph)>) {
    let mut group = c.benchmark_group(group_name);

    for (size, graph) in &graphs {
        let source = &graph.nodes()[0];
        for selection in [Selection::LinearScan, Selection::BinaryHeap] {
            let dijkstra = Dijkstra::new().with_selection(selection);
            group.bench_with_input(
                BenchmarkId::new(format!("{:?}", selection), size),
                graph,
                |b, graph| {
                    b.iter(|| {
                        dijkstra
                            .compute_shortest_paths(black_box(graph), source)
                            .unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

fn random_graphs(c: &mut Criterion) {
    // Edge factor: average number of edges per node
    let edge_factor = 2.0;
    let mut rng = StdRng::seed_from_u64(42);
    let graphs = [100, 500, 1_000]
        .into_iter()
        .map(|n| {
            let graph = generate_random_with(&mut rng, n, edge_factor, GraphOptions::directed())
                .expect("generated graph");
            (n, graph)
        })
        .collect();

    bench_graph(c, "random", graphs);
}

fn grid_graphs(c: &mut Criterion) {
    let graphs = [10, 20, 30]
        .into_iter()
        .map(|side| {
            let graph = generate_grid(side, side, GraphOptions::undirected()).expect("grid graph");
            (side * side, graph)
        })
        .collect();

    bench_graph(c, "grid", graphs);
}

criterion_group!(benches, random_graphs, grid_graphs);
criterion_main!(benches);
