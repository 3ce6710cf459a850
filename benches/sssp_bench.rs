use batch_sssp::graph::generators::{mirror_digraph, random_graph};
use batch_sssp::{aggregate, BellmanFord, Dijkstra, ShortestPathAlgorithm, Statistic};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_engines(c: &mut Criterion) {
    let graph = random_graph(1_000, 8_000, 0.1..10.0);
    let digraph = mirror_digraph(&graph);

    c.bench_function("dijkstra_1k_vertices", |b| {
        b.iter(|| {
            Dijkstra::new()
                .compute_shortest_paths(black_box(&graph), 0)
                .unwrap()
        })
    });

    c.bench_function("bellman_ford_1k_vertices", |b| {
        b.iter(|| {
            BellmanFord::new()
                .compute_shortest_paths(black_box(&digraph), 0)
                .unwrap()
        })
    });
}

fn bench_batch(c: &mut Criterion) {
    let graphs: Vec<_> = (0..32).map(|_| random_graph(200, 1_200, 0.1..10.0)).collect();

    c.bench_function("batch_median_32_instances", |b| {
        b.iter(|| aggregate(&Dijkstra::new(), black_box(&graphs), 0, 199, Statistic::Median).unwrap())
    });
}

criterion_group!(benches, bench_engines, bench_batch);
criterion_main!(benches);
