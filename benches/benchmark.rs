use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::prelude::StdRng;
use rand::{Rng, SeedableRng};
use weighted_digraph::graph::{
    BaseGraph, EdgeListGraph, HashMapGraph, MutableGraph, VertexMapGraph, Weight,
};

const ORDER: u32 = 200;
const EDGES: usize = 2_000;

fn random_edges() -> Vec<(u32, u32, Weight)> {
    let mut rng = StdRng::seed_from_u64(0);
    (0..EDGES)
        .map(|_| {
            (
                rng.gen_range(0..ORDER),
                rng.gen_range(0..ORDER),
                rng.gen_range(1..100),
            )
        })
        .collect()
}

fn build<G: MutableGraph<u32>>(edges: &[(u32, u32, Weight)]) -> G {
    let mut graph = G::with_capacity(ORDER as usize);
    for &(u, v, w) in edges {
        let _ = graph.set(u, v, w);
    }
    graph
}

fn bench_representation<G: MutableGraph<u32>>(c: &mut Criterion, name: &str) {
    let edges = random_edges();
    let graph: G = build(&edges);

    c.bench_function(&format!("{}_build", name), |b| {
        b.iter(|| build::<G>(black_box(&edges)))
    });

    c.bench_function(&format!("{}_sources", name), |b| {
        b.iter(|| {
            for u in 0..ORDER {
                black_box(graph.sources(&u));
            }
        })
    });

    c.bench_function(&format!("{}_targets", name), |b| {
        b.iter(|| {
            for u in 0..ORDER {
                black_box(graph.targets(&u));
            }
        })
    });

    c.bench_function(&format!("{}_remove", name), |b| {
        b.iter(|| {
            let mut graph = graph.clone();
            for u in (0..ORDER).step_by(10) {
                black_box(graph.remove(&u));
            }
        })
    });
}

fn edge_list_graph(c: &mut Criterion) {
    bench_representation::<EdgeListGraph<u32>>(c, "edge_list_graph");
}

fn vertex_map_graph(c: &mut Criterion) {
    bench_representation::<VertexMapGraph<u32>>(c, "vertex_map_graph");
}

fn hashmap_graph(c: &mut Criterion) {
    bench_representation::<HashMapGraph<u32>>(c, "hashmap_graph");
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = edge_list_graph, vertex_map_graph, hashmap_graph
}
criterion_main!(benches);
