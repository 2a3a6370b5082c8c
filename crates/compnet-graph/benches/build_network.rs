use compnet_graph::{gen_bounded_tree, gen_path};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn build_network_bench(c: &mut Criterion) {
    c.bench_function("build_path_2k", |b| {
        b.iter(|| {
            let net = gen_path(2_000).unwrap();
            black_box(net);
        });
    });

    c.bench_function("build_bounded_tree_2k", |b| {
        b.iter(|| {
            let mut rng = StdRng::seed_from_u64(42);
            let net = gen_bounded_tree(2_000, 3, &mut rng).unwrap();
            black_box(net);
        });
    });
}

criterion_group!(benches, build_network_bench);
criterion_main!(benches);
