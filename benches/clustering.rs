use criterion::{black_box, criterion_group, criterion_main, Criterion};
use flock::cluster::KMedoids;
use rand::prelude::*;

fn bench_kmedoids(c: &mut Criterion) {
    let mut group = c.benchmark_group("kmedoids");

    // Synthetic tweets over a small vocabulary so clusters overlap.
    let mut rng = StdRng::seed_from_u64(42);
    let n = 1000;
    let words_per_doc = 8;
    let vocab = 200;
    let k = 10;

    let docs: Vec<String> = (0..n)
        .map(|_| {
            (0..words_per_doc)
                .map(|_| format!("w{}", rng.random_range(0..vocab)))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();

    group.bench_function("fit_n1000_w8_k10", |b| {
        b.iter(|| {
            let model = KMedoids::new(k).with_max_iter(10).with_seed(42);
            model.fit(black_box(&docs)).unwrap();
        })
    });

    group.finish();
}

criterion_group!(benches, bench_kmedoids);
criterion_main!(benches);
