use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use catalog_core::ProductId;
use catalog_products::{rank, seed_products, Product};
use chrono::Utc;

/// The sample catalog repeated `copies` times, with distinct ids.
fn catalog(copies: usize) -> Vec<Product> {
    let now = Utc::now();
    let seed = seed_products().unwrap();
    (0..copies)
        .flat_map(|_| seed.iter().cloned())
        .enumerate()
        .map(|(i, p)| p.into_product(ProductId::from_i64(i as i64 + 1), now, now))
        .collect()
}

fn bench_rank(c: &mut Criterion) {
    let mut group = c.benchmark_group("rank");

    for copies in [1usize, 20, 200] {
        let products = catalog(copies);
        group.throughput(Throughput::Elements(products.len() as u64));

        for query in ["phone", "pro", ""] {
            group.bench_with_input(
                BenchmarkId::new(format!("q={query:?}"), products.len()),
                &products,
                |b, products| {
                    b.iter(|| rank(black_box(query), products.iter().cloned()));
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_rank);
criterion_main!(benches);
