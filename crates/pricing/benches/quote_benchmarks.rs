use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use iglobal_catalog::products;
use iglobal_core::Region;
use iglobal_pricing::{compute_quote, settlement_rates};

/// Quote derivation across the full catalog, both regions.
///
/// The calculator is on the interaction path (recomputed on every selection
/// change), so it should stay trivially cheap.
fn bench_compute_quote(c: &mut Criterion) {
    let catalog = products();
    let rates = settlement_rates();

    let mut group = c.benchmark_group("compute_quote");
    group.throughput(Throughput::Elements(
        (catalog.len() * Region::ALL.len()) as u64,
    ));
    group.bench_function("full_catalog_both_regions", |b| {
        b.iter(|| {
            for product in catalog {
                for region in Region::ALL {
                    let quote =
                        compute_quote(black_box(product), black_box(region), black_box(rates))
                            .unwrap();
                    black_box(quote);
                }
            }
        })
    });
    group.finish();
}

criterion_group!(benches, bench_compute_quote);
criterion_main!(benches);
