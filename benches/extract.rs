// benches/extract.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use mst_scan::specs::taxinfo;

const PAGE: &str = include_str!("../tests/fixtures/taxinfo.html");

fn bench_extract(c: &mut Criterion) {
    c.bench_function("taxinfo_extract", |b| {
        b.iter(|| {
            let rec = taxinfo::extract(black_box(PAGE));
            black_box(rec.found_count())
        })
    });

    c.bench_function("taxinfo_field_for_label", |b| {
        b.iter(|| taxinfo::field_for_label(black_box("Tình trạng")))
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
