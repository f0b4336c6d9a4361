use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rgadata::collection::ScanCollection;
use rgadata::format::DecodeConfig;
use rgadata::scan::ScanDocument;
use std::io::Cursor;
use std::sync::Arc;

#[path = "../tests/common/mod.rs"]
mod common;

use common::Recording;

/// A 1-200 AMU recording at 10 points per AMU
fn recording(cycles: usize) -> Recording {
    Recording {
        start_mass: 1.0,
        stop_mass: 200.0,
        points_per_amu: 10.0,
        gases: vec!["H2", "He", "N2", "O2", "Ar", "CO2", "H2O", "CH4"],
        cycles,
        ..Recording::default()
    }
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("decode");

    for cycles in [10, 100, 1000] {
        let bytes = recording(cycles).to_bytes();
        group.throughput(Throughput::Bytes(bytes.len() as u64));

        for (label, skip_pvst) in [("full", false), ("skip_pvst", true)] {
            let config = DecodeConfig::default().with_skip_pvst(skip_pvst);
            group.bench_with_input(
                BenchmarkId::new(label, format!("{}cycles", cycles)),
                &bytes,
                |b, bytes| {
                    b.iter(|| {
                        ScanDocument::from_reader(Cursor::new(bytes.as_slice()), &config).unwrap()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_collection(c: &mut Criterion) {
    let mut group = c.benchmark_group("collection");
    let bytes = recording(50).to_bytes();
    let documents: Vec<Arc<ScanDocument>> = (0..24)
        .map(|_| {
            Arc::new(
                ScanDocument::from_reader(Cursor::new(bytes.as_slice()), &DecodeConfig::default())
                    .unwrap(),
            )
        })
        .collect();

    group.bench_function("add_remove_24", |b| {
        b.iter(|| {
            let mut collection = ScanCollection::new();
            for doc in &documents {
                collection.add(Arc::clone(doc));
            }
            for doc in documents.iter().rev() {
                collection.remove(doc);
            }
            collection
        })
    });

    group.bench_function("view_bounds_24", |b| {
        let mut collection = ScanCollection::new();
        for doc in &documents {
            collection.add(Arc::clone(doc));
        }
        b.iter(|| collection.view_bounds())
    });

    group.finish();
}

criterion_group!(benches, bench_decode, bench_collection);
criterion_main!(benches);
