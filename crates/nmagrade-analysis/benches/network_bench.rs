//! Network characterization benchmarks.
//!
//! Run with: cargo bench -p nmagrade-analysis --bench network_bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nmagrade_analysis::network::characterize;
use nmagrade_analysis::recommendation::recommend;
use nmagrade_analysis::StudyArmRecord;
use nmagrade_core::types::OutcomeType;

/// `studies` three-arm studies cycling through `treatments` treatments.
fn make_records(studies: usize, treatments: usize) -> Vec<StudyArmRecord> {
    let mut records = Vec::with_capacity(studies * 3);
    for s in 0..studies {
        for k in 0..3 {
            let t = (s + k * (s % 5 + 1)) % treatments;
            records.push(StudyArmRecord::binary(
                format!("S{s:04}"),
                format!("T{t:03}"),
                (s % 17) as i64,
                100 + (s % 50) as i64,
            ));
        }
    }
    records
}

fn bench_characterize(c: &mut Criterion) {
    let mut group = c.benchmark_group("characterize");

    for (studies, treatments) in [(20, 8), (200, 30), (1000, 80)] {
        let records = make_records(studies, treatments);
        group.bench_with_input(
            BenchmarkId::new("binary", format!("{studies}x{treatments}")),
            &records,
            |b, records| {
                b.iter(|| characterize(records, OutcomeType::Binary));
            },
        );
    }
    group.finish();
}

fn bench_recommend(c: &mut Criterion) {
    let ch = characterize(&make_records(200, 30), OutcomeType::Binary);
    c.bench_function("recommend", |b| {
        b.iter(|| recommend(&ch, OutcomeType::Binary).unwrap());
    });
}

criterion_group!(benches, bench_characterize, bench_recommend);
criterion_main!(benches);
