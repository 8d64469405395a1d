//! Benchmarks for batch expansion and canonicalization throughput.

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use loadgen_core::RequestedSku;
use loadgen_engine::{Engine, PricingRow, PricingSheet};
use loadgen_refdata::ReferenceTables;

fn pricing_row(sku: &str) -> PricingRow {
    PricingRow {
        sku: sku.to_string(),
        plan: Some("Platinum".to_string()),
        term: Some("12".to_string()),
        loss_cost: Some("120.00".to_string()),
        reserve: Some("30.00".to_string()),
        uw_fee: Some("15.00".to_string()),
        hic_cost: Some("10.00".to_string()),
        labor_rate: Some("50.00".to_string()),
        trip_charge: Some("25.00".to_string()),
        coverage_type: Some("Full".to_string()),
        region: Some("SE".to_string()),
        trade: Some("HVAC".to_string()),
        performance_level: Some("Standard".to_string()),
        asset_name: Some("Split System AC".to_string()),
    }
}

fn fixture(skus: usize) -> (Engine, Vec<RequestedSku>) {
    let rows = (0..skus).map(|n| pricing_row(&format!("HSYS{n:04}"))).collect();
    let engine = Engine::new(
        PricingSheet::with_standard_columns(rows),
        ReferenceTables::default(),
        NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
    )
    .unwrap();
    let requested = (0..skus)
        .map(|n| RequestedSku::new(format!("HSYS{n:04}"), "1001", "DG-07"))
        .collect();
    (engine, requested)
}

fn bench_batch_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch_run");
    for size in [10usize, 100, 1000] {
        let (engine, requested) = fixture(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(engine.run(black_box(&requested)).unwrap()))
        });
    }
    group.finish();
}

fn bench_table_build(c: &mut Criterion) {
    c.bench_function("pricing_table_build_1000", |b| {
        b.iter(|| {
            let rows = (0..1000).map(|n| pricing_row(&format!("HSYS{n:04}"))).collect();
            let sheet = PricingSheet::with_standard_columns(rows);
            black_box(
                Engine::new(
                    sheet,
                    ReferenceTables::default(),
                    NaiveDate::from_ymd_opt(2026, 9, 1).unwrap(),
                )
                .unwrap(),
            )
        })
    });
}

criterion_group!(benches, bench_batch_run, bench_table_build);
criterion_main!(benches);
