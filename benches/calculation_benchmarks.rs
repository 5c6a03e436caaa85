//! Performance benchmarks for the payroll and alert engines.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks:
//! - Single payroll computation
//! - Date classification for one tracked date
//! - Batch processing of 100 and 1000 payroll runs
//! - Alert collection across a fleet
//! - Summary scaling with record count

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;

use site_payroll_engine::calculation::{classify_date, compute_payroll, process_payroll};
use site_payroll_engine::config::PayrollRules;
use site_payroll_engine::models::{
    AttendanceInput, DeductionSet, PayPeriod, PayrollInputs, PayrollRecord, RateProfile,
    TrackedDate, TrackedEntity,
};
use site_payroll_engine::reporting::{collect_alerts, summarize_payroll};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
}

fn pay_period() -> PayPeriod {
    PayPeriod::new(
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 3, 15).unwrap(),
    )
    .unwrap()
}

/// Create inputs that vary slightly with `i` so no two runs are identical.
fn create_inputs(i: usize) -> PayrollInputs {
    PayrollInputs {
        rate: RateProfile::new(Decimal::from(700 + (i % 300) as i64)),
        attendance: AttendanceInput {
            working_days: Decimal::from(10 + (i % 12) as i64),
            overtime_hours: Decimal::new((i % 40) as i64, 1),
            late_minutes: Decimal::from((i % 90) as i64),
        },
        deductions: DeductionSet {
            sss: Decimal::from(500),
            philhealth: Decimal::from(200),
            pagibig: Decimal::from(100),
            gbond: Decimal::ZERO,
            others: Decimal::new(2550, 2),
        },
    }
}

fn create_records(count: usize) -> Vec<PayrollRecord> {
    let rules = PayrollRules::default();
    (0..count)
        .map(|i| {
            process_payroll(format!("emp_{:04}", i), pay_period(), create_inputs(i), &rules)
                .unwrap()
        })
        .collect()
}

/// Create a fleet where each vehicle has renewal and maintenance dates
/// spread around `today()`.
fn create_fleet(count: usize) -> Vec<TrackedEntity> {
    (0..count)
        .map(|i| {
            let offset = (i as i64 % 120) - 40;
            TrackedEntity::new(
                format!("Vehicle {:04}", i),
                vec![
                    TrackedDate::new("LTO Renewal", Some(today() + Duration::days(offset))),
                    TrackedDate::new("Maintenance", Some(today() + Duration::days(offset / 2)))
                        .with_window(14),
                    TrackedDate::new("Insurance", None),
                ],
            )
        })
        .collect()
}

/// Benchmark: One payroll computation with audit trace.
///
/// Target: < 10µs mean
fn bench_single_payroll(c: &mut Criterion) {
    let inputs = create_inputs(7);

    c.bench_function("single_payroll", |b| {
        b.iter(|| black_box(compute_payroll(black_box(&inputs))))
    });
}

/// Benchmark: Classify one tracked date.
fn bench_classify_date(c: &mut Criterion) {
    let date = Some(today() + Duration::days(12));

    c.bench_function("classify_date", |b| {
        b.iter(|| black_box(classify_date(black_box(date), today(), 30)))
    });
}

/// Benchmark: Process 100 payroll runs into records.
fn bench_batch_100(c: &mut Criterion) {
    let rules = PayrollRules::default();
    let inputs: Vec<PayrollInputs> = (0..100).map(create_inputs).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(100));

    group.bench_function("100_payroll_runs", |b| {
        b.iter(|| {
            let records: Vec<PayrollRecord> = inputs
                .iter()
                .enumerate()
                .map(|(i, input)| {
                    process_payroll(format!("emp_{:04}", i), pay_period(), *input, &rules)
                        .unwrap()
                })
                .collect();
            black_box(records)
        })
    });

    group.finish();
}

/// Benchmark: Process 1000 payroll runs and summarize them.
fn bench_batch_1000(c: &mut Criterion) {
    let rules = PayrollRules::default();
    let inputs: Vec<PayrollInputs> = (0..1000).map(create_inputs).collect();

    let mut group = c.benchmark_group("batch");
    group.throughput(Throughput::Elements(1000));
    group.sample_size(10);

    group.bench_function("1000_payroll_runs", |b| {
        b.iter(|| {
            let records: Vec<PayrollRecord> = inputs
                .iter()
                .enumerate()
                .map(|(i, input)| {
                    process_payroll(format!("emp_{:04}", i), pay_period(), *input, &rules)
                        .unwrap()
                })
                .collect();
            black_box(summarize_payroll(&records))
        })
    });

    group.finish();
}

/// Benchmark: Collect alerts across fleets of increasing size.
fn bench_fleet_alerts(c: &mut Criterion) {
    let mut group = c.benchmark_group("fleet_alerts");

    for count in [10, 100, 1000] {
        let fleet = create_fleet(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("vehicles", count), &fleet, |b, fleet| {
            b.iter(|| black_box(collect_alerts(black_box(fleet), today())))
        });
    }

    group.finish();
}

/// Benchmark: Summary scaling with record count.
fn bench_summary_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary_scaling");

    for count in [10, 100, 1000] {
        let records = create_records(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("records", count), &records, |b, records| {
            b.iter(|| black_box(summarize_payroll(black_box(records))))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_payroll,
    bench_classify_date,
    bench_batch_100,
    bench_batch_1000,
    bench_fleet_alerts,
    bench_summary_scaling,
);
criterion_main!(benches);
