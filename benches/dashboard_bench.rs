use chrono::{Days, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rust_decimal::Decimal;
use sales_analytics::{
    build_dashboard, classify_abc, normalize_batch, AbcThresholds, CustomerIndex,
    DashboardRequest, GroupKey, PeriodSelector, RawSale, Transaction,
};
use sales_analytics::normalize::RawAmount;
use std::hint::black_box;

const SALESPEOPLE: [&str; 6] = ["Ana", "Bruno", "Carla", "Diego", "Elisa", "Fabio"];
const STATES: [&str; 4] = ["SP", "RJ", "MG", "PR"];

fn synthetic_transactions(count: usize) -> Vec<Transaction> {
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
    (0..count)
        .map(|i| {
            let date = start + Days::new((i % 365) as u64);
            Transaction::new(
                format!("C{}", i % 700),
                SALESPEOPLE[i % SALESPEOPLE.len()],
                Decimal::new(((i * 7919) % 500_000) as i64 + 100, 2),
                date,
            )
            .with_product(format!("P{}", i % 120))
            .with_state(STATES[i % STATES.len()])
        })
        .collect()
}

fn synthetic_raw_sales(count: usize) -> Vec<RawSale> {
    (0..count)
        .map(|i| RawSale {
            customer_id: Some(format!("C{}", i % 700)),
            salesperson: Some(SALESPEOPLE[i % SALESPEOPLE.len()].to_string()),
            value: Some(RawAmount::Text(format!("{},{:02}", i % 9000, i % 100))),
            date: Some(format!("{:02}/{:02}/2025", i % 28 + 1, i % 12 + 1)),
            ..Default::default()
        })
        .collect()
}

fn benchmark_dashboard(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
    let request = DashboardRequest::default().with_period(PeriodSelector::LastDays { days: 90 });

    let mut group = c.benchmark_group("dashboard");
    for size in [1_000usize, 10_000, 50_000] {
        let transactions = synthetic_transactions(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &transactions, |b, txs| {
            b.iter(|| build_dashboard(black_box(txs), black_box(&request), today))
        });
    }
    group.finish();
}

fn benchmark_classification(c: &mut Criterion) {
    let transactions = synthetic_transactions(50_000);
    let thresholds = AbcThresholds::default();

    c.bench_function("abc_by_customer_50k", |b| {
        b.iter(|| classify_abc(black_box(&transactions), &GroupKey::Customer, &thresholds))
    });
}

fn benchmark_normalization(c: &mut Criterion) {
    let raw = synthetic_raw_sales(10_000);
    let customers = CustomerIndex::default();

    c.bench_function("normalize_10k", |b| {
        b.iter(|| normalize_batch(black_box(&raw), &customers))
    });
}

criterion_group!(
    benches,
    benchmark_dashboard,
    benchmark_classification,
    benchmark_normalization
);
criterion_main!(benches);
