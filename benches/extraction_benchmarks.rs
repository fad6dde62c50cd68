//! Performance benchmarks for the attendance engine.
//!
//! Covers the three stages of an upload on synthetic reports:
//! - Record extraction from an already-decoded grid
//! - Aggregation of extracted records into summaries
//! - A full CSV upload through the HTTP router
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::aggregation::aggregate;
use attendance_engine::api::{AppState, create_router};
use attendance_engine::config::{ConfigLoader, RulesConfig};
use attendance_engine::extraction::{extract, extract_records};
use attendance_engine::models::RawGrid;
use attendance_engine::store::InMemoryStore;

use axum::{body::Body, http::Request};
use tower::ServiceExt;

const WEEKDAYS: [&str; 7] = ["Lu", "Ma", "Mi", "Ju", "Vi", "Sa", "Do"];
const BOUNDARY: &str = "bench-boundary";

/// Builds CSV text for a month-long report with the given number of employees.
fn create_report_csv(employees: usize) -> String {
    let mut csv = String::from("Company time report,,,,,\n");
    for employee in 0..employees {
        csv.push_str(&format!("Employee:,,,Worker {} (ID {}),,\n", employee, employee));
        for day in 1..=30 {
            let weekday = WEEKDAYS[(day - 1) % WEEKDAYS.len()];
            if day % 9 == 0 {
                csv.push_str(&format!("{},2025-09-{:02},08:00,Falta SALIDA,,\n", weekday, day));
            } else {
                csv.push_str(&format!(
                    "{},2025-09-{:02},08:00,16:{:02},8:{:02},\n",
                    weekday,
                    day,
                    day % 60,
                    day % 60
                ));
            }
        }
    }
    csv
}

/// Builds the equivalent grid without going through the CSV decoder.
fn create_report_grid(employees: usize) -> RawGrid {
    let csv = create_report_csv(employees);
    let rows: Vec<Vec<&str>> = csv.lines().map(|line| line.split(',').collect()).collect();
    RawGrid::from_text_rows(rows)
}

fn bench_extract_records(c: &mut Criterion) {
    let rules = RulesConfig::default();
    let mut group = c.benchmark_group("extract_records");

    for employees in [1, 10, 100] {
        let grid = create_report_grid(employees);
        group.throughput(Throughput::Elements(grid.len() as u64));
        group.bench_with_input(BenchmarkId::new("employees", employees), &grid, |b, grid| {
            b.iter(|| black_box(extract_records(grid, rules.extraction())))
        });
    }

    group.finish();
}

fn bench_aggregate(c: &mut Criterion) {
    let rules = RulesConfig::default();
    let mut group = c.benchmark_group("aggregate");

    for employees in [1, 10, 100] {
        let extraction = extract(
            &create_report_grid(employees),
            "NGTimereport-20250901-20250930.csv",
            rules.extraction(),
        );
        group.throughput(Throughput::Elements(extraction.records.len() as u64));
        group.bench_with_input(
            BenchmarkId::new("employees", employees),
            &extraction,
            |b, extraction| {
                b.iter(|| {
                    black_box(aggregate(
                        extraction.records.clone(),
                        &extraction.period,
                        &[],
                        rules.aggregation(),
                    ))
                })
            },
        );
    }

    group.finish();
}

/// Benchmark: one 50-employee CSV upload through the router.
fn bench_upload_route(c: &mut Criterion) {
    let rt = tokio::runtime::Runtime::new().unwrap();
    let body = format!(
        "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"NGTimereport-20250901.csv\"\r\n\r\n{csv}\r\n--{b}--\r\n",
        b = BOUNDARY,
        csv = create_report_csv(50),
    );

    c.bench_function("upload_50_employees", |b| {
        b.to_async(&rt).iter(|| async {
            let state = AppState::new(ConfigLoader::with_defaults(), InMemoryStore::new());
            let response = create_router(state)
                .oneshot(
                    Request::builder()
                        .method("POST")
                        .uri("/upload")
                        .header(
                            "Content-Type",
                            format!("multipart/form-data; boundary={}", BOUNDARY),
                        )
                        .body(Body::from(body.clone()))
                        .unwrap(),
                )
                .await
                .unwrap();
            black_box(response)
        })
    });
}

criterion_group!(benches, bench_extract_records, bench_aggregate, bench_upload_route);
criterion_main!(benches);
