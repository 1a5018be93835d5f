use chrono::TimeDelta;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use iso8601_duration::{from_str, Duration};

fn benchmark_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for input in ["PT15M", "P3Y6M4DT12H30M5S", "-P18446744073709551615W"] {
        group.bench_with_input(BenchmarkId::from_parameter(input), input, |b, input| {
            b.iter(|| from_str(black_box(input)))
        });
    }

    group.finish();
}

fn benchmark_parse_error(c: &mut Criterion) {
    c.bench_function("parse_duplicate_designator", |b| {
        b.iter(|| from_str(black_box("P1Y2M3D4D")))
    });
}

fn benchmark_format(c: &mut Criterion) {
    let duration = Duration::new()
        .with_years(3)
        .with_months(6)
        .with_days(4)
        .with_hours(12)
        .with_minutes(30)
        .with_seconds(5);

    c.bench_function("format_full", |b| {
        b.iter(|| black_box(&duration).to_string())
    });
}

fn benchmark_time_delta(c: &mut Criterion) {
    let delta = TimeDelta::days(400) + TimeDelta::seconds(12_345);

    c.bench_function("from_time_delta", |b| {
        b.iter(|| Duration::from_time_delta(black_box(delta)))
    });

    let duration = Duration::from_time_delta(delta);
    c.bench_function("to_time_delta", |b| {
        b.iter(|| black_box(&duration).to_time_delta())
    });
}

criterion_group!(
    benches,
    benchmark_parse,
    benchmark_parse_error,
    benchmark_format,
    benchmark_time_delta
);
criterion_main!(benches);
