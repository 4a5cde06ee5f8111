use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use taskdesk::scheduling::{get_calendar_by_name, validate_deadline, ymd, DateRoll};

fn criterion_benchmark(c: &mut Criterion) {
    let cal = get_calendar_by_name("ke").unwrap();
    let start = ymd(2024, 4, 30);

    c.bench_function("add 5 working days", |b| {
        b.iter(|| cal.add_working_days(black_box(&start), black_box(5)))
    });
    c.bench_function("add 250 working days", |b| {
        b.iter(|| cal.add_working_days(black_box(&start), black_box(250)))
    });
    c.bench_function("validate holiday", |b| {
        b.iter(|| validate_deadline(&cal, black_box(&ymd(2024, 12, 25))))
    });
    c.bench_function("working days in a year", |b| {
        b.iter(|| cal.working_days_between(black_box(&ymd(2024, 1, 1)), black_box(&ymd(2024, 12, 31))))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
