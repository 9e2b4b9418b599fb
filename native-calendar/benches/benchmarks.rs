use native_calendar::grid::day_grid;
use native_calendar::{Calendar, CoreState, FirstWeekDay, MonthShift, Options, Selection};

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

const HASH_PADDED: &str = "2024/02/29";
const HASH_SHORT: &str = "2024/2/9";

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    group.bench_function("padded", |b| {
        b.iter(|| native_calendar_syntax::parse(black_box(HASH_PADDED)).unwrap())
    });

    group.bench_function("short", |b| {
        b.iter(|| native_calendar_syntax::parse(black_box(HASH_SHORT)).unwrap())
    });
}

fn bench_state(c: &mut Criterion) {
    let anchor = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap();
    let core = CoreState::new(anchor, FirstWeekDay::Monday).unwrap();
    let selected = Selection::new(anchor);

    let mut group = c.benchmark_group("state");

    group.bench_function("core_state", |b| {
        b.iter(|| CoreState::new(black_box(anchor), black_box(FirstWeekDay::Monday)))
    });

    group.bench_function("day_grid", |b| {
        b.iter(|| day_grid(black_box(&core), black_box(&selected), black_box(anchor)))
    });
}

fn bench_calendar(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
    let options = Options::default().with_initial_date(date).with_today(date);
    let mut group = c.benchmark_group("calendar");

    group.bench_function("navigate", |b| {
        let mut calendar = Calendar::new(options.clone());

        b.iter(|| {
            calendar.navigate(black_box(MonthShift::Forward));
            calendar.navigate(black_box(MonthShift::Backward));
        })
    });

    group.bench_function("select_borrowed", |b| {
        b.iter(|| {
            let mut calendar = Calendar::new(options.clone());
            black_box(calendar.select_date(black_box("2024/4/2")))
        })
    });
}

criterion_group!(benches, bench_parse, bench_state, bench_calendar);
criterion_main!(benches);
