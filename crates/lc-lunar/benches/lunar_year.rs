use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lc_core::Settings;
use lc_lunar::{LunarCalendar, LunarYear};

fn year_table_bench(c: &mut Criterion) {
    let settings = Settings::default();
    let mut group = c.benchmark_group("lunar_year");
    group.sample_size(20);
    group.bench_function("build_2023", |b| {
        b.iter(|| LunarYear::build(black_box(2023), &settings).expect("table should build"))
    });
    group.finish();
}

fn month_grid_bench(c: &mut Criterion) {
    let calendar = LunarCalendar::default();
    calendar.lunar_year(2023).expect("table should build");
    c.bench_function("month_grid_cached", |b| {
        b.iter(|| {
            calendar
                .lunar_month_table(black_box(2023), black_box(6), true)
                .expect("grid should build")
        })
    });
}

criterion_group!(benches, year_table_bench, month_grid_bench);
criterion_main!(benches);
