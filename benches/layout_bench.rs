use calendar_rs::core::{CalendarMode, FixedClock, IntSize, ViewCoordinate};
use calendar_rs::layout::{CalendarSettings, DayMarks, TileLayoutEngine};
use calendar_rs::render::NullRenderer;
use calendar_rs::{CalendarWidget, CalendarWidgetConfig};
use chrono::NaiveDate;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn marks() -> DayMarks {
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    DayMarks {
        today,
        selected: today,
    }
}

fn bench_layout_month(c: &mut Criterion) {
    let engine = TileLayoutEngine::new(CalendarSettings::default());
    let view = ViewCoordinate::new(2024, 3).expect("valid view");
    let size = IntSize::new(1920, 1080);

    c.bench_function("layout_month", |b| {
        b.iter(|| {
            let tiles = engine.layout_month(black_box(view), black_box(size), marks());
            black_box(tiles);
        })
    });
}

fn bench_layout_year(c: &mut Criterion) {
    let engine = TileLayoutEngine::new(CalendarSettings::default());
    let view = ViewCoordinate::new(2024, 3).expect("valid view");
    let size = IntSize::new(1920, 1080);

    c.bench_function("layout_year", |b| {
        b.iter(|| {
            let tiles = engine.layout_year(black_box(view), black_box(size), marks());
            black_box(tiles);
        })
    });
}

fn bench_year_render_frame(c: &mut Criterion) {
    let config = CalendarWidgetConfig::new(IntSize::new(1920, 1080))
        .with_mode(CalendarMode::Year)
        .with_view(2024, 3);
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let widget = CalendarWidget::with_clock(NullRenderer::default(), config, FixedClock(today))
        .expect("widget init");

    c.bench_function("year_render_frame", |b| {
        b.iter(|| {
            let frame = widget.build_render_frame().expect("frame");
            black_box(frame);
        })
    });
}

fn bench_wheel_navigation(c: &mut Criterion) {
    let config = CalendarWidgetConfig::new(IntSize::new(1280, 720)).with_view(2024, 1);
    let today = NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date");
    let mut widget = CalendarWidget::with_clock(NullRenderer::default(), config, FixedClock(today))
        .expect("widget init");

    c.bench_function("wheel_navigation_step", |b| {
        b.iter(|| widget.wheel(black_box(1)))
    });
}

criterion_group!(
    benches,
    bench_layout_month,
    bench_layout_year,
    bench_year_render_frame,
    bench_wheel_navigation
);
criterion_main!(benches);
