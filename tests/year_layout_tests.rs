use calendar_rs::core::{CalendarMode, FixedClock, IntRect, IntSize, ViewCoordinate};
use calendar_rs::layout::{
    CalendarSettings, DAY_GRID_SLOTS, DayMarks, MINI_MONTH_TITLE_HEIGHT, MONTHS_PER_YEAR,
    TileLayoutEngine, YearGridShape,
};
use calendar_rs::render::NullRenderer;
use calendar_rs::{CalendarError, CalendarWidget, CalendarWidgetConfig};
use chrono::NaiveDate;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}

fn marks() -> DayMarks {
    DayMarks {
        today: today(),
        selected: today(),
    }
}

#[test]
fn twelve_month_tiles_in_a_four_by_three_grid() {
    let engine = TileLayoutEngine::new(CalendarSettings::default());
    let view = ViewCoordinate::new(2024, 3).expect("valid view");
    let tiles = engine.layout_year(view, IntSize::new(700, 640), marks());

    assert_eq!(tiles.mode, CalendarMode::Year);
    assert!(tiles.chrome.show_year);
    assert_eq!(tiles.header, Some(IntRect::new(0, 0, 700, 24)));
    assert_eq!(tiles.grid, IntRect::new(0, 24, 700, 616));

    let months = tiles.month_tiles();
    assert_eq!(months.len(), MONTHS_PER_YEAR);
    assert!(tiles.day_tiles().is_empty());
    for (index, month) in months.iter().enumerate() {
        assert_eq!(month.month as usize, index + 1);
    }
    assert_eq!(months[0].name, "January");
    assert_eq!(months[0].rect, IntRect::new(0, 24, 175, 205));
    assert_eq!(months[4].rect, IntRect::new(0, 229, 175, 205));
    assert_eq!(months[11].rect, IntRect::new(525, 434, 175, 206));
}

#[test]
fn mini_months_sit_below_their_title_band() {
    let engine = TileLayoutEngine::new(CalendarSettings::default());
    let view = ViewCoordinate::new(2024, 1).expect("valid view");
    let tiles = engine.layout_year(view, IntSize::new(700, 640), marks());

    for index in 0..MONTHS_PER_YEAR {
        let month = tiles.month_tiles()[index];
        let mini = tiles.mini_month(index);
        assert_eq!(mini.len(), DAY_GRID_SLOTS);
        let body = month.rect.shrink_top(MINI_MONTH_TITLE_HEIGHT);
        assert!(mini.iter().all(|tile| tile.rect.x >= body.x && tile.rect.y >= body.y));
        assert!(
            mini.iter()
                .filter(|tile| !tile.flags.is_outside_view_month)
                .all(|tile| tile.month == month.month && tile.year == 2024)
        );
    }

    let march = tiles.mini_month(2);
    assert!(march.iter().any(|tile| tile.flags.is_today && tile.day == 15));
}

#[test]
fn year_grid_shape_is_configurable() {
    let settings = CalendarSettings {
        year_grid: YearGridShape {
            columns: 3,
            rows: 4,
        },
        ..CalendarSettings::default()
    };
    let engine = TileLayoutEngine::new(settings);
    let view = ViewCoordinate::new(2024, 1).expect("valid view");
    let tiles = engine.layout_year(view, IntSize::new(600, 424), marks());

    assert_eq!(tiles.month_tiles()[3].rect, IntRect::new(0, 124, 200, 100));
}

#[test]
fn undersized_year_grid_keeps_months_inside_the_area() {
    let settings = CalendarSettings {
        year_grid: YearGridShape {
            columns: 1,
            rows: 1,
        },
        ..CalendarSettings::default()
    };
    let engine = TileLayoutEngine::new(settings);
    let view = ViewCoordinate::new(2024, 1).expect("valid view");
    let tiles = engine.layout_year(view, IntSize::new(300, 640), marks());

    let grid = tiles.grid;
    assert_eq!(tiles.month_tiles()[0].rect, grid);
    for month in &tiles.month_tiles()[1..] {
        assert_eq!(month.rect.area(), 0);
        assert!(month.rect.right() <= grid.right());
        assert!(month.rect.bottom() <= grid.bottom());
    }
}

#[test]
fn year_grid_must_hold_twelve_months() {
    let config = CalendarWidgetConfig::new(IntSize::new(700, 640)).with_year_grid(5, 3);
    let err = CalendarWidget::with_clock(NullRenderer::default(), config, FixedClock(today()))
        .err()
        .expect("invalid grid rejected");
    assert!(matches!(
        err,
        CalendarError::InvalidYearGrid {
            columns: 5,
            rows: 3
        }
    ));
}
