use chrono::NaiveDate;
use tracing::debug;

use crate::config::ConfigSubscription;
use crate::core::{CalendarMode, Clock, IntSize, SystemClock, ViewCoordinate};
use crate::error::CalendarResult;
use crate::extensions::CalendarListener;
use crate::interaction::{InteractionState, PointerSession};
use crate::layout::{
    CalendarSettings, DayLabel, DayMarks, DayTile, MonthTile, ResolvedChrome, TileLayoutEngine,
    TileSet,
};
use crate::render::Renderer;

use super::{CalendarPalette, CalendarWidgetConfig};

/// Calendar widget facade consumed by host applications.
///
/// Owns the view coordinate, the selection, every tile and the pointer
/// state. Painting goes through `R`; notifications go to registered
/// listeners.
pub struct CalendarWidget<R: Renderer> {
    pub(super) renderer: R,
    pub(super) clock: Box<dyn Clock>,
    pub(super) size: IntSize,
    pub(super) mode: CalendarMode,
    pub(super) view: ViewCoordinate,
    pub(super) today: NaiveDate,
    pub(super) selected_date: NaiveDate,
    pub(super) previous_selected_date: NaiveDate,
    pub(super) settings: CalendarSettings,
    pub(super) palette: CalendarPalette,
    pub(super) tiles: TileSet,
    pub(super) interaction: InteractionState,
    pub(super) listeners: Vec<Box<dyn CalendarListener>>,
    pub(super) config_subscription: Option<ConfigSubscription>,
}

impl<R: Renderer> CalendarWidget<R> {
    /// Builds a widget that reads "today" from the system clock.
    pub fn new(renderer: R, config: CalendarWidgetConfig) -> CalendarResult<Self> {
        Self::with_clock(renderer, config, SystemClock)
    }

    pub fn with_clock(
        renderer: R,
        config: CalendarWidgetConfig,
        clock: impl Clock + 'static,
    ) -> CalendarResult<Self> {
        let settings = config.settings.validate()?;
        let today = clock.today();
        let selected_date = config.selected_date.unwrap_or(today);
        let view = match config.view {
            Some(view) => ViewCoordinate::try_new(view.year, view.month)?,
            None => ViewCoordinate::of_date(selected_date),
        };
        let tiles = TileLayoutEngine::new(settings).layout(
            config.mode,
            view,
            config.size,
            DayMarks {
                today,
                selected: selected_date,
            },
        );

        Ok(Self {
            renderer,
            clock: Box::new(clock),
            size: config.size,
            mode: config.mode,
            view,
            today,
            selected_date,
            previous_selected_date: selected_date,
            settings,
            palette: CalendarPalette::default(),
            tiles,
            interaction: InteractionState::default(),
            listeners: Vec::new(),
            config_subscription: None,
        })
    }

    #[must_use]
    pub fn mode(&self) -> CalendarMode {
        self.mode
    }

    #[must_use]
    pub fn view(&self) -> ViewCoordinate {
        self.view
    }

    #[must_use]
    pub fn view_year(&self) -> i32 {
        self.view.year
    }

    #[must_use]
    pub fn view_month(&self) -> u32 {
        self.view.month
    }

    #[must_use]
    pub fn size(&self) -> IntSize {
        self.size
    }

    /// Today as of the most recent relayout.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        self.today
    }

    #[must_use]
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Selection in effect before the most recent `set_selected_date` call,
    /// including a call that re-selected the same date.
    #[must_use]
    pub fn previous_selected_date(&self) -> NaiveDate {
        self.previous_selected_date
    }

    /// Whether the most recent selection moved to a different date.
    #[must_use]
    pub fn selection_changed(&self) -> bool {
        self.previous_selected_date != self.selected_date
    }

    /// Selects `date`; relayouts only when the selection actually changes.
    pub fn set_selected_date(&mut self, date: NaiveDate) {
        self.previous_selected_date = self.selected_date;
        if date == self.selected_date {
            return;
        }
        self.selected_date = date;
        debug!(%date, previous = %self.previous_selected_date, "selection changed");
        self.update_tiles();
    }

    #[must_use]
    pub fn settings(&self) -> CalendarSettings {
        self.settings
    }

    pub fn set_settings(&mut self, settings: CalendarSettings) -> CalendarResult<()> {
        let settings = settings.validate()?;
        if settings != self.settings {
            self.settings = settings;
            self.update_tiles();
        }
        Ok(())
    }

    pub fn set_grid(&mut self, show: bool) {
        self.update_settings(|settings| settings.show_grid = show);
    }

    pub fn set_show_year(&mut self, show: bool) {
        self.update_settings(|settings| settings.show_year = show);
    }

    pub fn set_show_month_and_year(&mut self, show: bool) {
        self.update_settings(|settings| settings.show_month_and_year = show);
    }

    pub fn set_show_days_of_the_week(&mut self, show: bool) {
        self.update_settings(|settings| settings.show_days_of_week = show);
    }

    /// Chrome in effect after fitting the settings to the current size.
    #[must_use]
    pub fn chrome(&self) -> ResolvedChrome {
        self.tiles.chrome
    }

    #[must_use]
    pub fn has_grid(&self) -> bool {
        self.tiles.chrome.show_grid
    }

    #[must_use]
    pub fn is_showing_year(&self) -> bool {
        self.tiles.chrome.show_year
    }

    #[must_use]
    pub fn is_showing_month_and_year(&self) -> bool {
        self.tiles.chrome.show_month_and_year
    }

    #[must_use]
    pub fn is_showing_days_of_the_week(&self) -> bool {
        self.tiles.chrome.show_days_of_week
    }

    #[must_use]
    pub fn palette(&self) -> CalendarPalette {
        self.palette
    }

    pub fn set_palette(&mut self, palette: CalendarPalette) -> CalendarResult<()> {
        self.palette = palette.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn tiles(&self) -> &TileSet {
        &self.tiles
    }

    /// Day tiles of the Month view; empty in Year mode.
    #[must_use]
    pub fn day_tiles(&self) -> &[DayTile] {
        self.tiles.day_tiles()
    }

    /// Month tiles of the Year view; empty in Month mode.
    #[must_use]
    pub fn month_tiles(&self) -> &[MonthTile] {
        self.tiles.month_tiles()
    }

    #[must_use]
    pub fn mini_month(&self, month_index: usize) -> &[DayTile] {
        self.tiles.mini_month(month_index)
    }

    #[must_use]
    pub fn day_labels(&self) -> &[DayLabel] {
        &self.tiles.day_labels
    }

    #[must_use]
    pub fn unadjusted_tile_size(&self) -> IntSize {
        self.tiles.unadjusted_tile_size
    }

    #[must_use]
    pub fn pointer_session(&self) -> PointerSession {
        self.interaction.session()
    }

    pub fn resize(&mut self, size: IntSize) {
        if size == self.size {
            return;
        }
        self.size = size;
        self.update_tiles();
    }

    /// Rebuilds every tile for the current view, mode, size and selection.
    pub fn update_tiles(&mut self) {
        self.today = self.clock.today();
        let engine = TileLayoutEngine::new(self.settings);
        self.tiles = engine.layout(
            self.mode,
            self.view,
            self.size,
            DayMarks {
                today: self.today,
                selected: self.selected_date,
            },
        );
        match self.mode {
            CalendarMode::Month => self.interaction.resync(self.tiles.day_tiles_mut()),
            CalendarMode::Year => self.interaction.resync(self.tiles.month_tiles_mut()),
        }
        debug!(
            mode = ?self.mode,
            view = %self.view,
            width = self.size.width,
            height = self.size.height,
            "calendar tiles updated"
        );
    }

    pub(super) fn update_settings(&mut self, update: impl FnOnce(&mut CalendarSettings)) {
        let mut settings = self.settings;
        update(&mut settings);
        if settings != self.settings {
            self.settings = settings;
            self.update_tiles();
        }
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
