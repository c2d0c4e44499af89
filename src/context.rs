use chrono::{NaiveDate, Utc};

use crate::config::PickerConfig;
use crate::cursor::MonthCursor;
use crate::grid::MonthGrid;
use crate::provider::value;
use crate::provider::{Localelike, OverlayHost, ValueChannel};

// Every cursor or selection change rebuilds the grid so rendered cells
// never go stale.
pub struct PickerContext {
    config: PickerConfig,
    today: NaiveDate,
    cursor: MonthCursor,
    cursor_pinned: bool,
    selected: Option<NaiveDate>,
    month_list_open: bool,
    year_list_open: bool,
    grid: MonthGrid,
    host: Box<dyn OverlayHost>,
    channel: Box<dyn ValueChannel>,
    locale: Box<dyn Localelike>,
}

impl PickerContext {
    pub(crate) fn new(
        config: PickerConfig,
        host: Box<dyn OverlayHost>,
        channel: Box<dyn ValueChannel>,
        locale: Box<dyn Localelike>,
    ) -> Self {
        let today = Utc::now().date_naive();
        Self::with_today(config, host, channel, locale, today)
    }

    pub(crate) fn with_today(
        config: PickerConfig,
        host: Box<dyn OverlayHost>,
        channel: Box<dyn ValueChannel>,
        locale: Box<dyn Localelike>,
        today: NaiveDate,
    ) -> Self {
        let cursor = MonthCursor::from(today);
        let grid = MonthGrid::build(cursor, &config, today, None, locale.week_start());

        let mut context = PickerContext {
            config,
            today,
            cursor,
            cursor_pinned: false,
            selected: None,
            month_list_open: false,
            year_list_open: false,
            grid,
            host,
            channel,
            locale,
        };

        let seed = context.channel.read();
        context.apply_external_value(seed.as_deref());
        context.align_cursor_to_selection();
        context
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    // hosts living past midnight call this to keep the today flag and
    // future gating honest
    pub fn update(&mut self) {
        self.today = Utc::now().date_naive();
        self.rebuild_grid();
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    // explicit navigation pins the cursor, so later shows no longer snap
    // back to the committed selection
    pub fn set_cursor(&mut self, cursor: MonthCursor) {
        self.cursor = cursor;
        self.cursor_pinned = true;
        self.rebuild_grid();
    }

    // no-op once the user has navigated somewhere on purpose
    pub fn align_cursor_to_selection(&mut self) {
        if self.cursor_pinned {
            return;
        }

        if let Some(selected) = self.selected {
            self.cursor = MonthCursor::from(selected);
            self.rebuild_grid();
        }
    }

    // runs when a session ends without a commit; unpins the cursor
    pub fn restore_cursor(&mut self) {
        self.cursor = self
            .selected
            .map(MonthCursor::from)
            .unwrap_or_else(|| MonthCursor::from(self.today));
        self.cursor_pinned = false;
        self.rebuild_grid();
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.selected
    }

    pub fn commit_selection(&mut self, date: NaiveDate) {
        self.grid.select(date);
        self.selected = Some(date);

        let formatted = value::format_value(date, &self.config);
        self.channel.write(formatted);
    }

    // Only the selection moves here. The cursor keeps showing its month
    // until the next show aligns it, so a host writing the value while the
    // user is navigating does not yank the view away.
    pub fn apply_external_value(&mut self, raw: Option<&str>) {
        self.selected = raw.and_then(|raw| value::parse_value(raw, &self.config));
        self.rebuild_grid();
    }

    pub fn grid(&self) -> &MonthGrid {
        &self.grid
    }

    pub(crate) fn rebuild_grid(&mut self) {
        self.grid = MonthGrid::build(
            self.cursor,
            &self.config,
            self.today,
            self.selected,
            self.locale.week_start(),
        );
    }

    pub fn month_list_open(&self) -> bool {
        self.month_list_open
    }

    pub fn year_list_open(&self) -> bool {
        self.year_list_open
    }

    // the two lists are mutually exclusive; opening one closes the other
    pub fn toggle_month_list(&mut self) {
        self.month_list_open = !self.month_list_open;
        if self.month_list_open {
            self.year_list_open = false;
        }
    }

    pub fn toggle_year_list(&mut self) {
        self.year_list_open = !self.year_list_open;
        if self.year_list_open {
            self.month_list_open = false;
        }
    }

    pub fn close_month_list(&mut self) {
        self.month_list_open = false;
    }

    pub fn close_year_list(&mut self) {
        self.year_list_open = false;
    }

    pub fn host(&self) -> &dyn OverlayHost {
        self.host.as_ref()
    }

    pub fn host_mut(&mut self) -> &mut dyn OverlayHost {
        self.host.as_mut()
    }

    pub fn locale(&self) -> &dyn Localelike {
        self.locale.as_ref()
    }
}
