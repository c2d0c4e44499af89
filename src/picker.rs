use chrono::NaiveDate;

use crate::cmds::{Cmd, CmdResult};
use crate::config::PickerConfig;
use crate::context::PickerContext;
use crate::ctrl::{Control, NavControl};
use crate::cursor::MonthCursor;
use crate::error::Result;
use crate::grid::MonthGrid;
use crate::overlay::{OverlayControl, OverlayStyle, RegionSet, VisibilityState};
use crate::provider::{Localelike, OverlayHost, ValueChannel};

// Commands run through the receiver chain in a fixed order: navigation
// first, then the overlay machinery.
pub struct DatePicker {
    context: PickerContext,
    nav: NavControl,
    overlay: OverlayControl,
}

impl DatePicker {
    pub fn new(
        config: PickerConfig,
        host: Box<dyn OverlayHost>,
        channel: Box<dyn ValueChannel>,
        locale: Box<dyn Localelike>,
    ) -> Result<Self> {
        config.validate()?;

        Ok(DatePicker {
            context: PickerContext::new(config, host, channel, locale),
            nav: NavControl::default(),
            overlay: OverlayControl::default(),
        })
    }

    // explicit clock, for hosts that manage time themselves
    pub fn with_today(
        config: PickerConfig,
        host: Box<dyn OverlayHost>,
        channel: Box<dyn ValueChannel>,
        locale: Box<dyn Localelike>,
        today: NaiveDate,
    ) -> Result<Self> {
        config.validate()?;

        Ok(DatePicker {
            context: PickerContext::with_today(config, host, channel, locale, today),
            nav: NavControl::default(),
            overlay: OverlayControl::default(),
        })
    }

    pub fn handle(&mut self, cmd: Cmd) -> CmdResult {
        let leftover = self.nav.send_cmd(&cmd, &mut self.context)?;
        self.overlay.send_cmd(&leftover, &mut self.context)
    }

    pub fn model_changed(&mut self, raw: Option<&str>) {
        self.context.apply_external_value(raw);
    }

    pub fn update(&mut self) {
        self.context.update();
    }

    pub fn grid(&self) -> &MonthGrid {
        self.context.grid()
    }

    pub fn cursor(&self) -> MonthCursor {
        self.context.cursor()
    }

    pub fn selected(&self) -> Option<NaiveDate> {
        self.context.selected()
    }

    pub fn today(&self) -> NaiveDate {
        self.context.today()
    }

    pub fn visibility(&self) -> VisibilityState {
        self.overlay.state()
    }

    pub fn is_visible(&self) -> bool {
        self.overlay.is_visible()
    }

    pub fn overlay_style(&self) -> Option<&OverlayStyle> {
        self.overlay.style()
    }

    pub fn regions(&self) -> &RegionSet {
        self.overlay.regions()
    }

    pub fn marker_active(&self) -> bool {
        self.overlay.marker_active()
    }

    pub fn month_list_open(&self) -> bool {
        self.context.month_list_open()
    }

    pub fn year_list_open(&self) -> bool {
        self.context.year_list_open()
    }

    pub fn day_names(&self) -> [&'static str; 7] {
        self.context.locale().day_names()
    }

    pub fn month_names(&self) -> [&'static str; 12] {
        self.context.locale().month_names()
    }

    pub fn years(&self) -> &[i32] {
        self.context.locale().years()
    }
}

impl Drop for DatePicker {
    fn drop(&mut self) {
        // A picker dropped while open must not leave mounts or listeners
        // behind on the host.
        self.overlay.dismantle(&mut self.context);
    }
}
