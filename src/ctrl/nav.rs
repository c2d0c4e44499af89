use chrono::NaiveDate;

use crate::cmds::{Cmd, CmdError, CmdResult};
use crate::constraint;
use crate::context::PickerContext;
use crate::ctrl::Control;
use crate::cursor::MonthCursor;

pub struct NavControl {}

impl Default for NavControl {
    fn default() -> Self {
        NavControl {}
    }
}

impl Control for NavControl {
    fn send_cmd(&mut self, cmd: &Cmd, context: &mut PickerContext) -> CmdResult {
        match cmd {
            Cmd::PrevMonth => {
                context.set_cursor(context.cursor().prev());
                Ok(Cmd::Noop)
            }
            Cmd::NextMonth => {
                context.set_cursor(context.cursor().next());
                Ok(Cmd::Noop)
            }
            Cmd::SelectMonth(month) => {
                context.close_month_list();
                context.set_cursor(context.cursor().with_month(*month));
                Ok(Cmd::Noop)
            }
            Cmd::SelectYear(year) => {
                if !MonthCursor::year_range().contains(year) {
                    log::debug!("Ignored year {} outside the supported calendar", year);
                    return Ok(Cmd::Noop);
                }

                context.close_year_list();
                context.set_cursor(context.cursor().with_year(*year));
                Ok(Cmd::Noop)
            }
            Cmd::ToggleMonthList => {
                context.toggle_month_list();
                Ok(Cmd::Noop)
            }
            Cmd::ToggleYearList => {
                context.toggle_year_list();
                Ok(Cmd::Noop)
            }
            Cmd::PickDay(date) => self.pick_day(*date, context),
            _ => Ok(*cmd),
        }
    }
}

impl NavControl {
    // Non-future days commit when their cell is selectable. Future days are
    // gated by allow_future alone and bypass the selectable flag.
    fn pick_day(&mut self, date: NaiveDate, context: &mut PickerContext) -> CmdResult {
        let day = match context.grid().day(date) {
            Some(day) => *day,
            None => {
                return Err(CmdError::new(format!(
                    "Day {} is not part of the displayed month",
                    date
                )))
            }
        };

        let future = constraint::future(date, context.today());
        let accepted =
            (day.is_selectable() && !future) || (context.config().allow_future && future);

        if !accepted {
            log::debug!("Rejected pick of {}", date);
            return Ok(Cmd::Noop);
        }

        context.commit_selection(date);
        Ok(Cmd::HidePicker)
    }
}
