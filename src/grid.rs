use chrono::{Datelike, NaiveDate};
use itertools::Itertools;
use std::convert::TryInto;

use crate::config::PickerConfig;
use crate::constraint;
use crate::cursor::MonthCursor;
use crate::datetime::{week_end_of, week_start_of, WeekStart};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    date: NaiveDate,
    is_today: bool,
    in_month: bool,
    selected: bool,
    selectable: bool,
}

impl Day {
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn day_num(&self) -> u32 {
        self.date.day()
    }

    pub fn is_today(&self) -> bool {
        self.is_today
    }

    // false for padding cells borrowed from an adjacent month
    pub fn in_month(&self) -> bool {
        self.in_month
    }

    pub fn is_selected(&self) -> bool {
        self.selected
    }

    pub fn is_selectable(&self) -> bool {
        self.selectable
    }

    fn set_selected(&mut self, selected: bool) {
        self.selected = selected;
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Week {
    days: [Day; 7],
}

impl Week {
    pub fn days(&self) -> &[Day; 7] {
        &self.days
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Day> {
        self.days.iter()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    cursor: MonthCursor,
    weeks: Vec<Week>,
}

impl MonthGrid {
    pub fn build(
        cursor: MonthCursor,
        config: &PickerConfig,
        today: NaiveDate,
        selected: Option<NaiveDate>,
        week_start: WeekStart,
    ) -> Self {
        let start = week_start_of(cursor.first_day(), week_start);
        let end = week_end_of(cursor.last_day(), week_start);

        let days = start
            .iter_days()
            .take_while(|date| *date <= end)
            .map(|date| Day {
                date,
                is_today: date == today,
                in_month: cursor.contains(date),
                selected: selected.map_or(false, |sel| sel == date),
                selectable: constraint::selectable(date, config, today),
            })
            .collect_vec();

        let weeks = days
            .chunks_exact(7)
            .map(|chunk| Week {
                days: chunk.try_into().unwrap(),
            })
            .collect();

        MonthGrid { cursor, weeks }
    }

    pub fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn days(&self) -> impl Iterator<Item = &Day> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days().find(|day| day.date == date)
    }

    pub fn selected_day(&self) -> Option<&Day> {
        self.days().find(|day| day.selected)
    }

    // Resets every other cell; fails without touching anything if date is
    // not in the grid.
    pub fn select(&mut self, date: NaiveDate) -> bool {
        if self.day(date).is_none() {
            return false;
        }

        for week in &mut self.weeks {
            for day in &mut week.days {
                day.set_selected(day.date == date);
            }
        }

        true
    }

    pub fn clear_selection(&mut self) {
        for week in &mut self.weeks {
            for day in &mut week.days {
                day.set_selected(false);
            }
        }
    }
}
