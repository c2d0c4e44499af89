use chrono::{Datelike, Month, NaiveDate};
use num_traits::FromPrimitive;
use std::fmt::Display;
use std::ops::{Add, RangeInclusive, Sub};

use crate::datetime::days_of_month;

// The displayed month, tracked independently of any committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    month: Month,
    year: i32,
}

impl MonthCursor {
    pub fn new(month: Month, year: i32) -> Self {
        MonthCursor { month, year }
    }

    // The grid pads up to a week past the month, so the cursor keeps a year
    // of margin inside the calendar chrono can represent.
    pub fn year_range() -> RangeInclusive<i32> {
        NaiveDate::MIN.year() + 1..=NaiveDate::MAX.year() - 1
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn next(&self) -> Self {
        if self.month == Month::December && self.year >= *Self::year_range().end() {
            return *self;
        }

        let next_month = self.month.succ();

        MonthCursor {
            month: next_month,
            year: if next_month.number_from_month() == 1 {
                self.year + 1
            } else {
                self.year
            },
        }
    }

    pub fn prev(&self) -> Self {
        if self.month == Month::January && self.year <= *Self::year_range().start() {
            return *self;
        }

        let prev_month = self.month.pred();

        MonthCursor {
            month: prev_month,
            year: if prev_month.number_from_month() == 12 {
                self.year - 1
            } else {
                self.year
            },
        }
    }

    pub fn with_month(&self, month: Month) -> Self {
        MonthCursor {
            month,
            year: self.year,
        }
    }

    pub fn with_year(&self, year: i32) -> Self {
        MonthCursor {
            month: self.month,
            year,
        }
    }

    pub fn first_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month.number_from_month(), 1).unwrap()
    }

    pub fn last_day(&self) -> NaiveDate {
        NaiveDate::from_ymd_opt(
            self.year,
            self.month.number_from_month(),
            days_of_month(&self.month, self.year),
        )
        .unwrap()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month.number_from_month()
    }
}

impl<T: Datelike> From<T> for MonthCursor {
    fn from(m: T) -> Self {
        MonthCursor::new(Month::from_u32(m.month()).unwrap(), m.year())
    }
}

impl Add<u32> for MonthCursor {
    type Output = MonthCursor;
    fn add(self, rhs: u32) -> Self::Output {
        let months = self.month.number_from_month() - 1 + rhs;

        MonthCursor {
            month: Month::from_u32(months % 12 + 1).unwrap(),
            year: self.year + (months / 12) as i32,
        }
    }
}

impl Sub<u32> for MonthCursor {
    type Output = MonthCursor;
    fn sub(self, rhs: u32) -> Self::Output {
        let months = self.month.number_from_month() as i32 - 1 - rhs as i32;

        MonthCursor {
            month: Month::from_u32(months.rem_euclid(12) as u32 + 1).unwrap(),
            year: self.year + months.div_euclid(12),
        }
    }
}

impl PartialOrd for MonthCursor {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        if self.year != other.year {
            self.year.partial_cmp(&other.year)
        } else {
            self.month
                .number_from_month()
                .partial_cmp(&other.month.number_from_month())
        }
    }
}

impl Display for MonthCursor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month.name(), self.year)
    }
}
