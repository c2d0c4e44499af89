use chrono::{Datelike, Duration, Month, NaiveDate, Weekday};
use phf::phf_map;
use serde_with::DeserializeFromStr;
use std::str::FromStr;

use crate::error::{Error, ErrorKind};

pub fn days_of_month(month: &Month, year: i32) -> u32 {
    if month.number_from_month() == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month.number_from_month() + 1, 1)
    }
    .unwrap()
    .signed_duration_since(NaiveDate::from_ymd_opt(year, month.number_from_month(), 1).unwrap())
    .num_days() as u32
}

pub fn weekday_index(weekday: Weekday, start: WeekStart) -> u32 {
    (weekday.num_days_from_monday() + 7 - start.0.num_days_from_monday()) % 7
}

pub fn week_start_of(date: NaiveDate, start: WeekStart) -> NaiveDate {
    date - Duration::days(weekday_index(date.weekday(), start) as i64)
}

pub fn week_end_of(date: NaiveDate, start: WeekStart) -> NaiveDate {
    date + Duration::days((6 - weekday_index(date.weekday(), start)) as i64)
}

static WEEKDAYS: phf::Map<&'static str, Weekday> = phf_map! {
    "monday" => Weekday::Mon,
    "mon" => Weekday::Mon,
    "tuesday" => Weekday::Tue,
    "tue" => Weekday::Tue,
    "wednesday" => Weekday::Wed,
    "wed" => Weekday::Wed,
    "thursday" => Weekday::Thu,
    "thu" => Weekday::Thu,
    "friday" => Weekday::Fri,
    "fri" => Weekday::Fri,
    "saturday" => Weekday::Sat,
    "sat" => Weekday::Sat,
    "sunday" => Weekday::Sun,
    "sun" => Weekday::Sun,
};

#[derive(Clone, Copy, Debug, DeserializeFromStr, PartialEq, Eq)]
pub struct WeekStart(pub Weekday);

impl Default for WeekStart {
    fn default() -> Self {
        WeekStart(Weekday::Mon)
    }
}

impl FromStr for WeekStart {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAYS
            .get(s.to_ascii_lowercase().as_str())
            .copied()
            .map(WeekStart)
            .ok_or_else(|| {
                Error::new(
                    ErrorKind::Config,
                    &format!("Weekday '{}' not recognized", s),
                )
            })
    }
}
