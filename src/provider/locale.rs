use chrono::Month;
use num_traits::FromPrimitive;
use once_cell::sync::Lazy;

use crate::config::LocaleConfig;
use crate::datetime::WeekStart;

pub trait Localelike {
    // ordered from the locale's week start
    fn day_names(&self) -> [&'static str; 7];

    fn month_names(&self) -> [&'static str; 12];

    fn years(&self) -> &[i32];

    fn week_start(&self) -> WeekStart;
}

static DEFAULT_YEARS: Lazy<Vec<i32>> = Lazy::new(|| (1900..=2100).collect());

// Monday-first base table; rotated according to the configured week start.
const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub struct DefaultLocale {
    week_start: WeekStart,
    years: Option<Vec<i32>>,
}

impl DefaultLocale {
    pub fn new() -> Self {
        DefaultLocale {
            week_start: WeekStart::default(),
            years: None,
        }
    }

    pub fn from_config(config: &LocaleConfig) -> Self {
        DefaultLocale {
            week_start: config.week_start,
            years: Some((config.years_min..=config.years_max).collect()),
        }
    }
}

impl Default for DefaultLocale {
    fn default() -> Self {
        Self::new()
    }
}

impl Localelike for DefaultLocale {
    fn day_names(&self) -> [&'static str; 7] {
        let mut names = [""; 7];
        let mut weekday = self.week_start.0;

        for slot in names.iter_mut() {
            *slot = DAY_NAMES[weekday.num_days_from_monday() as usize];
            weekday = weekday.succ();
        }

        names
    }

    fn month_names(&self) -> [&'static str; 12] {
        let mut names = [""; 12];

        for (idx, slot) in names.iter_mut().enumerate() {
            *slot = Month::from_u32(idx as u32 + 1).unwrap().name();
        }

        names
    }

    fn years(&self) -> &[i32] {
        match &self.years {
            Some(years) => years,
            None => DEFAULT_YEARS.as_slice(),
        }
    }

    fn week_start(&self) -> WeekStart {
        self.week_start
    }
}
