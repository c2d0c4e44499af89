use chrono::NaiveDate;

use crate::config::PickerConfig;

pub fn future(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

// Both bounds are exclusive: a day equal to min_date or max_date is not
// selectable.
pub fn selectable(date: NaiveDate, config: &PickerConfig, today: NaiveDate) -> bool {
    let after_min = config.min_date.map_or(true, |min| date > min);
    let before_max = config.max_date.map_or(true, |max| date < max);
    let future_allowed = config.allow_future || !future(date, today);

    after_min && before_max && future_allowed
}
