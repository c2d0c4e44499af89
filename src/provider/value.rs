use chrono::NaiveDate;

use crate::config::PickerConfig;
use crate::error::Result;

pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d";

fn format_of(config: &PickerConfig) -> &str {
    config.date_format.as_deref().unwrap_or(DEFAULT_DATE_FORMAT)
}

pub fn format_value(date: NaiveDate, config: &PickerConfig) -> String {
    // The format string was validated with the config, so rendering it
    // cannot fail.
    date.format(format_of(config)).to_string()
}

// Surfaces the parse error; hosts validating typed input use this directly.
pub fn parse_value_strict(raw: &str, config: &PickerConfig) -> Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(raw.trim(), format_of(config))?)
}

// Malformed bound input is absorbed; the widget then behaves as if no
// value were bound.
pub fn parse_value(raw: &str, config: &PickerConfig) -> Option<NaiveDate> {
    match parse_value_strict(raw, config) {
        Ok(date) => Some(date),
        Err(err) => {
            log::warn!("Could not parse bound value '{}': {}", raw, err);
            None
        }
    }
}
