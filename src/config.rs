use chrono::format::{Item, StrftimeItems};
use chrono::NaiveDate;
use serde::Deserialize;
use serde_with::{serde_as, DisplayFromStr};
use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cursor::MonthCursor;
use crate::datetime::WeekStart;
use crate::error::{Error, ErrorKind, Result};

const CONFIG_PATH_ENV_VAR: &str = "FLATPICK_CONFIG_FILE";

pub(crate) fn find_configfile_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();

    if let Ok(path) = env::var(CONFIG_PATH_ENV_VAR) {
        locations.push(PathBuf::from(path));
    }

    if let Some(config_dir) = dirs::config_dir() {
        locations.push(config_dir.join("flatpick").join("config.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        locations.push(home.join(".flatpick.toml"));
    }

    locations
}

// Behaviour of one picker instance, immutable once a session starts.
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    pub allow_future: bool,
    pub date_format: Option<String>,
    // both bounds are exclusive
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub min_date: Option<NaiveDate>,
    #[serde_as(as = "Option<DisplayFromStr>")]
    pub max_date: Option<NaiveDate>,
    pub backdrop: bool,
    // force a hidden anchor visible instead of refusing to open
    pub force_display_element: bool,
}

impl Default for PickerConfig {
    fn default() -> Self {
        PickerConfig {
            allow_future: true,
            date_format: None,
            min_date: None,
            max_date: None,
            backdrop: true,
            force_display_element: true,
        }
    }
}

impl PickerConfig {
    pub fn validate(&self) -> Result<()> {
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            // Both bounds are exclusive, so even max == min + 1 day leaves
            // nothing selectable. Only the inverted case is rejected.
            if max <= min {
                return Err(Error::new(
                    ErrorKind::Config,
                    &format!("max_date {} does not lie after min_date {}", max, min),
                ));
            }
        }

        if let Some(format) = &self.date_format {
            validate_date_format(format)?;
        }

        Ok(())
    }
}

fn validate_date_format(format: &str) -> Result<()> {
    let items = StrftimeItems::new(format);

    if items.clone().any(|item| matches!(item, Item::Error)) {
        return Err(Error::new(
            ErrorKind::FormatParse,
            &format!("'{}' is not a valid strftime format", format),
        ));
    }

    // Specifiers for fields a date does not carry (%H, %M, %z, ...) parse
    // fine but fail on rendering, so render a sample date through the
    // format here.
    let sample = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let mut rendered = String::new();
    if write!(rendered, "{}", sample.format_with_items(items)).is_err() {
        return Err(Error::new(
            ErrorKind::FormatParse,
            &format!("'{}' asks for fields a plain date does not have", format),
        ));
    }

    Ok(())
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LocaleConfig {
    pub week_start: WeekStart,
    pub years_min: i32,
    pub years_max: i32,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        LocaleConfig {
            week_start: WeekStart::default(),
            years_min: 1900,
            years_max: 2100,
        }
    }
}

impl LocaleConfig {
    pub fn validate(&self) -> Result<()> {
        if self.years_min > self.years_max {
            return Err(Error::new(
                ErrorKind::Config,
                &format!("year span {}..={} is empty", self.years_min, self.years_max),
            ));
        }

        let supported = MonthCursor::year_range();
        if self.years_min < *supported.start() || self.years_max > *supported.end() {
            return Err(Error::new(
                ErrorKind::Config,
                &format!(
                    "year span {}..={} leaves the supported calendar",
                    self.years_min, self.years_max
                ),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub picker: PickerConfig,
    pub locale: LocaleConfig,
}

pub fn load_suitable_config(explicit_path: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit_path {
        return load_config(path);
    }

    for location in find_configfile_locations() {
        if location.exists() {
            return load_config(&location);
        }
    }

    Ok(ConfigFile::default())
}

pub fn load_config(path: &Path) -> Result<ConfigFile> {
    let raw = fs::read_to_string(path)
        .map_err(|err| Error::from(err).with_msg(&format!("config file {}", path.display())))?;
    let config: ConfigFile = toml::from_str(&raw)?;

    config.picker.validate()?;
    config.locale.validate()?;

    Ok(config)
}
