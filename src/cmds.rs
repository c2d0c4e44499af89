use chrono::{Month, NaiveDate};
use std::error;
use std::fmt;
use std::io;
use std::result;

use crate::overlay::RegionId;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cmd {
    Noop,
    ShowPicker,
    HidePicker,
    PrevMonth,
    NextMonth,
    SelectMonth(Month),
    SelectYear(i32),
    ToggleMonthList,
    ToggleYearList,
    PickDay(NaiveDate),
    // payload is the picker-owned region the interaction hit, if any
    Interaction(Option<RegionId>),
}

pub type CmdResult = result::Result<Cmd, CmdError>;

#[derive(Debug, Clone)]
pub struct CmdError {
    message: Option<String>,
    kind: io::ErrorKind,
}

impl CmdError {
    pub fn new(message: String) -> Self {
        CmdError {
            message: Some(message),
            kind: io::ErrorKind::Other,
        }
    }
}

impl fmt::Display for CmdError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:#?}",
            self.message
                .as_ref()
                .unwrap_or(&"Error executing command".to_owned()),
            self.kind
        )
    }
}

impl error::Error for CmdError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}
