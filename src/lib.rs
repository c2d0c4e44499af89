//! Calendar engine and overlay state machine for an anchored
//! date-selection widget.
//!
//! The crate computes month grids, evaluates selection constraints and
//! drives the overlay lifecycle of a date picker, while everything
//! host-specific (layout, rendering, event plumbing, the bound value)
//! stays behind the [`provider::OverlayHost`], [`provider::ValueChannel`]
//! and [`provider::Localelike`] traits. A host constructs a
//! [`DatePicker`], forwards [`Cmd`]s to it and renders the grid and
//! overlay placement it exposes.

pub mod cmds;
pub mod config;
pub mod constraint;
pub mod context;
pub mod ctrl;
pub mod cursor;
pub mod datetime;
pub mod error;
pub mod grid;
pub mod overlay;
pub mod picker;
pub mod provider;

pub use cmds::{Cmd, CmdError, CmdResult};
pub use config::{ConfigFile, LocaleConfig, PickerConfig};
pub use cursor::MonthCursor;
pub use datetime::WeekStart;
pub use error::{Error, ErrorKind, Result};
pub use grid::{Day, MonthGrid, Week};
pub use overlay::{
    AnchorRect, Edge, InteractionSite, OverlayStyle, RegionId, RegionSet, VisibilityState,
};
pub use picker::DatePicker;
pub use provider::{DefaultLocale, Localelike, OverlayHost, ValueChannel};
