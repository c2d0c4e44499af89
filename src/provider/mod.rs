use crate::overlay::{AnchorRect, OverlayStyle};

mod locale;
pub mod value;

pub use locale::{DefaultLocale, Localelike};

// The host owns the bound value; the picker only reads it at construction,
// re-reads it on change notifications and writes it on commit.
pub trait ValueChannel {
    fn read(&self) -> Option<String>;

    fn write(&mut self, value: String);
}

// Calls are driven from picker transitions; a host never gets a mount
// without a later unmount (drop included) and never a double attach of the
// dismiss listener.
pub trait OverlayHost {
    fn measure_anchor(&self) -> AnchorRect;

    fn viewport_height(&self) -> f64;

    fn anchor_visible(&self) -> bool;

    fn force_anchor_visible(&mut self);

    fn set_anchor_interactive(&mut self, interactive: bool);

    // position a forced-visible anchor's overlay opens at, if the host
    // can supply one
    fn fallback_position(&self) -> Option<(f64, f64)>;

    fn mount_overlay(&mut self, style: &OverlayStyle);

    fn unmount_overlay(&mut self);

    fn mount_backdrop(&mut self);

    fn unmount_backdrop(&mut self);

    fn attach_dismiss_listener(&mut self);

    fn detach_dismiss_listener(&mut self);

    // hosts typically mirror the marker into a style class on the
    // anchor's container
    fn marker_changed(&mut self, showing: bool);
}
