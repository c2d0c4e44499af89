pub mod position;
pub mod region;
pub mod visibility;

pub use position::{place, place_fallback, AnchorRect, Edge, OverlayStyle, OVERLAY_HEIGHT};
pub use region::{InteractionSite, RegionId, RegionSet};
pub use visibility::{OverlayControl, VisibilityState};
