pub mod control;
pub mod nav;

pub use control::Control;
pub use nav::NavControl;
