//! UI components for the Perch harness
//!
//! Demo screen, popover overlay and status bar.

pub mod anchors;
pub mod overlay;
pub mod status_bar;

pub use anchors::render_demo_screen;
pub use overlay::render_overlay;
pub use status_bar::{render_status_bar, STATUS_BAR_HEIGHT};
