//! Utilities for the TUI
//!
//! Common helper functions and types used throughout the TUI.

mod cells;
mod channels;
mod text;

pub use cells::{from_cells, to_cells};
pub use channels::{AsyncChannels, MeasureResult};
pub use text::{center_in, truncate_ellipsis};
