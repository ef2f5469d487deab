//! Perch Core - anchor-relative popover placement
//!
//! This crate provides everything except drawing:
//! - Geometry primitives in viewport coordinates
//! - The placement engine (arrow direction, size and position clamping)
//! - A visibility controller that measures anchors through a host platform
//! - An item list model driven by caller render callbacks
//! - TOML settings

pub mod config;
pub mod constants;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod items;
pub mod paths;
pub mod placement;

// Re-exports for convenience
pub use config::Settings;
pub use controller::{
    DismissHandle, HostPlatform, MeasureTicket, OverlayFrame, Visibility, VisibilityController,
};
pub use error::ConfigError;
pub use geometry::{ArrowDirection, DesiredSize, Margin, Orientation, Rect, TintedEdge, ViewportSize};
pub use items::{ItemList, ItemWindow, RenderedItem};
pub use placement::{compute_placement, GreedyPlacement, Placement, PlacementConfig, PlacementEngine};
