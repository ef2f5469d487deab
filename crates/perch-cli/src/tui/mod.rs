//! Terminal demo for Perch

pub mod app;
pub mod components;
pub mod demo;
pub mod handlers;
pub mod host;
pub mod state;
pub mod themes;
pub mod utils;

// Re-exports
pub use app::App;
pub use demo::DEFAULT_ARROW_CELLS;
