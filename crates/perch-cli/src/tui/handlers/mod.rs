//! App event handlers
//!
//! Split out of app.rs by concern; each file adds methods to [`App`](crate::tui::app::App).

mod event_loop;
mod keyboard;
mod mouse;
mod rendering;
