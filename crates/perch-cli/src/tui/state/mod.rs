//! App State Components

mod layout;

pub use layout::{ItemHit, Justify, LayoutState};
