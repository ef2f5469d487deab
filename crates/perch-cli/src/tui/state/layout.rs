//! Layout State - cached areas from the last frame
//!
//! Anchor rectangles live in the shared [`AnchorLayout`](crate::tui::host::AnchorLayout)
//! so measurement tasks can read them; everything only the UI thread needs
//! for hit testing is kept here.

use ratatui::layout::{Position, Rect};

use crate::tui::demo::PressAction;

/// Where the anchor column sits, mirroring flex `justify-content`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Start,
    End,
}

impl Justify {
    pub fn toggled(self) -> Self {
        match self {
            Justify::Start => Justify::End,
            Justify::End => Justify::Start,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Justify::Start => "flex-start",
            Justify::End => "flex-end",
        }
    }
}

/// A drawn item and what pressing it does
#[derive(Debug, Clone)]
pub struct ItemHit {
    pub index: usize,
    pub area: Rect,
    pub press: PressAction,
}

/// Cached layout areas for hit testing
///
/// Updated each frame during rendering, used for mouse and key handling.
#[derive(Debug, Default)]
pub struct LayoutState {
    /// "Change JustifyContent" button
    pub toggle_area: Option<Rect>,
    /// Anchor buttons, indexed like the popovers
    pub anchor_areas: Vec<Rect>,
    /// Open popover panel
    pub panel_area: Option<Rect>,
    /// Items drawn in the open panel
    pub items: Vec<ItemHit>,
}

impl LayoutState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop overlay areas when no popover is drawn
    pub fn clear_overlay(&mut self) {
        self.panel_area = None;
        self.items.clear();
    }

    pub fn toggle_hit(&self, column: u16, row: u16) -> bool {
        self.toggle_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Anchor under the cursor
    pub fn anchor_at(&self, column: u16, row: u16) -> Option<usize> {
        self.anchor_areas
            .iter()
            .position(|area| area.contains(Position::new(column, row)))
    }

    pub fn panel_hit(&self, column: u16, row: u16) -> bool {
        self.panel_area
            .is_some_and(|area| area.contains(Position::new(column, row)))
    }

    /// Item under the cursor
    pub fn item_at(&self, column: u16, row: u16) -> Option<&ItemHit> {
        self.items
            .iter()
            .find(|hit| hit.area.contains(Position::new(column, row)))
    }

    /// Drawn item with list index `index`
    pub fn item(&self, index: usize) -> Option<&ItemHit> {
        self.items.iter().find(|hit| hit.index == index)
    }
}
