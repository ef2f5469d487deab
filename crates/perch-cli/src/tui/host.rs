//! Terminal host platform
//!
//! Anchors are ordinary widgets; their cell rectangles are recorded while the
//! frame is drawn and read back when a popover asks to measure its anchor.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use ratatui::layout::Rect as CellRect;

use perch_core::{HostPlatform, Rect, ViewportSize};

use crate::tui::utils::from_cells;

/// Anchor rectangles and screen metrics from the last drawn frame
#[derive(Debug, Default)]
pub struct AnchorLayout {
    anchors: HashMap<usize, CellRect>,
    screen: (u16, u16),
    chrome_rows: u16,
}

impl AnchorLayout {
    pub fn new(width: u16, height: u16, chrome_rows: u16) -> Self {
        Self {
            anchors: HashMap::new(),
            screen: (width, height),
            chrome_rows,
        }
    }

    pub fn record_anchor(&mut self, id: usize, area: CellRect) {
        self.anchors.insert(id, area);
    }

    /// Forget an anchor that is no longer drawn
    pub fn forget_anchor(&mut self, id: usize) {
        self.anchors.remove(&id);
    }

    pub fn set_screen(&mut self, width: u16, height: u16) {
        self.screen = (width, height);
    }

    pub fn anchor(&self, id: usize) -> Option<CellRect> {
        self.anchors.get(&id).copied()
    }
}

/// Layout shared between the render pass and measurement tasks
pub type SharedAnchors = Arc<RwLock<AnchorLayout>>;

/// Host platform for one anchor on the terminal
#[derive(Debug, Clone)]
pub struct TerminalHost {
    anchor_id: usize,
    layout: SharedAnchors,
}

impl TerminalHost {
    pub fn new(anchor_id: usize, layout: SharedAnchors) -> Self {
        Self { anchor_id, layout }
    }
}

#[async_trait]
impl HostPlatform for TerminalHost {
    async fn measure_anchor_in_window(&self) -> Option<Rect> {
        let area = self.layout.read().anchor(self.anchor_id)?;
        if area.width == 0 || area.height == 0 {
            return None;
        }
        Some(from_cells(area))
    }

    fn viewport_size(&self) -> ViewportSize {
        let (width, height) = self.layout.read().screen;
        ViewportSize::new(width as f32, height as f32)
    }

    /// Status bar rows at the bottom of the screen
    fn chrome_inset(&self) -> f32 {
        self.layout.read().chrome_rows as f32
    }
}
