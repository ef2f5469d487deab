//! Selection and the slice of items that fits in the panel
//!
//! Counted in items along the list's layout axis. The caller converts the
//! panel extent on that axis into slots with [`ItemWindow::fit`].

use std::ops::Range;

/// Selected item plus the visible slice around it.
///
/// Before the first `fit` every item counts as visible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemWindow {
    len: usize,
    selected: usize,
    first: usize,
    slots: Option<usize>,
}

impl ItemWindow {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            ..Self::default()
        }
    }

    /// Size the window to a panel that is `panel_extent` long on the list
    /// axis, each item taking `item_extent`. Returns the slot count.
    pub fn fit(&mut self, panel_extent: f32, item_extent: f32) -> usize {
        let slots = if panel_extent > 0.0 && item_extent > 0.0 {
            (panel_extent / item_extent).floor() as usize
        } else {
            0
        };
        self.slots = Some(slots);
        self.follow();
        slots
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Move the selection by `delta` items, stopping at either end
    pub fn step(&mut self, delta: isize) {
        if self.len == 0 {
            return;
        }
        self.selected = self
            .selected
            .saturating_add_signed(delta)
            .min(self.len - 1);
        self.follow();
    }

    /// Select `index` if it exists
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.selected = index;
        self.follow();
        true
    }

    /// Indices inside the window
    pub fn range(&self) -> Range<usize> {
        let end = match self.slots {
            Some(slots) => (self.first + slots).min(self.len),
            None => self.len,
        };
        self.first.min(end)..end
    }

    /// Items cut off before and after the window
    pub fn hidden(&self) -> (usize, usize) {
        let range = self.range();
        (range.start, self.len - range.end)
    }

    /// Slide the window just far enough to keep the selection inside, and
    /// never past the last full page.
    fn follow(&mut self) {
        let Some(slots) = self.slots else {
            self.first = 0;
            return;
        };
        if slots == 0 {
            self.first = self.selected;
            return;
        }
        let lowest = (self.selected + 1).saturating_sub(slots);
        self.first = self
            .first
            .clamp(lowest, self.selected)
            .min(self.len.saturating_sub(slots));
    }
}
