//! Item list shown inside the popover panel
//!
//! Holds caller data plus a key extractor; rendering is delegated to a
//! per-item callback so the crate stays independent of any widget toolkit.

mod window;

pub use window::ItemWindow;

use std::collections::HashSet;
use std::fmt;

use tracing::warn;

use crate::controller::DismissHandle;
use crate::geometry::Orientation;

type KeyExtractor<T> = Box<dyn Fn(&T) -> String + Send + Sync>;

/// One rendered entry of the visible window
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedItem<R> {
    pub key: String,
    pub index: usize,
    pub selected: bool,
    pub node: R,
}

/// Items, their keys, the layout axis and the selection window
pub struct ItemList<T> {
    items: Vec<T>,
    key_extractor: KeyExtractor<T>,
    orientation: Orientation,
    window: ItemWindow,
}

impl<T> fmt::Debug for ItemList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemList")
            .field("len", &self.items.len())
            .field("orientation", &self.orientation)
            .field("window", &self.window)
            .finish()
    }
}

impl<T> ItemList<T> {
    /// Build a list. Duplicate keys are logged, not rejected.
    pub fn new<K>(items: Vec<T>, key_extractor: K, orientation: Orientation) -> Self
    where
        K: Fn(&T) -> String + Send + Sync + 'static,
    {
        let list = Self {
            window: ItemWindow::new(items.len()),
            items,
            key_extractor: Box::new(key_extractor),
            orientation,
        };
        list.warn_duplicate_keys();
        list
    }

    fn warn_duplicate_keys(&self) {
        let mut seen = HashSet::new();
        for item in &self.items {
            let key = (self.key_extractor)(item);
            if !seen.insert(key.clone()) {
                warn!(key = %key, "Duplicate popover item key");
            }
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn window(&self) -> &ItemWindow {
        &self.window
    }

    /// Fit the window to a `width` x `height` panel, reading the extent on
    /// the list's own axis. Returns how many items fit.
    pub fn fit_panel(&mut self, width: f32, height: f32, item_extent: f32) -> usize {
        let along = match self.orientation {
            Orientation::Horizontal => width,
            Orientation::Vertical => height,
        };
        self.window.fit(along, item_extent)
    }

    pub fn select_next(&mut self) {
        self.window.step(1);
    }

    pub fn select_prev(&mut self) {
        self.window.step(-1);
    }

    /// Select by index, ignoring out-of-range values
    pub fn select(&mut self, index: usize) {
        self.window.select(index);
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.window.selected())
    }

    /// Call `render` for each item in the visible window.
    ///
    /// The callback receives the dismiss handle so an item can close the
    /// popover when it is activated.
    pub fn render<R, F>(&self, dismiss: &DismissHandle, mut render: F) -> Vec<RenderedItem<R>>
    where
        F: FnMut(&T, &DismissHandle) -> R,
    {
        let selected = self.window.selected();
        self.window
            .range()
            .filter_map(|index| self.items.get(index).map(|item| (index, item)))
            .map(|(index, item)| RenderedItem {
                key: (self.key_extractor)(item),
                index,
                selected: index == selected,
                node: render(item, dismiss),
            })
            .collect()
    }
}
