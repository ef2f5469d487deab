//! Demo popovers
//!
//! Two anchors, one per item orientation, each with items `1..=5`.

use perch_core::{
    DesiredSize, DismissHandle, ItemList, Orientation, PlacementConfig, Settings,
    VisibilityController,
};

use crate::tui::host::{SharedAnchors, TerminalHost};

/// Arrow half-width used when measuring in cells
pub const DEFAULT_ARROW_CELLS: f32 = 1.0;

/// Cells per item along the list axis
const HORIZONTAL_ITEM_WIDTH: u16 = 5;
const VERTICAL_ITEM_HEIGHT: u16 = 1;

/// Rows used by a horizontal list
const HORIZONTAL_ROW_HEIGHT: u16 = 1;

/// An anchor, its popover state and its items
pub struct DemoPopover {
    pub label: &'static str,
    pub controller: VisibilityController,
    pub items: ItemList<u32>,
    pub host: TerminalHost,
    /// Cells per item along the orientation axis
    pub item_extent: u16,
}

impl DemoPopover {
    fn new(
        id: usize,
        label: &'static str,
        orientation: Orientation,
        desired_size: DesiredSize,
        settings: &Settings,
        arrow_thickness: f32,
        anchors: &SharedAnchors,
    ) -> Self {
        let host = TerminalHost::new(id, anchors.clone());
        let config = PlacementConfig {
            arrow_thickness: arrow_thickness.max(0.0),
            margin: settings.placement.margin,
            desired_size,
            orientation,
        };
        let item_extent = match orientation {
            Orientation::Horizontal => HORIZONTAL_ITEM_WIDTH,
            Orientation::Vertical => VERTICAL_ITEM_HEIGHT,
        };

        Self {
            label,
            controller: VisibilityController::for_host(&host, config),
            items: ItemList::new((1..=5).collect(), |item| item.to_string(), orientation),
            host,
            item_extent,
        }
    }

    /// Cells the content wants along the vertical axis
    pub fn content_height(&self) -> u16 {
        match self.items.orientation() {
            Orientation::Horizontal => HORIZONTAL_ROW_HEIGHT,
            Orientation::Vertical => self.items.len() as u16 * self.item_extent,
        }
    }
}

/// What pressing a drawn item does
#[derive(Debug, Clone)]
pub struct PressAction {
    picked: String,
    dismiss: DismissHandle,
}

impl PressAction {
    /// Close the popover and report the pick
    pub fn fire(&self) -> String {
        self.dismiss.dismiss();
        self.picked.clone()
    }
}

/// Rendered form of one item
#[derive(Debug, Clone)]
pub struct DemoItem {
    pub text: String,
    pub press: PressAction,
}

impl DemoItem {
    /// Item render callback: the dismiss handle is bound into the press action
    pub fn render(label: &str, item: &u32, dismiss: &DismissHandle) -> Self {
        Self {
            text: item.to_string(),
            press: PressAction {
                picked: format!("{} → {}", label, item),
                dismiss: dismiss.clone(),
            },
        }
    }
}

/// Build the demo popovers sharing one anchor layout
pub fn build_popovers(
    settings: &Settings,
    arrow_thickness: f32,
    anchors: &SharedAnchors,
) -> Vec<DemoPopover> {
    vec![
        DemoPopover::new(
            0,
            "Horizontal",
            Orientation::Horizontal,
            DesiredSize::new(20.0, 1.0),
            settings,
            arrow_thickness,
            anchors,
        ),
        DemoPopover::new(
            1,
            "Vertical",
            Orientation::Vertical,
            DesiredSize::new(12.0, 3.0),
            settings,
            arrow_thickness,
            anchors,
        ),
    ]
}
