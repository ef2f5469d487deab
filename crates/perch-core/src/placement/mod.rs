//! Placement engine
//!
//! Pure geometry: given the anchor rectangle, the usable viewport and the
//! popover configuration, decide which side of the anchor the panel goes on,
//! how large it may be, and where the panel and arrow are drawn.

mod direction;
mod position;
mod size;

pub use direction::choose_direction;
pub use position::{position_horizontally, HorizontalPosition};
pub use size::{clamp_size, PanelSize};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::constants::placement::DEFAULT_ARROW_THICKNESS;
use crate::geometry::{ArrowDirection, DesiredSize, Margin, Orientation, Rect, ViewportSize};

/// Inputs to the engine besides the anchor and viewport
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// Half-width of the arrow triangle
    pub arrow_thickness: f32,
    /// Minimum clearance from the viewport edges
    pub margin: Margin,
    /// Preferred panel size
    pub desired_size: DesiredSize,
    /// Item layout axis, passed through untouched
    pub orientation: Orientation,
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            arrow_thickness: DEFAULT_ARROW_THICKNESS,
            margin: Margin::default(),
            desired_size: DesiredSize::default(),
            orientation: Orientation::default(),
        }
    }
}

/// Where the overlay renderer draws the panel and arrow
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub arrow_direction: ArrowDirection,
    pub arrow_top: f32,
    pub arrow_left: f32,
    /// Arrow box is `2 * arrow_thickness` on each side
    pub arrow_thickness: f32,
    pub popover_top: f32,
    pub popover_left: f32,
    pub popover_width: f32,
    /// Zero when the content should define the height
    pub popover_height: f32,
    /// Room on the chosen side of the anchor
    pub max_popover_height: f32,
    pub orientation: Orientation,
}

impl Placement {
    /// Panel rectangle
    pub fn popover_rect(&self) -> Rect {
        Rect::new(
            self.popover_left,
            self.popover_top,
            self.popover_width,
            self.popover_height,
        )
    }

    /// Bounding box of the arrow triangle
    pub fn arrow_rect(&self) -> Rect {
        let side = self.arrow_thickness * 2.0;
        Rect::new(self.arrow_left, self.arrow_top, side, side)
    }

    /// Height set by the engine, or `None` when the content decides
    pub fn fixed_height(&self) -> Option<f32> {
        (self.popover_height > 0.0).then_some(self.popover_height)
    }

    /// Settle an auto height once the content height is known.
    ///
    /// The height is capped at the available room. A panel above the anchor
    /// is shifted up so it still ends at the arrow.
    pub fn resolve_height(&self, content_height: f32) -> Placement {
        if self.fixed_height().is_some() {
            return *self;
        }
        let height = content_height.max(0.0).min(self.max_popover_height);
        let popover_top = match self.arrow_direction {
            ArrowDirection::Down => self.arrow_top - height,
            ArrowDirection::Up => self.popover_top,
        };
        Placement {
            popover_top,
            popover_height: height,
            ..*self
        }
    }
}

/// Compute the placement of a popover next to `anchor`.
///
/// Total over non-negative inputs; degenerate combinations shrink the panel
/// (down to zero) instead of failing.
pub fn compute_placement(
    anchor: &Rect,
    viewport: &ViewportSize,
    config: &PlacementConfig,
) -> Placement {
    let thickness = config.arrow_thickness;
    let margin = &config.margin;

    let direction = choose_direction(
        anchor,
        viewport,
        thickness,
        config.desired_size.height,
        margin.bottom,
    );
    let size = clamp_size(
        anchor,
        viewport,
        margin,
        &config.desired_size,
        thickness,
        direction,
    );

    let (arrow_top, popover_top) = match direction {
        ArrowDirection::Down => {
            let arrow_top = anchor.y - thickness * 2.0;
            (arrow_top, arrow_top - size.height)
        }
        ArrowDirection::Up => {
            let arrow_top = anchor.bottom();
            (arrow_top, arrow_top + thickness * 2.0)
        }
    };

    let horizontal = position_horizontally(anchor, viewport, margin, thickness, size.width);

    trace!(
        ?direction,
        width = horizontal.popover_width,
        height = size.height,
        "Computed popover placement"
    );

    Placement {
        arrow_direction: direction,
        arrow_top,
        arrow_left: horizontal.arrow_left,
        arrow_thickness: thickness,
        popover_top,
        popover_left: horizontal.popover_left,
        popover_width: horizontal.popover_width,
        popover_height: size.height,
        max_popover_height: size.max_height,
        orientation: config.orientation,
    }
}

/// Anything that can turn anchor geometry into a [`Placement`]
pub trait PlacementEngine {
    fn place(&self, anchor: &Rect, viewport: &ViewportSize, config: &PlacementConfig)
        -> Placement;
}

/// The default greedy "prefer below" engine
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedyPlacement;

impl PlacementEngine for GreedyPlacement {
    fn place(
        &self,
        anchor: &Rect,
        viewport: &ViewportSize,
        config: &PlacementConfig,
    ) -> Placement {
        compute_placement(anchor, viewport, config)
    }
}

impl<F> PlacementEngine for F
where
    F: Fn(&Rect, &ViewportSize, &PlacementConfig) -> Placement,
{
    fn place(
        &self,
        anchor: &Rect,
        viewport: &ViewportSize,
        config: &PlacementConfig,
    ) -> Placement {
        self(anchor, viewport, config)
    }
}
