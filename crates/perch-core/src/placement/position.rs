//! Horizontal positioning of the panel and arrow

use crate::geometry::{Margin, Rect, ViewportSize};

/// Horizontal placement result
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HorizontalPosition {
    pub popover_left: f32,
    pub popover_width: f32,
    pub arrow_left: f32,
}

/// Clamp into `[min, max]`, checking the lower bound first.
///
/// Degenerate layouts can produce `min > max`, where `f32::clamp` panics.
fn clamp_low_first(value: f32, min: f32, max: f32) -> f32 {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Centre the panel and arrow on the anchor, then pull both back inside bounds.
///
/// A panel at least as wide as the viewport is pinned to `left = 0` with the
/// full viewport width, ignoring the horizontal margins.
pub fn position_horizontally(
    anchor: &Rect,
    viewport: &ViewportSize,
    margin: &Margin,
    arrow_thickness: f32,
    width: f32,
) -> HorizontalPosition {
    let (popover_left, popover_width) = if width >= viewport.width {
        (0.0, viewport.width)
    } else {
        let centered = anchor.x + (anchor.width - width) / 2.0;
        let max_left = viewport.width - width - margin.right;
        (clamp_low_first(centered, margin.left, max_left), width)
    };

    let arrow_centered = anchor.center_x() - arrow_thickness;
    let max_arrow_left = popover_left + popover_width - arrow_thickness * 2.0;
    let arrow_left = clamp_low_first(arrow_centered, popover_left, max_arrow_left);

    HorizontalPosition {
        popover_left,
        popover_width,
        arrow_left,
    }
}
