//! Panel size clamping

use crate::geometry::{ArrowDirection, DesiredSize, Margin, Rect, ViewportSize};

/// Effective panel extent after clamping
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelSize {
    pub width: f32,
    /// Zero means the content defines the height
    pub height: f32,
    /// Room on the chosen side of the anchor
    pub max_height: f32,
}

/// Clamp the desired size to the room available on the chosen side.
///
/// A non-positive desired width fills the width between the margins. Results
/// are floored at zero so degenerate inputs never produce negative extents.
pub fn clamp_size(
    anchor: &Rect,
    viewport: &ViewportSize,
    margin: &Margin,
    desired: &DesiredSize,
    arrow_thickness: f32,
    direction: ArrowDirection,
) -> PanelSize {
    let max_width = viewport.width - margin.left - margin.right;
    let width = if desired.width <= 0.0 || desired.width > max_width {
        max_width
    } else {
        desired.width
    };

    let max_height = match direction {
        ArrowDirection::Down => anchor.y - margin.top - arrow_thickness * 2.0,
        ArrowDirection::Up => {
            viewport.height - anchor.bottom() - arrow_thickness * 2.0 - margin.bottom
        }
    };
    let height = if desired.height >= max_height {
        max_height
    } else {
        desired.height
    };

    PanelSize {
        width: width.max(0.0),
        height: height.max(0.0),
        max_height: max_height.max(0.0),
    }
}
