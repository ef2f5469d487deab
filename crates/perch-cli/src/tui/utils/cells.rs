//! Conversion between placement units and terminal cells
//!
//! One cell is one unit. Fractions are rounded and the result is clipped to
//! the drawable area so widgets never touch cells outside the buffer.

use ratatui::layout::Rect as CellRect;

use perch_core::Rect;

/// Terminal rectangle to placement rectangle
pub fn from_cells(area: CellRect) -> Rect {
    Rect::new(
        area.x as f32,
        area.y as f32,
        area.width as f32,
        area.height as f32,
    )
}

fn round_into(value: f32, min: u16, max: u16) -> u16 {
    let rounded = value.round();
    if rounded <= min as f32 {
        min
    } else if rounded >= max as f32 {
        max
    } else {
        rounded as u16
    }
}

/// Placement rectangle to terminal rectangle, clipped to `bounds`
pub fn to_cells(rect: &Rect, bounds: CellRect) -> CellRect {
    let left = round_into(rect.x, bounds.x, bounds.right());
    let top = round_into(rect.y, bounds.y, bounds.bottom());
    let right = round_into(rect.right(), left, bounds.right());
    let bottom = round_into(rect.bottom(), top, bounds.bottom());
    CellRect::new(left, top, right - left, bottom - top)
}
