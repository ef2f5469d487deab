//! Popover overlay - scrim, panel, items and arrow
//!
//! Draws whatever the controller's current frame describes. Geometry is
//! never adjusted here beyond settling an auto height and rounding to cells.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Clear, Paragraph},
    Frame,
};

use perch_core::{ArrowDirection, Orientation, Placement, TintedEdge};

use crate::tui::demo::{DemoItem, DemoPopover};
use crate::tui::state::ItemHit;
use crate::tui::themes::Theme;
use crate::tui::utils::{center_in, to_cells};

/// Hit-test areas of a drawn overlay
#[derive(Debug, Default, Clone)]
pub struct OverlayAreas {
    pub panel: Rect,
    pub items: Vec<ItemHit>,
}

/// Dim everything under the overlay
fn render_scrim(buf: &mut Buffer, screen: Rect, theme: &Theme) {
    buf.set_style(
        screen,
        Style::default()
            .bg(theme.scrim_color)
            .add_modifier(Modifier::DIM),
    );
}

/// Lay items out along the list axis, one slot per item
fn item_slots(panel: Rect, orientation: Orientation, extent: u16, count: usize) -> Vec<Rect> {
    let extent = extent.max(1);
    (0..count as u16)
        .map(|i| match orientation {
            Orientation::Horizontal => Rect::new(panel.x + i * extent, panel.y, extent, panel.height),
            Orientation::Vertical => Rect::new(panel.x, panel.y + i * extent, panel.width, extent),
        })
        .filter(|slot| slot.right() <= panel.right() && slot.bottom() <= panel.bottom())
        .collect()
}

/// Edge markers for items scrolled out of the panel, given the
/// `(before, after)` hidden counts
fn overflow_markers(
    panel: Rect,
    orientation: Orientation,
    (before, after): (usize, usize),
) -> Vec<((u16, u16), char)> {
    if panel.width == 0 || panel.height == 0 {
        return Vec::new();
    }
    let (last_column, last_row) = (panel.right() - 1, panel.bottom() - 1);
    let (start, end) = match orientation {
        Orientation::Horizontal => (((panel.x, panel.y), '‹'), ((last_column, panel.y), '›')),
        Orientation::Vertical => (((last_column, panel.y), '▴'), ((last_column, last_row), '▾')),
    };

    let mut markers = Vec::new();
    if before > 0 {
        markers.push(start);
    }
    if after > 0 {
        markers.push(end);
    }
    markers
}

/// Cell for the arrow glyph, on the triangle edge that faces the panel
fn arrow_cell(placement: &Placement, panel: Rect, screen: Rect) -> Option<(u16, u16)> {
    if placement.arrow_thickness <= 0.0 || panel.width == 0 {
        return None;
    }
    let arrow = placement.arrow_rect();
    let row = match placement.arrow_direction.tinted_edge() {
        TintedEdge::Bottom => arrow.bottom() - 1.0,
        TintedEdge::Top => arrow.y,
    };
    let column = arrow
        .center_x()
        .floor()
        .max(panel.x as f32)
        .min((panel.right() - 1) as f32);

    let (column, row) = (column as i32, row.floor() as i32);
    let inside = column >= screen.x as i32
        && column < screen.right() as i32
        && row >= screen.y as i32
        && row < screen.bottom() as i32;
    inside.then_some((column as u16, row as u16))
}

fn render_arrow(buf: &mut Buffer, placement: &Placement, panel: Rect, screen: Rect, theme: &Theme) {
    let Some(position) = arrow_cell(placement, panel, screen) else {
        return;
    };
    let glyph = match placement.arrow_direction {
        ArrowDirection::Up => '▲',
        ArrowDirection::Down => '▼',
    };
    if let Some(cell) = buf.cell_mut(position) {
        cell.set_char(glyph)
            .set_fg(theme.panel_bg_color)
            .set_bg(theme.scrim_color);
    }
}

/// Draw the popover if its controller is visible.
///
/// `screen` is the area the overlay may cover (everything above the status
/// bar). Returns the panel and item areas for hit testing.
pub fn render_overlay(
    f: &mut Frame,
    screen: Rect,
    popover: &mut DemoPopover,
    theme: &Theme,
) -> Option<OverlayAreas> {
    let frame = popover.controller.frame()?;
    let placement = frame
        .placement
        .resolve_height(popover.content_height() as f32);
    let panel = to_cells(&placement.popover_rect(), screen);

    render_scrim(f.buffer_mut(), screen, theme);

    f.render_widget(Clear, panel);
    f.render_widget(
        Block::default().style(Style::default().bg(theme.panel_bg_color)),
        panel,
    );

    popover.items.fit_panel(
        panel.width as f32,
        panel.height as f32,
        popover.item_extent as f32,
    );

    let label = popover.label;
    let dismiss = popover.controller.dismiss_handle();
    let rendered = popover
        .items
        .render(&dismiss, |item, dismiss| DemoItem::render(label, item, dismiss));
    let slots = item_slots(panel, frame.orientation, popover.item_extent, rendered.len());

    let mut items = Vec::with_capacity(slots.len());
    for (entry, slot) in rendered.into_iter().zip(slots) {
        let mut style = Style::default()
            .bg(theme.panel_bg_color)
            .fg(theme.panel_text_color);
        if entry.selected {
            style = style.bg(theme.selected_color).add_modifier(Modifier::BOLD);
        }
        f.render_widget(
            Paragraph::new(center_in(&entry.node.text, slot.width as usize)).style(style),
            slot,
        );
        items.push(ItemHit {
            index: entry.index,
            area: slot,
            press: entry.node.press,
        });
    }

    let hidden = popover.items.window().hidden();
    for (position, marker) in overflow_markers(panel, frame.orientation, hidden) {
        if let Some(cell) = f.buffer_mut().cell_mut(position) {
            cell.set_char(marker).set_fg(theme.panel_text_color);
        }
    }

    render_arrow(f.buffer_mut(), &placement, panel, screen, theme);

    Some(OverlayAreas { panel, items })
}

#[cfg(test)]
mod tests {
    use super::*;
    use perch_core::{compute_placement, DesiredSize, PlacementConfig, ViewportSize};

    fn config(orientation: Orientation, desired: DesiredSize) -> PlacementConfig {
        PlacementConfig {
            arrow_thickness: 1.0,
            desired_size: desired,
            orientation,
            ..PlacementConfig::default()
        }
    }

    #[test]
    fn test_item_slots_horizontal() {
        let slots = item_slots(Rect::new(2, 8, 20, 1), Orientation::Horizontal, 5, 5);
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[1], Rect::new(7, 8, 5, 1));
    }

    #[test]
    fn test_item_slots_vertical() {
        let slots = item_slots(Rect::new(2, 8, 12, 3), Orientation::Vertical, 1, 3);
        assert_eq!(slots, vec![
            Rect::new(2, 8, 12, 1),
            Rect::new(2, 9, 12, 1),
            Rect::new(2, 10, 12, 1),
        ]);
    }

    #[test]
    fn test_overflow_markers() {
        let row = Rect::new(0, 7, 20, 1);
        assert_eq!(
            overflow_markers(row, Orientation::Horizontal, (0, 1)),
            vec![((19, 7), '›')]
        );
        assert_eq!(
            overflow_markers(row, Orientation::Horizontal, (2, 0)),
            vec![((0, 7), '‹')]
        );

        let column = Rect::new(2, 9, 12, 3);
        assert_eq!(
            overflow_markers(column, Orientation::Vertical, (1, 1)),
            vec![((13, 9), '▴'), ((13, 11), '▾')]
        );
        assert!(overflow_markers(column, Orientation::Vertical, (0, 0)).is_empty());
        assert!(overflow_markers(Rect::new(0, 0, 0, 0), Orientation::Vertical, (1, 1)).is_empty());
    }

    #[test]
    fn test_arrow_below_anchor() {
        let screen = Rect::new(0, 0, 80, 23);
        let anchor = perch_core::Rect::new(1.0, 4.0, 14.0, 1.0);
        let placement = compute_placement(
            &anchor,
            &ViewportSize::new(80.0, 23.0),
            &config(Orientation::Horizontal, DesiredSize::new(20.0, 1.0)),
        );
        assert_eq!(placement.arrow_direction, ArrowDirection::Up);
        let panel = to_cells(&placement.popover_rect(), screen);
        assert_eq!(panel, Rect::new(0, 7, 20, 1));

        // Arrow box rows 5..7, glyph on the row touching the panel
        assert_eq!(arrow_cell(&placement, panel, screen), Some((8, 6)));
    }

    #[test]
    fn test_arrow_above_anchor() {
        let screen = Rect::new(0, 0, 80, 23);
        let anchor = perch_core::Rect::new(1.0, 21.0, 14.0, 1.0);
        let placement = compute_placement(
            &anchor,
            &ViewportSize::new(80.0, 23.0),
            &config(Orientation::Vertical, DesiredSize::new(12.0, 3.0)),
        );
        assert_eq!(placement.arrow_direction, ArrowDirection::Down);
        let panel = to_cells(&placement.popover_rect(), screen);
        assert_eq!(panel, Rect::new(2, 16, 12, 3));
        assert_eq!(arrow_cell(&placement, panel, screen), Some((8, 19)));
    }

    #[test]
    fn test_no_arrow_without_thickness() {
        let screen = Rect::new(0, 0, 80, 23);
        let placement = compute_placement(
            &perch_core::Rect::new(1.0, 4.0, 14.0, 1.0),
            &ViewportSize::new(80.0, 23.0),
            &PlacementConfig {
                arrow_thickness: 0.0,
                ..PlacementConfig::default()
            },
        );
        let panel = to_cells(&placement.popover_rect(), screen);
        assert_eq!(arrow_cell(&placement, panel, screen), None);
    }
}
