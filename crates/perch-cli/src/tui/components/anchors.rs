//! Demo screen - justify toggle and the anchor buttons

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::Paragraph,
    Frame,
};

use crate::tui::state::Justify;
use crate::tui::themes::Theme;
use crate::tui::utils::center_in;

const LEFT_GUTTER: u16 = 1;
const TOP_OFFSET: u16 = 2;
const TOGGLE_WIDTH: u16 = 24;
const ANCHOR_WIDTH: u16 = 14;
/// Blank rows between stacked widgets
const GAP: u16 = 1;

const TOGGLE_LABEL: &str = "Change JustifyContent";

/// Areas drawn this frame
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DemoAreas {
    pub toggle: Option<Rect>,
    pub anchors: Vec<Rect>,
}

/// Compute where the toggle and anchors go for the given body area
pub fn layout_demo(body: Rect, justify: Justify, anchor_count: usize) -> DemoAreas {
    let x = body.x + LEFT_GUTTER.min(body.width);
    let width_left = body.right().saturating_sub(x);

    let toggle_y = body.y + TOP_OFFSET;
    if toggle_y >= body.bottom() {
        return DemoAreas::default();
    }
    let toggle = Rect::new(x, toggle_y, TOGGLE_WIDTH.min(width_left), 1);

    let column_height = anchor_count as u16 * (1 + GAP);
    let first_free = toggle_y + 1 + GAP;
    let start_y = match justify {
        Justify::Start => first_free,
        Justify::End => body
            .bottom()
            .saturating_sub(column_height)
            .max(first_free),
    };

    let anchors = (0..anchor_count as u16)
        .map(|i| start_y + i * (1 + GAP))
        .filter(|y| *y < body.bottom())
        .map(|y| Rect::new(x, y, ANCHOR_WIDTH.min(width_left), 1))
        .collect();

    DemoAreas {
        toggle: Some(toggle),
        anchors,
    }
}

/// Draw the toggle button and one button per anchor label
pub fn render_demo_screen(
    f: &mut Frame,
    body: Rect,
    justify: Justify,
    labels: &[&str],
    theme: &Theme,
) -> DemoAreas {
    let areas = layout_demo(body, justify, labels.len());
    let button = Style::default()
        .bg(theme.anchor_bg_color)
        .fg(theme.anchor_text_color);

    if let Some(toggle) = areas.toggle {
        f.render_widget(
            Paragraph::new(center_in(TOGGLE_LABEL, toggle.width as usize))
                .style(button.add_modifier(Modifier::BOLD)),
            toggle,
        );
    }

    for (area, label) in areas.anchors.iter().zip(labels) {
        f.render_widget(
            Paragraph::new(center_in(label, area.width as usize)).style(button),
            *area,
        );
    }

    areas
}
