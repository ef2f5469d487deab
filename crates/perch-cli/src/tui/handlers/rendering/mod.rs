//! UI rendering coordinator
//!
//! Draws the demo screen, records anchor rectangles for measurement, then
//! layers the open popover and the status bar on top.

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::tui::app::App;
use crate::tui::components::{
    render_demo_screen, render_overlay, render_status_bar, STATUS_BAR_HEIGHT,
};

impl App {
    /// Main UI rendering dispatcher
    pub fn ui(&mut self, f: &mut Frame) {
        let area = f.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(area);
        let body = chunks[0];

        let labels: Vec<&str> = self.popovers.iter().map(|popover| popover.label).collect();
        let areas = render_demo_screen(f, body, self.justify, &labels, &self.theme);

        {
            let mut anchors = self.anchors.write();
            anchors.set_screen(area.width, area.height);
            for id in 0..self.popovers.len() {
                match areas.anchors.get(id) {
                    Some(anchor) => anchors.record_anchor(id, *anchor),
                    None => anchors.forget_anchor(id),
                }
            }
        }

        self.layout.toggle_area = areas.toggle;
        self.layout.anchor_areas = areas.anchors;
        self.layout.clear_overlay();

        for popover in &mut self.popovers {
            if let Some(overlay) = render_overlay(f, body, popover, &self.theme) {
                self.layout.panel_area = Some(overlay.panel);
                self.layout.items = overlay.items;
            }
        }

        render_status_bar(
            f,
            chunks[1],
            &self.theme,
            self.justify,
            self.last_selection.as_deref(),
            self.layout.panel_area.is_some(),
        );
    }
}
