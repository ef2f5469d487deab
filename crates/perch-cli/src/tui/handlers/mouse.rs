//! Mouse event handling
//!
//! While a popover is open the scrim covers the screen: clicks land on an
//! item, on the panel, or on the scrim, which closes the popover.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::tui::app::App;

impl App {
    /// Handle clicks and wheel scrolling
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_left_click(column, row),
            MouseEventKind::ScrollDown => {
                if let Some(index) = self.open_popover() {
                    self.popovers[index].items.select_next();
                }
            }
            MouseEventKind::ScrollUp => {
                if let Some(index) = self.open_popover() {
                    self.popovers[index].items.select_prev();
                }
            }
            _ => {}
        }
    }

    fn handle_left_click(&mut self, column: u16, row: u16) {
        if let Some(index) = self.open_popover() {
            if let Some(press) = self.layout.item_at(column, row).map(|hit| hit.press.clone()) {
                self.press_item(press);
            } else if !self.layout.panel_hit(column, row) {
                self.popovers[index].controller.dismiss();
            }
            return;
        }

        if self.layout.toggle_hit(column, row) {
            self.toggle_justify();
        } else if let Some(index) = self.layout.anchor_at(column, row) {
            self.activate_popover(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    use crate::tui::app::tests::{draw, settle, test_app};
    use crate::tui::state::Justify;

    fn click(app: &mut App, column: u16, row: u16) {
        app.handle_mouse_event(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        });
    }

    #[test]
    fn test_click_toggle() {
        let mut app = test_app();
        draw(&mut app);
        click(&mut app, 3, 2);
        assert_eq!(app.justify, Justify::End);
    }

    #[tokio::test]
    async fn test_click_anchor_then_item() {
        let mut app = test_app();
        draw(&mut app);

        click(&mut app, 5, 4);
        settle(&mut app).await;
        assert_eq!(app.open_popover(), Some(0));
        draw(&mut app);

        // Items are 5 cells wide starting at column 0 on row 7
        click(&mut app, 6, 7);
        assert_eq!(app.last_selection.as_deref(), Some("Horizontal → 2"));
        assert_eq!(app.open_popover(), None);
    }

    #[tokio::test]
    async fn test_click_scrim_dismisses() {
        let mut app = test_app();
        draw(&mut app);
        click(&mut app, 5, 6);
        settle(&mut app).await;
        draw(&mut app);
        assert_eq!(app.open_popover(), Some(1));

        // The toggle is under the scrim
        click(&mut app, 3, 2);
        assert_eq!(app.open_popover(), None);
        assert_eq!(app.justify, Justify::Start);
        assert!(app.last_selection.is_none());
    }
}
