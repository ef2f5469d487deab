//! Keyboard event handlers
//!
//! An open popover takes every key except Ctrl+C.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::tui::app::App;

impl App {
    /// Main keyboard event dispatcher
    pub fn handle_key(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }
        let code = key_event.code;

        if key_event.modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if let Some(index) = self.open_popover() {
            self.handle_popover_key(index, code);
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('j') => self.toggle_justify(),
            KeyCode::Char(c) => {
                // 1-based anchor number
                if let Some(n) = c.to_digit(10).filter(|n| *n > 0) {
                    self.activate_popover(n as usize - 1);
                }
            }
            _ => {}
        }
    }

    fn handle_popover_key(&mut self, index: usize, code: KeyCode) {
        match code {
            KeyCode::Esc | KeyCode::Char('q') => self.dismiss_open(),
            KeyCode::Right | KeyCode::Down | KeyCode::Tab => {
                self.popovers[index].items.select_next()
            }
            KeyCode::Left | KeyCode::Up | KeyCode::BackTab => {
                self.popovers[index].items.select_prev()
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                let selected = self.popovers[index].items.window().selected();
                if let Some(press) = self.layout.item(selected).map(|hit| hit.press.clone()) {
                    self.press_item(press);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::tests::{draw, settle, test_app};
    use crate::tui::state::Justify;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = test_app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn test_toggle_justify() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.justify, Justify::End);
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.justify, Justify::Start);
    }

    #[tokio::test]
    async fn test_select_and_pick() {
        let mut app = test_app();
        draw(&mut app);
        press(&mut app, KeyCode::Char('2'));
        settle(&mut app).await;
        assert_eq!(app.open_popover(), Some(1));
        draw(&mut app);

        // Keys go to the popover while it is open
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.justify, Justify::Start);

        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Up);
        draw(&mut app);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.last_selection.as_deref(), Some("Vertical → 2"));
        assert_eq!(app.open_popover(), None);
    }

    #[tokio::test]
    async fn test_escape_dismisses() {
        let mut app = test_app();
        draw(&mut app);
        press(&mut app, KeyCode::Char('1'));
        settle(&mut app).await;

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.open_popover(), None);
        assert!(app.last_selection.is_none());
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_enter_follows_scrolled_window() {
        let mut app = test_app();
        draw(&mut app);
        press(&mut app, KeyCode::Char('2'));
        settle(&mut app).await;
        draw(&mut app);

        // Three rows show items 1..=3; the fifth scrolls into view
        for _ in 0..4 {
            press(&mut app, KeyCode::Down);
        }
        draw(&mut app);
        assert_eq!(app.popovers[1].items.window().hidden(), (2, 0));
        assert_eq!(app.layout.items.first().map(|hit| hit.index), Some(2));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.last_selection.as_deref(), Some("Vertical → 5"));
        assert_eq!(app.open_popover(), None);
    }

    #[test]
    fn test_unknown_anchor_number() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Char('9'));
        assert!(app.popovers.iter().all(|p| !p.controller.is_measuring()));
    }
}
