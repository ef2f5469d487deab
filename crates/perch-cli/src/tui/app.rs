//! Main application state and event loop

use std::io;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, EventStream},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use parking_lot::RwLock;
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{debug, info};

use perch_core::{HostPlatform, Settings};

use crate::tui::components::STATUS_BAR_HEIGHT;
use crate::tui::demo::{build_popovers, DemoPopover, PressAction};
use crate::tui::host::{AnchorLayout, SharedAnchors};
use crate::tui::state::{Justify, LayoutState};
use crate::tui::themes::Theme;
use crate::tui::utils::{AsyncChannels, MeasureResult};

/// Main application state
pub struct App {
    pub(crate) popovers: Vec<DemoPopover>,
    /// Anchor rectangles shared with measurement tasks
    pub(crate) anchors: SharedAnchors,
    pub(crate) layout: LayoutState,
    pub(crate) channels: AsyncChannels,
    pub(crate) theme: Theme,
    pub(crate) justify: Justify,
    pub(crate) last_selection: Option<String>,
    /// Open popovers to re-measure after the next draw
    pub(crate) remeasure: bool,
    pub(crate) should_quit: bool,
    pub(crate) needs_redraw: bool,
}

impl App {
    /// Create the demo sized to the current terminal
    pub fn new(settings: Settings, arrow_thickness: f32) -> Result<Self> {
        let (width, height) = crossterm::terminal::size()?;
        Ok(Self::with_screen(settings, arrow_thickness, width, height))
    }

    pub(crate) fn with_screen(
        settings: Settings,
        arrow_thickness: f32,
        width: u16,
        height: u16,
    ) -> Self {
        let anchors: SharedAnchors = Arc::new(RwLock::new(AnchorLayout::new(
            width,
            height,
            STATUS_BAR_HEIGHT,
        )));
        let popovers = build_popovers(&settings, arrow_thickness, &anchors);

        Self {
            popovers,
            anchors,
            layout: LayoutState::new(),
            channels: AsyncChannels::new(),
            theme: Theme::with_background(&settings.background),
            justify: Justify::default(),
            last_selection: None,
            remeasure: false,
            should_quit: false,
            needs_redraw: true,
        }
    }

    /// Index of the popover on screen, if any
    pub(crate) fn open_popover(&self) -> Option<usize> {
        self.popovers
            .iter()
            .position(|popover| popover.controller.is_visible())
    }

    /// Measure the anchor of popover `index` in the background and show it
    /// once the measurement arrives. Any other popover is closed first.
    pub(crate) fn activate_popover(&mut self, index: usize) {
        if index >= self.popovers.len() {
            return;
        }
        for (i, popover) in self.popovers.iter_mut().enumerate() {
            if i != index && (popover.controller.is_visible() || popover.controller.is_measuring())
            {
                popover.controller.dismiss();
            }
        }

        let popover = &mut self.popovers[index];
        let Some(ticket) = popover.controller.begin_activation() else {
            return;
        };
        debug!(popover = popover.label, token = ticket.token(), "Measuring anchor");

        let host = popover.host.clone();
        let tx = self.channels.measure_tx.clone();
        tokio::spawn(async move {
            let rect = host.measure_anchor_in_window().await;
            let _ = tx.send(MeasureResult {
                popover: index,
                ticket,
                rect,
            });
        });
    }

    /// Run the press action of a drawn item. The action carries the
    /// popover's dismiss handle, so the popover closes with it.
    pub(crate) fn press_item(&mut self, press: PressAction) {
        let picked = press.fire();
        info!(picked = %picked, "Item picked");
        self.last_selection = Some(picked);
        self.poll_dismissals();
    }

    pub(crate) fn dismiss_open(&mut self) {
        if let Some(index) = self.open_popover() {
            self.popovers[index].controller.dismiss();
        }
    }

    pub(crate) fn toggle_justify(&mut self) {
        self.justify = self.justify.toggled();
        debug!(justify = self.justify.label(), "Justify toggled");
    }

    /// Terminal resized: update the viewport of every controller
    pub(crate) fn handle_resize(&mut self, width: u16, height: u16) {
        self.anchors.write().set_screen(width, height);
        for popover in &mut self.popovers {
            let viewport = popover.host.usable_viewport();
            popover.controller.on_viewport_changed(viewport);
        }
        self.remeasure = self.open_popover().is_some();
    }

    /// After a resize has been drawn, measure the open popover's anchor
    /// again. An anchor that no longer fits hides the popover.
    pub(crate) fn remeasure_open(&mut self) {
        if !std::mem::take(&mut self.remeasure) {
            return;
        }
        if let Some(index) = self.open_popover() {
            self.activate_popover(index);
        }
    }

    /// Run the application
    pub async fn run(&mut self) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let result = self.main_loop(&mut terminal).await;

        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        loop {
            if self.poll_measurements() {
                self.needs_redraw = true;
            }
            if self.poll_dismissals() {
                self.needs_redraw = true;
            }

            if self.needs_redraw {
                terminal.draw(|f| self.ui(f))?;
                self.needs_redraw = false;
            }

            // Anchors may have moved with the new screen size
            self.remeasure_open();

            tokio::select! {
                biased;

                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        match event {
                            Event::Key(key) => {
                                self.handle_key(key);
                                self.needs_redraw = true;
                            }
                            Event::Mouse(mouse) => {
                                self.handle_mouse_event(mouse);
                                self.needs_redraw = true;
                            }
                            Event::Resize(width, height) => {
                                self.handle_resize(width, height);
                                self.needs_redraw = true;
                            }
                            _ => {}
                        }
                    }
                }
                _ = tokio::time::sleep(Duration::from_millis(16)) => {}
            }

            if self.should_quit {
                break;
            }
        }
        Ok(())
    }
}
