//! Event loop polling
//!
//! Drains finished anchor measurements and dismiss requests once per tick.

use tokio::sync::mpsc::error::TryRecvError;
use tracing::{debug, warn};

use crate::tui::app::App;
use crate::tui::utils::MeasureResult;

impl App {
    /// Apply every measurement that has arrived. Returns true if any did.
    pub(crate) fn poll_measurements(&mut self) -> bool {
        let mut applied = false;
        loop {
            match self.channels.measurements.try_recv() {
                Ok(result) => {
                    self.apply_measurement(result);
                    applied = true;
                }
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    warn!("Measurement channel closed");
                    break;
                }
            }
        }
        applied
    }

    pub(crate) fn apply_measurement(&mut self, result: MeasureResult) {
        let Some(popover) = self.popovers.get_mut(result.popover) else {
            return;
        };
        if popover.controller.complete_activation(result.ticket, result.rect) {
            debug!(popover = popover.label, "Popover shown");
        }
    }

    /// Close popovers whose items asked to be dismissed
    pub(crate) fn poll_dismissals(&mut self) -> bool {
        let mut dismissed = false;
        for popover in &mut self.popovers {
            dismissed |= popover.controller.poll_dismiss();
        }
        dismissed
    }
}

#[cfg(test)]
mod tests {
    use crate::tui::app::tests::{draw, test_app};

    #[tokio::test]
    async fn test_poll_applies_measurement() {
        let mut app = test_app();
        draw(&mut app);
        app.activate_popover(0);

        // Measurement task runs on the test runtime
        while !app.poll_measurements() {
            tokio::task::yield_now().await;
        }
        assert_eq!(app.open_popover(), Some(0));
        assert!(!app.poll_measurements());
    }

    #[tokio::test]
    async fn test_stale_measurement_dropped() {
        let mut app = test_app();
        draw(&mut app);
        app.activate_popover(0);
        app.popovers[0].controller.dismiss();

        while !app.poll_measurements() {
            tokio::task::yield_now().await;
        }
        assert_eq!(app.open_popover(), None);
    }

    #[tokio::test]
    async fn test_poll_dismissals() {
        let mut app = test_app();
        draw(&mut app);
        app.activate_popover(1);
        crate::tui::app::tests::settle(&mut app).await;

        assert!(!app.poll_dismissals());
        app.popovers[1].controller.dismiss_handle().dismiss();
        assert!(app.poll_dismissals());
        assert_eq!(app.open_popover(), None);
    }
}
