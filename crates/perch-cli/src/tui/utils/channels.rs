//! Async Channels
//!
//! Anchor measurements run as background tasks and report back here; the
//! event loop drains the receiver once per tick.

use tokio::sync::mpsc;

use perch_core::{MeasureTicket, Rect};

/// Result of one anchor measurement
#[derive(Debug)]
pub struct MeasureResult {
    /// Index of the popover that asked
    pub popover: usize,
    pub ticket: MeasureTicket,
    pub rect: Option<Rect>,
}

/// Channels between background tasks and the UI loop
pub struct AsyncChannels {
    pub measure_tx: mpsc::UnboundedSender<MeasureResult>,
    pub measurements: mpsc::UnboundedReceiver<MeasureResult>,
}

impl AsyncChannels {
    pub fn new() -> Self {
        let (measure_tx, measurements) = mpsc::unbounded_channel();
        Self {
            measure_tx,
            measurements,
        }
    }
}

impl Default for AsyncChannels {
    fn default() -> Self {
        Self::new()
    }
}
