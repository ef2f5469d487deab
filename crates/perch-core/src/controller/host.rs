//! Host platform seam
//!
//! The controller never talks to a windowing system directly. Hosts report the
//! anchor's on-screen rectangle asynchronously and the viewport size on demand.

use async_trait::async_trait;

use crate::geometry::{Rect, ViewportSize};

/// Capabilities the controller needs from the embedding platform
#[async_trait]
pub trait HostPlatform: Send + Sync {
    /// Measure the anchor in window coordinates.
    ///
    /// Returns `None` when the anchor can no longer be measured (for example it
    /// was unmounted while the query was in flight).
    async fn measure_anchor_in_window(&self) -> Option<Rect>;

    /// Raw viewport size, chrome included
    fn viewport_size(&self) -> ViewportSize;

    /// Platform-reserved height (status bar etc.) that occludes content
    fn chrome_inset(&self) -> f32 {
        0.0
    }

    /// Viewport with the chrome inset removed
    fn usable_viewport(&self) -> ViewportSize {
        self.viewport_size().with_chrome_inset(self.chrome_inset())
    }
}

/// Token identifying one in-flight anchor measurement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeasureTicket(u64);

impl MeasureTicket {
    pub(crate) fn new(token: u64) -> Self {
        Self(token)
    }

    /// Raw token value
    pub fn token(&self) -> u64 {
        self.0
    }
}
