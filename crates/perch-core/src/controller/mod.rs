//! Visibility controller
//!
//! Owns the transient popover state: the cached viewport, the last measured
//! anchor, the last placement and whether the overlay is shown. Placement is
//! only recomputed when the anchor moved or the cached result was invalidated.

mod dismiss;
mod host;

pub use dismiss::DismissHandle;
pub use host::{HostPlatform, MeasureTicket};

use tracing::{debug, warn};

use crate::geometry::{Orientation, Rect, ViewportSize};
use crate::placement::{GreedyPlacement, Placement, PlacementConfig, PlacementEngine};

/// Whether the overlay is on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

/// Everything the overlay renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayFrame {
    pub placement: Placement,
    pub orientation: Orientation,
}

/// Drives a single popover between hidden and visible
pub struct VisibilityController<E = GreedyPlacement> {
    engine: E,
    config: PlacementConfig,
    viewport: ViewportSize,
    visibility: Visibility,
    /// Anchor geometry the cached placement was computed from
    anchor: Option<Rect>,
    placement: Option<Placement>,
    next_token: u64,
    pending: Option<MeasureTicket>,
    dismiss: DismissHandle,
}

impl VisibilityController<GreedyPlacement> {
    /// Create a controller using the default engine
    pub fn new(viewport: ViewportSize, config: PlacementConfig) -> Self {
        Self::with_engine(GreedyPlacement, viewport, config)
    }

    /// Create a controller sized to the host's usable viewport
    pub fn for_host<H: HostPlatform + ?Sized>(host: &H, config: PlacementConfig) -> Self {
        Self::new(host.usable_viewport(), config)
    }
}

impl<E: PlacementEngine> VisibilityController<E> {
    /// Create a controller with a custom placement engine
    pub fn with_engine(engine: E, viewport: ViewportSize, config: PlacementConfig) -> Self {
        Self {
            engine,
            config,
            viewport,
            visibility: Visibility::Hidden,
            anchor: None,
            placement: None,
            next_token: 0,
            pending: None,
            dismiss: DismissHandle::new(),
        }
    }

    /// Start an activation. The caller measures the anchor and hands the
    /// result to [`complete_activation`](Self::complete_activation).
    ///
    /// Returns `None` while another measurement is still outstanding.
    pub fn begin_activation(&mut self) -> Option<MeasureTicket> {
        if let Some(pending) = self.pending {
            debug!(
                token = pending.token(),
                "Activation ignored, measurement pending"
            );
            return None;
        }

        self.next_token += 1;
        let ticket = MeasureTicket::new(self.next_token);
        self.pending = Some(ticket);
        self.dismiss.clear();
        Some(ticket)
    }

    /// Apply an anchor measurement.
    ///
    /// Measurements for a ticket that was cancelled or superseded are dropped.
    /// A missing measurement means the anchor is gone: the popover is hidden,
    /// even if it was showing, and the placement cache is kept. Returns
    /// whether the popover is visible afterwards.
    pub fn complete_activation(&mut self, ticket: MeasureTicket, measured: Option<Rect>) -> bool {
        if self.pending != Some(ticket) {
            debug!(token = ticket.token(), "Dropping stale anchor measurement");
            return false;
        }
        self.pending = None;

        let Some(anchor) = measured else {
            warn!(token = ticket.token(), "Anchor measurement unavailable");
            self.visibility = Visibility::Hidden;
            return false;
        };

        self.refresh(anchor);
        self.visibility = Visibility::Visible;
        true
    }

    /// Measure the anchor through `host` and show the popover
    pub async fn activate<H: HostPlatform + ?Sized>(&mut self, host: &H) -> bool {
        let Some(ticket) = self.begin_activation() else {
            return false;
        };
        let measured = host.measure_anchor_in_window().await;
        self.complete_activation(ticket, measured)
    }

    /// Hide the popover. The placement cache is kept for the next activation
    /// and any outstanding measurement is cancelled.
    pub fn dismiss(&mut self) {
        if let Some(pending) = self.pending.take() {
            debug!(token = pending.token(), "Cancelled pending measurement");
        }
        self.visibility = Visibility::Hidden;
        self.dismiss.clear();
    }

    /// Consume a dismiss request raised through a [`DismissHandle`]
    pub fn poll_dismiss(&mut self) -> bool {
        if self.dismiss.take() {
            self.dismiss();
            true
        } else {
            false
        }
    }

    /// Handle a host size or orientation change
    pub fn on_viewport_changed(&mut self, viewport: ViewportSize) {
        if viewport == self.viewport {
            return;
        }
        debug!(
            width = viewport.width,
            height = viewport.height,
            "Viewport changed"
        );
        self.viewport = viewport;
        self.invalidate();
    }

    /// Replace the placement configuration
    pub fn set_config(&mut self, config: PlacementConfig) {
        if config == self.config {
            return;
        }
        self.config = config;
        self.invalidate();
    }

    pub fn config(&self) -> &PlacementConfig {
        &self.config
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// True while an anchor measurement is outstanding
    pub fn is_measuring(&self) -> bool {
        self.pending.is_some()
    }

    /// Cached placement, kept across dismissals
    pub fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Render input for the current frame, if the popover is visible
    pub fn frame(&self) -> Option<OverlayFrame> {
        if !self.is_visible() {
            return None;
        }
        self.placement.map(|placement| OverlayFrame {
            placement,
            orientation: self.config.orientation,
        })
    }

    /// Handle that item callbacks use to close the popover
    pub fn dismiss_handle(&self) -> DismissHandle {
        self.dismiss.clone()
    }

    fn refresh(&mut self, anchor: Rect) {
        if self.anchor == Some(anchor) && self.placement.is_some() {
            debug!("Anchor unchanged, reusing placement");
            return;
        }
        self.recompute(anchor);
    }

    fn recompute(&mut self, anchor: Rect) {
        let placement = self.engine.place(&anchor, &self.viewport, &self.config);
        debug!(
            direction = ?placement.arrow_direction,
            top = placement.popover_top,
            left = placement.popover_left,
            "Placement recomputed"
        );
        self.anchor = Some(anchor);
        self.placement = Some(placement);
    }

    fn invalidate(&mut self) {
        self.placement = None;
        if self.is_visible() {
            if let Some(anchor) = self.anchor {
                self.recompute(anchor);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{ArrowDirection, DesiredSize};
    use crate::placement::compute_placement;
    use async_trait::async_trait;
    use std::cell::Cell;
    use std::sync::Mutex;

    const PHONE: ViewportSize = ViewportSize::new(320.0, 568.0);

    struct FakeHost {
        anchor: Mutex<Option<Rect>>,
        inset: f32,
    }

    impl FakeHost {
        fn new(anchor: Option<Rect>) -> Self {
            Self {
                anchor: Mutex::new(anchor),
                inset: 0.0,
            }
        }

        fn move_anchor(&self, anchor: Option<Rect>) {
            *self.anchor.lock().unwrap() = anchor;
        }
    }

    #[async_trait]
    impl HostPlatform for FakeHost {
        async fn measure_anchor_in_window(&self) -> Option<Rect> {
            *self.anchor.lock().unwrap()
        }

        fn viewport_size(&self) -> ViewportSize {
            PHONE
        }

        fn chrome_inset(&self) -> f32 {
            self.inset
        }
    }

    fn sized_config() -> PlacementConfig {
        PlacementConfig {
            desired_size: DesiredSize::new(100.0, 30.0),
            ..PlacementConfig::default()
        }
    }

    #[tokio::test]
    async fn test_activation_shows_popover() {
        let host = FakeHost::new(Some(Rect::new(40.0, 500.0, 100.0, 20.0)));
        let mut controller = VisibilityController::for_host(&host, sized_config());

        assert!(!controller.is_visible());
        assert!(controller.frame().is_none());

        assert!(controller.activate(&host).await);
        let frame = controller.frame().unwrap();
        assert_eq!(frame.placement.arrow_direction, ArrowDirection::Up);
        assert_eq!(frame.placement.popover_top, 532.0);
        assert_eq!(frame.placement.arrow_left, 84.0);
    }

    #[tokio::test]
    async fn test_unchanged_anchor_skips_recompute() {
        let calls = Cell::new(0);
        let engine = |anchor: &Rect, viewport: &ViewportSize, config: &PlacementConfig| {
            calls.set(calls.get() + 1);
            compute_placement(anchor, viewport, config)
        };
        let host = FakeHost::new(Some(Rect::new(40.0, 500.0, 100.0, 20.0)));
        let mut controller = VisibilityController::with_engine(engine, PHONE, sized_config());

        for _ in 0..3 {
            assert!(controller.activate(&host).await);
            controller.dismiss();
        }
        assert_eq!(calls.get(), 1);

        host.move_anchor(Some(Rect::new(60.0, 500.0, 100.0, 20.0)));
        assert!(controller.activate(&host).await);
        assert_eq!(calls.get(), 2);
        assert_eq!(controller.placement().unwrap().popover_left, 60.0);
    }

    #[tokio::test]
    async fn test_dismiss_keeps_cache() {
        let host = FakeHost::new(Some(Rect::new(40.0, 500.0, 100.0, 20.0)));
        let mut controller = VisibilityController::new(PHONE, sized_config());

        controller.activate(&host).await;
        let shown = *controller.placement().unwrap();
        controller.dismiss();

        assert_eq!(controller.visibility(), Visibility::Hidden);
        assert!(controller.frame().is_none());
        assert_eq!(controller.placement(), Some(&shown));
    }

    #[test]
    fn test_second_activation_ignored_while_pending() {
        let mut controller = VisibilityController::new(PHONE, sized_config());
        let ticket = controller.begin_activation().unwrap();
        assert!(controller.is_measuring());
        assert!(controller.begin_activation().is_none());

        assert!(controller.complete_activation(ticket, Some(Rect::new(0.0, 0.0, 10.0, 10.0))));
        assert!(!controller.is_measuring());
        assert!(controller.begin_activation().is_some());
    }

    #[test]
    fn test_dismiss_cancels_pending_measurement() {
        let mut controller = VisibilityController::new(PHONE, sized_config());
        let ticket = controller.begin_activation().unwrap();
        controller.dismiss();

        assert!(!controller.complete_activation(ticket, Some(Rect::new(0.0, 0.0, 10.0, 10.0))));
        assert!(!controller.is_visible());
        assert!(controller.placement().is_none());
    }

    #[test]
    fn test_superseded_ticket_is_stale() {
        let mut controller = VisibilityController::new(PHONE, sized_config());
        let first = controller.begin_activation().unwrap();
        controller.dismiss();
        let second = controller.begin_activation().unwrap();
        assert_ne!(first, second);

        assert!(!controller.complete_activation(first, Some(Rect::new(0.0, 0.0, 10.0, 10.0))));
        assert!(controller.complete_activation(second, Some(Rect::new(0.0, 0.0, 10.0, 10.0))));
    }

    #[tokio::test]
    async fn test_failed_measurement_stays_hidden() {
        let host = FakeHost::new(None);
        let mut controller = VisibilityController::new(PHONE, sized_config());

        assert!(!controller.activate(&host).await);
        assert!(!controller.is_visible());
        assert!(!controller.is_measuring());
    }

    #[tokio::test]
    async fn test_lost_anchor_hides_visible_popover() {
        let host = FakeHost::new(Some(Rect::new(40.0, 500.0, 100.0, 20.0)));
        let mut controller = VisibilityController::new(PHONE, sized_config());
        assert!(controller.activate(&host).await);
        let shown = *controller.placement().unwrap();

        // Re-measure while showing; the anchor has been unmounted
        host.move_anchor(None);
        assert!(!controller.activate(&host).await);

        assert_eq!(controller.visibility(), Visibility::Hidden);
        assert!(controller.frame().is_none());
        assert_eq!(controller.placement(), Some(&shown));
    }

    #[tokio::test]
    async fn test_viewport_change_invalidates_cache() {
        let calls = Cell::new(0);
        let engine = |anchor: &Rect, viewport: &ViewportSize, config: &PlacementConfig| {
            calls.set(calls.get() + 1);
            compute_placement(anchor, viewport, config)
        };
        let host = FakeHost::new(Some(Rect::new(40.0, 500.0, 100.0, 20.0)));
        let mut controller = VisibilityController::with_engine(engine, PHONE, sized_config());

        controller.activate(&host).await;
        controller.dismiss();
        controller.on_viewport_changed(ViewportSize::new(568.0, 320.0));
        assert!(controller.placement().is_none());

        controller.activate(&host).await;
        assert_eq!(calls.get(), 2);

        // Visible: recompute immediately
        controller.on_viewport_changed(PHONE);
        assert_eq!(calls.get(), 3);
        assert!(controller.frame().is_some());

        // Same size: no work
        controller.on_viewport_changed(PHONE);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_config_change_recomputes() {
        let host = FakeHost::new(Some(Rect::new(40.0, 100.0, 100.0, 20.0)));
        let mut controller = VisibilityController::new(PHONE, sized_config());
        controller.activate(&host).await;

        controller.set_config(PlacementConfig {
            orientation: Orientation::Vertical,
            ..sized_config()
        });
        let frame = controller.frame().unwrap();
        assert_eq!(frame.orientation, Orientation::Vertical);
        assert_eq!(frame.placement.orientation, Orientation::Vertical);
    }

    #[test]
    fn test_for_host_applies_chrome_inset() {
        let host = FakeHost {
            anchor: Mutex::new(None),
            inset: 20.0,
        };
        let controller = VisibilityController::for_host(&host, PlacementConfig::default());
        assert_eq!(controller.viewport(), ViewportSize::new(320.0, 548.0));
    }

    #[tokio::test]
    async fn test_dismiss_handle_closes_popover() {
        let host = FakeHost::new(Some(Rect::new(40.0, 100.0, 100.0, 20.0)));
        let mut controller = VisibilityController::new(PHONE, sized_config());
        controller.activate(&host).await;

        let handle = controller.dismiss_handle();
        assert!(!controller.poll_dismiss());
        handle.dismiss();
        assert!(controller.poll_dismiss());
        assert!(!controller.is_visible());
        assert!(!controller.poll_dismiss());
    }
}
