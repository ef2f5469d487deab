//! Dismiss requests raised from item callbacks

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cloneable handle that asks the owning controller to hide its popover.
///
/// The request is picked up by `VisibilityController::poll_dismiss`.
#[derive(Debug, Clone, Default)]
pub struct DismissHandle {
    requested: Arc<AtomicBool>,
}

impl DismissHandle {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Request that the popover be hidden
    pub fn dismiss(&self) {
        self.requested.store(true, Ordering::Release);
    }

    /// Whether a request is waiting
    pub fn is_requested(&self) -> bool {
        self.requested.load(Ordering::Acquire)
    }

    pub(crate) fn take(&self) -> bool {
        self.requested.swap(false, Ordering::AcqRel)
    }

    pub(crate) fn clear(&self) {
        self.requested.store(false, Ordering::Release);
    }
}
