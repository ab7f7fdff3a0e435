//! Swipe-to-close lifecycle.
//!
//! Owns the overlay opacity while a dismiss gesture is in flight and decides
//! when the terminal "dismissed" signal may fire: only after the fade has
//! landed exactly on 0.

use crate::animation::Animated;

/// Lifecycle of the dismiss for one viewing session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DismissPhase {
    /// Fully visible, no gesture
    #[default]
    Open,
    /// Finger is dragging; opacity follows progress
    Dragging,
    /// Released below threshold; springing back to opaque
    Restoring,
    /// Committed; fading out. No way back.
    Closing,
    /// Fade finished and the signal was delivered
    Closed,
}

/// Terminal signal emitted once per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissSignal {
    Dismissed,
}

#[derive(Debug, Clone)]
pub struct DismissController {
    opacity: Animated,
    phase: DismissPhase,
}

impl Default for DismissController {
    fn default() -> Self {
        Self::new()
    }
}

impl DismissController {
    pub fn new() -> Self {
        Self {
            opacity: Animated::new(1.0),
            phase: DismissPhase::Open,
        }
    }

    /// Current overlay opacity.
    pub fn opacity(&self) -> f32 {
        self.opacity.current()
    }

    /// Opacity the host should animate towards.
    pub fn opacity_target(&self) -> f32 {
        self.opacity.target()
    }

    pub fn phase(&self) -> DismissPhase {
        self.phase
    }

    /// Whether a close was committed (fading or already closed).
    pub fn is_requested(&self) -> bool {
        matches!(self.phase, DismissPhase::Closing | DismissPhase::Closed)
    }

    pub fn begin_dismiss(&mut self) {
        if self.is_requested() {
            return;
        }
        log::debug!("Dismiss: drag started");
        self.phase = DismissPhase::Dragging;
    }

    /// Drive opacity from drag progress in `[0, 1]`.
    pub fn update_progress(&mut self, progress: f32) {
        if self.phase != DismissPhase::Dragging {
            return;
        }
        let progress = if progress.is_finite() { progress.clamp(0.0, 1.0) } else { 0.0 };
        self.opacity.set_immediate(1.0 - progress);
    }

    /// Finish the drag: fade out on commit, spring back otherwise.
    ///
    /// Once committed, further calls are no-ops.
    pub fn end_dismiss(&mut self, committed: bool) {
        if self.is_requested() {
            log::trace!("Dismiss: already committed, ignoring end_dismiss({})", committed);
            return;
        }
        if committed {
            log::debug!("Dismiss: committed, fading out");
            self.opacity.set_target(0.0);
            self.phase = DismissPhase::Closing;
        } else {
            log::debug!("Dismiss: cancelled, restoring opacity");
            self.opacity.set_target(1.0);
            self.phase = DismissPhase::Restoring;
        }
    }

    /// Close without a drag (close button, back navigation).
    pub fn request_close(&mut self) {
        self.end_dismiss(true);
    }

    /// Host animation frame for the opacity.
    pub fn on_opacity_frame(&mut self, value: f32) {
        if matches!(self.phase, DismissPhase::Restoring | DismissPhase::Closing) {
            self.opacity.write_frame(value.clamp(0.0, 1.0));
        }
    }

    /// Host reports the opacity animation finished.
    ///
    /// Returns [`DismissSignal::Dismissed`] exactly once, after opacity is exactly 0.
    pub fn on_opacity_settled(&mut self) -> Option<DismissSignal> {
        match self.phase {
            DismissPhase::Closing => {
                self.opacity.settle();
                self.phase = DismissPhase::Closed;
                log::debug!("Dismiss: fade complete");
                Some(DismissSignal::Dismissed)
            }
            DismissPhase::Restoring => {
                self.opacity.settle();
                self.phase = DismissPhase::Open;
                None
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_drives_opacity() {
        let mut dismiss = DismissController::new();
        dismiss.begin_dismiss();
        dismiss.update_progress(0.25);
        assert_eq!(dismiss.opacity(), 0.75);

        dismiss.update_progress(3.0);
        assert_eq!(dismiss.opacity(), 0.0);
    }

    #[test]
    fn test_progress_ignored_without_drag() {
        let mut dismiss = DismissController::new();
        dismiss.update_progress(0.5);
        assert_eq!(dismiss.opacity(), 1.0);
    }

    #[test]
    fn test_cancel_returns_exactly_to_one() {
        let mut dismiss = DismissController::new();
        dismiss.begin_dismiss();
        dismiss.update_progress(0.6);
        dismiss.end_dismiss(false);
        assert_eq!(dismiss.opacity_target(), 1.0);

        dismiss.on_opacity_frame(0.93);
        assert_eq!(dismiss.on_opacity_settled(), None);
        assert_eq!(dismiss.opacity(), 1.0);
        assert_eq!(dismiss.phase(), DismissPhase::Open);
        assert!(!dismiss.is_requested());
    }

    #[test]
    fn test_commit_signals_after_fade() {
        let mut dismiss = DismissController::new();
        dismiss.begin_dismiss();
        dismiss.update_progress(1.0);
        dismiss.end_dismiss(true);
        assert!(dismiss.is_requested());

        dismiss.on_opacity_frame(0.01);
        assert_eq!(dismiss.opacity(), 0.01);
        assert_eq!(dismiss.on_opacity_settled(), Some(DismissSignal::Dismissed));
        assert_eq!(dismiss.opacity(), 0.0);
    }

    #[test]
    fn test_commit_is_idempotent() {
        let mut dismiss = DismissController::new();
        dismiss.request_close();
        dismiss.end_dismiss(true);
        dismiss.end_dismiss(false);
        dismiss.begin_dismiss();
        assert_eq!(dismiss.phase(), DismissPhase::Closing);

        assert_eq!(dismiss.on_opacity_settled(), Some(DismissSignal::Dismissed));
        assert_eq!(dismiss.on_opacity_settled(), None);
        dismiss.request_close();
        assert_eq!(dismiss.on_opacity_settled(), None);
    }
}
