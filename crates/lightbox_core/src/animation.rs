//! Host-driven animated values.
//!
//! The core never runs a timing loop. It only sets targets; the host's animation
//! scheduler interpolates `current` frame by frame and reports when it has
//! finished, at which point the value snaps exactly onto its target.

/// A scalar animated by the host towards a target set by the core.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animated {
    current: f32,
    target: f32,
}

impl Animated {
    /// A value resting at `value`.
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Set a new target, leaving the current value for the host to animate from.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Drive the value directly (gesture-follow), keeping target and current in sync.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
    }

    /// Host frame: write an interpolated value.
    pub fn write_frame(&mut self, value: f32) {
        self.current = value;
    }

    /// Host reports the animation finished. Snaps `current` exactly onto the target.
    pub fn settle(&mut self) {
        self.current = self.target;
    }

    /// Whether `current` sits exactly on the target.
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

impl Default for Animated {
    fn default() -> Self {
        Self::new(0.0)
    }
}
