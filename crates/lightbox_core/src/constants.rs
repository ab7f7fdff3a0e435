//! Centralized constants for lightbox_core
//!
//! Default thresholds for gesture recognition and chrome animation. Everything
//! gesture-related here is only a default: the live values come from
//! [`GestureConfig`](crate::GestureConfig) and can be tuned per platform.

use std::time::Duration;

// =============================================================================
// Zoom
// =============================================================================

/// Upper bound for the item scale
pub const MAX_SCALE: f32 = 4.0;

/// Scale applied by a double-tap on an unzoomed item
pub const DOUBLE_TAP_SCALE: f32 = 2.0;

/// Scales within this distance of 1.0 snap back to identity when a pinch ends
pub const SCALE_EPSILON: f32 = 0.01;

/// Pinches that start with fingers closer than this are treated as a fixed ratio of 1
pub const MIN_PINCH_DISTANCE: f32 = 1.0;

// =============================================================================
// Touch classification
// =============================================================================

/// Movement (in logical pixels) from the press origin before a gesture is classified
/// by its dominant axis. Taps and long presses must stay within this slop.
pub const TOUCH_SLOP: f32 = 8.0;

/// Max movement allowed while waiting for a long press
pub const LONG_PRESS_RADIUS: f32 = 10.0;

/// Default delay before a held press counts as a long press
pub const DEFAULT_DELAY_LONG_PRESS: Duration = Duration::from_millis(800);

/// Max time between two tap releases for them to form a double-tap
pub const DOUBLE_TAP_INTERVAL: Duration = Duration::from_millis(300);

/// Max distance between two taps for them to form a double-tap
pub const DOUBLE_TAP_RADIUS: f32 = 25.0;

// =============================================================================
// Swipe to close
// =============================================================================

/// Vertical drag distance at which a release commits the dismiss (and opacity hits 0)
pub const DISMISS_DISTANCE_THRESHOLD: f32 = 120.0;

/// Vertical release velocity (px/s) that commits the dismiss regardless of distance
pub const DISMISS_VELOCITY_THRESHOLD: f32 = 1750.0;

/// A finger that rested this long before lifting is released with zero velocity
pub const VELOCITY_STALE_AFTER: Duration = Duration::from_millis(100);

// =============================================================================
// Chrome
// =============================================================================

/// Distance the header/footer travel off-screen when hidden
pub const CHROME_HIDE_OFFSET: f32 = 300.0;

/// Suggested duration for chrome show/hide animations
pub const CHROME_ANIMATION_DURATION: Duration = Duration::from_millis(200);
