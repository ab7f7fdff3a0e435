//! Tunable gesture thresholds.
//!
//! Every value has a platform-typical default from [`crate::constants`]; a
//! config file only needs to name the values it wants to change.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::error::ConfigError;

/// Thresholds used by the gesture interpreter and chrome controller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Upper bound for the item scale
    pub max_scale: f32,
    /// Scale reached by a double-tap zoom
    pub double_tap_scale: f32,
    /// Pinch release snap tolerance around scale 1
    pub scale_epsilon: f32,
    /// Movement before a single-finger gesture is classified
    pub touch_slop: f32,
    /// Max movement while waiting for a long press
    pub long_press_radius: f32,
    /// Max time between two tap releases for a double-tap, in milliseconds
    pub double_tap_interval_ms: u64,
    /// Max distance between two taps for a double-tap
    pub double_tap_radius: f32,
    /// Vertical drag distance that commits a dismiss
    pub dismiss_distance: f32,
    /// Vertical release velocity (px/s) that commits a dismiss
    pub dismiss_velocity: f32,
    /// Distance the header/footer move off-screen when hidden
    pub chrome_hide_offset: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            max_scale: constants::MAX_SCALE,
            double_tap_scale: constants::DOUBLE_TAP_SCALE,
            scale_epsilon: constants::SCALE_EPSILON,
            touch_slop: constants::TOUCH_SLOP,
            long_press_radius: constants::LONG_PRESS_RADIUS,
            double_tap_interval_ms: constants::DOUBLE_TAP_INTERVAL.as_millis() as u64,
            double_tap_radius: constants::DOUBLE_TAP_RADIUS,
            dismiss_distance: constants::DISMISS_DISTANCE_THRESHOLD,
            dismiss_velocity: constants::DISMISS_VELOCITY_THRESHOLD,
            chrome_hide_offset: constants::CHROME_HIDE_OFFSET,
        }
    }
}

impl GestureConfig {
    /// Double-tap interval as a [`Duration`].
    pub fn double_tap_interval(&self) -> Duration {
        Duration::from_millis(self.double_tap_interval_ms)
    }

    /// Check that every threshold is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("max_scale", self.max_scale),
            ("double_tap_scale", self.double_tap_scale),
            ("scale_epsilon", self.scale_epsilon),
            ("touch_slop", self.touch_slop),
            ("long_press_radius", self.long_press_radius),
            ("double_tap_radius", self.double_tap_radius),
            ("dismiss_distance", self.dismiss_distance),
            ("dismiss_velocity", self.dismiss_velocity),
            ("chrome_hide_offset", self.chrome_hide_offset),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidThreshold { name, value });
            }
        }

        if self.max_scale < 1.0 {
            return Err(ConfigError::invalid_zoom(format!(
                "max_scale {} is below 1.0",
                self.max_scale
            )));
        }
        if self.double_tap_scale <= 1.0 || self.double_tap_scale > self.max_scale {
            return Err(ConfigError::invalid_zoom(format!(
                "double_tap_scale {} must be in (1.0, {}]",
                self.double_tap_scale, self.max_scale
            )));
        }
        Ok(())
    }
}
