//! Gallery configuration.
//!
//! The caller-facing switches of the overlay plus the tunable gesture
//! thresholds, loadable from JSON so the replay tool and hosts can share one
//! format. Missing fields fall back to defaults.

use std::path::Path;
use std::time::Duration;

use lightbox_core::{ConfigError, GestureConfig, InteractionOptions, Size};
use serde::{Deserialize, Serialize};

use crate::error::GalleryError;

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }

    /// Parse a level name as used on the command line.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "error" => Some(LogLevel::Error),
            "warn" => Some(LogLevel::Warn),
            "info" => Some(LogLevel::Info),
            "debug" => Some(LogLevel::Debug),
            "trace" => Some(LogLevel::Trace),
            _ => None,
        }
    }
}

/// Options the gallery is configured with. Read on mount and on every update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryOptions {
    /// Version of the configuration format
    pub version: u32,
    /// Index shown first. Out-of-range values (including negative ones) are clamped.
    pub start_index: i64,
    /// Whether the overlay is shown
    pub visible: bool,
    /// Vertical swipe closes the overlay
    pub swipe_to_close_enabled: bool,
    /// Double-tap zooms in and out
    pub double_tap_to_zoom_enabled: bool,
    /// Hold time before a press becomes a long press, in milliseconds
    pub delay_long_press_ms: u64,
    /// A single tap on an unzoomed item toggles the header/footer
    pub tap_toggles_chrome: bool,
    /// Size of one page (one item fills exactly one viewport)
    pub viewport: Size,
    /// Gesture thresholds
    pub gesture: GestureConfig,
    /// Log verbosity for the replay tool
    pub log_level: LogLevel,
}

impl Default for GalleryOptions {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            start_index: 0,
            visible: true,
            swipe_to_close_enabled: true,
            double_tap_to_zoom_enabled: true,
            delay_long_press_ms: lightbox_core::constants::DEFAULT_DELAY_LONG_PRESS.as_millis()
                as u64,
            tap_toggles_chrome: false,
            viewport: Size::new(390.0, 844.0),
            gesture: GestureConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl GalleryOptions {
    /// Start index with negative values clamped to 0. The upper bound is
    /// applied against the item count by the index synchronizer.
    pub fn start_index(&self) -> usize {
        usize::try_from(self.start_index).unwrap_or_else(|_| {
            log::warn!("Config: negative start index {} clamped to 0", self.start_index);
            0
        })
    }

    pub fn delay_long_press(&self) -> Duration {
        Duration::from_millis(self.delay_long_press_ms)
    }

    /// Switches handed to the gesture interpreter of each item.
    pub fn interaction(&self) -> InteractionOptions {
        InteractionOptions {
            swipe_to_close_enabled: self.swipe_to_close_enabled,
            double_tap_to_zoom_enabled: self.double_tap_to_zoom_enabled,
            delay_long_press: self.delay_long_press(),
        }
    }

    /// Fail fast on configuration the gallery cannot work with.
    pub fn validate(&self) -> Result<(), GalleryError> {
        if self.version > CONFIG_VERSION {
            return Err(GalleryError::VersionTooNew {
                file_version: self.version,
                supported_version: CONFIG_VERSION,
            });
        }
        if !self.viewport.is_usable() {
            return Err(ConfigError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            }
            .into());
        }
        if self.delay_long_press_ms == 0 {
            return Err(ConfigError::InvalidThreshold {
                name: "delay_long_press_ms",
                value: 0.0,
            }
            .into());
        }
        self.gesture.validate()?;
        Ok(())
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize and validate configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, GalleryError> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GalleryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("Loaded gallery options from {:?}", path);
        Ok(options)
    }
}
