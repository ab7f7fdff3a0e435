//! Error types for gesture configuration.

use thiserror::Error;

/// Invalid gesture configuration, reported when a gallery is built.
///
/// Runtime input problems (stale settles, extra fingers, out-of-range indices)
/// are never errors: they are clamped or discarded where they happen.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A threshold that must be a positive, finite number is not
    #[error("Invalid threshold '{name}': {value} (must be finite and > 0)")]
    InvalidThreshold {
        /// Name of the offending setting
        name: &'static str,
        /// The rejected value
        value: f32,
    },

    /// The zoom range is unusable
    #[error("Invalid zoom range: {message}")]
    InvalidZoom {
        /// Description of the problem
        message: String,
    },

    /// The viewport has no usable area
    #[error("Invalid viewport {width}x{height}")]
    InvalidViewport {
        /// Viewport width
        width: f32,
        /// Viewport height
        height: f32,
    },
}

impl ConfigError {
    /// Create an invalid zoom range error with a message.
    pub fn invalid_zoom(message: impl Into<String>) -> Self {
        Self::InvalidZoom {
            message: message.into(),
        }
    }
}
