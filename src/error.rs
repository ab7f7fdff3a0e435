//! Error types for building and driving a gallery.

use lightbox_core::ConfigError;
use thiserror::Error;

/// Errors surfaced to the caller. Only configuration and I/O problems qualify;
/// invalid runtime input is clamped or discarded inside the gallery.
#[derive(Error, Debug)]
pub enum GalleryError {
    /// I/O error while reading a config or scenario file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Gesture thresholds or viewport are unusable
    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than \
         supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// A replay scenario is malformed
    #[error("Invalid scenario: {message}")]
    InvalidScenario {
        /// Description of the problem
        message: String,
    },
}

impl GalleryError {
    /// Create an invalid scenario error with a message.
    pub fn invalid_scenario(message: impl Into<String>) -> Self {
        Self::InvalidScenario {
            message: message.into(),
        }
    }
}
