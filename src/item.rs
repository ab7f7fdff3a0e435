//! Gallery entries supplied by the caller.

use serde::{Deserialize, Serialize};

/// Where an item's image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ImageSource {
    /// Remote or file URI
    Uri { uri: String },
    /// Asset bundled with the host application
    Asset { id: u32 },
}

impl ImageSource {
    pub fn uri(uri: impl Into<String>) -> Self {
        Self::Uri { uri: uri.into() }
    }
}

/// One entry of the gallery. Its position in the caller's list is its index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryItem {
    pub id: String,
    /// Image, or poster frame for a video
    pub image: ImageSource,
    /// Set for video entries
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_uri: Option<String>,
}

impl GalleryItem {
    pub fn image(id: impl Into<String>, image: ImageSource) -> Self {
        Self {
            id: id.into(),
            image,
            video_uri: None,
        }
    }

    pub fn video(id: impl Into<String>, poster: ImageSource, video_uri: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            image: poster,
            video_uri: Some(video_uri.into()),
        }
    }

    /// Video items are rendered by the host's video renderer and receive no
    /// zoom or swipe-to-close gestures.
    pub fn is_video(&self) -> bool {
        self.video_uri.is_some()
    }
}
