//! Lightbox - full-screen swipeable media gallery
//!
//! Drives a gallery overlay from touch input: pinch and double-tap zoom, pan
//! while zoomed, swipe-to-close and paging between items through a host
//! supplied [`PaginatedList`]. The gesture math lives in [`lightbox_core`];
//! this crate wires it to the caller's items, options and callbacks.

mod callback;
mod config;
mod error;
mod item;
mod list;
mod orchestrator;
mod scenario;

#[cfg(test)]
mod tests;

pub use callback::Callback;
pub use config::{GalleryOptions, LogLevel, CONFIG_VERSION};
pub use error::GalleryError;
pub use item::{GalleryItem, ImageSource};
pub use list::{ListCommand, PaginatedList, RecordingList};
pub use orchestrator::{GalleryCallbacks, GalleryOrchestrator, ItemRenderProps};
pub use scenario::{FinalState, ReplayReport, Scenario, Step};

pub use lightbox_core;
