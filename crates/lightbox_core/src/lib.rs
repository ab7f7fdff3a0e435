//! lightbox_core - headless gesture and index engine for a swipeable media gallery
//!
//! Turns multi-touch streams into transforms for the active item, decides between
//! zoom, pan, swipe-to-close and pagination, and keeps the current index and
//! chrome visibility consistent. Rendering, animation timing and list
//! virtualization belong to the host.

mod animation;
mod chrome;
mod config;
pub mod constants;
mod dismiss;
mod error;
mod event;
mod geometry;
mod gesture;
mod index;
mod transform;

pub use animation::Animated;
pub use chrome::{ChromeBar, ChromeVisibilityController};
pub use config::GestureConfig;
pub use dismiss::{DismissController, DismissPhase, DismissSignal};
pub use error::ConfigError;
pub use event::{Claim, GestureEvent, GestureKind, GestureOutcome, TouchSample};
pub use geometry::{Point, Size};
pub use gesture::{GestureInterpreter, InteractionOptions};
pub use index::{IndexChange, IndexSynchronizer, JumpTo, RenderPass, SettleEvent};
pub use transform::{GesturePhase, Transform, TransformState};

/// Re-exported so hosts can build sample timestamps without another dependency.
pub use web_time::Instant;
