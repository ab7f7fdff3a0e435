//! Item transform mathematics.
//!
//! Scale/translate math for the active item, kept free of gesture state so it
//! can be tested on its own. Translations are relative to the viewport center:
//! an item with `translate == (0, 0)` is centred, and one item fills exactly
//! one viewport at scale 1.

use crate::geometry::{Point, Size};

/// Represents scale/translate transform values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub scale: f32,
    pub translate: Point,
}

impl Transform {
    /// Create a new transform with the given scale and translation.
    pub fn new(scale: f32, translate: Point) -> Self {
        Self { scale, translate }
    }

    /// Create an identity transform (scale=1, no translation).
    pub fn identity() -> Self {
        Self::new(1.0, Point::zero())
    }

    pub fn is_identity(&self) -> bool {
        self.scale == 1.0 && self.translate == Point::zero()
    }

    /// Calculate a zoom that keeps the content under `anchor` fixed.
    ///
    /// # Arguments
    /// * `new_scale` - The new scale
    /// * `anchor` - Anchor position in viewport space
    /// * `center` - Center of the viewport in viewport space
    pub fn zoom_to_point(&self, new_scale: f32, anchor: Point, center: Point) -> Transform {
        // Anchor relative to viewport center
        let rel = anchor - center;

        // Content-space point under the anchor (before zoom)
        let content = (rel - self.translate).scale(1.0 / self.scale);

        Transform {
            scale: new_scale,
            translate: rel - content.scale(new_scale),
        }
    }

    /// Apply a translation delta.
    pub fn pan_by(&self, delta: Point) -> Transform {
        Transform {
            scale: self.scale,
            translate: self.translate + delta,
        }
    }

    /// Largest absolute translation per axis that keeps the scaled content
    /// covering the viewport.
    pub fn translate_bounds(scale: f32, viewport: Size) -> Point {
        let excess = (scale - 1.0).max(0.0);
        Point::new(excess * viewport.width / 2.0, excess * viewport.height / 2.0)
    }

    /// Clamp scale to `[1, max_scale]`, then clamp the translation so the
    /// content edges never cross into the viewport.
    pub fn clamped(&self, max_scale: f32, viewport: Size) -> Transform {
        let scale = self.scale.clamp(1.0, max_scale);
        let bounds = Self::translate_bounds(scale, viewport);
        Transform {
            scale,
            translate: Point::new(
                self.translate.x.clamp(-bounds.x, bounds.x),
                self.translate.y.clamp(-bounds.y, bounds.y),
            ),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

/// What the active item's transform is currently doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GesturePhase {
    /// At rest (zoomed or not)
    #[default]
    Idle,
    /// Single-finger pan inside a zoomed item
    Panning,
    /// Two-finger pinch
    Pinching,
    /// Vertical swipe-to-close in progress
    Dismissing,
    /// Springing back to identity after a cancelled dismiss
    SettlingBack,
}

/// Transform of the active item plus its gesture phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformState {
    pub scale: f32,
    pub translate: Point,
    pub phase: GesturePhase,
}

impl TransformState {
    pub fn identity() -> Self {
        Self::from_transform(Transform::identity(), GesturePhase::Idle)
    }

    pub fn from_transform(transform: Transform, phase: GesturePhase) -> Self {
        Self {
            scale: transform.scale,
            translate: transform.translate,
            phase,
        }
    }

    pub fn transform(&self) -> Transform {
        Transform::new(self.scale, self.translate)
    }

    /// Whether the item is zoomed past its natural size.
    pub fn is_scaled(&self) -> bool {
        self.scale > 1.0
    }
}

impl Default for TransformState {
    fn default() -> Self {
        Self::identity()
    }
}
