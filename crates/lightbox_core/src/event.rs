use web_time::Instant;

use crate::geometry::Point;
use crate::transform::TransformState;

/// One sample of the touch stream for the active item.
///
/// `contacts` holds the positions of the fingers currently down, in viewport
/// space. An empty list means every finger has lifted. Only the first two
/// contacts are ever looked at.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchSample {
    pub time: Instant,
    pub contacts: Vec<Point>,
}

impl TouchSample {
    pub fn new(time: Instant, contacts: Vec<Point>) -> Self {
        Self { time, contacts }
    }

    /// Single-finger sample.
    pub fn one(time: Instant, position: Point) -> Self {
        Self::new(time, vec![position])
    }

    /// Two-finger sample.
    pub fn two(time: Instant, a: Point, b: Point) -> Self {
        Self::new(time, vec![a, b])
    }

    /// All fingers lifted.
    pub fn release(time: Instant) -> Self {
        Self::new(time, Vec::new())
    }

    pub fn is_release(&self) -> bool {
        self.contacts.is_empty()
    }
}

/// Classification of a gesture, decided once and kept until release.
///
/// A press released without being classified is a tap; it surfaces as a
/// [`GestureEvent::Tap`] or, paired with a second tap, as a zoom change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    /// Single-finger pan inside a zoomed item
    Pan,
    /// Two-finger pinch zoom
    Pinch,
    /// Vertical swipe-to-close
    Dismiss,
    /// Horizontal swipe, left to the paginated list
    Paginate,
    /// Press held without moving
    LongPress,
}

/// Discrete events produced by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    /// The item's zoom state settled, scaled or back at natural size
    ZoomChanged { is_scaled: bool },
    /// A swipe-to-close drag began
    DismissStarted,
    /// Swipe-to-close progress in `[0, 1]`
    DismissProgress { progress: f32 },
    /// The swipe-to-close finger lifted
    DismissReleased { committed: bool },
    /// Single tap without movement
    Tap { position: Point },
    /// Press held past the long-press delay
    LongPress { position: Point },
}

/// Whether the interpreter owns the current touch stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Claim {
    /// No finger down, or not classified yet
    #[default]
    Undecided,
    /// The item handles the stream (zoom, pan, dismiss, taps)
    Claimed,
    /// Not ours: the paginated list handles it
    Delegated,
}

/// Result of feeding one sample (or tick) to the interpreter.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureOutcome {
    pub claim: Claim,
    pub transform: TransformState,
    pub events: Vec<GestureEvent>,
}

impl GestureOutcome {
    pub fn new(claim: Claim, transform: TransformState) -> Self {
        Self {
            claim,
            transform,
            events: Vec::new(),
        }
    }

    pub fn with_event(mut self, event: GestureEvent) -> Self {
        self.events.push(event);
        self
    }
}
