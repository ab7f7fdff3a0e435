//! Gesture interpreter for the active gallery item.
//!
//! Turns the raw touch stream into a [`TransformState`] per sample plus discrete
//! [`GestureEvent`]s. Each gesture is classified exactly once (see
//! [`GestureKind`]) and every later sample is handled by switching on that tag,
//! so a pan can never turn into a dismiss halfway through.

use std::time::Duration;

use web_time::Instant;

use crate::config::GestureConfig;
use crate::constants::{DEFAULT_DELAY_LONG_PRESS, MIN_PINCH_DISTANCE, VELOCITY_STALE_AFTER};
use crate::event::{Claim, GestureEvent, GestureKind, GestureOutcome, TouchSample};
use crate::geometry::{Point, Size};
use crate::transform::{GesturePhase, Transform, TransformState};

/// Per-gallery switches that change how gestures are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionOptions {
    pub swipe_to_close_enabled: bool,
    pub double_tap_to_zoom_enabled: bool,
    pub delay_long_press: Duration,
}

impl Default for InteractionOptions {
    fn default() -> Self {
        Self {
            swipe_to_close_enabled: true,
            double_tap_to_zoom_enabled: true,
            delay_long_press: DEFAULT_DELAY_LONG_PRESS,
        }
    }
}

/// Pinch reference captured when the second finger lands.
#[derive(Debug, Clone, Copy)]
struct PinchAnchor {
    initial_distance: f32,
    initial_midpoint: Point,
    start: Transform,
}

/// Bookkeeping for the gesture in progress (press to release).
#[derive(Debug, Clone, Copy)]
struct ActiveGesture {
    /// `None` until classified
    kind: Option<GestureKind>,
    origin: Point,
    pressed_at: Instant,
    /// Transform when the press began
    start: Transform,
    /// Only set while two fingers are down
    pinch: Option<PinchAnchor>,
    last_position: Point,
    last_time: Instant,
    /// px/s, from the last two single-finger samples
    velocity: Point,
}

impl ActiveGesture {
    fn claim(&self) -> Claim {
        claim_for(self.kind)
    }
}

fn claim_for(kind: Option<GestureKind>) -> Claim {
    match kind {
        None => Claim::Undecided,
        Some(GestureKind::Paginate) => Claim::Delegated,
        Some(_) => Claim::Claimed,
    }
}

#[derive(Debug, Clone, Copy)]
struct TapRecord {
    position: Point,
    released_at: Instant,
}

/// Classifies touches on the active item and produces its transform.
#[derive(Debug, Clone)]
pub struct GestureInterpreter {
    config: GestureConfig,
    options: InteractionOptions,
    viewport: Size,
    state: TransformState,
    gesture: Option<ActiveGesture>,
    last_tap: Option<TapRecord>,
}

impl GestureInterpreter {
    /// Create an interpreter at identity for a viewport of the given size.
    pub fn new(config: GestureConfig, options: InteractionOptions, viewport: Size) -> Self {
        Self {
            config,
            options,
            viewport,
            state: TransformState::identity(),
            gesture: None,
            last_tap: None,
        }
    }

    /// Current transform of the item.
    pub fn state(&self) -> TransformState {
        self.state
    }

    /// Classification of the gesture in progress, if any.
    pub fn active_kind(&self) -> Option<GestureKind> {
        self.gesture.and_then(|g| g.kind)
    }

    pub fn is_touching(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn options(&self) -> InteractionOptions {
        self.options
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Update the viewport, re-clamping the current transform into it.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
        let clamped = self.state.transform().clamped(self.config.max_scale, viewport);
        self.state = TransformState::from_transform(clamped, self.state.phase);
    }

    /// Drop any gesture in progress and return to identity.
    pub fn reset(&mut self) {
        self.state = TransformState::identity();
        self.gesture = None;
        self.last_tap = None;
    }

    /// The host finished springing back after a cancelled dismiss.
    pub fn finish_settle(&mut self) {
        if self.state.phase == GesturePhase::SettlingBack {
            self.state.phase = GesturePhase::Idle;
        }
    }

    /// Feed one touch sample.
    pub fn handle(&mut self, sample: &TouchSample) -> GestureOutcome {
        let expired_tap = self.flush_pending_tap(sample.time);
        let mut outcome = match sample.contacts.as_slice() {
            [] => self.release(sample.time),
            [position] => {
                self.ensure_started(*position, sample.time);
                self.one_contact(*position, sample.time)
            }
            [a, b, rest @ ..] => {
                if !rest.is_empty() {
                    log::trace!("Gesture: ignoring {} extra contact(s)", rest.len());
                }
                self.ensure_started(*a, sample.time);
                self.two_contacts(*a, *b, sample.time)
            }
        };
        if let Some(tap) = expired_tap {
            outcome.events.insert(0, tap);
        }
        outcome
    }

    /// Time passed without a new sample. Drives long-press recognition.
    ///
    /// Also releases a single tap once the double-tap interval has run out.
    pub fn tick(&mut self, now: Instant) -> GestureOutcome {
        let expired_tap = self.flush_pending_tap(now);
        let Some(mut gesture) = self.gesture else {
            let mut outcome = GestureOutcome::new(Claim::Undecided, self.state);
            outcome.events.extend(expired_tap);
            return outcome;
        };
        let event = self.check_long_press(&mut gesture, now);
        self.gesture = Some(gesture);

        let mut outcome = GestureOutcome::new(gesture.claim(), self.state);
        outcome.events.extend(expired_tap);
        outcome.events.extend(event);
        outcome
    }

    /// Whether a single tap is being held back waiting for a possible second tap.
    pub fn has_pending_tap(&self) -> bool {
        self.last_tap.is_some()
    }

    fn ensure_started(&mut self, position: Point, time: Instant) {
        if self.gesture.is_some() {
            return;
        }
        if self.state.phase == GesturePhase::SettlingBack {
            // A new touch interrupts the spring; the targets are already identity
            self.state.phase = GesturePhase::Idle;
        }
        log::trace!("Gesture: press at ({:.1}, {:.1})", position.x, position.y);
        self.gesture = Some(ActiveGesture {
            kind: None,
            origin: position,
            pressed_at: time,
            start: self.state.transform(),
            pinch: None,
            last_position: position,
            last_time: time,
            velocity: Point::zero(),
        });
    }

    fn one_contact(&mut self, position: Point, time: Instant) -> GestureOutcome {
        let Some(mut gesture) = self.gesture else {
            return GestureOutcome::new(Claim::Undecided, self.state);
        };

        let mut events = Vec::new();
        if gesture.kind.is_none() {
            // Judge the long press on the position before this sample moved
            events.extend(self.check_long_press(&mut gesture, time));
        }

        let elapsed = time.saturating_duration_since(gesture.last_time).as_secs_f32();
        if elapsed > 0.0 {
            gesture.velocity = (position - gesture.last_position).scale(1.0 / elapsed);
        }
        gesture.last_position = position;
        gesture.last_time = time;

        let displacement = position - gesture.origin;
        match gesture.kind {
            None if displacement.length() > self.config.touch_slop => {
                let kind = self.classify_single(displacement);
                log::debug!(
                    "Gesture: classified as {:?} (dx={:.1}, dy={:.1})",
                    kind,
                    displacement.x,
                    displacement.y
                );
                gesture.kind = Some(kind);
                match kind {
                    GestureKind::Pan => self.apply_pan(&gesture, displacement),
                    GestureKind::Dismiss => {
                        events.push(GestureEvent::DismissStarted);
                        events.push(self.apply_dismiss(displacement));
                    }
                    _ => {}
                }
            }
            Some(GestureKind::Pan) => self.apply_pan(&gesture, displacement),
            Some(GestureKind::Dismiss) => events.push(self.apply_dismiss(displacement)),
            Some(GestureKind::Pinch) => {
                // One finger lifted mid-pinch: hold, and re-anchor if it comes back
                gesture.pinch = None;
            }
            _ => {}
        }

        self.gesture = Some(gesture);
        GestureOutcome {
            claim: gesture.claim(),
            transform: self.state,
            events,
        }
    }

    fn two_contacts(&mut self, a: Point, b: Point, time: Instant) -> GestureOutcome {
        let Some(mut gesture) = self.gesture else {
            return GestureOutcome::new(Claim::Undecided, self.state);
        };

        match gesture.kind {
            None | Some(GestureKind::Pinch) => {
                if gesture.kind.is_none() {
                    log::debug!("Gesture: classified as Pinch");
                    gesture.kind = Some(GestureKind::Pinch);
                }
                let anchor = *gesture.pinch.get_or_insert(PinchAnchor {
                    initial_distance: a.distance(b),
                    initial_midpoint: a.midpoint(b),
                    start: self.state.transform(),
                });
                self.apply_pinch(&anchor, a, b);
                gesture.last_time = time;
                self.gesture = Some(gesture);
                GestureOutcome::new(Claim::Claimed, self.state)
            }
            Some(_) => {
                // Classification is final: a late second finger is ignored
                self.one_contact(a, time)
            }
        }
    }

    fn release(&mut self, time: Instant) -> GestureOutcome {
        let Some(gesture) = self.gesture.take() else {
            return GestureOutcome::new(Claim::Undecided, self.state);
        };

        // Any classified gesture breaks a tap pair; the held tap stands alone
        let unpaired_tap = match gesture.kind {
            Some(_) => self.last_tap.take(),
            None => None,
        };
        let mut outcome = self.release_gesture(gesture, time);
        if let Some(tap) = unpaired_tap {
            outcome.events.insert(
                0,
                GestureEvent::Tap {
                    position: tap.position,
                },
            );
        }
        outcome
    }

    fn release_gesture(&mut self, gesture: ActiveGesture, time: Instant) -> GestureOutcome {
        match gesture.kind {
            None => self.resolve_tap(gesture.origin, time),
            Some(GestureKind::Pinch) => {
                if (self.state.scale - 1.0).abs() < self.config.scale_epsilon {
                    self.state = TransformState::identity();
                } else {
                    self.state.phase = GesturePhase::Idle;
                }
                let is_scaled = self.state.is_scaled();
                log::debug!("Gesture: pinch ended at {:.2}x", self.state.scale);
                GestureOutcome::new(Claim::Claimed, self.state)
                    .with_event(GestureEvent::ZoomChanged { is_scaled })
            }
            Some(GestureKind::Pan) => {
                self.state.phase = GesturePhase::Idle;
                GestureOutcome::new(Claim::Claimed, self.state)
            }
            Some(GestureKind::Dismiss) => {
                let distance = self.state.translate.y.abs();
                let since_last = time.saturating_duration_since(gesture.last_time);
                let stale = since_last > VELOCITY_STALE_AFTER;
                let velocity = if stale { 0.0 } else { gesture.velocity.y.abs() };
                let committed = distance > self.config.dismiss_distance
                    || velocity > self.config.dismiss_velocity;
                log::debug!(
                    "Gesture: dismiss released at {:.1}px, {:.0}px/s -> {}",
                    distance,
                    velocity,
                    if committed { "commit" } else { "cancel" }
                );
                if !committed {
                    self.state = TransformState::from_transform(
                        Transform::identity(),
                        GesturePhase::SettlingBack,
                    );
                }
                GestureOutcome::new(Claim::Claimed, self.state)
                    .with_event(GestureEvent::DismissReleased { committed })
            }
            Some(GestureKind::Paginate) => GestureOutcome::new(Claim::Delegated, self.state),
            Some(GestureKind::LongPress) => GestureOutcome::new(Claim::Claimed, self.state),
        }
    }

    fn classify_single(&self, displacement: Point) -> GestureKind {
        if self.state.is_scaled() {
            GestureKind::Pan
        } else if displacement.y.abs() > displacement.x.abs() {
            if self.options.swipe_to_close_enabled {
                GestureKind::Dismiss
            } else {
                GestureKind::Paginate
            }
        } else {
            GestureKind::Paginate
        }
    }

    fn check_long_press(&self, gesture: &mut ActiveGesture, now: Instant) -> Option<GestureEvent> {
        if gesture.kind.is_some() || gesture.pinch.is_some() {
            return None;
        }
        let held = now.saturating_duration_since(gesture.pressed_at);
        let drift = gesture.last_position.distance(gesture.origin);
        if held < self.options.delay_long_press || drift > self.config.long_press_radius {
            return None;
        }
        log::debug!("Gesture: long press after {:?}", held);
        gesture.kind = Some(GestureKind::LongPress);
        Some(GestureEvent::LongPress {
            position: gesture.origin,
        })
    }

    fn apply_pan(&mut self, gesture: &ActiveGesture, displacement: Point) {
        let panned = gesture
            .start
            .pan_by(displacement)
            .clamped(self.config.max_scale, self.viewport);
        self.state = TransformState::from_transform(panned, GesturePhase::Panning);
    }

    fn apply_dismiss(&mut self, displacement: Point) -> GestureEvent {
        self.state = TransformState::from_transform(
            Transform::new(1.0, Point::new(0.0, displacement.y)),
            GesturePhase::Dismissing,
        );
        let progress = (displacement.y.abs() / self.config.dismiss_distance).clamp(0.0, 1.0);
        log::trace!("Gesture: dismiss progress {:.2}", progress);
        GestureEvent::DismissProgress { progress }
    }

    fn apply_pinch(&mut self, anchor: &PinchAnchor, a: Point, b: Point) {
        let ratio = if anchor.initial_distance < MIN_PINCH_DISTANCE {
            1.0
        } else {
            a.distance(b) / anchor.initial_distance
        };
        let scale = (anchor.start.scale * ratio).clamp(1.0, self.config.max_scale);
        let midpoint = a.midpoint(b);

        let zoomed = anchor
            .start
            .zoom_to_point(scale, anchor.initial_midpoint, self.viewport.center())
            .pan_by(midpoint - anchor.initial_midpoint)
            .clamped(self.config.max_scale, self.viewport);
        log::trace!("Gesture: pinch {:.3}x", zoomed.scale);
        self.state = TransformState::from_transform(zoomed, GesturePhase::Pinching);
    }

    /// Without double-tap zoom a tap is reported at once. Otherwise it is held
    /// until a second tap pairs with it or the interval runs out.
    fn resolve_tap(&mut self, position: Point, time: Instant) -> GestureOutcome {
        let mut outcome = GestureOutcome::new(Claim::Claimed, self.state);
        if !self.options.double_tap_to_zoom_enabled {
            return outcome.with_event(GestureEvent::Tap { position });
        }

        if let Some(previous) = self.last_tap.take() {
            let interval = time.saturating_duration_since(previous.released_at);
            if interval <= self.config.double_tap_interval()
                && previous.position.distance(position) <= self.config.double_tap_radius
            {
                return self.double_tap(position);
            }
            outcome = outcome.with_event(GestureEvent::Tap {
                position: previous.position,
            });
        }
        self.last_tap = Some(TapRecord {
            position,
            released_at: time,
        });
        outcome
    }

    fn flush_pending_tap(&mut self, now: Instant) -> Option<GestureEvent> {
        let tap = self.last_tap?;
        if now.saturating_duration_since(tap.released_at) <= self.config.double_tap_interval() {
            return None;
        }
        self.last_tap = None;
        log::trace!("Gesture: single tap confirmed");
        Some(GestureEvent::Tap {
            position: tap.position,
        })
    }

    fn double_tap(&mut self, position: Point) -> GestureOutcome {
        let is_scaled = if self.state.is_scaled() {
            self.state = TransformState::identity();
            false
        } else {
            let zoomed = Transform::identity()
                .zoom_to_point(self.config.double_tap_scale, position, self.viewport.center())
                .clamped(self.config.max_scale, self.viewport);
            self.state = TransformState::from_transform(zoomed, GesturePhase::Idle);
            true
        };
        log::debug!("Gesture: double tap -> {:.2}x", self.state.scale);
        GestureOutcome::new(Claim::Claimed, self.state)
            .with_event(GestureEvent::ZoomChanged { is_scaled })
    }
}
