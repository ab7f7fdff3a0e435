//! Scenario tests for the gallery orchestrator.
//!
//! Each test mounts a gallery over a [`RecordingList`], feeds it touch samples
//! and list events the way a host would, and checks callbacks, list commands
//! and the resulting state.

mod chrome_tests;
mod paging_tests;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;

use lightbox_core::{Point, SettleEvent, Size, TouchSample};
use web_time::Instant;

use crate::{
    GalleryCallbacks, GalleryItem, GalleryOptions, GalleryOrchestrator, ImageSource, RecordingList,
};

pub(crate) type TestGallery = GalleryOrchestrator<RecordingList>;

/// Everything the caller's handlers received.
#[derive(Default)]
pub(crate) struct Recorder {
    pub index_changes: Rc<RefCell<Vec<usize>>>,
    pub long_presses: Rc<RefCell<Vec<ImageSource>>>,
    pub closes: Rc<Cell<usize>>,
}

impl Recorder {
    fn callbacks(&self) -> GalleryCallbacks {
        GalleryCallbacks::new()
            .on_image_index_change({
                let index_changes = Rc::clone(&self.index_changes);
                move |index| index_changes.borrow_mut().push(index)
            })
            .on_long_press({
                let long_presses = Rc::clone(&self.long_presses);
                move |image| long_presses.borrow_mut().push(image)
            })
            .on_request_close({
                let closes = Rc::clone(&self.closes);
                move |()| closes.set(closes.get() + 1)
            })
    }

    pub fn index_changes(&self) -> Vec<usize> {
        self.index_changes.borrow().clone()
    }
}

/// Monotonic test clock.
pub(crate) struct Clock(Instant);

impl Clock {
    pub fn new() -> Self {
        Self(Instant::now())
    }

    pub fn at(&self, ms: u64) -> Instant {
        self.0 + Duration::from_millis(ms)
    }
}

pub(crate) fn p(x: f32, y: f32) -> Point {
    Point::new(x, y)
}

pub(crate) fn items(ids: &[&str]) -> Vec<GalleryItem> {
    ids.iter()
        .map(|id| {
            let uri = format!("https://example.com/{}.jpg", id);
            GalleryItem::image(*id, ImageSource::uri(uri))
        })
        .collect()
}

pub(crate) fn options(start_index: i64) -> GalleryOptions {
    GalleryOptions {
        start_index,
        viewport: Size::new(400.0, 800.0),
        ..Default::default()
    }
}

pub(crate) fn mount(items: Vec<GalleryItem>, options: GalleryOptions) -> (TestGallery, Recorder) {
    let recorder = Recorder::default();
    let list = RecordingList::new();
    let gallery = GalleryOrchestrator::new(items, options, list, recorder.callbacks()).unwrap();
    (gallery, recorder)
}

/// Settle event for the list's current render pass.
pub(crate) fn settle(gallery: &TestGallery, index: usize) -> SettleEvent {
    SettleEvent {
        index,
        pass: gallery.render_pass(),
    }
}

/// Pinch symmetrically around the viewport center to `distance`.
pub(crate) fn pinch_sample(time: Instant, distance: f32) -> TouchSample {
    TouchSample::two(time, p(200.0 - distance / 2.0, 400.0), p(200.0 + distance / 2.0, 400.0))
}

/// Full pinch from `from` to `to` finger distance, released at `start + 48ms`.
pub(crate) fn pinch(gallery: &mut TestGallery, clock: &Clock, start: u64, from: f32, to: f32) {
    gallery.handle_touch(&pinch_sample(clock.at(start), from));
    gallery.handle_touch(&pinch_sample(clock.at(start + 16), to));
    gallery.handle_touch(&TouchSample::release(clock.at(start + 48)));
}

/// Single-finger drag through `points`, one sample every 16ms, then release.
pub(crate) fn drag(gallery: &mut TestGallery, clock: &Clock, start: u64, points: &[Point]) {
    let mut t = start;
    for point in points {
        gallery.handle_touch(&TouchSample::one(clock.at(t), *point));
        t += 16;
    }
    gallery.handle_touch(&TouchSample::release(clock.at(t)));
}

/// Tap (press and release) at `position`.
pub(crate) fn tap(gallery: &mut TestGallery, clock: &Clock, start: u64, position: Point) {
    gallery.handle_touch(&TouchSample::one(clock.at(start), position));
    gallery.handle_touch(&TouchSample::release(clock.at(start + 50)));
}
