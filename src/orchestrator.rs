//! Gallery orchestrator.
//!
//! Composes the per-item gesture interpreter and dismiss controller with the
//! index synchronizer, the chrome controller and the paginated list. All
//! side effects of an input are applied before the call returns, so a zoom
//! event has already locked list scrolling when the next sample arrives.

use std::time::Duration;

use lightbox_core::{
    ChromeVisibilityController, Claim, DismissController, DismissPhase, DismissSignal,
    GestureEvent, GestureInterpreter, IndexChange, IndexSynchronizer, RenderPass, SettleEvent, Size,
    TouchSample, TransformState,
};
use web_time::Instant;

use crate::callback::Callback;
use crate::config::GalleryOptions;
use crate::error::GalleryError;
use crate::item::{GalleryItem, ImageSource};
use crate::list::PaginatedList;

/// Handlers supplied by the caller.
#[derive(Debug, Default)]
pub struct GalleryCallbacks {
    /// The overlay finished fading out and should be unmounted
    pub on_request_close: Callback<()>,
    /// Long press on the active item, with its media reference
    pub on_long_press: Callback<ImageSource>,
    /// A user-driven page change settled
    pub on_image_index_change: Callback<usize>,
}

impl GalleryCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_request_close(mut self, f: impl FnMut(()) + 'static) -> Self {
        self.on_request_close = Callback::new(f);
        self
    }

    pub fn on_long_press(mut self, f: impl FnMut(ImageSource) + 'static) -> Self {
        self.on_long_press = Callback::new(f);
        self
    }

    pub fn on_image_index_change(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_image_index_change = Callback::new(f);
        self
    }
}

/// What the item renderer needs to draw page `index`.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemRenderProps<'a> {
    pub index: usize,
    pub image: &'a ImageSource,
    pub video_uri: Option<&'a str>,
    pub is_active: bool,
    /// Identity for every page but the active one
    pub transform: TransformState,
    pub swipe_to_close_enabled: bool,
    pub double_tap_to_zoom_enabled: bool,
    pub delay_long_press: Duration,
}

/// State owned by the item currently paged in. Replaced on every page change.
#[derive(Debug)]
struct ActiveItem {
    index: usize,
    item_id: String,
    interpreter: GestureInterpreter,
    dismiss: DismissController,
}

/// Full-screen gallery state for one overlay.
#[derive(Debug)]
pub struct GalleryOrchestrator<L: PaginatedList> {
    items: Vec<GalleryItem>,
    options: GalleryOptions,
    list: L,
    callbacks: GalleryCallbacks,
    index: IndexSynchronizer,
    chrome: ChromeVisibilityController,
    active: Option<ActiveItem>,
    visible: bool,
    scroll_enabled: bool,
    /// Last `image_index` value the caller passed
    image_index_prop: usize,
}

impl<L: PaginatedList> GalleryOrchestrator<L> {
    /// Mount the gallery. Fails only on invalid configuration.
    ///
    /// The mount index is clamped into the collection and never reported
    /// through `on_image_index_change`.
    pub fn new(
        items: Vec<GalleryItem>,
        options: GalleryOptions,
        mut list: L,
        callbacks: GalleryCallbacks,
    ) -> Result<Self, GalleryError> {
        options.validate()?;

        let start_index = options.start_index();
        let index = IndexSynchronizer::new(start_index, items.len());
        list.set_item_count(items.len(), index.pass());
        list.scroll_to_index(index.current(), index.pass());
        list.set_scroll_enabled(true);

        log::debug!(
            "Gallery: mounted with {} item(s) at index {}",
            items.len(),
            index.current()
        );

        let mut gallery = Self {
            chrome: new_chrome(&options),
            visible: options.visible,
            items,
            options,
            list,
            callbacks,
            index,
            active: None,
            scroll_enabled: true,
            image_index_prop: start_index,
        };
        gallery.activate();
        Ok(gallery)
    }

    // ==== Input ====

    /// Route one touch sample to the active item.
    ///
    /// Returns who owns the stream: [`Claim::Delegated`] means the paginated
    /// list should handle it.
    pub fn handle_touch(&mut self, sample: &TouchSample) -> Claim {
        if !self.accepts_gestures() {
            return Claim::Delegated;
        }
        let Some(active) = self.active.as_mut() else {
            return Claim::Delegated;
        };
        let outcome = active.interpreter.handle(sample);
        self.apply_events(outcome.events);
        outcome.claim
    }

    /// Host clock tick while a finger may be resting. Drives long-press recognition.
    pub fn tick(&mut self, now: Instant) -> Claim {
        if !self.accepts_gestures() {
            return Claim::Delegated;
        }
        let Some(active) = self.active.as_mut() else {
            return Claim::Delegated;
        };
        let outcome = active.interpreter.tick(now);
        self.apply_events(outcome.events);
        outcome.claim
    }

    /// The list started a user-driven scroll towards `index`.
    pub fn on_scroll_begin(&mut self, index: usize) {
        self.index.begin_scroll(index);
    }

    /// The list came to rest. Notifies the caller once per settled change.
    pub fn on_settle(&mut self, event: SettleEvent) -> Option<IndexChange> {
        if !self.is_rendered() {
            log::debug!("Gallery: ignoring settle on {} while not rendered", event.index);
            return None;
        }
        let change = self.index.on_settle(event)?;
        self.activate();
        self.callbacks.on_image_index_change.call(change.current);
        Some(change)
    }

    // ==== Caller updates ====

    /// The caller changed the `image_index` prop. Never notifies.
    pub fn set_image_index(&mut self, index: usize) {
        if index == self.image_index_prop {
            return;
        }
        self.image_index_prop = index;
        let jump = self.index.set_external_index(index);
        self.list.scroll_to_index(jump.index, jump.pass);
        self.activate();
    }

    /// Replace the collection. The index is clamped silently.
    pub fn set_items(&mut self, items: Vec<GalleryItem>) {
        let previous_index = self.index.current();
        let previous_id = self.active.as_ref().map(|a| a.item_id.clone());

        self.items = items;
        let pass = self.index.set_item_count(self.items.len());
        self.list.set_item_count(self.items.len(), pass);

        let current = self.index.current();
        if current != previous_index {
            log::debug!(
                "Gallery: index {} clamped to {} after collection change",
                previous_index,
                current
            );
            self.list.scroll_to_index(current, pass);
        }

        let current_id = self.items.get(current).map(|item| item.id.as_str());
        if current != previous_index || current_id != previous_id.as_deref() {
            self.activate();
        }
    }

    /// Show or hide the overlay. Showing again starts a new viewing session.
    pub fn set_visible(&mut self, visible: bool) {
        if visible == self.visible {
            return;
        }
        self.visible = visible;

        if visible {
            log::debug!("Gallery: new viewing session at index {}", self.index.current());
            self.chrome = new_chrome(&self.options);
            self.active = None;
            self.activate();
        } else {
            log::debug!("Gallery: hidden");
            if let Some(active) = self.active.as_mut() {
                active.interpreter.reset();
            }
        }
    }

    /// Update the page size, re-clamping the active transform.
    pub fn set_viewport(&mut self, viewport: Size) {
        if !viewport.is_usable() {
            log::warn!(
                "Gallery: ignoring unusable viewport {}x{}",
                viewport.width,
                viewport.height
            );
            return;
        }
        self.options.viewport = viewport;
        if let Some(active) = self.active.as_mut() {
            active.interpreter.set_viewport(viewport);
        }
    }

    // ==== Closing ====

    /// Close without a drag (header close button, hardware back).
    pub fn request_close(&mut self) {
        match self.active.as_mut() {
            Some(active) if self.visible => active.dismiss.request_close(),
            _ => log::debug!("Gallery: close requested while nothing is shown"),
        }
    }

    /// Host animation frame for the overlay opacity.
    pub fn on_opacity_frame(&mut self, value: f32) {
        if let Some(active) = self.active.as_mut() {
            active.dismiss.on_opacity_frame(value);
        }
    }

    /// Host reports the opacity animation finished.
    ///
    /// Returns `true` when this settle closed the overlay, which happens at most
    /// once per viewing session.
    pub fn on_opacity_settled(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        match active.dismiss.on_opacity_settled() {
            Some(DismissSignal::Dismissed) => {
                log::info!("Gallery: closed at index {}", self.index.current());
                self.callbacks.on_request_close.call(());
                true
            }
            None => false,
        }
    }

    /// The host finished the spring back after a cancelled dismiss.
    pub fn on_transform_settled(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.interpreter.finish_settle();
        }
    }

    // ==== Chrome ====

    /// Hook for the video renderer, which hides the chrome while playing.
    pub fn request_hide_chrome(&mut self, hidden: bool) {
        self.apply_zoom(hidden);
    }

    /// Explicit header/footer visibility request.
    pub fn toggle_chrome(&mut self, visible: bool) {
        self.chrome.toggle(visible);
    }

    pub fn chrome(&self) -> &ChromeVisibilityController {
        &self.chrome
    }

    /// Mutable access so the host can write animation frames.
    pub fn chrome_mut(&mut self) -> &mut ChromeVisibilityController {
        &mut self.chrome
    }

    // ==== Rendering ====

    /// The overlay renders nothing while hidden or without items.
    pub fn is_rendered(&self) -> bool {
        self.visible && !self.items.is_empty()
    }

    pub fn render_props(&self, index: usize) -> Option<ItemRenderProps<'_>> {
        if !self.is_rendered() {
            return None;
        }
        let item = self.items.get(index)?;
        let active = self.active.as_ref().filter(|a| a.index == index);
        Some(ItemRenderProps {
            index,
            image: &item.image,
            video_uri: item.video_uri.as_deref(),
            is_active: active.is_some(),
            transform: active
                .map(|a| a.interpreter.state())
                .unwrap_or_default(),
            swipe_to_close_enabled: self.options.swipe_to_close_enabled,
            double_tap_to_zoom_enabled: self.options.double_tap_to_zoom_enabled,
            delay_long_press: self.options.delay_long_press(),
        })
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn current_index(&self) -> usize {
        self.index.current()
    }

    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    pub fn options(&self) -> &GalleryOptions {
        &self.options
    }

    /// Transform of the active item, if any.
    pub fn active_transform(&self) -> Option<TransformState> {
        self.active.as_ref().map(|a| a.interpreter.state())
    }

    /// Overlay opacity (1 when nothing is active).
    pub fn opacity(&self) -> f32 {
        self.active.as_ref().map_or(1.0, |a| a.dismiss.opacity())
    }

    /// Opacity the host should animate towards.
    pub fn opacity_target(&self) -> f32 {
        self.active.as_ref().map_or(1.0, |a| a.dismiss.opacity_target())
    }

    pub fn dismiss_phase(&self) -> DismissPhase {
        self.active
            .as_ref()
            .map_or(DismissPhase::Open, |a| a.dismiss.phase())
    }

    pub fn render_pass(&self) -> RenderPass {
        self.index.pass()
    }

    pub fn is_scroll_enabled(&self) -> bool {
        self.scroll_enabled
    }

    pub fn list(&self) -> &L {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut L {
        &mut self.list
    }

    // ==== Internals ====

    fn accepts_gestures(&self) -> bool {
        if !self.is_rendered() {
            return false;
        }
        let Some(active) = self.active.as_ref() else {
            return false;
        };
        if active.dismiss.is_requested() {
            return false;
        }
        !self
            .items
            .get(active.index)
            .is_some_and(GalleryItem::is_video)
    }

    fn apply_events(&mut self, events: Vec<GestureEvent>) {
        for event in events {
            match event {
                GestureEvent::ZoomChanged { is_scaled } => self.apply_zoom(is_scaled),
                GestureEvent::DismissStarted => {
                    if let Some(active) = self.active.as_mut() {
                        active.dismiss.begin_dismiss();
                    }
                }
                GestureEvent::DismissProgress { progress } => {
                    if let Some(active) = self.active.as_mut() {
                        active.dismiss.update_progress(progress);
                    }
                }
                GestureEvent::DismissReleased { committed } => {
                    if let Some(active) = self.active.as_mut() {
                        active.dismiss.end_dismiss(committed);
                    }
                }
                GestureEvent::Tap { .. } => {
                    if self.options.tap_toggles_chrome && !self.chrome.is_scaled() {
                        let visible = !self.chrome.is_visible();
                        self.chrome.toggle(visible);
                    }
                }
                GestureEvent::LongPress { .. } => {
                    let image = self
                        .active
                        .as_ref()
                        .and_then(|a| self.items.get(a.index))
                        .map(|item| item.image.clone());
                    if let Some(image) = image {
                        self.callbacks.on_long_press.call(image);
                    }
                }
            }
        }
    }

    /// Zoom side effects: lock list scrolling and push the chrome away.
    fn apply_zoom(&mut self, is_scaled: bool) {
        let enabled = !is_scaled;
        if self.scroll_enabled != enabled {
            log::debug!("Gallery: list scroll {}", if enabled { "enabled" } else { "locked" });
            self.scroll_enabled = enabled;
            self.list.set_scroll_enabled(enabled);
        }
        self.chrome.set_scaled(is_scaled);
    }

    /// Give the current index a fresh item slot at identity.
    fn activate(&mut self) {
        let previous = self.active.take();
        let was_scaled = previous
            .as_ref()
            .is_some_and(|a| a.interpreter.state().is_scaled());
        if was_scaled || !self.scroll_enabled || self.chrome.is_scaled() {
            self.apply_zoom(false);
        }

        // A committed close outlives the page change
        let dismiss = previous
            .map(|a| a.dismiss)
            .filter(DismissController::is_requested)
            .unwrap_or_default();

        let current = self.index.current();
        self.active = self.items.get(current).map(|item| {
            log::debug!("Gallery: item {} ({}) active", current, item.id);
            ActiveItem {
                index: current,
                item_id: item.id.clone(),
                interpreter: GestureInterpreter::new(
                    self.options.gesture.clone(),
                    self.options.interaction(),
                    self.options.viewport,
                ),
                dismiss,
            }
        });
    }
}

fn new_chrome(options: &GalleryOptions) -> ChromeVisibilityController {
    let offset = options.gesture.chrome_hide_offset;
    ChromeVisibilityController::with_offsets(offset, offset)
}
