//! Header/footer visibility.
//!
//! One shared visibility signal drives two animation targets. Zooming forces
//! the chrome away; un-zooming restores whatever was last explicitly requested.

use std::time::Duration;

use crate::animation::Animated;
use crate::constants::{CHROME_ANIMATION_DURATION, CHROME_HIDE_OFFSET};

/// Animated vertical offset of one chrome bar.
///
/// Shown is offset 0; hidden moves the bar by `hidden_offset` (negative for the
/// header, which leaves through the top).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChromeBar {
    offset: Animated,
    hidden_offset: f32,
}

impl ChromeBar {
    fn new(hidden_offset: f32, visible: bool) -> Self {
        let start = if visible { 0.0 } else { hidden_offset };
        Self {
            offset: Animated::new(start),
            hidden_offset,
        }
    }

    pub fn offset(&self) -> f32 {
        self.offset.current()
    }

    pub fn target(&self) -> f32 {
        self.offset.target()
    }

    /// Whether the bar is heading to (or resting at) its shown position.
    pub fn is_visible(&self) -> bool {
        self.offset.target() == 0.0
    }

    pub fn write_frame(&mut self, value: f32) {
        self.offset.write_frame(value);
    }

    pub fn settle(&mut self) {
        self.offset.settle();
    }

    fn show(&mut self, visible: bool) {
        self.offset
            .set_target(if visible { 0.0 } else { self.hidden_offset });
    }
}

#[derive(Debug, Clone)]
pub struct ChromeVisibilityController {
    explicit_visible: bool,
    is_scaled: bool,
    header: ChromeBar,
    footer: ChromeBar,
}

impl Default for ChromeVisibilityController {
    fn default() -> Self {
        Self::new()
    }
}

impl ChromeVisibilityController {
    pub fn new() -> Self {
        Self::with_offsets(CHROME_HIDE_OFFSET, CHROME_HIDE_OFFSET)
    }

    /// Custom travel distances for the header and footer.
    pub fn with_offsets(header_offset: f32, footer_offset: f32) -> Self {
        Self {
            explicit_visible: true,
            is_scaled: false,
            header: ChromeBar::new(-header_offset.abs(), true),
            footer: ChromeBar::new(footer_offset.abs(), true),
        }
    }

    pub fn header(&self) -> &ChromeBar {
        &self.header
    }

    pub fn footer(&self) -> &ChromeBar {
        &self.footer
    }

    pub fn header_mut(&mut self) -> &mut ChromeBar {
        &mut self.header
    }

    pub fn footer_mut(&mut self) -> &mut ChromeBar {
        &mut self.footer
    }

    /// Effective visibility of the shared signal.
    pub fn is_visible(&self) -> bool {
        self.explicit_visible && !self.is_scaled
    }

    pub fn is_scaled(&self) -> bool {
        self.is_scaled
    }

    /// Suggested duration for the host's show/hide animation.
    pub fn animation_duration(&self) -> Duration {
        CHROME_ANIMATION_DURATION
    }

    /// Explicit show/hide request. Applied immediately unless the item is zoomed,
    /// in which case it is remembered for when the zoom ends.
    pub fn toggle(&mut self, visible: bool) {
        self.explicit_visible = visible;
        self.apply();
    }

    /// Zoom state of the active item changed.
    pub fn set_scaled(&mut self, is_scaled: bool) {
        if self.is_scaled == is_scaled {
            return;
        }
        self.is_scaled = is_scaled;
        self.apply();
    }

    fn apply(&mut self) {
        let visible = self.is_visible();
        log::trace!("Chrome: visible = {}", visible);
        self.header.show(visible);
        self.footer.show(visible);
    }
}
