//! Tests for header/footer visibility.

use super::{items, mount, options, p, pinch, settle, tap, Clock};
use crate::{GalleryItem, ImageSource};

#[test]
fn test_zoom_hides_chrome_and_unzoom_restores() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a"]), options(0));
    assert!(gallery.chrome().is_visible());

    pinch(&mut gallery, &clock, 0, 100.0, 250.0);
    assert!(!gallery.chrome().is_visible());
    assert_eq!(gallery.chrome().header().target(), -300.0);
    assert_eq!(gallery.chrome().footer().target(), 300.0);

    pinch(&mut gallery, &clock, 200, 250.0, 100.0);
    assert!(gallery.chrome().is_visible());
    assert_eq!(gallery.chrome().header().target(), 0.0);
}

#[test]
fn test_explicit_hide_survives_zoom_cycle() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a"]), options(0));

    pinch(&mut gallery, &clock, 0, 100.0, 250.0);
    gallery.toggle_chrome(false);
    pinch(&mut gallery, &clock, 200, 250.0, 100.0);
    assert!(!gallery.chrome().is_visible());

    gallery.toggle_chrome(true);
    assert!(gallery.chrome().is_visible());
}

#[test]
fn test_toggle_while_zoomed_is_deferred() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a"]), options(0));

    pinch(&mut gallery, &clock, 0, 100.0, 250.0);
    gallery.toggle_chrome(true);
    assert!(!gallery.chrome().is_visible());
}

#[test]
fn test_tap_toggles_chrome_when_enabled() {
    let clock = Clock::new();
    let mut opts = options(0);
    opts.tap_toggles_chrome = true;
    let (mut gallery, _recorder) = mount(items(&["a"]), opts);

    tap(&mut gallery, &clock, 0, p(200.0, 400.0));
    // Could still become a double-tap
    assert!(gallery.chrome().is_visible());
    gallery.tick(clock.at(400));
    assert!(!gallery.chrome().is_visible());

    tap(&mut gallery, &clock, 1000, p(200.0, 400.0));
    gallery.tick(clock.at(1400));
    assert!(gallery.chrome().is_visible());
}

#[test]
fn test_tap_toggles_immediately_without_double_tap_zoom() {
    let clock = Clock::new();
    let mut opts = options(0);
    opts.tap_toggles_chrome = true;
    opts.double_tap_to_zoom_enabled = false;
    let (mut gallery, _recorder) = mount(items(&["a"]), opts);

    tap(&mut gallery, &clock, 0, p(200.0, 400.0));
    assert!(!gallery.chrome().is_visible());
}

#[test]
fn test_double_tap_cycle_keeps_chrome_with_tap_toggle() {
    let clock = Clock::new();
    let mut opts = options(0);
    opts.tap_toggles_chrome = true;
    let (mut gallery, _recorder) = mount(items(&["a"]), opts);

    tap(&mut gallery, &clock, 0, p(200.0, 400.0));
    tap(&mut gallery, &clock, 100, p(200.0, 400.0));
    assert!(gallery.active_transform().unwrap().is_scaled());
    assert!(!gallery.chrome().is_visible());

    tap(&mut gallery, &clock, 1000, p(200.0, 400.0));
    tap(&mut gallery, &clock, 1100, p(200.0, 400.0));
    gallery.tick(clock.at(2000));

    assert!(!gallery.active_transform().unwrap().is_scaled());
    assert!(gallery.chrome().is_visible());
    assert!(gallery.is_scroll_enabled());
}

#[test]
fn test_tap_is_noop_by_default() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a"]), options(0));

    tap(&mut gallery, &clock, 0, p(200.0, 400.0));
    assert!(gallery.chrome().is_visible());
}

#[test]
fn test_video_hides_chrome_until_page_change() {
    let videos = vec![
        GalleryItem::video("v", ImageSource::uri("poster.jpg"), "file:///v.mp4"),
        GalleryItem::image("a", ImageSource::uri("a.jpg")),
    ];
    let (mut gallery, _recorder) = mount(videos, options(0));

    gallery.request_hide_chrome(true);
    assert!(!gallery.chrome().is_visible());
    assert!(!gallery.is_scroll_enabled());

    gallery.on_settle(settle(&gallery, 1));
    assert!(gallery.chrome().is_visible());
    assert!(gallery.is_scroll_enabled());
}

#[test]
fn test_host_frames_reach_exact_target() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a"]), options(0));

    pinch(&mut gallery, &clock, 0, 100.0, 250.0);
    let chrome = gallery.chrome_mut();
    chrome.header_mut().write_frame(-120.0);
    assert_eq!(chrome.header().offset(), -120.0);
    chrome.header_mut().settle();
    chrome.footer_mut().settle();

    assert_eq!(gallery.chrome().header().offset(), -300.0);
    assert_eq!(gallery.chrome().footer().offset(), 300.0);
}
