//! Tests for paging and index notifications.

use lightbox_core::{Claim, RenderPass, SettleEvent, TouchSample, TransformState};

use super::{drag, items, mount, options, p, pinch, settle, Clock};
use crate::ListCommand;

#[test]
fn test_mount_clamps_start_index_and_never_notifies() {
    let (gallery, recorder) = mount(items(&["a", "b", "c"]), options(10));

    assert_eq!(gallery.current_index(), 2);
    assert!(recorder.index_changes().is_empty());
    assert_eq!(
        gallery.list().commands()[..2],
        [
            ListCommand::SetItemCount { count: 3, pass: 0 },
            ListCommand::ScrollTo { index: 2, pass: 0 },
        ]
    );
}

#[test]
fn test_negative_start_index_clamps_to_first() {
    let (gallery, recorder) = mount(items(&["a", "b", "c"]), options(-4));
    assert_eq!(gallery.current_index(), 0);
    assert!(recorder.index_changes().is_empty());
}

#[test]
fn test_swipe_to_next_item_notifies_once() {
    let clock = Clock::new();
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(1));

    // Horizontal drag on an unzoomed item belongs to the list
    assert_eq!(
        gallery.handle_touch(&TouchSample::one(clock.at(0), p(300.0, 400.0))),
        Claim::Undecided
    );
    assert_eq!(
        gallery.handle_touch(&TouchSample::one(clock.at(16), p(220.0, 405.0))),
        Claim::Delegated
    );
    assert_eq!(gallery.handle_touch(&TouchSample::release(clock.at(32))), Claim::Delegated);

    gallery.on_scroll_begin(2);
    let change = gallery.on_settle(settle(&gallery, 2)).unwrap();

    assert_eq!((change.previous, change.current), (1, 2));
    assert_eq!(recorder.index_changes(), vec![2]);
    assert_eq!(gallery.active_transform(), Some(TransformState::identity()));

    let props = gallery.render_props(2).unwrap();
    assert!(props.is_active);
    assert_eq!(props.transform, TransformState::identity());
    assert!(!gallery.render_props(1).unwrap().is_active);
}

#[test]
fn test_duplicate_settle_is_noop() {
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(1));

    gallery.on_settle(settle(&gallery, 2));
    assert!(gallery.on_settle(settle(&gallery, 2)).is_none());
    gallery.on_settle(settle(&gallery, 0));

    assert_eq!(recorder.index_changes(), vec![2, 0]);
}

#[test]
fn test_out_of_range_settle_discarded() {
    let (mut gallery, recorder) = mount(items(&["a", "b"]), options(0));

    assert!(gallery.on_settle(settle(&gallery, 5)).is_none());
    assert_eq!(gallery.current_index(), 0);
    assert!(recorder.index_changes().is_empty());
}

#[test]
fn test_programmatic_index_never_notifies() {
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(0));
    let old_pass = gallery.render_pass();

    gallery.set_image_index(2);
    assert_eq!(gallery.current_index(), 2);
    assert_eq!(
        gallery.list().commands().last(),
        Some(&ListCommand::ScrollTo {
            index: 2,
            pass: gallery.render_pass().0
        })
    );

    // A settle from the superseded window is stale
    assert!(gallery
        .on_settle(SettleEvent {
            index: 1,
            pass: old_pass
        })
        .is_none());
    // The jump itself settling on 2 changes nothing
    assert!(gallery.on_settle(settle(&gallery, 2)).is_none());

    assert_eq!(gallery.current_index(), 2);
    assert!(recorder.index_changes().is_empty());
}

#[test]
fn test_repeated_image_index_prop_is_ignored() {
    let (mut gallery, _recorder) = mount(items(&["a", "b", "c"]), options(1));
    let pass = gallery.render_pass();

    // Same value as mounted with: no jump, no new pass
    gallery.set_image_index(1);
    assert_eq!(gallery.render_pass(), pass);

    // The user pages away, then the caller re-sends the old prop value
    gallery.on_settle(settle(&gallery, 2));
    gallery.set_image_index(1);
    assert_eq!(gallery.current_index(), 2);
}

#[test]
fn test_page_change_resets_zoom_and_unlocks_scroll() {
    let clock = Clock::new();
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(1));

    pinch(&mut gallery, &clock, 0, 100.0, 250.0);
    assert!(!gallery.is_scroll_enabled());

    gallery.set_image_index(0);

    assert_eq!(gallery.active_transform(), Some(TransformState::identity()));
    assert!(gallery.is_scroll_enabled());
    assert!(gallery.list().scroll_enabled());
    assert!(gallery.chrome().is_visible());
    assert!(recorder.index_changes().is_empty());
}

#[test]
fn test_shrinking_collection_clamps_silently() {
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(2));
    let old_pass = gallery.render_pass();

    gallery.set_items(items(&["a", "b"]));

    assert_eq!(gallery.current_index(), 1);
    assert_ne!(gallery.render_pass(), old_pass);
    assert_eq!(
        gallery.list().commands().last(),
        Some(&ListCommand::ScrollTo {
            index: 1,
            pass: gallery.render_pass().0
        })
    );
    assert!(gallery
        .on_settle(SettleEvent {
            index: 0,
            pass: old_pass
        })
        .is_none());
    assert!(recorder.index_changes().is_empty());
}

#[test]
fn test_replacing_current_item_resets_its_state() {
    let clock = Clock::new();
    let (mut gallery, _recorder) = mount(items(&["a", "b"]), options(0));

    pinch(&mut gallery, &clock, 0, 100.0, 300.0);
    assert!(gallery.active_transform().unwrap().is_scaled());

    // Same ids: the zoom survives
    gallery.set_items(items(&["a", "b", "c"]));
    assert!(gallery.active_transform().unwrap().is_scaled());

    // Different item at the current index: fresh slot
    gallery.set_items(items(&["z", "b", "c"]));
    assert_eq!(gallery.active_transform(), Some(TransformState::identity()));
    assert!(gallery.is_scroll_enabled());
}

#[test]
fn test_stale_pass_after_items_change() {
    let clock = Clock::new();
    let (mut gallery, recorder) = mount(items(&["a", "b", "c"]), options(0));

    drag(&mut gallery, &clock, 0, &[p(300.0, 400.0), p(200.0, 400.0)]);
    gallery.on_scroll_begin(1);
    gallery.set_items(items(&["a", "b", "c", "d"]));

    assert!(gallery
        .on_settle(SettleEvent {
            index: 1,
            pass: RenderPass(0)
        })
        .is_none());
    assert_eq!(gallery.current_index(), 0);
    assert!(recorder.index_changes().is_empty());
}
