// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod input {
    include!("../src/input.rs");
}

use constants::*;
use input::*;
use valley_core::{Event, ViewportClass};

#[test]
fn breakpoint_splits_mobile_and_desktop() {
    assert_eq!(viewport_class_for_width(375.0), ViewportClass::Mobile);
    assert_eq!(
        viewport_class_for_width(MOBILE_BREAKPOINT_PX - 0.5),
        ViewportClass::Mobile
    );
    assert_eq!(
        viewport_class_for_width(MOBILE_BREAKPOINT_PX),
        ViewportClass::Desktop
    );
    assert_eq!(viewport_class_for_width(1440.0), ViewportClass::Desktop);
}

#[test]
fn reveal_parks_hotspot_a_third_down() {
    assert_eq!(reveal_scroll_top(900.0, 600.0), 700.0);
    // never scrolls above the top of the page
    assert_eq!(reveal_scroll_top(50.0, 600.0), 0.0);
}

#[test]
fn touch_click_on_marker_is_a_tap() {
    assert_eq!(
        activation_event(Some("saloon"), "touch"),
        Some(Event::Tap("saloon".to_string()))
    );
}

#[test]
fn mouse_and_pen_clicks_are_clicks() {
    for pointer in ["mouse", "pen", ""] {
        assert_eq!(
            activation_event(Some("saloon"), pointer),
            Some(Event::Click("saloon".to_string())),
            "pointer type {pointer:?}"
        );
    }
}

#[test]
fn background_clicks() {
    assert_eq!(activation_event(None, "touch"), Some(Event::TapOutside));
    assert_eq!(activation_event(None, "mouse"), None);
}

#[test]
fn hover_ignores_moves_inside_one_marker() {
    assert_eq!(
        hover_over(Some("jukebox"), None),
        Some(Event::PointerEnter("jukebox".to_string()))
    );
    assert_eq!(
        hover_over(Some("jukebox"), Some("saloon")),
        Some(Event::PointerEnter("jukebox".to_string()))
    );
    assert_eq!(hover_over(Some("jukebox"), Some("jukebox")), None);
    assert_eq!(hover_over(None, Some("jukebox")), None);

    assert_eq!(hover_out(Some("jukebox"), None), Some(Event::PointerLeave));
    assert_eq!(hover_out(Some("jukebox"), Some("jukebox")), None);
    assert_eq!(hover_out(None, None), None);
}

#[test]
fn keyboard_mapping() {
    assert_eq!(key_event("Escape", None), Some(Event::ReturnHome));
    assert_eq!(key_event("Escape", Some("saloon")), Some(Event::ReturnHome));
    assert_eq!(
        key_event("Enter", Some("saloon")),
        Some(Event::Click("saloon".to_string()))
    );
    assert_eq!(
        key_event(" ", Some("saloon")),
        Some(Event::Click("saloon".to_string()))
    );
    assert_eq!(key_event("Enter", None), None);
    assert_eq!(key_event("a", Some("saloon")), None);
}

#[test]
fn marker_lookup_compares_raw_attribute_values() {
    assert!(is_marker_for(Some("bob's-bar"), "bob's-bar"));
    assert!(is_marker_for(Some("a]b"), "a]b"));
    assert!(!is_marker_for(Some("saloon"), "saloon-door"));
    assert!(!is_marker_for(None, "saloon"));
}

#[test]
fn pageshow_remounts_only_a_restored_disposed_page() {
    // back/forward cache restore after the pagehide dispose
    assert!(remount_on_pageshow(true, true));
    // first load: the navigator from init is live
    assert!(!remount_on_pageshow(false, false));
    assert!(!remount_on_pageshow(true, false));
    assert!(!remount_on_pageshow(false, true));
}
