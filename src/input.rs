use crate::constants::{MOBILE_BREAKPOINT_PX, REVEAL_FRACTION};
use valley_core::{Event, ViewportClass};

// ---------------- Viewport ----------------
#[inline]
pub fn viewport_class_for_width(width_css_px: f64) -> ViewportClass {
    if width_css_px < MOBILE_BREAKPOINT_PX {
        ViewportClass::Mobile
    } else {
        ViewportClass::Desktop
    }
}

/// Page scroll offset that puts an element `element_page_top` px from the
/// top of the document roughly a third of the way down the screen.
#[inline]
pub fn reveal_scroll_top(element_page_top: f64, viewport_height: f64) -> f64 {
    (element_page_top - viewport_height * REVEAL_FRACTION).max(0.0)
}

// ---------------- Pointer mapping ----------------
#[inline]
pub fn is_touch(pointer_type: &str) -> bool {
    pointer_type == "touch"
}

/// Map a click to a navigator event. `marker` is the hotspot under the
/// pointer, if any. Touch taps on the background drop a pending selection;
/// mouse clicks there do nothing.
pub fn activation_event(marker: Option<&str>, pointer_type: &str) -> Option<Event> {
    match (marker, is_touch(pointer_type)) {
        (Some(id), true) => Some(Event::Tap(id.to_string())),
        (Some(id), false) => Some(Event::Click(id.to_string())),
        (None, true) => Some(Event::TapOutside),
        (None, false) => None,
    }
}

/// `pointerover`: entering a marker from outside it.
pub fn hover_over(target: Option<&str>, related: Option<&str>) -> Option<Event> {
    match target {
        Some(id) if related != Some(id) => Some(Event::PointerEnter(id.to_string())),
        _ => None,
    }
}

/// `pointerout`: leaving a marker for anything that is not the same marker.
pub fn hover_out(target: Option<&str>, related: Option<&str>) -> Option<Event> {
    match target {
        Some(id) if related != Some(id) => Some(Event::PointerLeave),
        _ => None,
    }
}

/// Whether a marker's `data-hotspot-id` value names `hotspot_id`.
#[inline]
pub fn is_marker_for(attr: Option<&str>, hotspot_id: &str) -> bool {
    attr == Some(hotspot_id)
}

// ---------------- Page lifecycle ----------------
/// A page restored from the back/forward cache comes back with the
/// navigator it disposed on `pagehide`; only then does it need a new one.
#[inline]
pub fn remount_on_pageshow(persisted: bool, disposed: bool) -> bool {
    persisted && disposed
}

// ---------------- Keyboard ----------------
#[inline]
pub fn key_event(key: &str, focused_marker: Option<&str>) -> Option<Event> {
    match (key, focused_marker) {
        ("Escape", _) => Some(Event::ReturnHome),
        ("Enter" | " ", Some(id)) => Some(Event::Click(id.to_string())),
        _ => None,
    }
}
