use crate::constants::{ACTION_ATTR, HOTSPOT_ATTR, REVEAL_DELAY_MS};
use crate::input;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Run `f` once after `delay_ms`.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            delay_ms,
        )
        .map_err(|e| anyhow::anyhow!("setTimeout failed: {:?}", e))?;
    Ok(())
}

/// Marker element for `hotspot_id` under `root`. Compares attribute values
/// so ids never have to survive CSS selector quoting.
pub fn find_marker(root: &web::Element, hotspot_id: &str) -> Option<web::Element> {
    let markers = root.query_selector_all(&format!("[{HOTSPOT_ATTR}]")).ok()?;
    (0..markers.length())
        .filter_map(|i| markers.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .find(|el| {
            input::is_marker_for(el.get_attribute(HOTSPOT_ATTR).as_deref(), hotspot_id)
        })
}

/// Hotspot id of the marker containing `target`, if any.
pub fn marker_id(target: Option<web::EventTarget>) -> Option<String> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let marker = el.closest(&format!("[{HOTSPOT_ATTR}]")).ok()??;
    marker.get_attribute(HOTSPOT_ATTR)
}

/// `data-action` of the nearest element carrying one.
pub fn action_of(target: Option<web::EventTarget>) -> Option<String> {
    let el = target?.dyn_into::<web::Element>().ok()?;
    let action = el.closest(&format!("[{ACTION_ATTR}]")).ok()??;
    action.get_attribute(ACTION_ATTR)
}

/// Scrolls the selected hotspot a third of the way down the screen once
/// the next layout pass has placed its tooltip.
pub struct DomScroller {
    root: web::Element,
}

impl DomScroller {
    pub fn new(root: web::Element) -> Self {
        Self { root }
    }
}

impl valley_core::Scroller for DomScroller {
    fn reveal(&self, hotspot_id: &str) -> anyhow::Result<()> {
        let root = self.root.clone();
        let hotspot_id = hotspot_id.to_string();
        set_timeout(REVEAL_DELAY_MS, move || {
            let Some(window) = web::window() else {
                return;
            };
            let Some(el) = find_marker(&root, &hotspot_id) else {
                return;
            };
            let page_top = el.get_bounding_client_rect().top() + window.scroll_y().unwrap_or(0.0);
            let viewport_h = window
                .inner_height()
                .ok()
                .and_then(|h| h.as_f64())
                .unwrap_or(0.0);
            window.scroll_to_with_x_and_y(0.0, input::reveal_scroll_top(page_top, viewport_h));
        })
    }
}
