mod keyboard;
mod pointer;

pub use keyboard::wire_keydown;
pub use pointer::wire_pointer_handlers;

use crate::app::App;
use crate::dom;
use crate::input;
use std::rc::Rc;
use valley_core::{NavigatorHandle, ViewportClass};
use web_sys as web;

fn current_viewport_class(window: &web::Window) -> Option<ViewportClass> {
    let width = window.inner_width().ok().and_then(|w| w.as_f64())?;
    Some(input::viewport_class_for_width(width))
}

/// Re-evaluate the viewport class on every resize.
pub fn wire_breakpoint(window: &web::Window, app: &Rc<App>) {
    let app = app.clone();
    let win = window.clone();
    dom::add_listener(window, "resize", move |_: web::Event| {
        if let Some(viewport) = current_viewport_class(&win) {
            app.set_viewport_class(viewport);
        }
    });
}

pub fn wire_pagehide(window: &web::Window, app: &Rc<App>) {
    let app = app.clone();
    dom::add_listener(window, "pagehide", move |_: web::Event| {
        app.dispose();
    });
}

/// Back/forward cache restores fire `pageshow` with `persisted` set after the
/// `pagehide` dispose; mount a fresh navigator so the scene comes back.
pub fn wire_pageshow(
    window: &web::Window,
    app: &Rc<App>,
    mount: impl Fn(ViewportClass) -> anyhow::Result<NavigatorHandle<'static>> + 'static,
) {
    let app = app.clone();
    let win = window.clone();
    dom::add_listener(window, "pageshow", move |ev: web::PageTransitionEvent| {
        if !input::remount_on_pageshow(ev.persisted(), app.is_disposed()) {
            return;
        }
        let viewport = current_viewport_class(&win).unwrap_or_default();
        match mount(viewport) {
            Ok(nav) => app.remount(nav),
            Err(e) => log::error!("[app] remount failed: {:#}", e),
        }
    });
}
