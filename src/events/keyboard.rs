use crate::app::App;
use crate::dom;
use crate::input;
use crate::overlay;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_keydown(document: &web::Document, app: &Rc<App>) {
    let app = app.clone();
    let doc = document.clone();
    dom::add_listener(document, "keydown", move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &doc, &app);
    });
}

pub fn handle_keydown(ev: &web::KeyboardEvent, document: &web::Document, app: &App) {
    let key = ev.key();
    if key == "Escape" && overlay::modal_is_open(document) {
        overlay::close_modal(document);
        return;
    }
    let focused = document
        .active_element()
        .map(|el| el.unchecked_into::<web::EventTarget>());
    let marker = dom::marker_id(focused);
    if let Some(event) = input::key_event(&key, marker.as_deref()) {
        // Enter and space on a button would also synthesize a click
        ev.prevent_default();
        app.handle(event);
    }
}
