use crate::app::App;
use crate::constants::{CLOSE_MODAL_ACTION, RETURN_HOME_ACTION};
use crate::dom;
use crate::input;
use crate::overlay;
use std::rc::Rc;
use valley_core::Event;
use web_sys as web;

pub fn wire_pointer_handlers(document: &web::Document, stage: &web::Element, app: &Rc<App>) {
    wire_pointerdown(document, app);
    wire_click(document, app);
    wire_hover(stage, app);
}

fn wire_pointerdown(document: &web::Document, app: &Rc<App>) {
    let app = app.clone();
    dom::add_listener(document, "pointerdown", move |ev: web::PointerEvent| {
        app.set_pointer_type(ev.pointer_type());
    });
}

fn wire_click(document: &web::Document, app: &Rc<App>) {
    let app = app.clone();
    let doc = document.clone();
    dom::add_listener(document, "click", move |ev: web::MouseEvent| {
        match dom::action_of(ev.target()).as_deref() {
            Some(CLOSE_MODAL_ACTION) => {
                overlay::close_modal(&doc);
                return;
            }
            Some(RETURN_HOME_ACTION) => {
                app.handle(Event::ReturnHome);
                return;
            }
            _ => {}
        }
        let marker = dom::marker_id(ev.target());
        if let Some(event) = input::activation_event(marker.as_deref(), &app.pointer_type()) {
            app.handle(event);
        }
    });
}

// Touch pointers synthesize over/out around every tap; only real hovering counts.
fn wire_hover(stage: &web::Element, app: &Rc<App>) {
    let app_over = app.clone();
    dom::add_listener(stage, "pointerover", move |ev: web::PointerEvent| {
        if input::is_touch(&ev.pointer_type()) {
            return;
        }
        let target = dom::marker_id(ev.target());
        let related = dom::marker_id(ev.related_target());
        if let Some(event) = input::hover_over(target.as_deref(), related.as_deref()) {
            app_over.handle(event);
        }
    });

    let app_out = app.clone();
    dom::add_listener(stage, "pointerout", move |ev: web::PointerEvent| {
        if input::is_touch(&ev.pointer_type()) {
            return;
        }
        let target = dom::marker_id(ev.target());
        let related = dom::marker_id(ev.related_target());
        if let Some(event) = input::hover_out(target.as_deref(), related.as_deref()) {
            app_out.handle(event);
        }
    });
}
