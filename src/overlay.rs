use crate::constants::{MODAL_ROOT_ID, TOAST_DURATION_MS, TOAST_ROOT_ID};
use crate::dom;
use crate::style;
use valley_core::{ModalContent, ModalSink, Toast, ToastSink};
use web_sys as web;

fn element(document: &web::Document, id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))
}

#[inline]
pub fn show(el: &web::Element) {
    _ = el.class_list().remove_1("hidden");
    _ = el.set_attribute("aria-hidden", "false");
}

#[inline]
pub fn hide(el: &web::Element) {
    _ = el.class_list().add_1("hidden");
    _ = el.set_attribute("aria-hidden", "true");
}

pub struct DomModal {
    document: web::Document,
}

impl DomModal {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ModalSink for DomModal {
    fn open(&self, content: &ModalContent) -> anyhow::Result<()> {
        let root = element(&self.document, MODAL_ROOT_ID)?;
        root.set_inner_html(&style::modal_markup(content));
        show(&root);
        log::info!("[modal] open {}", content.title);
        Ok(())
    }
}

pub fn modal_is_open(document: &web::Document) -> bool {
    document
        .get_element_by_id(MODAL_ROOT_ID)
        .map(|root| !root.class_list().contains("hidden"))
        .unwrap_or(false)
}

pub fn close_modal(document: &web::Document) {
    if let Some(root) = document.get_element_by_id(MODAL_ROOT_ID) {
        hide(&root);
        root.set_inner_html("");
    }
}

pub struct DomToasts {
    document: web::Document,
}

impl DomToasts {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl ToastSink for DomToasts {
    fn show(&self, toast: &Toast) -> anyhow::Result<()> {
        let root = element(&self.document, TOAST_ROOT_ID)?;
        let item = self
            .document
            .create_element("div")
            .map_err(|e| anyhow::anyhow!("createElement failed: {:?}", e))?;
        item.set_inner_html(&style::toast_markup(toast));
        root.append_child(&item)
            .map_err(|e| anyhow::anyhow!("appendChild failed: {:?}", e))?;
        dom::set_timeout(TOAST_DURATION_MS, move || item.remove())
    }
}
