use crate::dom;
use crate::style;
use std::cell::Cell;
use valley_core::{SceneName, SceneView, ViewportClass};
use web_sys as web;

/// Writes a [`SceneView`] into the scene root.
///
/// The stage is rebuilt only when the scene or viewport class changes.
/// Hover and selection changes patch the existing markers in place so the
/// element under the pointer survives and no spurious enter/leave fires.
pub struct SceneRenderer {
    root: web::Element,
    rendered: Cell<Option<(SceneName, ViewportClass)>>,
}

impl SceneRenderer {
    pub fn new(root: web::Element) -> Self {
        Self {
            root,
            rendered: Cell::new(None),
        }
    }

    pub fn root(&self) -> &web::Element {
        &self.root
    }

    pub fn render(&self, view: &SceneView) {
        let key = (view.scene, view.viewport_class);
        if self.rendered.get() != Some(key) {
            self.root.set_inner_html(&style::scene_markup(view));
            self.rendered.set(Some(key));
            log::debug!("[render] stage {} ({})", view.scene, view.viewport_class);
            return;
        }

        while let Ok(Some(old)) = self.root.query_selector(".valley-tooltip") {
            old.remove();
        }
        for marker in &view.markers {
            if let Some(el) = self.marker(&marker.id) {
                _ = el.class_list().toggle_with_force("active", marker.active);
            }
        }
        if let Some(tooltip) = &view.tooltip {
            if let Some(el) = self.marker(&tooltip.hotspot_id) {
                _ = el.insert_adjacent_html("beforeend", &style::tooltip_markup(tooltip));
            }
        }
    }

    /// Forget the stage so the next render rebuilds it.
    pub fn clear(&self) {
        self.root.set_inner_html("");
        self.rendered.set(None);
    }

    fn marker(&self, id: &str) -> Option<web::Element> {
        dom::find_marker(&self.root, id)
    }
}
