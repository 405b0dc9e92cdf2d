use crate::render::SceneRenderer;
use std::cell::RefCell;
use valley_core::{Event, NavigatorHandle, ViewportClass};

/// Everything the DOM listeners share: the mounted navigator, the renderer
/// and the pointer type of the last `pointerdown`.
pub struct App {
    nav: RefCell<NavigatorHandle<'static>>,
    renderer: SceneRenderer,
    last_pointer_type: RefCell<String>,
}

impl App {
    pub fn new(nav: NavigatorHandle<'static>, renderer: SceneRenderer) -> Self {
        Self {
            nav: RefCell::new(nav),
            renderer,
            last_pointer_type: RefCell::new(String::from("mouse")),
        }
    }

    /// Feed one event to the navigator and redraw if the state moved.
    /// Effect failures end here; the state change they follow is kept.
    pub fn handle(&self, event: Event) {
        let before = self.nav.borrow().state();
        let result = self.nav.borrow_mut().handle_event(event);
        if let Err(e) = result {
            log::error!("[app] {:#}", e);
        }
        if self.nav.borrow().state() != before {
            self.render();
        }
    }

    pub fn renderer_root(&self) -> &web_sys::Element {
        self.renderer.root()
    }

    pub fn render(&self) {
        if self.is_disposed() {
            return;
        }
        let view = self.nav.borrow().view();
        match view {
            Ok(view) => self.renderer.render(&view),
            Err(e) => log::error!("[app] cannot render: {}", e),
        }
    }

    pub fn set_viewport_class(&self, viewport: ViewportClass) {
        if self.is_disposed() || self.nav.borrow().state().viewport_class == viewport {
            return;
        }
        log::info!("[app] viewport -> {}", viewport);
        self.nav.borrow_mut().set_viewport_class(viewport);
        self.render();
    }

    pub fn dispose(&self) {
        self.nav.borrow_mut().dispose();
        self.renderer.clear();
    }

    pub fn is_disposed(&self) -> bool {
        self.nav.borrow().is_disposed()
    }

    /// Swap in a freshly mounted navigator and draw it from scratch.
    pub fn remount(&self, nav: NavigatorHandle<'static>) {
        log::info!("[app] remounted at {}", nav.state().current_scene);
        *self.nav.borrow_mut() = nav;
        self.renderer.clear();
        self.render();
    }

    pub fn set_pointer_type(&self, pointer_type: String) {
        *self.last_pointer_type.borrow_mut() = pointer_type;
    }

    pub fn pointer_type(&self) -> String {
        self.last_pointer_type.borrow().clone()
    }
}
