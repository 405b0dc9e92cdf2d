#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use valley_core::{mount, Collaborators, NavigatorHandle, Registry, SceneName, ViewportClass};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod app;
mod audio;
mod constants;
mod dom;
mod events;
mod input;
mod overlay;
mod render;
mod router;
mod style;

use constants::{INITIAL_SCENE_ATTR, SCENE_ROOT_ID};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("valley-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

fn initial_scene(root: &web::Element) -> Option<SceneName> {
    let raw = root.get_attribute(INITIAL_SCENE_ATTR)?;
    match raw.parse::<SceneName>() {
        Ok(name) => Some(name),
        Err(e) => {
            log::warn!("{}, starting at the valley", e);
            None
        }
    }
}

/// Mount the builtin scenes on `root` with the DOM collaborators.
fn mount_navigator(
    root: &web::Element,
    viewport: ViewportClass,
) -> anyhow::Result<NavigatorHandle<'static>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let collaborators = Collaborators::new(
        router::LocationRouter,
        overlay::DomModal::new(document.clone()),
        overlay::DomToasts::new(document),
        audio::WebAudioSounds::new(),
    )
    .with_scroller(dom::DomScroller::new(root.clone()));

    let nav = mount(
        Registry::builtin(),
        initial_scene(root),
        viewport,
        collaborators,
    )?;
    log::info!("[app] mounted at {} ({})", nav.state().current_scene, viewport);
    Ok(nav)
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(SCENE_ROOT_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", SCENE_ROOT_ID))?;

    let width = window
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(constants::MOBILE_BREAKPOINT_PX);
    let viewport = input::viewport_class_for_width(width);

    let nav = mount_navigator(&root, viewport)?;
    let renderer = render::SceneRenderer::new(root.clone());
    let app = Rc::new(app::App::new(nav, renderer));
    app.render();

    events::wire_pointer_handlers(&document, app.renderer_root(), &app);
    events::wire_keydown(&document, &app);
    events::wire_breakpoint(&window, &app);
    events::wire_pagehide(&window, &app);
    events::wire_pageshow(&window, &app, move |viewport| {
        mount_navigator(&root, viewport)
    });
    Ok(())
}
