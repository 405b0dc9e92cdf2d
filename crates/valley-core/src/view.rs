use crate::constants::HOME_SCENE;
use crate::layout::{resolve_rect, resolve_tooltip_placement, Placement, ResolvedRect};
use crate::scene::{AssetRef, Scene, SceneName, ViewportClass};
use crate::state::InteractionState;

#[derive(Clone, Debug, PartialEq)]
pub struct MarkerView {
    pub id: String,
    pub label: String,
    pub color: String,
    pub rect: ResolvedRect,
    pub active: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipView {
    pub hotspot_id: String,
    pub label: String,
    pub description: String,
    pub color: String,
    pub placement: Placement,
}

/// Everything the renderer needs for one frame of the navigator.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneView {
    pub scene: SceneName,
    pub title: String,
    pub background: AssetRef,
    pub viewport_class: ViewportClass,
    pub markers: Vec<MarkerView>,
    pub tooltip: Option<TooltipView>,
    pub show_return_home: bool,
}

pub fn build_view(scene: &Scene, state: &InteractionState) -> SceneView {
    let viewport = state.viewport_class;
    let active = state.active_hotspot_id();
    let markers = scene
        .hotspots
        .iter()
        .map(|h| MarkerView {
            id: h.id.clone(),
            label: h.label.clone(),
            color: h.color.clone(),
            rect: resolve_rect(h, viewport),
            active: active == Some(h.id.as_str()),
        })
        .collect();
    let tooltip = active.and_then(|id| scene.hotspot(id)).map(|h| TooltipView {
        hotspot_id: h.id.clone(),
        label: h.label.clone(),
        description: h.description.clone(),
        color: h.color.clone(),
        placement: resolve_tooltip_placement(h, viewport),
    });
    SceneView {
        scene: scene.name,
        title: scene.title.clone(),
        background: scene.background.clone(),
        viewport_class: viewport,
        markers,
        tooltip,
        show_return_home: scene.name != HOME_SCENE,
    }
}
