//! Interaction state and the events that drive it.
//!
//! The state is plain data so it can be snapshotted to JSON for fixtures and
//! restored later. Only [`crate::InteractionMachine`] writes to it.

use crate::constants::HOME_SCENE;
use crate::scene::{SceneName, ViewportClass};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InteractionState {
    pub current_scene: SceneName,
    /// Desktop only. Set on pointer-enter, cleared on pointer-leave.
    pub hovered_hotspot_id: Option<String>,
    /// Mobile only. First tap of the two-tap confirm flow.
    pub selected_hotspot_id: Option<String>,
    /// Supplied by the breakpoint observer; transitions never change it.
    pub viewport_class: ViewportClass,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(HOME_SCENE, ViewportClass::default())
    }
}

impl InteractionState {
    pub fn new(current_scene: SceneName, viewport_class: ViewportClass) -> Self {
        Self {
            current_scene,
            hovered_hotspot_id: None,
            selected_hotspot_id: None,
            viewport_class,
        }
    }

    /// The hotspot whose tooltip should show under the current viewport.
    pub fn active_hotspot_id(&self) -> Option<&str> {
        match self.viewport_class {
            ViewportClass::Desktop => self.hovered_hotspot_id.as_deref(),
            ViewportClass::Mobile => self.selected_hotspot_id.as_deref(),
        }
    }

    pub(crate) fn clear_focus(&mut self) {
        self.hovered_hotspot_id = None;
        self.selected_hotspot_id = None;
    }
}

/// Input accepted by [`crate::NavigatorHandle::handle_event`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "hotspot", rename_all = "camelCase")]
pub enum Event {
    PointerEnter(String),
    PointerLeave,
    Click(String),
    Tap(String),
    /// A tap that landed on the background rather than a hotspot.
    TapOutside,
    ReturnHome,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundCue {
    Hover,
    Click,
}

impl SoundCue {
    pub fn as_str(self) -> &'static str {
        match self {
            SoundCue::Hover => "hover",
            SoundCue::Click => "click",
        }
    }
}
