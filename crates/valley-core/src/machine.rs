use crate::constants::HOME_SCENE;
use crate::scene::{Effect, HotspotDefinition, Scene, SceneName, ViewportClass};
use crate::state::{Event, InteractionState, SoundCue};
use smallvec::SmallVec;

/// Side effect requested by a transition. The navigator runs these in order.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    PlaySound(SoundCue),
    /// Bring the selected hotspot into view so its tooltip has room below.
    Reveal { hotspot_id: String },
    Fire(Effect),
}

pub type Commands = SmallVec<[Command; 4]>;

/// Owns [`InteractionState`] and applies the transition table.
///
/// Desktop commits on the first click because hovering already showed the
/// description. Touch has no hover, so mobile takes two taps: the first
/// selects and reveals, the second on the same hotspot commits.
#[derive(Clone, Debug, Default)]
pub struct InteractionMachine {
    state: InteractionState,
}

impl InteractionMachine {
    pub fn new(state: InteractionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &InteractionState {
        &self.state
    }

    pub fn set_viewport_class(&mut self, viewport: ViewportClass) {
        if self.state.viewport_class != viewport {
            log::debug!(
                "[machine] viewport {} -> {}",
                self.state.viewport_class,
                viewport
            );
            self.state.viewport_class = viewport;
        }
    }

    /// Move to `target`. The new scene has its own hotspots, so hover and
    /// selection are dropped.
    pub fn switch_scene(&mut self, target: SceneName) {
        log::info!("[machine] scene {} -> {}", self.state.current_scene, target);
        self.state.current_scene = target;
        self.state.clear_focus();
    }

    pub fn return_home(&mut self) {
        if self.state.current_scene != HOME_SCENE {
            self.switch_scene(HOME_SCENE);
        } else {
            self.state.clear_focus();
        }
    }

    pub fn clear_focus(&mut self) {
        self.state.clear_focus();
    }

    /// Apply one event against `scene`, which must be the current scene.
    /// Events naming a hotspot the scene does not have are ignored.
    pub fn step(&mut self, scene: &Scene, event: &Event) -> Commands {
        debug_assert_eq!(scene.name, self.state.current_scene);
        let mut out = Commands::new();
        let viewport = self.state.viewport_class;
        match event {
            Event::ReturnHome => self.return_home(),
            Event::TapOutside => self.state.selected_hotspot_id = None,
            Event::PointerEnter(id) => {
                if viewport != ViewportClass::Desktop {
                    return out;
                }
                if let Some(hotspot) = lookup(scene, id) {
                    self.state.hovered_hotspot_id = Some(hotspot.id.clone());
                    out.push(Command::PlaySound(SoundCue::Hover));
                }
            }
            Event::PointerLeave => {
                if viewport == ViewportClass::Desktop {
                    self.state.hovered_hotspot_id = None;
                }
            }
            Event::Click(id) | Event::Tap(id) => {
                let Some(hotspot) = lookup(scene, id) else {
                    return out;
                };
                match viewport {
                    ViewportClass::Desktop => commit(hotspot, &mut out),
                    ViewportClass::Mobile => {
                        if self.state.selected_hotspot_id.as_deref() == Some(id.as_str()) {
                            self.state.selected_hotspot_id = None;
                            commit(hotspot, &mut out);
                        } else {
                            self.state.selected_hotspot_id = Some(hotspot.id.clone());
                            out.push(Command::Reveal {
                                hotspot_id: hotspot.id.clone(),
                            });
                            out.push(Command::PlaySound(SoundCue::Hover));
                        }
                    }
                }
            }
        }
        out
    }
}

fn lookup<'s>(scene: &'s Scene, id: &str) -> Option<&'s HotspotDefinition> {
    let found = scene.hotspot(id);
    if found.is_none() {
        log::debug!("[machine] no hotspot `{}` in scene {}", id, scene.name);
    }
    found
}

// Sound first: it is best-effort and must not hold up the effect.
fn commit(hotspot: &HotspotDefinition, out: &mut Commands) {
    out.push(Command::PlaySound(SoundCue::Click));
    out.push(Command::Fire(hotspot.effect.clone()));
}
