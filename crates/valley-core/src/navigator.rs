use crate::constants::HOME_SCENE;
use crate::dispatch::{self, Collaborators};
use crate::error::ConfigError;
use crate::machine::{Command, InteractionMachine};
use crate::registry::Registry;
use crate::scene::{Scene, SceneName, ViewportClass};
use crate::state::{Event, InteractionState};
use crate::view::{build_view, SceneView};

/// A mounted navigator. Created by [`mount`], torn down by
/// [`NavigatorHandle::dispose`]; remounting starts from a fresh state.
pub struct NavigatorHandle<'r> {
    registry: &'r Registry,
    machine: InteractionMachine,
    collaborators: Collaborators,
    disposed: bool,
}

/// Mount a navigator on `registry`, starting at `initial_scene` or the
/// valley.
pub fn mount(
    registry: &Registry,
    initial_scene: Option<SceneName>,
    viewport: ViewportClass,
    collaborators: Collaborators,
) -> Result<NavigatorHandle<'_>, ConfigError> {
    let scene = initial_scene.unwrap_or(HOME_SCENE);
    NavigatorHandle::restore(registry, InteractionState::new(scene, viewport), collaborators)
}

impl<'r> NavigatorHandle<'r> {
    /// Rebuild a navigator from a state snapshot.
    pub fn restore(
        registry: &'r Registry,
        snapshot: InteractionState,
        collaborators: Collaborators,
    ) -> Result<Self, ConfigError> {
        registry.scene(snapshot.current_scene)?;
        log::debug!(
            "[navigator] mounted at {} ({})",
            snapshot.current_scene,
            snapshot.viewport_class
        );
        Ok(Self {
            registry,
            machine: InteractionMachine::new(snapshot),
            collaborators,
            disposed: false,
        })
    }

    /// Read-only snapshot of the interaction state.
    pub fn state(&self) -> InteractionState {
        self.machine.state().clone()
    }

    pub fn current_scene(&self) -> Result<&'r Scene, ConfigError> {
        self.registry.scene(self.machine.state().current_scene)
    }

    pub fn view(&self) -> Result<SceneView, ConfigError> {
        Ok(build_view(self.current_scene()?, self.machine.state()))
    }

    pub fn set_viewport_class(&mut self, viewport: ViewportClass) {
        self.machine.set_viewport_class(viewport);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// The only way interaction changes the state. Runs the machine, then
    /// the commands it produced in order.
    pub fn handle_event(&mut self, event: Event) -> anyhow::Result<()> {
        if self.disposed {
            log::warn!("[navigator] {:?} after dispose, ignoring", event);
            return Ok(());
        }
        let scene = self.current_scene()?;
        log::debug!("[navigator] {} <- {:?}", scene.name, event);
        let commands = self.machine.step(scene, &event);
        for command in commands {
            match command {
                Command::PlaySound(cue) => {
                    dispatch::play_sound(self.collaborators.sounds.as_ref(), cue)
                }
                Command::Reveal { hotspot_id } => {
                    dispatch::reveal(self.collaborators.scroller.as_ref(), &hotspot_id)
                }
                Command::Fire(effect) => {
                    dispatch::dispatch(&effect, &mut self.machine, &self.collaborators)?
                }
            }
        }
        Ok(())
    }

    /// Drop hover and selection and stop accepting events.
    pub fn dispose(&mut self) {
        self.machine.clear_focus();
        self.disposed = true;
        log::debug!("[navigator] disposed");
    }
}
