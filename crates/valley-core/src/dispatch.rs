//! Collaborators and the effect dispatcher.
//!
//! The navigator never reaches for globals. The embedding application hands
//! in a [`Collaborators`] bundle and every effect goes through [`dispatch`].

use crate::constants::{COMING_SOON_SUFFIX, GENERIC_ACTION_DESCRIPTION, GENERIC_ACTION_NAME};
use crate::machine::InteractionMachine;
use crate::scene::{Effect, ModalContent};
use crate::state::SoundCue;
use anyhow::Context;

pub trait Router {
    fn go_to(&self, path: &str) -> anyhow::Result<()>;
}

pub trait ModalSink {
    fn open(&self, content: &ModalContent) -> anyhow::Result<()>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
}

pub trait ToastSink {
    fn show(&self, toast: &Toast) -> anyhow::Result<()>;
}

/// Errors are logged and dropped; a missing sound never blocks an effect.
pub trait SoundSink {
    fn play(&self, cue: SoundCue) -> anyhow::Result<()>;
}

/// Scrolls a selected hotspot into view on touch screens.
pub trait Scroller {
    fn reveal(&self, hotspot_id: &str) -> anyhow::Result<()>;
}

pub struct NoScroll;

impl Scroller for NoScroll {
    fn reveal(&self, _hotspot_id: &str) -> anyhow::Result<()> {
        Ok(())
    }
}

pub struct Collaborators {
    pub router: Box<dyn Router>,
    pub modal: Box<dyn ModalSink>,
    pub toast: Box<dyn ToastSink>,
    pub sounds: Box<dyn SoundSink>,
    pub scroller: Box<dyn Scroller>,
}

impl Collaborators {
    pub fn new(
        router: impl Router + 'static,
        modal: impl ModalSink + 'static,
        toast: impl ToastSink + 'static,
        sounds: impl SoundSink + 'static,
    ) -> Self {
        Self {
            router: Box::new(router),
            modal: Box::new(modal),
            toast: Box::new(toast),
            sounds: Box::new(sounds),
            scroller: Box::new(NoScroll),
        }
    }

    pub fn with_scroller(mut self, scroller: impl Scroller + 'static) -> Self {
        self.scroller = Box::new(scroller);
        self
    }
}

pub fn coming_soon(name: &str, description: &str) -> Toast {
    Toast {
        title: name.to_string(),
        description: format!("{description}{COMING_SOON_SUFFIX}"),
    }
}

/// Run one effect. Scene switches stay inside the machine; everything else
/// is handed to a collaborator. Router, modal and toast errors are returned
/// to the caller untouched apart from context.
pub fn dispatch(
    effect: &Effect,
    machine: &mut InteractionMachine,
    collaborators: &Collaborators,
) -> anyhow::Result<()> {
    match effect {
        Effect::Navigate { path } => {
            log::info!("[dispatch] navigate {}", path);
            collaborators
                .router
                .go_to(path)
                .with_context(|| format!("router failed to open {path}"))
        }
        Effect::SwitchScene { target } => {
            machine.switch_scene(*target);
            Ok(())
        }
        Effect::OpenModal { content } => collaborators
            .modal
            .open(content)
            .with_context(|| format!("modal failed to open `{}`", content.title)),
        Effect::DispatchAction { name, description } => {
            show_toast(collaborators, coming_soon(name, description))
        }
        Effect::Unsupported => {
            log::debug!("[dispatch] unsupported effect, showing placeholder");
            show_toast(
                collaborators,
                coming_soon(GENERIC_ACTION_NAME, GENERIC_ACTION_DESCRIPTION),
            )
        }
    }
}

fn show_toast(collaborators: &Collaborators, toast: Toast) -> anyhow::Result<()> {
    collaborators
        .toast
        .show(&toast)
        .with_context(|| format!("toast failed for `{}`", toast.title))
}

pub fn play_sound(sounds: &dyn SoundSink, cue: SoundCue) {
    if let Err(e) = sounds.play(cue) {
        log::debug!("[sound] {} skipped: {:#}", cue.as_str(), e);
    }
}

pub fn reveal(scroller: &dyn Scroller, hotspot_id: &str) {
    if let Err(e) = scroller.reveal(hotspot_id) {
        log::debug!("[scroll] reveal {} skipped: {:#}", hotspot_id, e);
    }
}
