// Recording collaborators shared by the navigator tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use valley_core::{
    Collaborators, ModalContent, ModalSink, Router, Scroller, SoundCue, SoundSink, Toast,
    ToastSink,
};

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    GoTo(String),
    Modal(ModalContent),
    Toast(Toast),
    Sound(SoundCue),
    Reveal(String),
}

#[derive(Clone, Default)]
pub struct Recorder {
    pub calls: Rc<RefCell<Vec<Call>>>,
    pub fail_sounds: bool,
    pub fail_router: bool,
}

impl Recorder {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn effects(&self) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| matches!(c, Call::GoTo(_) | Call::Modal(_) | Call::Toast(_)))
            .collect()
    }

    pub fn sounds(&self) -> Vec<SoundCue> {
        self.calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Sound(cue) => Some(cue),
                _ => None,
            })
            .collect()
    }

    pub fn collaborators(&self) -> Collaborators {
        Collaborators::new(self.clone(), self.clone(), self.clone(), self.clone())
            .with_scroller(self.clone())
    }

    fn push(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

impl Router for Recorder {
    fn go_to(&self, path: &str) -> anyhow::Result<()> {
        if self.fail_router {
            anyhow::bail!("no route for {path}");
        }
        self.push(Call::GoTo(path.to_string()));
        Ok(())
    }
}

impl ModalSink for Recorder {
    fn open(&self, content: &ModalContent) -> anyhow::Result<()> {
        self.push(Call::Modal(content.clone()));
        Ok(())
    }
}

impl ToastSink for Recorder {
    fn show(&self, toast: &Toast) -> anyhow::Result<()> {
        self.push(Call::Toast(toast.clone()));
        Ok(())
    }
}

impl SoundSink for Recorder {
    fn play(&self, cue: SoundCue) -> anyhow::Result<()> {
        if self.fail_sounds {
            anyhow::bail!("{} not loaded", cue.as_str());
        }
        self.push(Call::Sound(cue));
        Ok(())
    }
}

impl Scroller for Recorder {
    fn reveal(&self, hotspot_id: &str) -> anyhow::Result<()> {
        self.push(Call::Reveal(hotspot_id.to_string()));
        Ok(())
    }
}
