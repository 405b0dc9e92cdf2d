use anyhow::Context;
use clap::Parser;
use std::path::{Path, PathBuf};
use valley_core::{
    mount, Collaborators, Event, InteractionState, ModalContent, ModalSink, NavigatorHandle,
    Registry, Router, SceneName, Scroller, SoundCue, SoundSink, Toast, ToastSink, ViewportClass,
};

/// Replay a script of navigator events and print the resulting state.
#[derive(Parser, Debug)]
#[command(name = "valley-replay")]
struct Args {
    /// JSON array of events, e.g. [{"kind":"tap","hotspot":"saloon"}]
    #[arg(long)]
    script: PathBuf,

    /// JSON scene registry to use instead of the builtin content
    #[arg(long)]
    registry: Option<PathBuf>,

    /// Scene to start in
    #[arg(long)]
    scene: Option<SceneName>,

    /// desktop or mobile
    #[arg(long, default_value_t = ViewportClass::Desktop)]
    viewport: ViewportClass,

    /// Resume from a state snapshot; overrides --scene and --viewport
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

struct LogRouter;

impl Router for LogRouter {
    fn go_to(&self, path: &str) -> anyhow::Result<()> {
        log::info!("[router] go to {}", path);
        Ok(())
    }
}

struct LogModal;

impl ModalSink for LogModal {
    fn open(&self, content: &ModalContent) -> anyhow::Result<()> {
        log::info!("[modal] {}: {}", content.title, content.body);
        Ok(())
    }
}

struct LogToasts;

impl ToastSink for LogToasts {
    fn show(&self, toast: &Toast) -> anyhow::Result<()> {
        log::info!("[toast] {}: {}", toast.title, toast.description);
        Ok(())
    }
}

struct LogSounds;

impl SoundSink for LogSounds {
    fn play(&self, cue: SoundCue) -> anyhow::Result<()> {
        log::debug!("[sound] {}", cue.as_str());
        Ok(())
    }
}

struct LogScroller;

impl Scroller for LogScroller {
    fn reveal(&self, hotspot_id: &str) -> anyhow::Result<()> {
        log::debug!("[scroll] reveal {}", hotspot_id);
        Ok(())
    }
}

fn collaborators() -> Collaborators {
    Collaborators::new(LogRouter, LogModal, LogToasts, LogSounds).with_scroller(LogScroller)
}

fn read(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}

fn parse_script(json: &str) -> anyhow::Result<Vec<Event>> {
    serde_json::from_str(json).context("parsing event script")
}

/// Feed every event in order. Effect failures are logged and the replay
/// carries on, as the page would.
fn replay(nav: &mut NavigatorHandle<'_>, events: Vec<Event>) -> InteractionState {
    for (i, event) in events.into_iter().enumerate() {
        if let Err(e) = nav.handle_event(event) {
            log::error!("event #{}: {:#}", i, e);
        }
    }
    nav.state()
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args = Args::parse();

    let loaded;
    let registry = match &args.registry {
        Some(path) => {
            loaded = Registry::from_json(&read(path)?)
                .with_context(|| format!("loading registry {}", path.display()))?;
            &loaded
        }
        None => Registry::builtin(),
    };
    log::info!("registry with {} scenes", registry.len());

    let mut nav = match &args.snapshot {
        Some(path) => {
            let snapshot: InteractionState =
                serde_json::from_str(&read(path)?).context("parsing snapshot")?;
            NavigatorHandle::restore(registry, snapshot, collaborators())?
        }
        None => mount(registry, args.scene, args.viewport, collaborators())?,
    };

    let events = parse_script(&read(&args.script)?)?;
    log::info!("replaying {} events", events.len());
    let state = replay(&mut nav, events);
    nav.dispose();

    println!("{}", serde_json::to_string_pretty(&state)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_drives_the_builtin_registry() {
        let events = parse_script(
            r#"[
                {"kind":"tap","hotspot":"river-dock"},
                {"kind":"tap","hotspot":"river-dock"},
                {"kind":"pointerEnter","hotspot":"lighthouse"}
            ]"#,
        )
        .unwrap();
        let mut nav = mount(
            Registry::builtin(),
            None,
            ViewportClass::Mobile,
            collaborators(),
        )
        .unwrap();
        let state = replay(&mut nav, events);
        assert_eq!(state.current_scene, SceneName::River);
        assert_eq!(state.selected_hotspot_id, None);
        // mobile ignores hover
        assert_eq!(state.hovered_hotspot_id, None);
    }

    #[test]
    fn bad_script_is_an_error() {
        assert!(parse_script(r#"[{"kind":"teleport"}]"#).is_err());
    }

    #[test]
    fn args_parse_scene_and_viewport() {
        let args = Args::try_parse_from([
            "valley-replay",
            "--script",
            "events.json",
            "--scene",
            "saloon",
            "--viewport",
            "mobile",
        ])
        .unwrap();
        assert_eq!(args.scene, Some(SceneName::Saloon));
        assert_eq!(args.viewport, ViewportClass::Mobile);
        assert!(args.snapshot.is_none());
    }
}
