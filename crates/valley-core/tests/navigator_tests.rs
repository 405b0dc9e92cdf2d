// Navigator handle end to end with recording collaborators.

mod common;

use common::{Call, Recorder};
use valley_core::*;

fn mount_at(
    recorder: &Recorder,
    scene: Option<SceneName>,
    viewport: ViewportClass,
) -> NavigatorHandle<'static> {
    mount(Registry::builtin(), scene, viewport, recorder.collaborators()).unwrap()
}

fn click(id: &str) -> Event {
    Event::Click(id.to_string())
}

fn tap(id: &str) -> Event {
    Event::Tap(id.to_string())
}

#[test]
fn mount_starts_in_the_valley() {
    let rec = Recorder::default();
    let nav = mount_at(&rec, None, ViewportClass::Desktop);
    assert_eq!(
        nav.state(),
        InteractionState {
            current_scene: SceneName::Valley,
            hovered_hotspot_id: None,
            selected_hotspot_id: None,
            viewport_class: ViewportClass::Desktop,
        }
    );
    assert!(rec.calls().is_empty());
}

#[test]
fn mount_rejects_unregistered_initial_scene() {
    let registry = Registry::from_json(
        r#"{ "scenes": [{ "name": "valley", "title": "V", "background": "/v.webp", "hotspots": [] }] }"#,
    )
    .unwrap();
    let rec = Recorder::default();
    let result = mount(
        &registry,
        Some(SceneName::Saloon),
        ViewportClass::Desktop,
        rec.collaborators(),
    );
    assert_eq!(
        result.err(),
        Some(ConfigError::MissingScene(SceneName::Saloon))
    );
}

#[test]
fn desktop_click_navigates_once_without_changing_scene() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, Some(SceneName::Stackhouse), ViewportClass::Desktop);
    nav.handle_event(click("services-board")).unwrap();

    assert_eq!(rec.effects(), vec![Call::GoTo("/services".to_string())]);
    assert_eq!(nav.state().current_scene, SceneName::Stackhouse);
    assert_eq!(rec.sounds(), vec![SoundCue::Click]);
}

#[test]
fn desktop_hover_plays_sound_and_shows_tooltip() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Desktop);
    nav.handle_event(Event::PointerEnter("saloon".to_string()))
        .unwrap();

    assert_eq!(rec.sounds(), vec![SoundCue::Hover]);
    let view = nav.view().unwrap();
    let tooltip = view.tooltip.expect("tooltip for hovered hotspot");
    assert_eq!(tooltip.hotspot_id, "saloon");
    assert_eq!(tooltip.placement.horizontal, Horizontal::LeftOf);
    assert_eq!(view.markers.iter().filter(|m| m.active).count(), 1);

    nav.handle_event(Event::PointerLeave).unwrap();
    assert!(nav.view().unwrap().tooltip.is_none());
}

#[test]
fn mobile_two_tap_confirm() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Mobile);

    nav.handle_event(tap("stackhouse-tower")).unwrap();
    assert_eq!(
        nav.state().selected_hotspot_id.as_deref(),
        Some("stackhouse-tower")
    );
    assert_eq!(nav.state().current_scene, SceneName::Valley);
    assert_eq!(
        rec.calls(),
        vec![
            Call::Reveal("stackhouse-tower".to_string()),
            Call::Sound(SoundCue::Hover)
        ]
    );

    nav.handle_event(tap("stackhouse-tower")).unwrap();
    assert_eq!(nav.state().selected_hotspot_id, None);
    assert_eq!(nav.state().current_scene, SceneName::Stackhouse);
    assert_eq!(rec.sounds(), vec![SoundCue::Hover, SoundCue::Click]);
}

#[test]
fn mobile_tap_elsewhere_switches_pending_selection() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, Some(SceneName::Saloon), ViewportClass::Mobile);
    nav.handle_event(tap("contact-bar")).unwrap();
    nav.handle_event(tap("invoice-desk")).unwrap();

    assert_eq!(nav.state().selected_hotspot_id.as_deref(), Some("invoice-desk"));
    assert!(rec.effects().is_empty());

    // A's confirm is gone: tapping A again only selects it
    nav.handle_event(tap("contact-bar")).unwrap();
    assert!(rec.effects().is_empty());
    nav.handle_event(tap("contact-bar")).unwrap();
    assert_eq!(rec.effects(), vec![Call::GoTo("/contact".to_string())]);
}

#[test]
fn mobile_tooltip_tracks_selection() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Mobile);
    nav.handle_event(tap("river-dock")).unwrap();
    let tooltip = nav.view().unwrap().tooltip.unwrap();
    assert_eq!(tooltip.hotspot_id, "river-dock");
    assert_eq!(tooltip.placement.vertical, Vertical::Below);

    nav.handle_event(Event::TapOutside).unwrap();
    assert!(nav.view().unwrap().tooltip.is_none());
}

#[test]
fn open_modal_effect_reaches_modal_sink() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, Some(SceneName::Devzen), ViewportClass::Desktop);
    nav.handle_event(click("meditation-stone")).unwrap();
    match rec.effects().as_slice() {
        [Call::Modal(content)] => assert_eq!(content.title, "Principles"),
        other => panic!("unexpected calls {other:?}"),
    }
}

#[test]
fn dispatch_action_shows_coming_soon_toast() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, Some(SceneName::Saloon), ViewportClass::Desktop);
    nav.handle_event(click("jukebox")).unwrap();
    assert_eq!(
        rec.effects(),
        vec![Call::Toast(Toast {
            title: "Jukebox".to_string(),
            description: "Pick the soundtrack for your visit — Coming soon!".to_string(),
        })]
    );
}

#[test]
fn unsupported_effect_degrades_to_generic_toast() {
    let registry = Registry::from_json(
        r##"{ "scenes": [{
            "name": "valley", "title": "V", "background": "/v.webp",
            "hotspots": [{
                "id": "portal", "label": "Portal", "description": "?",
                "desktopRect": { "topPct": 50, "leftPct": 50, "widthPx": 10, "heightPx": 10 },
                "mobileRect": { "topPct": 50, "leftPct": 50, "widthPx": 10, "heightPx": 10 },
                "color": "#000",
                "effect": { "type": "teleport" }
            }]
        }] }"##,
    )
    .unwrap();
    let rec = Recorder::default();
    let mut nav = mount(&registry, None, ViewportClass::Desktop, rec.collaborators()).unwrap();
    nav.handle_event(click("portal")).unwrap();
    assert_eq!(
        rec.effects(),
        vec![Call::Toast(coming_soon(
            GENERIC_ACTION_NAME,
            GENERIC_ACTION_DESCRIPTION
        ))]
    );
}

#[test]
fn sound_failures_never_block_effects() {
    let rec = Recorder {
        fail_sounds: true,
        ..Recorder::default()
    };
    let mut nav = mount_at(&rec, Some(SceneName::Stackhouse), ViewportClass::Desktop);
    nav.handle_event(Event::PointerEnter("services-board".to_string()))
        .unwrap();
    nav.handle_event(click("services-board")).unwrap();
    assert_eq!(rec.effects(), vec![Call::GoTo("/services".to_string())]);
    assert!(rec.sounds().is_empty());
}

#[test]
fn failing_hover_sound_still_selects_and_reveals() {
    let rec = Recorder {
        fail_sounds: true,
        ..Recorder::default()
    };
    let mut nav = mount_at(&rec, None, ViewportClass::Mobile);
    nav.handle_event(tap("river-dock")).unwrap();

    assert_eq!(nav.state().selected_hotspot_id.as_deref(), Some("river-dock"));
    assert_eq!(rec.calls(), vec![Call::Reveal("river-dock".to_string())]);

    // the confirm tap still commits
    nav.handle_event(tap("river-dock")).unwrap();
    assert_eq!(nav.state().current_scene, SceneName::River);
}

#[test]
fn router_failures_propagate() {
    let rec = Recorder {
        fail_router: true,
        ..Recorder::default()
    };
    let mut nav = mount_at(&rec, Some(SceneName::Stackhouse), ViewportClass::Desktop);
    let err = nav.handle_event(click("services-board")).unwrap_err();
    assert!(format!("{err:#}").contains("/services"));
    assert_eq!(nav.state().current_scene, SceneName::Stackhouse);
}

#[test]
fn switch_scene_clears_focus_and_skips_router() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Desktop);
    nav.handle_event(Event::PointerEnter("neonpod".to_string()))
        .unwrap();
    nav.handle_event(click("neonpod")).unwrap();

    let state = nav.state();
    assert_eq!(state.current_scene, SceneName::Neonpod);
    assert_eq!(state.hovered_hotspot_id, None);
    assert_eq!(state.selected_hotspot_id, None);
    assert!(rec.effects().is_empty());

    let view = nav.view().unwrap();
    assert_eq!(view.scene, SceneName::Neonpod);
    assert!(view.show_return_home);
    assert!(view.tooltip.is_none());
}

#[test]
fn return_home_from_anywhere() {
    for scene in SceneName::ALL {
        let rec = Recorder::default();
        let mut nav = mount_at(&rec, Some(scene), ViewportClass::Mobile);
        nav.handle_event(Event::ReturnHome).unwrap();
        assert_eq!(nav.state().current_scene, SceneName::Valley);
        let once = nav.state();
        nav.handle_event(Event::ReturnHome).unwrap();
        assert_eq!(nav.state(), once);
        assert!(!nav.view().unwrap().show_return_home);
    }
}

#[test]
fn dispose_clears_focus_and_ignores_events() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Mobile);
    nav.handle_event(tap("saloon")).unwrap();
    nav.dispose();
    assert!(nav.is_disposed());
    assert_eq!(nav.state().selected_hotspot_id, None);

    let before = rec.calls().len();
    nav.handle_event(tap("saloon")).unwrap();
    nav.handle_event(tap("saloon")).unwrap();
    assert_eq!(rec.calls().len(), before);
    assert_eq!(nav.state().current_scene, SceneName::Valley);
}

#[test]
fn remount_starts_fresh() {
    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Desktop);
    nav.handle_event(click("river-dock")).unwrap();
    nav.dispose();

    let nav = mount_at(&rec, None, ViewportClass::Desktop);
    assert_eq!(nav.state(), InteractionState::default());
}

#[test]
fn snapshot_replay_is_deterministic() {
    let script = vec![
        tap("stackhouse-tower"),
        tap("stackhouse-tower"),
        tap("blueprint-table"),
        Event::TapOutside,
        tap("valley-trail"),
        tap("valley-trail"),
        tap("river-dock"),
    ];

    let rec = Recorder::default();
    let mut nav = mount_at(&rec, None, ViewportClass::Mobile);
    nav.handle_event(tap("saloon")).unwrap();
    let json = serde_json::to_string(&nav.state()).unwrap();

    for event in &script {
        nav.handle_event(event.clone()).unwrap();
    }
    let expected = nav.state();

    let snapshot: InteractionState = serde_json::from_str(&json).unwrap();
    let rec2 = Recorder::default();
    let mut replay =
        NavigatorHandle::restore(Registry::builtin(), snapshot, rec2.collaborators()).unwrap();
    for event in &script {
        replay.handle_event(event.clone()).unwrap();
    }
    assert_eq!(replay.state(), expected);
    assert_eq!(
        expected,
        InteractionState {
            current_scene: SceneName::Valley,
            hovered_hotspot_id: None,
            selected_hotspot_id: Some("river-dock".to_string()),
            viewport_class: ViewportClass::Mobile,
        }
    );
}

#[test]
fn state_and_events_use_stable_json() {
    let state = InteractionState::new(SceneName::Devzen, ViewportClass::Mobile);
    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "currentScene": "devzen",
            "hoveredHotspotId": null,
            "selectedHotspotId": null,
            "viewportClass": "mobile"
        })
    );

    let events: Vec<Event> = serde_json::from_str(
        r#"[{"kind":"tap","hotspot":"saloon"},{"kind":"pointerLeave"},{"kind":"returnHome"}]"#,
    )
    .unwrap();
    assert_eq!(
        events,
        vec![tap("saloon"), Event::PointerLeave, Event::ReturnHome]
    );
}
