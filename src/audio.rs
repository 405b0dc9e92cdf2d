use crate::constants::{
    CLICK_SOUND_GAIN, CLICK_SOUND_HZ, CLICK_SOUND_SEC, HOVER_SOUND_GAIN, HOVER_SOUND_HZ,
    HOVER_SOUND_MIN_INTERVAL_MS, HOVER_SOUND_SEC, SOUND_ATTACK_SEC,
};
use instant::Instant;
use std::cell::{Cell, RefCell};
use valley_core::{SoundCue, SoundSink};
use web_sys as web;

/// Interface blips synthesized with WebAudio.
///
/// The context is created on first use, which browsers only allow after a
/// user gesture; earlier cues fail and are dropped by the dispatcher.
#[derive(Default)]
pub struct WebAudioSounds {
    ctx: RefCell<Option<web::AudioContext>>,
    last_hover: Cell<Option<Instant>>,
}

impl WebAudioSounds {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&self) -> anyhow::Result<web::AudioContext> {
        let mut slot = self.ctx.borrow_mut();
        if let Some(ctx) = slot.as_ref() {
            if ctx.state() == web::AudioContextState::Suspended {
                _ = ctx.resume();
            }
            return Ok(ctx.clone());
        }
        let ctx = web::AudioContext::new().map_err(|e| anyhow::anyhow!("{:?}", e))?;
        _ = ctx.resume();
        log::debug!("[audio] context created");
        *slot = Some(ctx.clone());
        Ok(ctx)
    }

    fn hover_allowed(&self) -> bool {
        let now = Instant::now();
        match self.last_hover.get() {
            Some(prev) if now.duration_since(prev).as_millis() < HOVER_SOUND_MIN_INTERVAL_MS => {
                false
            }
            _ => {
                self.last_hover.set(Some(now));
                true
            }
        }
    }
}

impl SoundSink for WebAudioSounds {
    fn play(&self, cue: SoundCue) -> anyhow::Result<()> {
        let (hz, gain, sec, waveform) = match cue {
            SoundCue::Hover => {
                if !self.hover_allowed() {
                    return Ok(());
                }
                (
                    HOVER_SOUND_HZ,
                    HOVER_SOUND_GAIN,
                    HOVER_SOUND_SEC,
                    web::OscillatorType::Sine,
                )
            }
            SoundCue::Click => (
                CLICK_SOUND_HZ,
                CLICK_SOUND_GAIN,
                CLICK_SOUND_SEC,
                web::OscillatorType::Triangle,
            ),
        };
        let ctx = self.context()?;
        trigger_blip(&ctx, waveform, hz, gain, sec)
    }
}

/// Short enveloped oscillator straight into the destination.
pub fn trigger_blip(
    audio_ctx: &web::AudioContext,
    waveform: web::OscillatorType,
    frequency_hz: f32,
    velocity: f32,
    duration_sec: f64,
) -> anyhow::Result<()> {
    let err = |e: wasm_bindgen::JsValue| anyhow::anyhow!("{:?}", e);
    let src = web::OscillatorNode::new(audio_ctx).map_err(err)?;
    src.set_type(waveform);
    src.frequency().set_value(frequency_hz);

    let g = web::GainNode::new(audio_ctx).map_err(err)?;
    g.gain().set_value(0.0);
    let t0 = audio_ctx.current_time() + 0.005;
    _ = g
        .gain()
        .linear_ramp_to_value_at_time(velocity, t0 + SOUND_ATTACK_SEC);
    _ = g
        .gain()
        .linear_ramp_to_value_at_time(0.0, t0 + duration_sec);
    src.connect_with_audio_node(&g).map_err(err)?;
    g.connect_with_audio_node(&audio_ctx.destination())
        .map_err(err)?;
    src.start_with_when(t0).map_err(err)?;
    _ = src.stop_with_when(t0 + duration_sec + 0.05);
    Ok(())
}
