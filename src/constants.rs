// Front-end tuning constants: DOM hooks, breakpoint, timings and interface sounds.

// Elements the page provides
pub const SCENE_ROOT_ID: &str = "valley-scene";
pub const MODAL_ROOT_ID: &str = "valley-modal";
pub const TOAST_ROOT_ID: &str = "valley-toasts";

// Data attributes written by the renderer
pub const HOTSPOT_ATTR: &str = "data-hotspot-id";
pub const ACTION_ATTR: &str = "data-action";
pub const INITIAL_SCENE_ATTR: &str = "data-initial-scene";
pub const RETURN_HOME_ACTION: &str = "return-home";
pub const CLOSE_MODAL_ACTION: &str = "close-modal";

// Viewports narrower than this use touch rules (CSS px)
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

// Mobile reveal: wait for layout, then park the hotspot a third down the screen
pub const REVEAL_DELAY_MS: i32 = 100;
pub const REVEAL_FRACTION: f64 = 1.0 / 3.0;

pub const TOAST_DURATION_MS: i32 = 4000;

// Interface sounds
pub const HOVER_SOUND_HZ: f32 = 880.0;
pub const HOVER_SOUND_GAIN: f32 = 0.05;
pub const HOVER_SOUND_SEC: f64 = 0.07;
pub const CLICK_SOUND_HZ: f32 = 520.0;
pub const CLICK_SOUND_GAIN: f32 = 0.12;
pub const CLICK_SOUND_SEC: f64 = 0.14;
pub const SOUND_ATTACK_SEC: f64 = 0.01;
pub const HOVER_SOUND_MIN_INTERVAL_MS: u128 = 80; // sweeping across markers stays quiet
