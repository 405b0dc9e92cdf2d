use crate::scene::SceneName;

// Navigation
pub const HOME_SCENE: SceneName = SceneName::Valley;

// Desktop tooltip edge thresholds (percent of the scene background)
pub const DESKTOP_RIGHT_EDGE_PCT: f32 = 70.0; // beyond this the tooltip flips to the left
pub const DESKTOP_LEFT_EDGE_PCT: f32 = 25.0; // below this the tooltip flips to the right
pub const DESKTOP_TOP_EDGE_PCT: f32 = 25.0; // below this the tooltip renders under the marker
pub const DESKTOP_BOTTOM_EDGE_PCT: f32 = 75.0; // beyond this the tooltip is lifted further

// Mobile only distinguishes the right edge
pub const MOBILE_RIGHT_EDGE_PCT: f32 = 60.0;

// Tooltip gap from the marker edge (px)
pub const TOOLTIP_OFFSET_PX: u32 = 12;
pub const TOOLTIP_FAR_OFFSET_PX: u32 = 48;
pub const TOOLTIP_BELOW_OFFSET_PX: u32 = 12;
pub const MOBILE_TOOLTIP_OFFSET_PX: u32 = 16;

// Placeholder feedback for actions that are not built yet
pub const COMING_SOON_SUFFIX: &str = " — Coming soon!";
pub const GENERIC_ACTION_NAME: &str = "Under construction";
pub const GENERIC_ACTION_DESCRIPTION: &str = "This spot is still being built";
