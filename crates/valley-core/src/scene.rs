//! Scene content types.
//!
//! A scene is a background plus an ordered list of hotspots. Every hotspot is
//! bound to exactly one [`Effect`]. These types carry no behavior beyond
//! lookups; interaction lives in [`crate::machine`] and placement in
//! [`crate::layout`].

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SceneName {
    Valley,
    Stackhouse,
    Saloon,
    Devzen,
    River,
    Neonpod,
}

impl SceneName {
    pub const ALL: [SceneName; 6] = [
        SceneName::Valley,
        SceneName::Stackhouse,
        SceneName::Saloon,
        SceneName::Devzen,
        SceneName::River,
        SceneName::Neonpod,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SceneName::Valley => "valley",
            SceneName::Stackhouse => "stackhouse",
            SceneName::Saloon => "saloon",
            SceneName::Devzen => "devzen",
            SceneName::River => "river",
            SceneName::Neonpod => "neonpod",
        }
    }
}

impl fmt::Display for SceneName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SceneName {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SceneName::ALL
            .into_iter()
            .find(|name| name.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownScene(s.to_string()))
    }
}

/// Coarse screen bucket, decided outside the navigator by a breakpoint
/// observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewportClass {
    Mobile,
    #[default]
    Desktop,
}

impl fmt::Display for ViewportClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewportClass::Mobile => f.write_str("mobile"),
            ViewportClass::Desktop => f.write_str("desktop"),
        }
    }
}

impl FromStr for ViewportClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mobile" => Ok(ViewportClass::Mobile),
            "desktop" => Ok(ViewportClass::Desktop),
            other => Err(format!("unknown viewport class `{other}`")),
        }
    }
}

/// Marker placement on the background. Position is in percent so it follows
/// a responsive background; the marker size is in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotRect {
    pub top_pct: f32,
    pub left_pct: f32,
    pub width_px: u32,
    pub height_px: u32,
}

impl HotspotRect {
    pub const fn new(top_pct: f32, left_pct: f32, width_px: u32, height_px: u32) -> Self {
        Self {
            top_pct,
            left_pct,
            width_px,
            height_px,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalContent {
    pub title: String,
    pub body: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Effect {
    Navigate {
        path: String,
    },
    SwitchScene {
        target: SceneName,
    },
    OpenModal {
        content: ModalContent,
    },
    DispatchAction {
        name: String,
        description: String,
    },
    /// Any effect type this build does not know. Handled as a generic
    /// placeholder action.
    #[serde(other)]
    Unsupported,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotspotDefinition {
    pub id: String,
    pub label: String,
    pub description: String,
    pub desktop_rect: HotspotRect,
    pub mobile_rect: HotspotRect,
    pub color: String,
    pub effect: Effect,
}

impl HotspotDefinition {
    #[inline]
    pub fn rect(&self, viewport: ViewportClass) -> &HotspotRect {
        match viewport {
            ViewportClass::Desktop => &self.desktop_rect,
            ViewportClass::Mobile => &self.mobile_rect,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub name: SceneName,
    pub title: String,
    pub background: AssetRef,
    pub hotspots: Vec<HotspotDefinition>,
}

impl Scene {
    pub fn hotspot(&self, id: &str) -> Option<&HotspotDefinition> {
        self.hotspots.iter().find(|h| h.id == id)
    }
}
