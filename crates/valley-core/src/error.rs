use crate::scene::{SceneName, ViewportClass};

/// Problems in scene content. These are found by [`crate::Registry::validate`]
/// at load or test time and are never produced by a user interaction.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown scene `{0}`")]
    UnknownScene(String),
    #[error("scene `{0}` is not registered")]
    MissingScene(SceneName),
    #[error("scene `{0}` is registered more than once")]
    DuplicateScene(SceneName),
    #[error("hotspot `{hotspot}` in `{scene}` switches to unregistered scene `{target}`")]
    UnknownTarget {
        scene: SceneName,
        hotspot: String,
        target: SceneName,
    },
    #[error("scene `{scene}` defines hotspot `{hotspot}` more than once")]
    DuplicateHotspot { scene: SceneName, hotspot: String },
    #[error("scene `{scene}` has a hotspot with an empty id")]
    EmptyHotspotId { scene: SceneName },
    #[error("hotspot `{hotspot}` in `{scene}` lies outside the scene on {viewport}")]
    PositionOutOfBounds {
        scene: SceneName,
        hotspot: String,
        viewport: ViewportClass,
    },
    #[error("hotspot `{hotspot}` in `{scene}` has a zero-sized marker on {viewport}")]
    ZeroSizedMarker {
        scene: SceneName,
        hotspot: String,
        viewport: ViewportClass,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("malformed scene registry: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid scene registry: {}", summarize(.0))]
    Invalid(Vec<ConfigError>),
}

fn summarize(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
