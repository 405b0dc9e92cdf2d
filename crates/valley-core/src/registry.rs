use crate::constants::HOME_SCENE;
use crate::error::{ConfigError, RegistryError};
use crate::scene::{Effect, Scene, SceneName, ViewportClass};
use fnv::{FnvHashMap, FnvHashSet};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Read-only lookup from scene name to scene content.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    scenes: FnvHashMap<SceneName, Scene>,
}

// On-disk layout for JSON-authored content.
#[derive(Serialize, Deserialize)]
struct RegistryFile {
    scenes: Vec<Scene>,
}

impl Registry {
    /// The site's own scenes, built once and shared process-wide.
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let mut registry = Registry::default();
            for scene in crate::content::scenes() {
                registry.scenes.insert(scene.name, scene);
            }
            registry
        })
    }

    /// Build a registry from scenes, rejecting duplicates and anything
    /// [`Registry::validate`] would flag.
    pub fn from_scenes(scenes: Vec<Scene>) -> Result<Registry, RegistryError> {
        let mut registry = Registry::default();
        let mut errors = Vec::new();
        for scene in scenes {
            let name = scene.name;
            if registry.scenes.insert(name, scene).is_some() {
                errors.push(ConfigError::DuplicateScene(name));
            }
        }
        if let Err(mut found) = registry.validate() {
            errors.append(&mut found);
        }
        if errors.is_empty() {
            Ok(registry)
        } else {
            Err(RegistryError::Invalid(errors))
        }
    }

    pub fn from_json(json: &str) -> Result<Registry, RegistryError> {
        let file: RegistryFile = serde_json::from_str(json)?;
        Registry::from_scenes(file.scenes)
    }

    pub fn to_json(&self) -> Result<String, RegistryError> {
        let file = RegistryFile {
            scenes: self.scenes().cloned().collect(),
        };
        Ok(serde_json::to_string_pretty(&file)?)
    }

    pub fn scene(&self, name: SceneName) -> Result<&Scene, ConfigError> {
        self.scenes
            .get(&name)
            .ok_or(ConfigError::MissingScene(name))
    }

    pub fn contains(&self, name: SceneName) -> bool {
        self.scenes.contains_key(&name)
    }

    /// Scenes in declaration order of [`SceneName::ALL`].
    pub fn scenes(&self) -> impl Iterator<Item = &Scene> {
        SceneName::ALL
            .into_iter()
            .filter_map(move |name| self.scenes.get(&name))
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Check every scene and report all configuration errors at once.
    ///
    /// The home scene must be present, every `SwitchScene` target must be
    /// registered, hotspot ids must be non-empty and unique within their
    /// scene, and both marker rects must sit inside the background with a
    /// non-zero size.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if !self.contains(HOME_SCENE) {
            errors.push(ConfigError::MissingScene(HOME_SCENE));
        }
        for scene in self.scenes() {
            let mut seen = FnvHashSet::default();
            for hotspot in &scene.hotspots {
                if hotspot.id.is_empty() {
                    errors.push(ConfigError::EmptyHotspotId { scene: scene.name });
                } else if !seen.insert(hotspot.id.as_str()) {
                    errors.push(ConfigError::DuplicateHotspot {
                        scene: scene.name,
                        hotspot: hotspot.id.clone(),
                    });
                }
                for viewport in [ViewportClass::Desktop, ViewportClass::Mobile] {
                    let rect = hotspot.rect(viewport);
                    let in_bounds = |pct: f32| (0.0..=100.0).contains(&pct);
                    if !in_bounds(rect.top_pct) || !in_bounds(rect.left_pct) {
                        errors.push(ConfigError::PositionOutOfBounds {
                            scene: scene.name,
                            hotspot: hotspot.id.clone(),
                            viewport,
                        });
                    }
                    if rect.width_px == 0 || rect.height_px == 0 {
                        errors.push(ConfigError::ZeroSizedMarker {
                            scene: scene.name,
                            hotspot: hotspot.id.clone(),
                            viewport,
                        });
                    }
                }
                if let Effect::SwitchScene { target } = &hotspot.effect {
                    if !self.contains(*target) {
                        errors.push(ConfigError::UnknownTarget {
                            scene: scene.name,
                            hotspot: hotspot.id.clone(),
                            target: *target,
                        });
                    }
                }
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
