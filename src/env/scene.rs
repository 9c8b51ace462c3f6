// CLASSIFICATION: COMMUNITY
// Filename: scene.rs v0.1
// Author: Lukas Bower
// Date Modified: 2026-10-19

//! Scene files: alternate obstacle sets loaded from TOML or JSON.

use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use super::{Environment, EnvironmentBuilder, Sphere, DEFAULT_RADIUS};
use crate::{HarnessError, Result};

/// On-disk scene description.
///
/// ```toml
/// radius = 0.2
///
/// [[sphere]]
/// label = "post"
/// center = [0.55, 0.0, 0.25]
/// ```
#[derive(Debug, Deserialize)]
pub struct SceneFile {
    /// Radius applied to spheres that do not set their own.
    #[serde(default)]
    pub radius: Option<f64>,
    #[serde(default, rename = "sphere")]
    pub spheres: Vec<SceneSphere>,
}

#[derive(Debug, Deserialize)]
pub struct SceneSphere {
    #[serde(default)]
    pub label: Option<String>,
    pub center: [f64; 3],
    #[serde(default)]
    pub radius: Option<f64>,
}

impl SceneFile {
    pub fn from_toml(text: &str) -> std::result::Result<Self, String> {
        toml::from_str(text).map_err(|e| e.to_string())
    }

    pub fn from_json(text: &str) -> std::result::Result<Self, String> {
        serde_json::from_str(text).map_err(|e| e.to_string())
    }

    /// Validate and convert into an [`Environment`].
    pub fn into_environment(self) -> std::result::Result<Environment, String> {
        let default_radius = self.radius.unwrap_or(DEFAULT_RADIUS);
        let mut builder = EnvironmentBuilder::new();
        for (i, entry) in self.spheres.into_iter().enumerate() {
            let label = entry.label.unwrap_or_else(|| format!("sphere-{i}"));
            let radius = entry.radius.unwrap_or(default_radius);
            if !radius.is_finite() || radius < 0.0 {
                return Err(format!("sphere '{label}' has invalid radius {radius}"));
            }
            if entry.center.iter().any(|c| !c.is_finite()) {
                return Err(format!("sphere '{label}' has a non-finite center"));
            }
            builder.add_sphere(Sphere::new(label, entry.center, radius));
        }
        Ok(builder.build())
    }
}

impl Environment {
    /// Load a scene file. `.toml` files are parsed as TOML, anything else as JSON.
    pub fn from_scene_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| HarnessError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let scene_err = |detail: String| HarnessError::Scene {
            path: path.to_path_buf(),
            detail,
        };
        let scene = if path.extension().and_then(|e| e.to_str()) == Some("toml") {
            SceneFile::from_toml(&text)
        } else {
            SceneFile::from_json(&text)
        }
        .map_err(scene_err)?;
        let env = scene.into_environment().map_err(scene_err)?;
        debug!("loaded {} obstacles from {}", env.len(), path.display());
        Ok(env)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_scene_with_defaults() {
        let text = r#"
radius = 0.3

[[sphere]]
center = [1.0, 0.0, 0.0]

[[sphere]]
label = "small"
center = [0.0, 1.0, 0.0]
radius = 0.1
"#;
        let env = SceneFile::from_toml(text)
            .unwrap()
            .into_environment()
            .unwrap();
        assert_eq!(env.len(), 2);
        assert_eq!(env.obstacles()[0].label, "sphere-0");
        assert_eq!(env.obstacles()[0].radius, 0.3);
        assert_eq!(env.obstacles()[1].label, "small");
        assert_eq!(env.obstacles()[1].radius, 0.1);
    }

    #[test]
    fn json_scene_falls_back_to_catalog_radius() {
        let text = r#"{ "sphere": [ { "center": [0.0, 0.0, 1.0] } ] }"#;
        let env = SceneFile::from_json(text)
            .unwrap()
            .into_environment()
            .unwrap();
        assert_eq!(env.obstacles()[0].radius, DEFAULT_RADIUS);
    }

    #[test]
    fn negative_radius_rejected() {
        let text = r#"{ "sphere": [ { "label": "bad", "center": [0, 0, 0], "radius": -1 } ] }"#;
        let err = SceneFile::from_json(text)
            .unwrap()
            .into_environment()
            .unwrap_err();
        assert!(err.contains("bad"), "{err}");
    }
}
