// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Engine configuration.
//!
//! Settings are passed in explicitly instead of being looked up from the
//! environment. A configuration file may be YAML or JSON; missing fields
//! take their defaults.

use crate::models::geometry::{Point, Polygon};
use crate::util::canvas::CanvasSize;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Canvas that stored coordinates are expressed in.
    pub reference_canvas: CanvasSize,
    /// Directory relative hyperlink file paths are resolved against.
    pub link_directory: PathBuf,
    /// Shape given to links created without explicit vertices.
    pub default_box: Vec<Point>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            reference_canvas: CanvasSize::REFERENCE,
            link_directory: PathBuf::from("."),
            default_box: Polygon::default_box().vertices().to_vec(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a `.yaml`/`.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let extension = path.extension().and_then(|s| s.to_str());
        let config = match extension {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&text)?,
            Some("json") => serde_json::from_str(&text)?,
            _ => bail!("Unsupported config extension: {:?}", extension),
        };
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn default_polygon(&self) -> Polygon {
        Polygon::new(self.default_box.clone())
    }

    /// Resolve a hyperlink file path against `link_directory`.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.link_directory.join(path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.reference_canvas, CanvasSize::new(352.0, 288.0));
        assert_eq!(config.default_polygon(), Polygon::default_box());
        assert_eq!(config.resolve(Path::new("links.json")), PathBuf::from("./links.json"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let path = std::env::temp_dir().join(format!("hyperlinker-config-{}.yaml", std::process::id()));
        std::fs::write(
            &path,
            "reference_canvas:\n  width: 704.0\n  height: 576.0\nlink_directory: /srv/links\n",
        )
        .unwrap();
        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.reference_canvas, CanvasSize::new(704.0, 576.0));
        assert_eq!(config.link_directory, PathBuf::from("/srv/links"));
        assert_eq!(config.default_box.len(), 4);
        assert_eq!(config.resolve(Path::new("a.json")), PathBuf::from("/srv/links/a.json"));
    }

    #[test]
    fn test_json_config() {
        let path = std::env::temp_dir().join(format!("hyperlinker-config-{}.json", std::process::id()));
        std::fs::write(&path, r#"{"default_box": [{"x": 0, "y": 0}, {"x": 5, "y": 0}, {"x": 0, "y": 5}]}"#)
            .unwrap();
        let config = EngineConfig::load(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(config.default_polygon().len(), 3);
        assert_eq!(config.reference_canvas, CanvasSize::REFERENCE);
    }

    #[test]
    fn test_unsupported_extension() {
        let path = std::env::temp_dir().join(format!("hyperlinker-config-{}.toml", std::process::id()));
        std::fs::write(&path, "").unwrap();
        assert!(EngineConfig::load(&path).is_err());
        std::fs::remove_file(&path).ok();
    }
}
