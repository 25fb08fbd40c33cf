//! Generator configuration
//!
//! Values come from an optional TOML file and are then overridden by command
//! line flags. Anything missing from the file keeps its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::IMAGES_DIR;
use crate::error::{AssetError, Result};
use crate::generate::AssetKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory the assets are written to
    pub output_dir: PathBuf,
    /// Also create the (always empty) `images/` side directory
    pub create_images_dir: bool,
    /// Render assets on the rayon pool before writing them
    pub parallel: bool,
    /// Write `assets.json` next to the assets
    pub manifest: bool,
    /// Assets to generate (empty = all)
    pub assets: Vec<AssetKind>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            create_images_dir: true,
            parallel: false,
            manifest: false,
            assets: Vec::new(),
        }
    }
}

impl GeneratorConfig {
    /// Load from a TOML file. A missing or malformed file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AssetError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = toml::from_str(&content).map_err(|source| AssetError::ParseConfig {
            path: path.to_path_buf(),
            source,
        })?;
        info!("Loaded generator config from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn images_dir(&self) -> PathBuf {
        self.output_dir.join(IMAGES_DIR)
    }

    /// Selected assets in write order, duplicates removed.
    pub fn selected_assets(&self) -> Vec<AssetKind> {
        AssetKind::normalize(&self.assets)
    }
}
