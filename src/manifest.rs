//! JSON listing of the assets a run produced

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::MANIFEST_FILE;
use crate::error::{AssetError, Result};
use crate::generate::AssetKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub kind: AssetKind,
    pub file: String,
    pub width: u32,
    pub height: u32,
    pub description: String,
}

impl From<AssetKind> for ManifestEntry {
    fn from(kind: AssetKind) -> Self {
        let (width, height) = kind.dimensions();
        Self {
            kind,
            file: kind.file_name().to_string(),
            width,
            height,
            description: kind.description().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub assets: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(kinds: &[AssetKind]) -> Self {
        Self {
            assets: kinds.iter().copied().map(ManifestEntry::from).collect(),
        }
    }
}

/// Write `assets.json` into `dir`. No timestamps, so reruns are byte-identical.
pub fn write_manifest(dir: &Path, kinds: &[AssetKind]) -> Result<PathBuf> {
    let path = dir.join(MANIFEST_FILE);
    serde_json::to_string_pretty(&Manifest::new(kinds))
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
        .and_then(|json| fs::write(&path, json))
        .map_err(|source| AssetError::Manifest {
            path: path.clone(),
            source,
        })?;
    info!("Wrote manifest {}", path.display());
    Ok(path)
}
