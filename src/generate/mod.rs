//! Asset generation
//!
//! Renders the platform, ball and background sprites and writes them as BMP
//! files. Rendering may run in parallel; writing always happens on the calling
//! thread in the fixed platform → ball → background order.

pub mod background;
pub mod ball;
pub mod platform;

use image::{ImageFormat, RgbImage};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::constants::{
    BACKGROUND_FILE, BACKGROUND_HEIGHT, BACKGROUND_WIDTH, BALL_FILE, BALL_SIZE, PLATFORM_FILE,
    PLATFORM_HEIGHT, PLATFORM_WIDTH,
};
use crate::error::{AssetError, Result};
use crate::manifest;

/// One of the generated sprites. Ordering is write order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetKind {
    #[serde(alias = "player_platform")]
    Platform,
    Ball,
    #[serde(alias = "bg", alias = "forest_bg")]
    Background,
}

impl AssetKind {
    pub const ALL: [AssetKind; 3] = [AssetKind::Platform, AssetKind::Ball, AssetKind::Background];

    pub fn name(self) -> &'static str {
        match self {
            AssetKind::Platform => "platform",
            AssetKind::Ball => "ball",
            AssetKind::Background => "background",
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            AssetKind::Platform => PLATFORM_FILE,
            AssetKind::Ball => BALL_FILE,
            AssetKind::Background => BACKGROUND_FILE,
        }
    }

    /// (width, height) in pixels
    pub fn dimensions(self) -> (u32, u32) {
        match self {
            AssetKind::Platform => (PLATFORM_WIDTH, PLATFORM_HEIGHT),
            AssetKind::Ball => (BALL_SIZE, BALL_SIZE),
            AssetKind::Background => (BACKGROUND_WIDTH, BACKGROUND_HEIGHT),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AssetKind::Platform => "blue platform",
            AssetKind::Ball => "red ball",
            AssetKind::Background => "green background",
        }
    }

    pub fn render(self) -> RgbImage {
        match self {
            AssetKind::Platform => platform::render(),
            AssetKind::Ball => ball::render(),
            AssetKind::Background => background::render(),
        }
    }

    /// Empty selection means everything; result is sorted and deduplicated.
    pub fn normalize(kinds: &[AssetKind]) -> Vec<AssetKind> {
        if kinds.is_empty() {
            return Self::ALL.to_vec();
        }
        let mut kinds = kinds.to_vec();
        kinds.sort();
        kinds.dedup();
        kinds
    }
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetKind {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "platform" | "player_platform" => Ok(AssetKind::Platform),
            "ball" => Ok(AssetKind::Ball),
            "background" | "bg" | "forest_bg" => Ok(AssetKind::Background),
            _ => Err(AssetError::UnknownAsset(s.to_string())),
        }
    }
}

/// A file written by [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedAsset {
    pub kind: AssetKind,
    pub path: PathBuf,
}

/// Create `dir` (and parents) unless it already exists.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        debug!("Directory {} already exists", dir.display());
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| AssetError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;
    info!("Created directory {}", dir.display());
    Ok(())
}

/// Create the output directory and, if enabled, the `images/` side directory.
pub fn prepare_output(config: &GeneratorConfig) -> Result<()> {
    ensure_dir(&config.output_dir)?;
    if config.create_images_dir {
        ensure_dir(&config.images_dir())?;
    }
    Ok(())
}

/// Render every kind, keeping the input order.
pub fn render_all(kinds: &[AssetKind], parallel: bool) -> Vec<(AssetKind, RgbImage)> {
    if parallel {
        kinds.par_iter().map(|&kind| (kind, kind.render())).collect()
    } else {
        kinds.iter().map(|&kind| (kind, kind.render())).collect()
    }
}

/// Encode `img` as BMP into `dir`, returning the written path.
pub fn write_asset(dir: &Path, kind: AssetKind, img: &RgbImage) -> Result<PathBuf> {
    let path = dir.join(kind.file_name());
    img.save_with_format(&path, ImageFormat::Bmp)
        .map_err(|source| AssetError::Write {
            path: path.clone(),
            source,
        })?;
    let (w, h) = img.dimensions();
    debug!("Wrote {} ({}x{})", path.display(), w, h);
    Ok(path)
}

/// Full generation run: prepare directories, render, write, optional manifest.
pub fn run(config: &GeneratorConfig) -> Result<Vec<GeneratedAsset>> {
    let kinds = config.selected_assets();
    info!(
        "Generating {} asset(s) into {}",
        kinds.len(),
        config.output_dir.display()
    );

    prepare_output(config)?;

    let rendered = render_all(&kinds, config.parallel);

    let mut written = Vec::with_capacity(rendered.len());
    for (kind, img) in &rendered {
        let path = write_asset(&config.output_dir, *kind, img)?;
        written.push(GeneratedAsset { kind: *kind, path });
    }

    if config.manifest {
        manifest::write_manifest(&config.output_dir, &kinds)?;
    }

    Ok(written)
}

/// Human-readable confirmation listing the generated files.
pub fn completion_message(assets: &[GeneratedAsset]) -> String {
    let mut message = String::from("Created test BMP files:");
    for asset in assets {
        message.push_str(&format!(
            "\n- {} ({})",
            asset.kind.file_name(),
            asset.kind.description()
        ));
    }
    message
}
