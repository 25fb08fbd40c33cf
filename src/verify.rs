//! Check previously generated assets on disk
//!
//! Each asset must exist, decode as BMP and have its declared dimensions.

use image::{ImageFormat, ImageReader};
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::generate::AssetKind;

#[derive(Debug, Clone, PartialEq)]
pub enum VerifyStatus {
    Ok,
    Missing,
    /// File exists but is not a decodable BMP
    Unreadable(String),
    WrongSize {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

impl fmt::Display for VerifyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerifyStatus::Ok => write!(f, "ok"),
            VerifyStatus::Missing => write!(f, "missing"),
            VerifyStatus::Unreadable(reason) => write!(f, "unreadable: {reason}"),
            VerifyStatus::WrongSize { expected, actual } => write!(
                f,
                "expected {}x{}, found {}x{}",
                expected.0, expected.1, actual.0, actual.1
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VerifyReport {
    pub kind: AssetKind,
    pub path: PathBuf,
    pub status: VerifyStatus,
}

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        self.status == VerifyStatus::Ok
    }
}

fn check_file(path: &Path, expected: (u32, u32)) -> VerifyStatus {
    if !path.is_file() {
        return VerifyStatus::Missing;
    }

    let reader = match ImageReader::open(path).and_then(|r| r.with_guessed_format()) {
        Ok(reader) => reader,
        Err(e) => return VerifyStatus::Unreadable(e.to_string()),
    };
    if reader.format() != Some(ImageFormat::Bmp) {
        return VerifyStatus::Unreadable("not a BMP file".to_string());
    }

    match reader.decode() {
        Ok(img) => {
            let actual = (img.width(), img.height());
            if actual == expected {
                VerifyStatus::Ok
            } else {
                VerifyStatus::WrongSize { expected, actual }
            }
        }
        Err(e) => VerifyStatus::Unreadable(e.to_string()),
    }
}

/// Verify each kind's file inside `dir`.
pub fn verify_assets(dir: &Path, kinds: &[AssetKind]) -> Vec<VerifyReport> {
    kinds
        .iter()
        .map(|&kind| {
            let path = dir.join(kind.file_name());
            let status = check_file(&path, kind.dimensions());
            if status == VerifyStatus::Ok {
                debug!("{} ok", path.display());
            } else {
                warn!("{}: {}", path.display(), status);
            }
            VerifyReport { kind, path, status }
        })
        .collect()
}
