//! Error type shared by generation, verification and config loading

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("could not create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("could not read config {}: {source}", path.display())]
    ReadConfig { path: PathBuf, source: io::Error },

    #[error("could not parse config {}: {source}", path.display())]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("could not write manifest {}: {source}", path.display())]
    Manifest { path: PathBuf, source: io::Error },

    #[error("unknown asset '{0}' (expected platform, ball or background)")]
    UnknownAsset(String),
}

pub type Result<T> = std::result::Result<T, AssetError>;
