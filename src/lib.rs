//! Arcanoid assets - placeholder sprite generator for Ultimate Arcanoid
//!
//! Produces the platform, ball and background bitmaps the game loads at
//! startup, plus tooling to verify and describe them.

pub mod config;
pub mod constants;
pub mod draw;
pub mod error;
pub mod generate;
pub mod manifest;
pub mod verify;

// Re-export commonly used types for convenience
pub use config::GeneratorConfig;
pub use error::{AssetError, Result};
pub use generate::{AssetKind, GeneratedAsset, completion_message};
pub use manifest::{Manifest, ManifestEntry, write_manifest};
pub use verify::{VerifyReport, VerifyStatus, verify_assets};
