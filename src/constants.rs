//! Fixed asset geometry and colors
//!
//! The game loads these files by name and stretches them to its own sprite
//! sizes, so every value here is part of the output contract.

use image::Rgb;

// =============================================================================
// COLORS (named colors of the original imaging library)
// =============================================================================

pub const BLUE: Rgb<u8> = Rgb([0, 0, 255]);
pub const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub const RED: Rgb<u8> = Rgb([255, 0, 0]);
pub const DARK_GREEN: Rgb<u8> = Rgb([0, 100, 0]);

// =============================================================================
// PLATFORM (player paddle)
// =============================================================================

pub const PLATFORM_FILE: &str = "player_platform.bmp";
pub const PLATFORM_WIDTH: u32 = 100;
pub const PLATFORM_HEIGHT: u32 = 20;
/// Inclusive corners of the outline rectangle
pub const PLATFORM_OUTLINE: [i32; 4] = [2, 2, 98, 18];
pub const PLATFORM_OUTLINE_WIDTH: u32 = 2;

// =============================================================================
// BALL
// =============================================================================

pub const BALL_FILE: &str = "ball.bmp";
pub const BALL_SIZE: u32 = 50;
/// Inclusive bounding box of the ball ellipse
pub const BALL_BOUNDS: [i32; 4] = [5, 5, 45, 45];
pub const BALL_OUTLINE_WIDTH: u32 = 2;

// =============================================================================
// BACKGROUND (forest gradient)
// =============================================================================

pub const BACKGROUND_FILE: &str = "forest_bg.bmp";
pub const BACKGROUND_WIDTH: u32 = 800;
pub const BACKGROUND_HEIGHT: u32 = 600;
pub const BAND_HEIGHT: u32 = 20;
pub const BAND_BASE_GREEN: u32 = 50;
/// Green rises by one step for every this many pixels of y
pub const BAND_GREEN_DIVISOR: u32 = 3;

// =============================================================================
// OUTPUT LAYOUT
// =============================================================================

/// Side directory created next to the assets (never written into)
pub const IMAGES_DIR: &str = "images";
pub const MANIFEST_FILE: &str = "assets.json";
