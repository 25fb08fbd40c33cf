//! Ball sprite: a red disc with a white rim on black

use image::RgbImage;

use crate::constants::{BALL_BOUNDS, BALL_OUTLINE_WIDTH, BALL_SIZE, BLACK, RED, WHITE};
use crate::draw;

pub fn render() -> RgbImage {
    let mut img = RgbImage::from_pixel(BALL_SIZE, BALL_SIZE, BLACK);
    draw::outlined_ellipse(&mut img, BALL_BOUNDS, RED, WHITE, BALL_OUTLINE_WIDTH);
    img
}
