//! Forest background: green bands getting brighter towards the bottom

use image::{Rgb, RgbImage};

use crate::constants::{
    BACKGROUND_HEIGHT, BACKGROUND_WIDTH, BAND_BASE_GREEN, BAND_GREEN_DIVISOR, BAND_HEIGHT,
    DARK_GREEN,
};
use crate::draw;

/// Color of the band starting at row `y`.
pub fn band_color(y: u32) -> Rgb<u8> {
    let green = (BAND_BASE_GREEN + y / BAND_GREEN_DIVISOR).min(255);
    Rgb([0, green as u8, 0])
}

pub fn render() -> RgbImage {
    let mut img = RgbImage::from_pixel(BACKGROUND_WIDTH, BACKGROUND_HEIGHT, DARK_GREEN);

    // Each band's rect covers one extra row that the next band repaints
    for y in (0..BACKGROUND_HEIGHT).step_by(BAND_HEIGHT as usize) {
        let bounds = [
            0,
            y as i32,
            BACKGROUND_WIDTH as i32,
            (y + BAND_HEIGHT) as i32,
        ];
        draw::fill_rect(&mut img, bounds, band_color(y));
    }
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_color_caps_at_255() {
        assert_eq!(band_color(0), Rgb([0, 50, 0]));
        assert_eq!(band_color(580), Rgb([0, 243, 0]));
        assert_eq!(band_color(700), Rgb([0, 255, 0]));
        assert_eq!(band_color(10_000), Rgb([0, 255, 0]));
    }

    #[test]
    fn test_background_dimensions() {
        assert_eq!(render().dimensions(), (800, 600));
    }

    #[test]
    fn test_background_known_pixels() {
        let img = render();
        assert_eq!(img.get_pixel(0, 0)[1], 50);
        assert_eq!(img.get_pixel(0, 590)[1], 243);
        assert_eq!(img.get_pixel(799, 599)[1], 243);
        assert_eq!(img.get_pixel(400, 20)[1], 56);
        assert_eq!(img.get_pixel(400, 19)[1], 50);
    }

    #[test]
    fn test_background_green_only_and_non_decreasing() {
        let img = render();
        let mut previous = 0;
        for y in 0..BACKGROUND_HEIGHT {
            let row_color = *img.get_pixel(0, y);
            assert_eq!(row_color, band_color(y / BAND_HEIGHT * BAND_HEIGHT), "row {y}");
            assert_eq!(row_color[0], 0);
            assert_eq!(row_color[2], 0);
            assert!(row_color[1] >= previous, "row {y} got darker");
            previous = row_color[1];
            // Uniform across the row
            assert_eq!(*img.get_pixel(BACKGROUND_WIDTH - 1, y), row_color);
        }
    }
}
