//! Player platform sprite: a blue bar with a white frame

use image::RgbImage;

use crate::constants::{
    BLUE, PLATFORM_HEIGHT, PLATFORM_OUTLINE, PLATFORM_OUTLINE_WIDTH, PLATFORM_WIDTH, WHITE,
};
use crate::draw;

pub fn render() -> RgbImage {
    let mut img = RgbImage::from_pixel(PLATFORM_WIDTH, PLATFORM_HEIGHT, BLUE);
    draw::outline_rect(&mut img, PLATFORM_OUTLINE, PLATFORM_OUTLINE_WIDTH, WHITE);
    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_dimensions() {
        let img = render();
        assert_eq!(img.dimensions(), (100, 20));
    }

    #[test]
    fn test_platform_body_is_blue() {
        let img = render();
        assert_eq!(*img.get_pixel(0, 0), BLUE);
        assert_eq!(*img.get_pixel(1, 1), BLUE);
        assert_eq!(*img.get_pixel(50, 10), BLUE);
        assert_eq!(*img.get_pixel(4, 4), BLUE);
        assert_eq!(*img.get_pixel(99, 19), BLUE);
    }

    #[test]
    fn test_platform_frame_is_white() {
        let img = render();
        for (x, y) in [(2, 2), (3, 10), (97, 10), (98, 18), (50, 2), (50, 3), (50, 17), (50, 18)] {
            assert_eq!(*img.get_pixel(x, y), WHITE, "pixel ({x}, {y})");
        }
    }
}
