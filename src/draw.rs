//! Shape primitives on top of imageproc
//!
//! Bounds are `[x0, y0, x1, y1]` with both corners inclusive, and outlines grow
//! inward from the bounds. Everything is clipped to the canvas.

use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_ellipse_mut, draw_filled_rect_mut, draw_hollow_rect_mut};
use imageproc::rect::Rect;

/// Convert inclusive corners to an imageproc rect, `None` when degenerate.
fn to_rect([x0, y0, x1, y1]: [i32; 4]) -> Option<Rect> {
    if x1 < x0 || y1 < y0 {
        return None;
    }
    Some(Rect::at(x0, y0).of_size((x1 - x0 + 1) as u32, (y1 - y0 + 1) as u32))
}

/// Shrink bounds by `by` pixels on every side.
fn inset([x0, y0, x1, y1]: [i32; 4], by: i32) -> [i32; 4] {
    [x0 + by, y0 + by, x1 - by, y1 - by]
}

/// Solid rectangle, clipped to the canvas.
pub fn fill_rect(img: &mut RgbImage, bounds: [i32; 4], color: Rgb<u8>) {
    if let Some(rect) = to_rect(bounds) {
        draw_filled_rect_mut(img, rect, color);
    }
}

/// Rectangle outline `width` pixels thick; the interior is left untouched.
pub fn outline_rect(img: &mut RgbImage, bounds: [i32; 4], width: u32, color: Rgb<u8>) {
    for ring in 0..width as i32 {
        match to_rect(inset(bounds, ring)) {
            Some(rect) => draw_hollow_rect_mut(img, rect, color),
            None => break,
        }
    }
}

/// Ellipse inscribed in `bounds`, filled with `fill` and ringed by `outline`.
///
/// The ring is drawn as a full ellipse first and the fill is painted over it
/// with both radii reduced by `width`.
pub fn outlined_ellipse(
    img: &mut RgbImage,
    bounds: [i32; 4],
    fill: Rgb<u8>,
    outline: Rgb<u8>,
    width: u32,
) {
    let [x0, y0, x1, y1] = bounds;
    if x1 < x0 || y1 < y0 {
        return;
    }
    let center = ((x0 + x1) / 2, (y0 + y1) / 2);
    let (rx, ry) = ((x1 - x0) / 2, (y1 - y0) / 2);

    draw_filled_ellipse_mut(img, center, rx, ry, outline);

    let width = width as i32;
    if rx >= width && ry >= width {
        draw_filled_ellipse_mut(img, center, rx - width, ry - width, fill);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgb<u8> = Rgb([1, 2, 3]);
    const FG: Rgb<u8> = Rgb([200, 100, 50]);
    const INNER: Rgb<u8> = Rgb([9, 9, 9]);

    fn canvas(w: u32, h: u32) -> RgbImage {
        RgbImage::from_pixel(w, h, BG)
    }

    #[test]
    fn test_fill_rect_is_inclusive() {
        let mut img = canvas(10, 10);
        fill_rect(&mut img, [2, 3, 4, 5], FG);
        assert_eq!(*img.get_pixel(2, 3), FG);
        assert_eq!(*img.get_pixel(4, 5), FG);
        assert_eq!(*img.get_pixel(5, 5), BG);
        assert_eq!(*img.get_pixel(4, 6), BG);
        assert_eq!(*img.get_pixel(1, 3), BG);
    }

    #[test]
    fn test_fill_rect_clips_to_canvas() {
        let mut img = canvas(10, 10);
        fill_rect(&mut img, [0, 8, 10, 28], FG);
        assert_eq!(*img.get_pixel(9, 9), FG);
        assert_eq!(*img.get_pixel(0, 8), FG);
        assert_eq!(*img.get_pixel(0, 7), BG);
    }

    #[test]
    fn test_degenerate_rect_draws_nothing() {
        let mut img = canvas(10, 10);
        fill_rect(&mut img, [5, 5, 4, 4], FG);
        assert!(img.pixels().all(|p| *p == BG));
    }

    #[test]
    fn test_outline_rect_width_two() {
        let mut img = canvas(20, 10);
        outline_rect(&mut img, [2, 2, 17, 7], 2, FG);
        // Both outline rings
        assert_eq!(*img.get_pixel(2, 2), FG);
        assert_eq!(*img.get_pixel(3, 3), FG);
        assert_eq!(*img.get_pixel(17, 5), FG);
        assert_eq!(*img.get_pixel(16, 5), FG);
        assert_eq!(*img.get_pixel(10, 7), FG);
        assert_eq!(*img.get_pixel(10, 6), FG);
        // Interior and exterior untouched
        assert_eq!(*img.get_pixel(10, 5), BG);
        assert_eq!(*img.get_pixel(4, 4), BG);
        assert_eq!(*img.get_pixel(1, 1), BG);
        assert_eq!(*img.get_pixel(18, 8), BG);
    }

    #[test]
    fn test_outline_thicker_than_rect_stops() {
        let mut img = canvas(6, 6);
        outline_rect(&mut img, [1, 1, 4, 4], 10, FG);
        for y in 1..=4 {
            for x in 1..=4 {
                assert_eq!(*img.get_pixel(x, y), FG);
            }
        }
        assert_eq!(*img.get_pixel(0, 0), BG);
    }

    #[test]
    fn test_outlined_ellipse() {
        let mut img = canvas(50, 50);
        outlined_ellipse(&mut img, [5, 5, 45, 45], INNER, FG, 2);
        assert_eq!(*img.get_pixel(25, 25), INNER);
        // Extremes of the bounding box sit on the ring
        assert_eq!(*img.get_pixel(25, 5), FG);
        assert_eq!(*img.get_pixel(25, 45), FG);
        assert_eq!(*img.get_pixel(5, 25), FG);
        assert_eq!(*img.get_pixel(45, 25), FG);
        assert_eq!(*img.get_pixel(25, 8), INNER);
        // Outside the ellipse
        assert_eq!(*img.get_pixel(5, 5), BG);
        assert_eq!(*img.get_pixel(25, 4), BG);
        assert_eq!(*img.get_pixel(0, 0), BG);
    }
}
