//! Rectangle outline annotation.
//!
//! The outline runs between the corners `(x, y)` and `(x + w, y + h)`.
//! Each edge is a band [`OUTLINE_THICKNESS`] pixels wide that covers the
//! edge line and the pixel row or column just outside it. Anything that
//! falls outside the image is clipped.

use crate::decode::{PixelBuffer, CHANNELS};

/// Outline colour, pure blue in BGR order.
pub const OUTLINE_COLOR: [u8; 3] = [255, 0, 0];

/// Stroke width in pixels.
pub const OUTLINE_THICKNESS: i64 = 2;

/// Draw a blue outline between `(x, y)` and `(x + w, y + h)` on a copy of
/// `image`.
///
/// Corners may be given in any order, so negative `w` or `h` draw toward
/// the origin. Coordinates outside the image are fine; only the visible
/// part of the outline is painted.
pub fn draw_rectangle(image: &PixelBuffer, x: i64, y: i64, w: i64, h: i64) -> PixelBuffer {
    let mut output = image.pixels().to_vec();

    let x2 = x.saturating_add(w);
    let y2 = y.saturating_add(h);
    let (left, right) = (x.min(x2), x.max(x2));
    let (top, bottom) = (y.min(y2), y.max(y2));

    // Band offsets around each edge line: -1 and 0 for a 2px stroke
    let before = OUTLINE_THICKNESS / 2;
    let after = OUTLINE_THICKNESS - before - 1;

    // Outer box of the stroke, and the hole inside it
    let outer = (
        left.saturating_sub(before),
        top.saturating_sub(before),
        right.saturating_add(after),
        bottom.saturating_add(after),
    );
    let inner = (
        left.saturating_add(after + 1),
        top.saturating_add(after + 1),
        right.saturating_sub(before + 1),
        bottom.saturating_sub(before + 1),
    );

    let (w_max, h_max) = (i64::from(image.width()) - 1, i64::from(image.height()) - 1);
    let x_from = outer.0.max(0);
    let x_to = outer.2.min(w_max);
    let y_from = outer.1.max(0);
    let y_to = outer.3.min(h_max);

    if x_from > x_to || y_from > y_to {
        return PixelBuffer::from_parts(image.width(), image.height(), output);
    }

    for py in y_from..=y_to {
        let inside_rows = py >= inner.1 && py <= inner.3;
        for px in x_from..=x_to {
            if inside_rows && px >= inner.0 && px <= inner.2 {
                continue;
            }
            let idx = image.index(px as u32, py as u32);
            output[idx..idx + CHANNELS].copy_from_slice(&OUTLINE_COLOR);
        }
    }

    PixelBuffer::from_parts(image.width(), image.height(), output)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GRAY: [u8; 3] = [90, 90, 90];

    fn canvas(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::filled(width, height, GRAY).unwrap()
    }

    fn is_blue(img: &PixelBuffer, x: u32, y: u32) -> bool {
        img.pixel(x, y) == Some(OUTLINE_COLOR)
    }

    #[test]
    fn test_outline_position() {
        let img = canvas(20, 20);
        let result = draw_rectangle(&img, 5, 5, 10, 8);

        // Corners (5,5) and (15,13) sit on the stroke
        assert!(is_blue(&result, 5, 5));
        assert!(is_blue(&result, 15, 13));

        // Two pixels wide: edge line plus the pixel outside it
        assert!(is_blue(&result, 4, 9));
        assert!(is_blue(&result, 5, 9));
        assert!(!is_blue(&result, 3, 9));
        assert!(!is_blue(&result, 6, 9));

        assert!(is_blue(&result, 14, 9));
        assert!(is_blue(&result, 15, 9));
        assert!(!is_blue(&result, 16, 9));

        // Interior and exterior untouched
        assert_eq!(result.pixel(10, 9), Some(GRAY));
        assert_eq!(result.pixel(0, 0), Some(GRAY));
        assert_eq!(result.pixel(19, 19), Some(GRAY));
    }

    #[test]
    fn test_stroke_width_is_two() {
        let img = canvas(30, 30);
        let result = draw_rectangle(&img, 10, 10, 10, 10);

        // Count blue pixels along a vertical scan through the middle
        let blue_rows = (0..30).filter(|&y| is_blue(&result, 15, y)).count();
        assert_eq!(blue_rows, 4);
    }

    #[test]
    fn test_input_untouched() {
        let img = canvas(10, 10);
        let _ = draw_rectangle(&img, 1, 1, 5, 5);
        assert!(img.pixels().chunks(3).all(|px| px == GRAY));
    }

    #[test]
    fn test_clipped_outline() {
        let img = canvas(10, 10);
        let result = draw_rectangle(&img, -5, -5, 10, 10);

        // Only the right and bottom edges near (5, 5) are visible
        assert!(is_blue(&result, 5, 0));
        assert!(is_blue(&result, 0, 5));
        assert_eq!(result.pixel(2, 2), Some(GRAY));
    }

    #[test]
    fn test_fully_outside_is_noop() {
        let img = canvas(10, 10);
        let result = draw_rectangle(&img, 50, 50, 5, 5);
        assert_eq!(result, img);

        let result = draw_rectangle(&img, -100, -100, 20, 20);
        assert_eq!(result, img);
    }

    #[test]
    fn test_negative_size_draws_toward_origin() {
        let img = canvas(20, 20);
        let a = draw_rectangle(&img, 15, 15, -10, -10);
        let b = draw_rectangle(&img, 5, 5, 10, 10);
        assert_eq!(a, b);
    }

    #[test]
    fn test_drawing_is_idempotent() {
        let img = canvas(25, 25);
        let once = draw_rectangle(&img, 3, 4, 12, 9);
        let twice = draw_rectangle(&once, 3, 4, 12, 9);
        assert_eq!(once, twice);
        assert_eq!(once, draw_rectangle(&img, 3, 4, 12, 9));
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let img = canvas(8, 8);
        let result = draw_rectangle(&img, i64::MIN, i64::MIN, i64::MAX, i64::MAX);
        assert_eq!((result.width(), result.height()), (8, 8));
    }
}
