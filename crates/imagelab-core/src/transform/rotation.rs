//! Image rotation with bilinear interpolation.
//!
//! The buffer is rotated about its geometric centre `(width/2, height/2)`
//! and the canvas keeps the source dimensions, so corners that swing out
//! are cut off and uncovered areas become black.
//!
//! # Algorithm
//!
//! The rotation uses inverse mapping: for each pixel in the output image,
//! we map it back through the inverted rotation matrix and interpolate the
//! four surrounding source pixels. For rotation by angle θ about `(cx, cy)`:
//! ```text
//! src_x =  cos(θ) * (x - cx) - sin(θ) * (y - cy) + cx
//! src_y =  sin(θ) * (x - cx) + cos(θ) * (y - cy) + cy
//! ```
//! Neighbours that fall outside the source contribute black, which blends
//! the edges of the rotated picture into the background.

use super::AffineTransform;
use crate::decode::{PixelBuffer, CHANNELS};

/// Rotate `image` by `angle_degrees` (positive = counter-clockwise).
///
/// Output has the same width and height as the input. An angle that is an
/// exact multiple of 360 returns an unchanged copy.
///
/// # Example
///
/// ```ignore
/// let rotated = rotate(&image, 15.0);
/// assert_eq!(rotated.width(), image.width());
/// ```
pub fn rotate(image: &PixelBuffer, angle_degrees: f64) -> PixelBuffer {
    // Fast path: no rotation needed
    if angle_degrees % 360.0 == 0.0 {
        return image.clone();
    }

    let (width, height) = (image.width(), image.height());
    let cx = width as f64 / 2.0;
    let cy = height as f64 / 2.0;

    let forward = AffineTransform::rotation(cx, cy, angle_degrees, 1.0);
    let Some(inverse) = forward.invert() else {
        return PixelBuffer::from_parts(width, height, vec![0; image.byte_size()]);
    };

    let mut output = vec![0u8; image.byte_size()];

    for dst_y in 0..height {
        for dst_x in 0..width {
            let (src_x, src_y) = inverse.apply(dst_x as f64, dst_y as f64);
            let pixel = sample_bilinear(image, src_x, src_y);

            let dst_idx = image.index(dst_x, dst_y);
            output[dst_idx..dst_idx + CHANNELS].copy_from_slice(&pixel);
        }
    }

    PixelBuffer::from_parts(width, height, output)
}

/// Get a pixel as [f64; 3], or black outside the image.
#[inline]
fn get_pixel_f64(image: &PixelBuffer, px: i64, py: i64) -> [f64; 3] {
    if px < 0 || py < 0 || px >= i64::from(image.width()) || py >= i64::from(image.height()) {
        return [0.0; 3];
    }
    let idx = image.index(px as u32, py as u32);
    let p = image.pixels();
    [p[idx] as f64, p[idx + 1] as f64, p[idx + 2] as f64]
}

/// Sample a pixel using bilinear interpolation.
///
/// Bilinear interpolation considers the 4 nearest pixels and weights
/// their contribution based on distance.
fn sample_bilinear(image: &PixelBuffer, x: f64, y: f64) -> [u8; 3] {
    let (w, h) = (i64::from(image.width()), i64::from(image.height()));

    let x0f = x.floor();
    let y0f = y.floor();

    // All four neighbours outside (also catches NaN)
    if !(x0f >= -1.0 && x0f < w as f64 && y0f >= -1.0 && y0f < h as f64) {
        return [0, 0, 0];
    }

    let x0 = x0f as i64;
    let y0 = y0f as i64;

    // Fractional distances
    let fx = x - x0f;
    let fy = y - y0f;

    let p00 = get_pixel_f64(image, x0, y0);
    let p10 = get_pixel_f64(image, x0 + 1, y0);
    let p01 = get_pixel_f64(image, x0, y0 + 1);
    let p11 = get_pixel_f64(image, x0 + 1, y0 + 1);

    let mut result = [0u8; 3];
    for i in 0..3 {
        let v = p00[i] * (1.0 - fx) * (1.0 - fy)
            + p10[i] * fx * (1.0 - fy)
            + p01[i] * (1.0 - fx) * fy
            + p11[i] * fx * fy;
        result[i] = v.clamp(0.0, 255.0).round() as u8;
    }

    result
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::test_support::gradient_image;
    use proptest::prelude::*;

    proptest! {
        /// Property: Geometry is preserved for any angle.
        #[test]
        fn prop_dimensions_preserved(
            width in 1u32..=40,
            height in 1u32..=40,
            angle in -720.0f64..720.0,
        ) {
            let img = gradient_image(width, height);
            let result = rotate(&img, angle);
            prop_assert_eq!(result.width(), width);
            prop_assert_eq!(result.height(), height);
            prop_assert_eq!(result.byte_size(), img.byte_size());
        }

        /// Property: Rotating a solid image never brightens any pixel.
        #[test]
        fn prop_solid_image_never_brightens(
            width in 1u32..=32,
            height in 1u32..=32,
            angle in -360.0f64..360.0,
            value in 0u8..=255,
        ) {
            let img = PixelBuffer::filled(width, height, [value; 3]).unwrap();
            let result = rotate(&img, angle);
            prop_assert!(result.pixels().iter().all(|&v| v <= value));
        }
    }
}
