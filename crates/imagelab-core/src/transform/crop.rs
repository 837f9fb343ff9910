//! Rectangular cropping in pixel coordinates.
//!
//! The requested region `[x, x+w) × [y, y+h)` behaves like a slice: edges
//! past the image are truncated to the available area and a negative origin
//! is pinned to 0. A region with nothing left after truncation is an error
//! rather than a zero-sized buffer.
//!
//! # Example
//!
//! ```ignore
//! // Take the 50x50 square starting at (10, 20)
//! let cropped = crop(&image, 10, 20, 50, 50)?;
//! ```

use super::TransformError;
use crate::decode::{PixelBuffer, CHANNELS};

/// A crop rectangle already resolved against an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub left: u32,
    pub top: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    /// Resolve a requested rectangle against `image_width` x `image_height`.
    ///
    /// Returns `None` when the truncated region has no pixels.
    pub fn resolve(
        x: i64,
        y: i64,
        w: i64,
        h: i64,
        image_width: u32,
        image_height: u32,
    ) -> Option<Self> {
        let (left, right) = clamp_span(x, w, image_width);
        let (top, bottom) = clamp_span(y, h, image_height);

        if right <= left || bottom <= top {
            return None;
        }

        Some(Self {
            left,
            top,
            width: right - left,
            height: bottom - top,
        })
    }
}

/// Clamp `[start, start + len)` to `[0, limit]`.
fn clamp_span(start: i64, len: i64, limit: u32) -> (u32, u32) {
    let limit = i64::from(limit);
    let lo = start.clamp(0, limit);
    let hi = start.saturating_add(len).clamp(0, limit);
    (lo as u32, hi as u32)
}

/// Crop `[x, x+w) × [y, y+h)` out of `image`.
///
/// # Errors
///
/// Returns `TransformError::EmptyRegion` when the region does not overlap
/// the image or has a non-positive size.
pub fn crop(
    image: &PixelBuffer,
    x: i64,
    y: i64,
    w: i64,
    h: i64,
) -> Result<PixelBuffer, TransformError> {
    let region = CropRegion::resolve(x, y, w, h, image.width(), image.height()).ok_or(
        TransformError::EmptyRegion {
            x,
            y,
            width: w,
            height: h,
            image_width: image.width(),
            image_height: image.height(),
        },
    )?;

    // Fast path: full crop returns a clone
    if region.width == image.width() && region.height == image.height() {
        return Ok(image.clone());
    }

    let row_bytes = region.width as usize * CHANNELS;
    let mut output = Vec::with_capacity(row_bytes * region.height as usize);

    // Copy pixel data row by row
    for row in region.top..region.top + region.height {
        let start = image.index(region.left, row);
        output.extend_from_slice(&image.pixels()[start..start + row_bytes]);
    }

    Ok(PixelBuffer::from_parts(region.width, region.height, output))
}


// ============================================================================
// Property-Based Tests
// ============================================================================
