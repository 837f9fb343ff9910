//! JPEG encoding of pixel buffers.
//!
//! Uses the `image` crate's baseline JPEG encoder. Output size depends on
//! content entropy; the same buffer and quality always produce the same bytes.

use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::{PixelBuffer, CHANNELS};

/// Quality used when the caller does not configure one.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// Errors that can occur during JPEG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// JPEG encoding failed
    #[error("JPEG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a BGR pixel buffer to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Buffer to encode
/// * `quality` - JPEG quality (clamped to 1-100, where 100 is highest quality)
///
/// # Errors
///
/// Returns `EncodeError::EncodingFailed` if the encoder rejects the data,
/// which does not happen for a well-formed buffer.
pub fn encode_jpeg(image: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    let quality = quality.clamp(1, 100);

    // The encoder expects RGB
    let mut rgb = image.pixels().to_vec();
    for px in rgb.chunks_exact_mut(CHANNELS) {
        px.swap(0, 2);
    }

    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, quality);
    encoder
        .write_image(&rgb, image.width(), image.height(), ExtendedColorType::Rgb8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
