//! Core types for image decoding.

use thiserror::Error;

/// Number of interleaved channels in every [`PixelBuffer`].
pub const CHANNELS: usize = 3;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The upload contained no bytes at all.
    #[error("Empty image payload")]
    Empty,

    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// Decoded data does not describe a usable pixel buffer.
    #[error("Invalid pixel buffer: {0}")]
    InvalidBuffer(String),
}

/// EXIF orientation values (1-8).
/// See: https://exiftool.org/TagNames/EXIF.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    /// Normal (no transformation needed).
    #[default]
    Normal = 1,
    FlipHorizontal = 2,
    Rotate180 = 3,
    FlipVertical = 4,
    /// Flip horizontal + rotate 270 CW.
    Transpose = 5,
    Rotate90CW = 6,
    /// Flip horizontal + rotate 90 CW.
    Transverse = 7,
    Rotate270CW = 8,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// A decoded image held as interleaved BGR bytes.
///
/// The channel order is (blue, green, red) for the whole pipeline; the codec
/// converts at the edges. Every buffer built through [`PixelBuffer::new`] has
/// non-zero dimensions and exactly `width * height * 3` bytes, so transforms
/// never have to re-check the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer, checking dimensions against the pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, DecodeError> {
        if width == 0 || height == 0 {
            return Err(DecodeError::InvalidBuffer(format!(
                "dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if pixels.len() != expected {
            return Err(DecodeError::InvalidBuffer(format!(
                "expected {expected} bytes for {width}x{height}, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer whose layout the caller has already established.
    pub(crate) fn from_parts(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert!(width > 0 && height > 0, "zero-sized pixel buffer");
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A buffer filled with a single BGR colour.
    pub fn filled(width: u32, height: u32, bgr: [u8; 3]) -> Result<Self, DecodeError> {
        let count = width as usize * height as usize;
        let pixels = bgr.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::new(width, height, pixels)
    }

    /// Create a buffer from an `image::RgbImage`, swapping to BGR order.
    pub fn from_rgb_image(img: image::RgbImage) -> Result<Self, DecodeError> {
        let (width, height) = img.dimensions();
        let mut pixels = img.into_raw();
        for px in pixels.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        Self::new(width, height, pixels)
    }

    /// Convert to an `image::RgbImage`, swapping back to RGB order.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        let mut rgb = self.pixels.clone();
        for px in rgb.chunks_exact_mut(CHANNELS) {
            px.swap(0, 2);
        }
        image::RgbImage::from_raw(self.width, self.height, rgb)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Interleaved BGR bytes in row-major order.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// BGR value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = self.index(x, y);
        Some([self.pixels[idx], self.pixels[idx + 1], self.pixels[idx + 2]])
    }

    /// Byte offset of the pixel at `(x, y)`.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_from_u32() {
        assert_eq!(Orientation::from(1), Orientation::Normal);
        assert_eq!(Orientation::from(6), Orientation::Rotate90CW);
        assert_eq!(Orientation::from(99), Orientation::Normal); // Invalid defaults to Normal
    }

    #[test]
    fn test_pixel_buffer_creation() {
        let img = PixelBuffer::new(100, 50, vec![0u8; 100 * 50 * 3]).unwrap();

        assert_eq!(img.width(), 100);
        assert_eq!(img.height(), 50);
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.byte_size(), 15000);
    }

    #[test]
    fn test_pixel_buffer_rejects_zero_dimensions() {
        assert!(matches!(
            PixelBuffer::new(0, 0, vec![]),
            Err(DecodeError::InvalidBuffer(_))
        ));
        assert!(matches!(
            PixelBuffer::new(4, 0, vec![]),
            Err(DecodeError::InvalidBuffer(_))
        ));
    }

    #[test]
    fn test_pixel_buffer_rejects_length_mismatch() {
        let err = PixelBuffer::new(2, 2, vec![0u8; 11]).unwrap_err();
        assert!(err.to_string().contains("expected 12 bytes"));
    }

    #[test]
    fn test_rgb_conversion_swaps_to_bgr() {
        let rgb = image::RgbImage::from_raw(1, 1, vec![10, 20, 30]).unwrap();
        let buf = PixelBuffer::from_rgb_image(rgb).unwrap();
        assert_eq!(buf.pixels(), &[30, 20, 10]);

        let back = buf.to_rgb_image().unwrap();
        assert_eq!(back.into_raw(), vec![10, 20, 30]);
    }

    #[test]
    fn test_filled_and_pixel_lookup() {
        let buf = PixelBuffer::filled(3, 2, [1, 2, 3]).unwrap();
        assert_eq!(buf.pixel(2, 1), Some([1, 2, 3]));
        assert_eq!(buf.pixel(3, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::CorruptedFile("truncated".to_string());
        assert_eq!(err.to_string(), "Corrupted or incomplete image file: truncated");

        let err = DecodeError::InvalidFormat;
        assert_eq!(err.to_string(), "Invalid or unsupported image format");
    }
}
