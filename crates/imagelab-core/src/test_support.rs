//! Fixtures shared by the unit tests.

use std::io::Cursor;

use image::{DynamicImage, ImageFormat};

use crate::decode::PixelBuffer;

/// A buffer where every pixel encodes its own position.
///
/// Channel 0 holds `x`, channel 1 holds `y` and channel 2 holds
/// `(y * width + x) % 256`, so any misplaced copy is visible.
pub fn positional_image(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            pixels.push((x % 256) as u8);
            pixels.push((y % 256) as u8);
            pixels.push(((y * width + x) % 256) as u8);
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

/// Smooth diagonal gradient, friendly to interpolation tests.
pub fn gradient_image(width: u32, height: u32) -> PixelBuffer {
    let mut pixels = Vec::with_capacity((width * height * 3) as usize);
    for y in 0..height {
        for x in 0..width {
            let v = ((x + y) * 4 % 256) as u8;
            pixels.extend_from_slice(&[v, v / 2, 255 - v]);
        }
    }
    PixelBuffer::new(width, height, pixels).unwrap()
}

pub fn png_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png).unwrap();
    out.into_inner()
}

pub fn jpeg_bytes(img: &DynamicImage) -> Vec<u8> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Jpeg).unwrap();
    out.into_inner()
}

/// Insert an APP1 segment carrying a single EXIF orientation tag right after
/// the SOI marker of a JPEG stream.
pub fn with_exif_orientation(jpeg: &[u8], orientation: u16) -> Vec<u8> {
    assert_eq!(&jpeg[..2], &[0xFF, 0xD8], "not a JPEG stream");

    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"II*\0");
    tiff.extend_from_slice(&8u32.to_le_bytes()); // offset of IFD0
    tiff.extend_from_slice(&1u16.to_le_bytes()); // one entry
    tiff.extend_from_slice(&0x0112u16.to_le_bytes()); // Orientation
    tiff.extend_from_slice(&3u16.to_le_bytes()); // SHORT
    tiff.extend_from_slice(&1u32.to_le_bytes()); // count
    tiff.extend_from_slice(&orientation.to_le_bytes());
    tiff.extend_from_slice(&[0, 0]); // value padding
    tiff.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

    let mut payload = b"Exif\0\0".to_vec();
    payload.extend_from_slice(&tiff);
    let segment_len = (payload.len() + 2) as u16;

    let mut out = Vec::with_capacity(jpeg.len() + payload.len() + 4);
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&[0xFF, 0xE1]);
    out.extend_from_slice(&segment_len.to_be_bytes());
    out.extend_from_slice(&payload);
    out.extend_from_slice(&jpeg[2..]);
    out
}
