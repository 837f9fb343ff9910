//! Image decoding for the imagelab pipeline.
//!
//! Uploads arrive as compressed bytes of unknown format. This module sniffs
//! the format from the content, applies EXIF orientation and produces a
//! [`PixelBuffer`] in BGR channel order.
//!
//! # Examples
//!
//! ```ignore
//! use imagelab_core::decode::decode;
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let image = decode(&bytes).unwrap();
//! println!("Decoded {}x{} image", image.width(), image.height());
//! ```

mod load;
mod types;

pub use load::{decode, get_orientation};
pub use types::{DecodeError, Orientation, PixelBuffer, CHANNELS};
