//! imagelab core - pixel transformation pipeline
//!
//! This crate turns an uploaded image into a transformed JPEG: it decodes
//! arbitrary compressed bytes into a BGR [`PixelBuffer`], applies one
//! transform (channel isolation, crop, rotation or rectangle annotation),
//! re-encodes the result and wraps it as base64 text.
//!
//! # Module Structure
//!
//! - `decode` - Content-sniffed decoding with EXIF orientation
//! - `encode` - JPEG encoding
//! - `transform` - The four pixel transforms
//! - `transport` - Base64 text encoding
//! - `pipeline` - One request end to end
//!
//! All functions are synchronous and free of shared state.

pub mod decode;
pub mod encode;
pub mod pipeline;
pub mod transform;
pub mod transport;

#[cfg(test)]
mod test_support;

pub use decode::{decode, DecodeError, PixelBuffer};
pub use encode::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
pub use pipeline::{inspect, process, EncodedImage, Operation, PipelineError};
pub use transform::{crop, draw_rectangle, isolate_channel, rotate, Channel, TransformError};
pub use transport::{from_text, to_text, TransportError};
