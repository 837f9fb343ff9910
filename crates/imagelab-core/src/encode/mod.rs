//! Image encoding for the imagelab pipeline.
//!
//! Every transformed buffer leaves the service as a JPEG. The quality is a
//! per-process setting, so identical input always yields identical bytes.
//!
//! # Examples
//!
//! ```ignore
//! use imagelab_core::decode::PixelBuffer;
//! use imagelab_core::encode::encode_jpeg;
//!
//! let image = PixelBuffer::filled(100, 100, [128, 128, 128]).unwrap();
//! let jpeg_bytes = encode_jpeg(&image, 95).unwrap();
//! println!("Encoded {} bytes", jpeg_bytes.len());
//! ```

mod jpeg;

pub use jpeg::{encode_jpeg, EncodeError, DEFAULT_JPEG_QUALITY};
