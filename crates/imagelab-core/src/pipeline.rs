//! Request pipeline: decode, one transform, encode, base64.
//!
//! Each call owns its buffers from start to finish. Nothing is cached or
//! shared between calls, so the functions here can run concurrently on any
//! number of threads.

use serde::Serialize;
use thiserror::Error;

use crate::decode::{self, DecodeError, PixelBuffer};
use crate::encode::{self, EncodeError};
use crate::transform::{self, Channel, TransformError};
use crate::transport;

/// Failure of a single pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The upload could not be decoded as an image.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// A transform parameter was rejected.
    #[error(transparent)]
    InvalidParameter(#[from] TransformError),

    /// The result could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// The transform applied by one request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// Keep one channel, zero the other two.
    Isolate(Channel),
    /// Extract `[x, x+width) × [y, y+height)`.
    Crop { x: i64, y: i64, width: i64, height: i64 },
    /// Rotate about the centre, counter-clockwise in degrees.
    Rotate { angle: f64 },
    /// Outline the box from `(x, y)` to `(x+width, y+height)` in blue.
    DrawRectangle { x: i64, y: i64, width: i64, height: i64 },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Isolate(_) => "channel",
            Operation::Crop { .. } => "crop",
            Operation::Rotate { .. } => "rotate",
            Operation::DrawRectangle { .. } => "draw",
        }
    }

    /// Reject parameters that can be judged without the image.
    pub fn validate(&self) -> Result<(), TransformError> {
        match *self {
            Operation::Rotate { angle } if !angle.is_finite() => {
                Err(TransformError::NonFiniteAngle(angle))
            }
            _ => Ok(()),
        }
    }

    /// Run the transform on a decoded buffer.
    ///
    /// Does not call [`Operation::validate`]; [`process`] does that before
    /// decoding.
    pub fn apply(&self, image: &PixelBuffer) -> Result<PixelBuffer, TransformError> {
        match *self {
            Operation::Isolate(channel) => Ok(transform::isolate_channel(image, channel)),
            Operation::Crop {
                x,
                y,
                width,
                height,
            } => transform::crop(image, x, y, width, height),
            Operation::Rotate { angle } => Ok(transform::rotate(image, angle)),
            Operation::DrawRectangle {
                x,
                y,
                width,
                height,
            } => Ok(transform::draw_rectangle(image, x, y, width, height)),
        }
    }
}

/// An encoded result ready for a JSON response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncodedImage {
    /// JPEG bytes as standard base64.
    pub image_base64: String,
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    fn from_buffer(image: &PixelBuffer, quality: u8) -> Result<Self, EncodeError> {
        let jpeg = encode::encode_jpeg(image, quality)?;
        Ok(Self {
            image_base64: transport::to_text(&jpeg),
            width: image.width(),
            height: image.height(),
        })
    }
}

/// Decode an upload and re-encode it untouched.
pub fn inspect(bytes: &[u8], quality: u8) -> Result<EncodedImage, PipelineError> {
    let image = decode::decode(bytes)?;
    Ok(EncodedImage::from_buffer(&image, quality)?)
}

/// Decode an upload, apply `operation` and encode the result.
///
/// Parameters are checked before the upload is decoded, and the decoded
/// buffer is checked before the transform runs.
pub fn process(
    bytes: &[u8],
    operation: &Operation,
    quality: u8,
) -> Result<EncodedImage, PipelineError> {
    operation.validate()?;
    let image = decode::decode(bytes)?;
    let output = operation.apply(&image)?;
    Ok(EncodedImage::from_buffer(&output, quality)?)
}
