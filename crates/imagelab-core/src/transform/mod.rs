//! Pixel transformations: channel isolation, cropping, rotation and
//! rectangle annotation.
//!
//! Every operation borrows its input and returns a new [`PixelBuffer`], so
//! the decoded source stays available for the rest of the request.
//!
//! # Coordinate System
//!
//! - Origin is the top-left corner, `x` grows right and `y` grows down
//! - Crop and rectangle coordinates are integer pixel positions
//! - Rotation angles are in degrees, positive = counter-clockwise
//!
//! [`PixelBuffer`]: crate::decode::PixelBuffer

mod affine;
mod channel;
mod crop;
mod rectangle;
mod rotation;

use thiserror::Error;

pub use affine::AffineTransform;
pub use channel::{isolate_channel, Channel};
pub use crop::{crop, CropRegion};
pub use rectangle::{draw_rectangle, OUTLINE_COLOR, OUTLINE_THICKNESS};
pub use rotation::rotate;

/// Errors raised for transform parameters that cannot be honoured.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// The channel name is not one of red, green or blue.
    #[error("Unknown channel '{0}', expected red, green or blue")]
    UnknownChannel(String),

    /// The crop rectangle does not overlap the image.
    #[error("Crop region x={x} y={y} w={width} h={height} is empty for a {image_width}x{image_height} image")]
    EmptyRegion {
        x: i64,
        y: i64,
        width: i64,
        height: i64,
        image_width: u32,
        image_height: u32,
    },

    /// The rotation angle is NaN or infinite.
    #[error("Rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}
