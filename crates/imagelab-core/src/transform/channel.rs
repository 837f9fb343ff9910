//! Single-channel isolation.

use std::fmt;
use std::str::FromStr;

use super::TransformError;
use crate::decode::{PixelBuffer, CHANNELS};

/// Colour channel selectable for isolation.
///
/// Parsed case-insensitively from `red`, `green` or `blue`. The kept plane
/// follows the service's established mapping: `Red` keeps plane 0, `Green`
/// plane 1 and `Blue` plane 2 of the interleaved buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Index of the interleaved plane that survives isolation.
    pub fn plane(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Channel {
    type Err = TransformError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            _ => Err(TransformError::UnknownChannel(s.to_string())),
        }
    }
}

/// Zero every plane except the one selected by `channel`.
pub fn isolate_channel(image: &PixelBuffer, channel: Channel) -> PixelBuffer {
    let keep = channel.plane();
    let mut output = image.pixels().to_vec();

    for px in output.chunks_exact_mut(CHANNELS) {
        for (plane, value) in px.iter_mut().enumerate() {
            if plane != keep {
                *value = 0;
            }
        }
    }

    PixelBuffer::from_parts(image.width(), image.height(), output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::positional_image;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("red".parse::<Channel>(), Ok(Channel::Red));
        assert_eq!("GREEN".parse::<Channel>(), Ok(Channel::Green));
        assert_eq!("bLuE".parse::<Channel>(), Ok(Channel::Blue));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "purple".parse::<Channel>().unwrap_err();
        assert_eq!(err, TransformError::UnknownChannel("purple".to_string()));
        assert!("".parse::<Channel>().is_err());
        assert!(" red".parse::<Channel>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for channel in [Channel::Red, Channel::Green, Channel::Blue] {
            assert_eq!(channel.to_string().parse::<Channel>(), Ok(channel));
        }
    }

    #[test]
    fn test_isolate_red_keeps_plane_zero() {
        let img = positional_image(16, 9);
        let result = isolate_channel(&img, Channel::Red);

        for (src, dst) in img.pixels().chunks(3).zip(result.pixels().chunks(3)) {
            assert_eq!(dst[0], src[0]);
            assert_eq!(dst[1], 0);
            assert_eq!(dst[2], 0);
        }
    }

    #[test]
    fn test_isolate_each_channel() {
        let img = PixelBuffer::filled(2, 2, [10, 20, 30]).unwrap();

        assert_eq!(isolate_channel(&img, Channel::Green).pixel(1, 1), Some([0, 20, 0]));
        assert_eq!(isolate_channel(&img, Channel::Blue).pixel(0, 1), Some([0, 0, 30]));
    }

    #[test]
    fn test_isolate_leaves_input_untouched() {
        let img = positional_image(5, 5);
        let before = img.clone();
        let result = isolate_channel(&img, Channel::Blue);

        assert_eq!(img, before);
        assert_eq!((result.width(), result.height()), (5, 5));
    }
}
