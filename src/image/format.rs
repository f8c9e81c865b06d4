//! Format: The pixel encoding tag stored in the first header byte.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Pixel encoding of an image.
///
/// The discriminant is the on-disk tag byte. Each variant defines its own
/// pixel domain and byte width, so adding a format touches this enum and
/// the per-format arms in the codec, nothing else.
#[repr(u8)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub enum Format {
    /// One value per pixel in `{0, 1}`: 0 is background (white), 1 is
    /// foreground (black).
    #[default]
    Bitonal = 0,
}

impl Format {
    /// Every defined format, in tag order.
    pub const ALL: [Self; 1] = [Self::Bitonal];

    /// The header tag byte for this format.
    #[inline]
    pub const fn tag(self) -> u8 {
        self as u8
    }

    /// Look up a format by its header tag. Returns `None` for unknown tags.
    #[inline]
    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0 => Some(Self::Bitonal),
            _ => None,
        }
    }

    /// Value a freshly created canvas is filled with.
    #[inline]
    pub const fn background(self) -> u8 {
        match self {
            Self::Bitonal => 0,
        }
    }

    /// Value written by a paint stroke.
    #[inline]
    pub const fn foreground(self) -> u8 {
        match self {
            Self::Bitonal => 1,
        }
    }

    /// Whether `value` lies in this format's pixel domain.
    #[inline]
    pub const fn contains(self, value: u8) -> bool {
        match self {
            Self::Bitonal => value <= 1,
        }
    }

    /// Check `value` against the pixel domain.
    pub fn validate(self, value: u8) -> Result<u8> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(Error::InvalidPixelValue {
                value,
                format: self,
            })
        }
    }

    /// Serialized bytes per pixel.
    #[inline]
    pub const fn bytes_per_pixel(self) -> usize {
        match self {
            Self::Bitonal => 1,
        }
    }

    /// Serialized size of the pixel data for an image of the given size.
    #[inline]
    pub const fn pixel_data_len(self, width: u16, height: u16) -> usize {
        (width as usize) * (height as usize) * self.bytes_per_pixel()
    }

    /// Human-readable name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bitonal => "bitonal",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bitonal" | "bw" | "black-and-white" => Ok(Self::Bitonal),
            other => Err(format!("unknown image format '{other}'")),
        }
    }
}
