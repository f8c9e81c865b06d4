//! Header: The fixed 5-byte prefix of a `.limg` stream.
//!
//! ```text
//! ┌────────────┬──────────────────┬──────────────────┬─────────────────┐
//! │ format tag │      width       │      height      │ pixel data ...  │
//! │   u8       │   u16 (BE)       │   u16 (BE)       │ format-specific │
//! │ offset 0   │   offset 1       │   offset 3       │ offset 5        │
//! └────────────┴──────────────────┴──────────────────┴─────────────────┘
//! ```

use crate::error::{Error, Result};
use crate::image::{Dimensions, Format};

/// Length of the header in bytes.
pub const HEADER_LEN: usize = 5;

/// A parsed `.limg` header.
///
/// Width and height are kept as read, so a header with a zero side can be
/// inspected; [`Header::dimensions`] is where that gets rejected.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Header {
    /// Pixel encoding.
    pub format: Format,
    /// Declared width.
    pub width: u16,
    /// Declared height.
    pub height: u16,
}

impl Header {
    /// Create a header for an image of the given size.
    pub const fn new(format: Format, dimensions: Dimensions) -> Self {
        Self {
            format,
            width: dimensions.width(),
            height: dimensions.height(),
        }
    }

    /// Parse the header at the start of `bytes`.
    ///
    /// Fails with [`Error::MalformedHeader`] when fewer than
    /// [`HEADER_LEN`] bytes are available or the tag is unknown.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let Some(&[tag, w0, w1, h0, h1]) = bytes.first_chunk::<HEADER_LEN>() else {
            return Err(Error::malformed_header(format!(
                "expected {HEADER_LEN} header bytes, found {}",
                bytes.len()
            )));
        };
        let format = Format::from_tag(tag)
            .ok_or_else(|| Error::malformed_header(format!("unknown format tag {tag}")))?;

        Ok(Self {
            format,
            width: u16::from_be_bytes([w0, w1]),
            height: u16::from_be_bytes([h0, h1]),
        })
    }

    /// Serialize to the on-disk layout.
    pub const fn to_bytes(self) -> [u8; HEADER_LEN] {
        let [w0, w1] = self.width.to_be_bytes();
        let [h0, h1] = self.height.to_be_bytes();
        [self.format.tag(), w0, w1, h0, h1]
    }

    /// Validated dimensions. Zero sides fail with [`Error::InvalidDimension`].
    pub fn dimensions(self) -> Result<Dimensions> {
        Dimensions::new(u32::from(self.width), u32::from(self.height))
    }

    /// Number of pixel bytes that must follow this header.
    pub const fn pixel_data_len(self) -> usize {
        self.format.pixel_data_len(self.width, self.height)
    }
}
