//! `ImageModel`: The image a shell opens, edits, and saves.

use super::buffer::{Dimensions, PixelBuffer};
use super::format::Format;
use crate::codec;
use crate::error::Result;

/// An image: one [`PixelBuffer`] plus the operations a shell needs.
///
/// The model has value semantics. Cloning yields an independent image,
/// [`paint`](Self::paint) updates a uniquely owned model in place, and
/// [`painted`](Self::painted) leaves the receiver untouched and returns
/// the updated copy.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct ImageModel {
    buffer: PixelBuffer,
}

impl ImageModel {
    /// Create a blank canvas with every pixel set to the background.
    pub fn new_blank(width: u32, height: u32, format: Format) -> Result<Self> {
        PixelBuffer::new(width, height, format).map(Self::from)
    }

    /// Decode a model from `.limg` bytes.
    ///
    /// Errors are the codec's, unchanged.
    pub fn from_codec_bytes(bytes: &[u8]) -> Result<Self> {
        codec::decode(bytes)
    }

    /// Encode this model as `.limg` bytes.
    pub fn to_codec_bytes(&self) -> Vec<u8> {
        codec::encode(self)
    }

    /// Image width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Image height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Image size.
    #[inline]
    pub const fn dimensions(&self) -> Dimensions {
        self.buffer.dimensions()
    }

    /// Pixel format.
    #[inline]
    pub const fn format(&self) -> Format {
        self.buffer.format()
    }

    /// Rows of pixel values, top to bottom.
    pub fn pixel_grid(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.buffer.rows()
    }

    /// Owned copy of the pixel grid.
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.buffer.to_grid()
    }

    /// Pixel value at (row, col).
    pub fn get(&self, row: u16, col: u16) -> Result<u8> {
        self.buffer.get(row, col)
    }

    /// The underlying buffer.
    #[inline]
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Set (row, col) to the format's foreground value.
    ///
    /// There is no inverse operation; painting an already painted pixel
    /// is a no-op.
    pub fn paint(&mut self, row: u16, col: u16) -> Result<()> {
        let value = self.format().foreground();
        self.buffer.set(row, col, value)
    }

    /// Return a copy of this model with (row, col) painted.
    pub fn painted(&self, row: u16, col: u16) -> Result<Self> {
        let mut next = self.clone();
        next.paint(row, col)?;
        Ok(next)
    }
}

impl From<PixelBuffer> for ImageModel {
    fn from(buffer: PixelBuffer) -> Self {
        Self { buffer }
    }
}
