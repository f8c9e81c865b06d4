//! `PixelBuffer`: A format-tagged grid of pixel values.
//!
//! Pixels are stored contiguously in row-major order, one byte per pixel:
//! `index = row * width + col`.

use super::format::Format;
use crate::error::{Error, Result};

/// Validated image size.
///
/// Each side is in `1..=65535`, the range the 2-byte header fields can
/// carry. Validating separately from allocation lets callers check a
/// user-supplied size before committing memory to it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Dimensions {
    width: u16,
    height: u16,
}

impl Dimensions {
    /// Largest allowed width or height.
    pub const MAX: u32 = u16::MAX as u32;

    /// Validate a width and height.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        match (u16::try_from(width), u16::try_from(height)) {
            (Ok(w), Ok(h)) if w > 0 && h > 0 => Ok(Self {
                width: w,
                height: h,
            }),
            _ => Err(Error::invalid_dimension(width, height)),
        }
    }

    /// Width in pixels.
    #[inline]
    pub const fn width(self) -> u16 {
        self.width
    }

    /// Height in pixels.
    #[inline]
    pub const fn height(self) -> u16 {
        self.height
    }

    /// Total number of pixels.
    #[inline]
    pub const fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// A grid of pixel values constrained by a [`Format`].
///
/// Invariants, upheld by every constructor and mutator:
/// - `pixels.len() == width * height`
/// - every value satisfies `format.contains(value)`
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    /// Contiguous pixel storage (row-major order).
    pixels: Vec<u8>,
    /// Width in pixels.
    width: u16,
    /// Height in pixels.
    height: u16,
    /// Pixel encoding.
    format: Format,
}

impl PixelBuffer {
    /// Create a buffer with every pixel set to the format's background.
    ///
    /// Fails with [`Error::InvalidDimension`] if either side is 0 or
    /// larger than 65535.
    pub fn new(width: u32, height: u32, format: Format) -> Result<Self> {
        Ok(Self::with_dimensions(Dimensions::new(width, height)?, format))
    }

    /// Create a background-filled buffer from already validated dimensions.
    pub fn with_dimensions(dimensions: Dimensions, format: Format) -> Self {
        Self {
            pixels: vec![format.background(); dimensions.pixel_count()],
            width: dimensions.width(),
            height: dimensions.height(),
            format,
        }
    }

    /// Adopt existing row-major pixel storage.
    ///
    /// Every value is checked against the format's domain; the first
    /// offending value fails the whole construction.
    ///
    /// # Panics
    /// Panics if `pixels.len()` does not match the dimensions.
    pub(crate) fn from_pixels(
        dimensions: Dimensions,
        format: Format,
        pixels: Vec<u8>,
    ) -> Result<Self> {
        assert_eq!(
            pixels.len(),
            dimensions.pixel_count(),
            "pixel storage does not match dimensions"
        );
        if let Some(&value) = pixels.iter().find(|&&v| !format.contains(v)) {
            return Err(Error::InvalidPixelValue { value, format });
        }
        Ok(Self {
            pixels,
            width: dimensions.width(),
            height: dimensions.height(),
            format,
        })
    }

    /// Get the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Get the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Get the buffer size.
    #[inline]
    pub const fn dimensions(&self) -> Dimensions {
        Dimensions {
            width: self.width,
            height: self.height,
        }
    }

    /// Get the pixel format.
    #[inline]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// Get the total number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false: a buffer has at least one pixel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get the underlying row-major pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Convert (row, col) coordinates to a linear index.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn index_of(&self, row: u16, col: u16) -> Option<usize> {
        if row < self.height && col < self.width {
            Some((row as usize) * (self.width as usize) + (col as usize))
        } else {
            None
        }
    }

    fn checked_index(&self, row: u16, col: u16) -> Result<usize> {
        self.index_of(row, col).ok_or(Error::OutOfBounds {
            row,
            col,
            width: self.width,
            height: self.height,
        })
    }

    /// Get the pixel at (row, col).
    pub fn get(&self, row: u16, col: u16) -> Result<u8> {
        self.checked_index(row, col).map(|i| self.pixels[i])
    }

    /// Set the pixel at (row, col).
    ///
    /// Both the coordinate and the value are validated before anything is
    /// written, so a failed call leaves the buffer untouched.
    pub fn set(&mut self, row: u16, col: u16, value: u8) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.pixels[idx] = self.format.validate(value)?;
        Ok(())
    }

    /// Get an iterator over rows.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.pixels.chunks_exact(self.width as usize)
    }

    /// Copy the pixels into an owned row-major grid.
    pub fn to_grid(&self) -> Vec<Vec<u8>> {
        self.rows().map(<[u8]>::to_vec).collect()
    }

    /// Number of pixels holding `value`.
    pub fn count(&self, value: u8) -> usize {
        self.pixels.iter().filter(|&&v| v == value).count()
    }
}

impl std::fmt::Debug for PixelBuffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PixelBuffer")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("format", &self.format)
            .field("foreground", &self.count(self.format.foreground()))
            .finish()
    }
}
