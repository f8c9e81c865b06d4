//! Error types for image construction, editing, and the `.limg` codec.

use std::path::PathBuf;

use crate::image::Format;

/// Result type alias for limg operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The structured kind of an [`Error`], without its payload.
///
/// Shells match on this to pick a presentation (dialog title, status
/// colour) and use the error's `Display` output as the message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Width or height outside `1..=65535`.
    InvalidDimension,
    /// Coordinate access outside the buffer extent.
    OutOfBounds,
    /// Pixel value outside the format's domain.
    InvalidPixelValue,
    /// Stream too short for a header, or unknown format tag.
    MalformedHeader,
    /// Fewer pixel bytes than the header's dimensions require.
    TruncatedData,
    /// Reading or writing a file failed.
    Io,
}

/// Errors produced by the image model, the codec and the file boundary.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Width or height is zero or does not fit the 2-byte header field.
    #[error("invalid image dimensions {width}x{height}: each side must be between 1 and 65535")]
    InvalidDimension {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// A pixel coordinate lies outside the image.
    #[error("pixel ({row}, {col}) is outside the {width}x{height} image")]
    OutOfBounds {
        /// Requested row.
        row: u16,
        /// Requested column.
        col: u16,
        /// Image width.
        width: u16,
        /// Image height.
        height: u16,
    },

    /// A pixel value is not part of the format's domain.
    #[error("pixel value {value} is not valid for the {format} format")]
    InvalidPixelValue {
        /// The offending value.
        value: u8,
        /// Format whose domain was violated.
        format: Format,
    },

    /// The stream does not start with a readable header.
    #[error("malformed header: {reason}")]
    MalformedHeader {
        /// What was wrong with the header.
        reason: String,
    },

    /// The stream ends before all declared pixels were read.
    #[error("truncated pixel data: expected {expected} bytes, found {actual}")]
    TruncatedData {
        /// Pixel bytes required by the header.
        expected: usize,
        /// Pixel bytes actually present.
        actual: usize,
    },

    /// File I/O failed at the load/save boundary.
    #[error("failed to access '{}': {source}", path.display())]
    Io {
        /// File being read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create a dimension error.
    pub const fn invalid_dimension(width: u32, height: u32) -> Self {
        Self::InvalidDimension { width, height }
    }

    /// Create a malformed header error.
    pub fn malformed_header(reason: impl Into<String>) -> Self {
        Self::MalformedHeader {
            reason: reason.into(),
        }
    }

    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The structured kind of this error.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDimension { .. } => ErrorKind::InvalidDimension,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::InvalidPixelValue { .. } => ErrorKind::InvalidPixelValue,
            Self::MalformedHeader { .. } => ErrorKind::MalformedHeader,
            Self::TruncatedData { .. } => ErrorKind::TruncatedData,
            Self::Io { .. } => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            Error::invalid_dimension(0, 4).kind(),
            ErrorKind::InvalidDimension
        );
        assert_eq!(
            Error::malformed_header("short").kind(),
            ErrorKind::MalformedHeader
        );
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(Error::io("a.limg", io).kind(), ErrorKind::Io);
    }

    #[test]
    fn test_messages() {
        let err = Error::InvalidPixelValue {
            value: 7,
            format: Format::Bitonal,
        };
        assert_eq!(
            err.to_string(),
            "pixel value 7 is not valid for the bitonal format"
        );

        let err = Error::TruncatedData {
            expected: 12,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "truncated pixel data: expected 12 bytes, found 3"
        );
    }
}
