//! Codec: Encode and decode the `.limg` binary format.
//!
//! A stream is a 5-byte [`Header`] followed by the pixel data, whose
//! layout depends on the format:
//!
//! - **Bitonal**: `width * height` bytes in row-major order, each 0 or 1.
//!   No bit packing, so the bytes are exactly the in-memory pixel values.
//!
//! Decoding is all-or-nothing: either a fully validated [`ImageModel`]
//! comes back, or an error and nothing else.

mod header;

pub use header::{Header, HEADER_LEN};

use crate::error::{Error, Result};
use crate::image::{Format, ImageModel, PixelBuffer};

/// Encode a model into a new byte vector.
pub fn encode(model: &ImageModel) -> Vec<u8> {
    let data_len = model.format().pixel_data_len(model.width(), model.height());
    let mut out = Vec::with_capacity(HEADER_LEN + data_len);
    encode_into(model, &mut out);
    out
}

/// Append the encoded model to `out`.
///
/// Infallible: a model's dimensions and pixels are valid by construction.
pub fn encode_into(model: &ImageModel, out: &mut Vec<u8>) {
    let header = Header::new(model.format(), model.dimensions());
    out.extend_from_slice(&header.to_bytes());

    let pixels = model.buffer().pixels();
    match model.format() {
        Format::Bitonal => out.extend_from_slice(pixels),
    }
}

/// Decode a model from a byte stream.
///
/// # Errors
///
/// - [`Error::MalformedHeader`]: fewer than 5 bytes, or unknown format tag
/// - [`Error::InvalidDimension`]: width or height is zero
/// - [`Error::TruncatedData`]: fewer pixel bytes than `width * height`
/// - [`Error::InvalidPixelValue`]: a pixel byte outside the format's domain
///
/// Bytes after the declared pixel data are ignored.
pub fn decode(bytes: &[u8]) -> Result<ImageModel> {
    let header = Header::parse(bytes)?;
    let dimensions = header.dimensions()?;

    let data = &bytes[HEADER_LEN..];
    let expected = header.pixel_data_len();
    let Some(data) = data.get(..expected) else {
        return Err(Error::TruncatedData {
            expected,
            actual: data.len(),
        });
    };

    let pixels = match header.format {
        Format::Bitonal => data.to_vec(),
    };
    PixelBuffer::from_pixels(dimensions, header.format, pixels).map(ImageModel::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn sample() -> ImageModel {
        let mut model = ImageModel::new_blank(4, 3, Format::Bitonal).unwrap();
        model.paint(1, 2).unwrap();
        model
    }

    #[test]
    fn test_encode_layout() {
        let bytes = encode(&sample());
        assert_eq!(
            bytes,
            [
                0x00, 0x00, 0x04, 0x00, 0x03, //
                0, 0, 0, 0, //
                0, 0, 1, 0, //
                0, 0, 0, 0,
            ]
        );
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = vec![0xAA];
        encode_into(&sample(), &mut out);
        assert_eq!(out[0], 0xAA);
        assert_eq!(&out[1..], encode(&sample()).as_slice());
    }

    #[test]
    fn test_round_trip() {
        let mut model = ImageModel::new_blank(7, 5, Format::Bitonal).unwrap();
        for (row, col) in [(0, 0), (4, 6), (2, 3), (1, 5)] {
            model.paint(row, col).unwrap();
        }
        let decoded = decode(&encode(&model)).unwrap();
        assert_eq!(decoded.width(), model.width());
        assert_eq!(decoded.height(), model.height());
        assert_eq!(decoded.format(), model.format());
        assert_eq!(decoded.to_grid(), model.to_grid());
    }

    #[test]
    fn test_decode_short_stream() {
        for len in 0..HEADER_LEN {
            let err = decode(&[0u8; HEADER_LEN][..len]).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::MalformedHeader);
        }
    }

    #[test]
    fn test_decode_unknown_tag() {
        let err = decode(&[0x01, 0x00, 0x02, 0x00, 0x02]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedHeader);

        // Tag is checked before the pixel data length.
        let err = decode(&[0x07, 0x00, 0x01, 0x00, 0x01, 0x00]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedHeader);
    }

    #[test]
    fn test_decode_zero_dimension() {
        for header in [[0, 0, 0, 0, 3], [0, 0, 4, 0, 0], [0, 0, 0, 0, 0]] {
            let err = decode(&header).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidDimension);
        }
    }

    #[test]
    fn test_decode_truncated() {
        let bytes = encode(&sample());
        let err = decode(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedData {
                expected: 12,
                actual: 11
            }
        ));

        let err = decode(&bytes[..HEADER_LEN]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedData);
    }

    #[test]
    fn test_decode_invalid_pixel() {
        let mut bytes = encode(&sample());
        bytes[HEADER_LEN + 7] = 2;
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, Error::InvalidPixelValue { value: 2, .. }));

        bytes[HEADER_LEN + 7] = 0xFF;
        assert_eq!(decode(&bytes).unwrap_err().kind(), ErrorKind::InvalidPixelValue);
    }

    #[test]
    fn test_decode_truncation_beats_pixel_domain() {
        // Bad pixel inside a short stream: the length check runs first.
        let err = decode(&[0x00, 0x00, 0x02, 0x00, 0x02, 0x05]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedData);
    }

    #[test]
    fn test_decode_ignores_trailing_bytes() {
        let mut bytes = encode(&sample());
        bytes.extend_from_slice(&[9, 9, 9]);
        assert_eq!(decode(&bytes).unwrap(), sample());
    }
}
