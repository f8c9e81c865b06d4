//! # limg
//!
//! Bitonal raster images, the `.limg` binary format, and a terminal
//! pixel editor.
//!
//! ## Core Concepts
//!
//! - **Image model**: A fixed-size grid of pixel values whose domain is set
//!   by a [`Format`]. Every value in the grid is always valid.
//! - **Codec**: A 5-byte big-endian header followed by one byte per pixel
//!   in row-major order. Decoding validates everything before building a
//!   model.
//! - **Edit controller**: Maps pointer positions on a scaled display onto
//!   pixels and paints them when edit mode is on.
//! - **Shell**: A crossterm front end that draws the image with terminal
//!   cells and feeds mouse events to the controller.
//!
//! ## Example
//!
//! ```rust
//! use limg::{decode, encode, Format, ImageModel};
//!
//! let mut image = ImageModel::new_blank(4, 3, Format::Bitonal)?;
//! image.paint(1, 2)?;
//!
//! let bytes = encode(&image);
//! assert_eq!(&bytes[..5], &[0x00, 0x00, 0x04, 0x00, 0x03]);
//! assert_eq!(decode(&bytes)?, image);
//! # Ok::<(), limg::Error>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod codec;
pub mod edit;
pub mod error;
pub mod file;
pub mod image;
pub mod layout;
pub mod shell;

// Re-exports for convenience
pub use codec::{decode, encode, Header, HEADER_LEN};
pub use edit::{DisplayMapping, EditController, EditMode, EditOutcome, PointerEvent};
pub use error::{Error, ErrorKind, Result};
pub use file::{load, save, FILE_EXTENSION};
pub use image::{Dimensions, Format, ImageModel, PixelBuffer};
pub use layout::Rect;
