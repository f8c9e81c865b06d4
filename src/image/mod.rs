//! Image module: The in-memory raster model.
//!
//! This module contains:
//! - [`Format`]: The pixel encoding tag and its value domain
//! - [`PixelBuffer`]: A format-tagged, row-major grid of pixels
//! - [`Dimensions`]: A validated width/height pair
//! - [`ImageModel`]: The user-facing image with paint and codec helpers

mod buffer;
mod format;
mod model;

pub use buffer::{Dimensions, PixelBuffer};
pub use format::Format;
pub use model::ImageModel;
