//! File boundary: Load and save `.limg` files.
//!
//! Reads and writes are whole-file and synchronous. The codec never sees
//! a partially read stream.

use crate::codec;
use crate::error::{Error, Result};
use crate::image::ImageModel;
use std::path::Path;

/// Conventional file extension, without the dot.
pub const FILE_EXTENSION: &str = "limg";

/// Read and decode the file at `path`.
///
/// On error nothing is returned, so a caller holding a previous model
/// keeps it as long as it only replaces it on `Ok`.
pub fn load(path: impl AsRef<Path>) -> Result<ImageModel> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| Error::io(path, e))?;

    match codec::decode(&bytes) {
        Ok(model) => {
            tracing::debug!(
                target: "limg::file",
                path = %path.display(),
                width = model.width(),
                height = model.height(),
                format = %model.format(),
                "loaded image"
            );
            Ok(model)
        }
        Err(e) => {
            tracing::warn!(target: "limg::file", path = %path.display(), error = %e, "rejected image file");
            Err(e)
        }
    }
}

/// Encode `model` and write it to `path`, replacing any existing file.
pub fn save(model: &ImageModel, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let bytes = codec::encode(model);
    std::fs::write(path, &bytes).map_err(|e| {
        tracing::warn!(target: "limg::file", path = %path.display(), error = %e, "write failed");
        Error::io(path, e)
    })?;

    tracing::debug!(
        target: "limg::file",
        path = %path.display(),
        bytes = bytes.len(),
        "saved image"
    );
    Ok(())
}
