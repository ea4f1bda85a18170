//! Image decoding into pixel buffers and mosaic export

use crate::io::error::{MosaicError, Result};
use crate::spatial::buffer::PixelBuffer;
use std::path::Path;

/// Decode any image format supported by `image` into an RGBA buffer
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or decoded
/// - The image has a zero dimension
pub fn load_pixel_buffer<P: AsRef<Path>>(path: P) -> Result<PixelBuffer> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    PixelBuffer::from_rgba_image(img.to_rgba8())
}

/// Write a buffer to disk, choosing the format from the file extension
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_pixel_buffer<P: AsRef<Path>>(buffer: PixelBuffer, output_path: P) -> Result<()> {
    let output_path = output_path.as_ref();

    if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    buffer
        .into_rgba_image()?
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
