//! Error types and tile context for mosaic operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all mosaic operations
#[derive(Debug)]
pub enum MosaicError {
    /// A buffer, resample target, or grid has a zero dimension
    InvalidDimension {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
    },

    /// Averaging was requested over a region with no pixels
    EmptyRegion,

    /// Tile matching or composition was attempted without any tiles
    EmptyCorpus,

    /// A corpus tile could not be prepared, aborting the whole corpus load
    TileLoadFailure {
        /// Index of the failing tile within the corpus
        index: usize,
        /// Underlying cause
        source: Box<MosaicError>,
    },

    /// A tile does not have the square dimensions the corpus expects
    TileSizeMismatch {
        /// Actual tile width
        width: u32,
        /// Actual tile height
        height: u32,
        /// Expected edge length
        expected: u32,
    },

    /// RGBA byte count does not match the stated dimensions
    BufferLength {
        /// Length implied by width and height
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to decode an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to save a generated mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { width, height } => {
                write!(f, "Invalid dimensions {width}x{height}: both must be positive")
            }
            Self::EmptyRegion => write!(f, "Cannot average a region with no pixels"),
            Self::EmptyCorpus => write!(f, "Tile corpus contains no tiles"),
            Self::TileLoadFailure { index, source } => {
                write!(f, "Failed to load tile {index}: {source}")
            }
            Self::TileSizeMismatch {
                width,
                height,
                expected,
            } => {
                write!(
                    f,
                    "Tile is {width}x{height} but the corpus expects {expected}x{expected}"
                )
            }
            Self::BufferLength { expected, actual } => {
                write!(
                    f,
                    "Pixel data has {actual} bytes but dimensions require {expected}"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::TileLoadFailure { source, .. } => Some(source.as_ref()),
            _ => None,
        }
    }
}

/// Convenience type alias for mosaic results
pub type Result<T> = std::result::Result<T, MosaicError>;

/// Attaches the corpus index of the tile being prepared to an error
pub trait WithTileIndex<T> {
    /// Wrap any error as a [`MosaicError::TileLoadFailure`] for `index`
    ///
    /// # Errors
    ///
    /// Wraps the error with the index of the failing tile
    fn with_tile_index(self, index: usize) -> Result<T>;
}

impl<T, E> WithTileIndex<T> for std::result::Result<T, E>
where
    E: Into<MosaicError>,
{
    fn with_tile_index(self, index: usize) -> Result<T> {
        self.map_err(|e| match e.into() {
            // Already attributed to a tile, keep the innermost index
            already @ MosaicError::TileLoadFailure { .. } => already,
            other => MosaicError::TileLoadFailure {
                index,
                source: Box::new(other),
            },
        })
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
