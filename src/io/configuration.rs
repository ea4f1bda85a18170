//! Mosaic constants and runtime configuration defaults

/// Edge length in pixels of every square tile
pub const DEFAULT_TILE_SIZE: u32 = 12;

/// Number of tiles in the default corpus
pub const DEFAULT_TILE_COUNT: usize = 466;

/// Resource location of the default corpus, `{}` is replaced by the tile index
pub const DEFAULT_TILE_PATTERN: &str = "photo_tiles/{}.bmp";

/// Placeholder substituted with the tile index in a tile pattern
pub const TILE_INDEX_PLACEHOLDER: &str = "{}";

// Safety limit to prevent excessive memory allocation
/// Maximum allowed edge length of a tile
pub const MAX_TILE_SIZE: u32 = 1024;

/// Alpha value written to every output pixel
pub const OPAQUE_ALPHA: u8 = 255;

/// Bytes per interleaved RGBA pixel
pub const CHANNELS: usize = 4;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
/// Extension of generated mosaics when no explicit output path is given
pub const OUTPUT_EXTENSION: &str = "png";
/// Input file extensions picked up when the target is a directory
pub const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;

/// How a corpus treats tiles whose dimensions differ from the tile size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileSizePolicy {
    /// Reject the tile, failing the whole corpus load
    #[default]
    Strict,
    /// Resize the tile bilinearly to the tile size before averaging
    Resample,
}

/// Parameters shared by every tile of a corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CorpusOptions {
    /// Edge length of the square tiles
    pub tile_size: u32,
    /// Handling of tiles that are not `tile_size` square
    pub policy: TileSizePolicy,
}

impl Default for CorpusOptions {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            policy: TileSizePolicy::Strict,
        }
    }
}

impl CorpusOptions {
    /// Create options for the given tile size with the strict policy
    pub const fn new(tile_size: u32) -> Self {
        Self {
            tile_size,
            policy: TileSizePolicy::Strict,
        }
    }

    /// Replace the tile size policy
    #[must_use]
    pub const fn with_policy(mut self, policy: TileSizePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Check the tile size is usable
    ///
    /// # Errors
    ///
    /// Returns an error if the tile size is zero or exceeds [`MAX_TILE_SIZE`]
    pub fn validate(&self) -> crate::io::error::Result<()> {
        if self.tile_size == 0 || self.tile_size > MAX_TILE_SIZE {
            return Err(crate::io::error::invalid_parameter(
                "tile_size",
                &self.tile_size,
                &format!("must be between 1 and {MAX_TILE_SIZE}"),
            ));
        }
        Ok(())
    }
}
