//! Tile providers backed by image files on disk

use crate::io::configuration::TILE_INDEX_PLACEHOLDER;
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::load_pixel_buffer;
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::tiles::TileProvider;
use std::path::PathBuf;

/// Decodes tile `i` from a path pattern with `{}` replaced by `i`
///
/// `photo_tiles/{}.bmp` with a count of 3 resolves to `photo_tiles/0.bmp`,
/// `photo_tiles/1.bmp` and `photo_tiles/2.bmp`.
#[derive(Debug, Clone)]
pub struct PatternTileProvider {
    pattern: String,
    count: usize,
}

impl PatternTileProvider {
    /// Create a provider for `count` tiles following `pattern`
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern has no `{}` placeholder
    pub fn new(pattern: impl Into<String>, count: usize) -> Result<Self> {
        let pattern = pattern.into();
        if !pattern.contains(TILE_INDEX_PLACEHOLDER) {
            return Err(invalid_parameter(
                "tiles",
                &pattern,
                &format!("pattern must contain the {TILE_INDEX_PLACEHOLDER} index placeholder"),
            ));
        }
        Ok(Self { pattern, count })
    }

    /// Location of the tile at `index`
    pub fn tile_path(&self, index: usize) -> PathBuf {
        PathBuf::from(
            self.pattern
                .replace(TILE_INDEX_PLACEHOLDER, &index.to_string()),
        )
    }

    /// The configured pattern
    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

impl TileProvider for PatternTileProvider {
    fn tile_count(&self) -> usize {
        self.count
    }

    fn load_tile(&self, index: usize) -> Result<PixelBuffer> {
        load_pixel_buffer(self.tile_path(index))
    }
}
