//! Tile corpus preparation
//!
//! Tiles are decoded independently and in parallel, validated against the
//! corpus tile size, made opaque, and paired with their average color. The
//! corpus keeps provider index order regardless of which decode finishes
//! first, and a single failing tile aborts the whole load.

use crate::analysis::color::{Color, average_color};
use crate::analysis::matching::find_closest_tile;
use crate::io::configuration::{CorpusOptions, TileSizePolicy};
use crate::io::error::{MosaicError, Result, WithTileIndex, invalid_parameter};
use crate::math::interpolation::resample;
use crate::spatial::buffer::PixelBuffer;
use log::{debug, info};
use rayon::prelude::*;

/// Source of decoded tile images addressed by corpus index
pub trait TileProvider: Sync {
    /// Number of tiles available, indexed `0..tile_count()`
    fn tile_count(&self) -> usize;

    /// Decode the tile at `index`
    ///
    /// # Errors
    ///
    /// Returns an error if the tile is missing or cannot be decoded
    fn load_tile(&self, index: usize) -> Result<PixelBuffer>;
}

impl TileProvider for [PixelBuffer] {
    fn tile_count(&self) -> usize {
        self.len()
    }

    fn load_tile(&self, index: usize) -> Result<PixelBuffer> {
        self.get(index).cloned().ok_or_else(|| {
            invalid_parameter("index", &index, &format!("only {} tiles", self.len()))
        })
    }
}

impl TileProvider for Vec<PixelBuffer> {
    fn tile_count(&self) -> usize {
        self.as_slice().tile_count()
    }

    fn load_tile(&self, index: usize) -> Result<PixelBuffer> {
        self.as_slice().load_tile(index)
    }
}

/// Square tile image with its precomputed average color
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pixels: PixelBuffer,
    average: Color,
}

impl Tile {
    /// Validate or resize a decoded image and compute its average color
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The options are invalid
    /// - The image is not `tile_size` square under [`TileSizePolicy::Strict`]
    pub fn prepare(pixels: PixelBuffer, options: CorpusOptions) -> Result<Self> {
        options.validate()?;
        let size = options.tile_size;
        let (width, height) = pixels.dimensions();

        let pixels = if width == size && height == size {
            pixels
        } else {
            match options.policy {
                TileSizePolicy::Strict => {
                    return Err(MosaicError::TileSizeMismatch {
                        width,
                        height,
                        expected: size,
                    });
                }
                TileSizePolicy::Resample => resample(&pixels, size, size)?,
            }
        };

        let pixels = pixels.into_opaque();
        let average = average_color(&pixels.full_region())?;
        Ok(Self { pixels, average })
    }

    /// Opaque tile pixels
    pub const fn pixels(&self) -> &PixelBuffer {
        &self.pixels
    }

    /// Average color over the full tile
    pub const fn average(&self) -> &Color {
        &self.average
    }

    /// Edge length in pixels
    pub const fn size(&self) -> u32 {
        self.pixels.width()
    }
}

/// Ordered, read-only collection of equally sized tiles
#[derive(Debug, Clone)]
pub struct TileCorpus {
    tiles: Vec<Tile>,
    tile_size: u32,
}

impl TileCorpus {
    /// Build a corpus from in-memory tile images
    ///
    /// # Errors
    ///
    /// Returns an error if no buffers are given or any buffer fails preparation
    pub fn from_buffers(buffers: &[PixelBuffer], options: CorpusOptions) -> Result<Self> {
        load_corpus(buffers, options, |_| {})
    }

    /// Number of tiles
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check whether the corpus holds no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Tiles in index order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Tile at `index`
    pub fn get(&self, index: usize) -> Option<&Tile> {
        self.tiles.get(index)
    }

    /// Edge length shared by every tile
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Index and tile with the nearest average color
    ///
    /// # Errors
    ///
    /// Returns an error if the corpus is empty
    pub fn closest(&self, color: &Color) -> Result<(usize, &Tile)> {
        find_closest_tile(color, &self.tiles)
    }
}

/// Load and prepare every tile of `provider` in parallel
///
/// `on_tile` is called once for each tile that finished preparation, in
/// completion order.
///
/// # Errors
///
/// Returns an error if:
/// - The options are invalid
/// - The provider has no tiles
/// - Any tile fails to load or prepare, reported with its index
pub fn load_corpus<P, F>(provider: &P, options: CorpusOptions, on_tile: F) -> Result<TileCorpus>
where
    P: TileProvider + ?Sized,
    F: Fn(usize) + Sync,
{
    options.validate()?;
    let count = provider.tile_count();
    if count == 0 {
        return Err(MosaicError::EmptyCorpus);
    }

    let size = options.tile_size;
    let policy = options.policy;
    debug!("Loading {count} tiles of {size}x{size} ({policy:?} sizing)");

    let tiles = (0..count)
        .into_par_iter()
        .map(|index| {
            let pixels = provider.load_tile(index).with_tile_index(index)?;
            let tile = Tile::prepare(pixels, options).with_tile_index(index)?;
            on_tile(index);
            Ok(tile)
        })
        .collect::<Result<Vec<Tile>>>()?;

    info!("Loaded tile corpus of {} tiles", tiles.len());

    Ok(TileCorpus {
        tiles,
        tile_size: options.tile_size,
    })
}
