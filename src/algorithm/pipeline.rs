//! End-to-end mosaic generation
//!
//! The source image is snapped to the tile grid by bilinear resampling and
//! then composed. When reading from disk, the source decode and the corpus
//! load run side by side and meet at a join before composition.

use crate::algorithm::compositor::{Mosaic, compose_mosaic};
use crate::io::configuration::CorpusOptions;
use crate::io::error::Result;
use crate::io::image::load_pixel_buffer;
use crate::math::interpolation::resample;
use crate::math::normalization::normalized_dimensions;
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::tiles::{TileCorpus, TileProvider, load_corpus};
use log::{debug, info};
use std::path::Path;

/// Resize `source` to the nearest tile multiples and compose it from `corpus`
///
/// # Errors
///
/// Returns an error if:
/// - The corpus is empty
/// - The source is smaller than half a tile on either axis
pub fn generate_mosaic(source: &PixelBuffer, corpus: &TileCorpus) -> Result<Mosaic> {
    let (width, height) = source.dimensions();
    let (target_width, target_height) =
        normalized_dimensions(width, height, corpus.tile_size())?;
    debug!("Normalizing {width}x{height} to {target_width}x{target_height}");

    let normalized = resample(source, target_width, target_height)?;
    let mosaic = compose_mosaic(&normalized, corpus)?;

    let grid = mosaic.grid();
    info!(
        "Composed {}x{} mosaic from {} cells using {} of {} tiles",
        target_width,
        target_height,
        grid.cell_count(),
        mosaic.distinct_tiles(),
        corpus.len()
    );

    Ok(mosaic)
}

/// Decode `path` while loading the corpus, then generate the mosaic
///
/// `on_tile` is forwarded to [`load_corpus`]. If both branches fail the
/// source error is reported.
///
/// # Errors
///
/// Returns an error if the source image fails to decode, the corpus fails
/// to load, or generation fails
pub fn generate_from_path<P, F>(
    path: &Path,
    provider: &P,
    options: CorpusOptions,
    on_tile: F,
) -> Result<Mosaic>
where
    P: TileProvider + ?Sized,
    F: Fn(usize) + Sync + Send,
{
    let (source, corpus) = rayon::join(
        || load_pixel_buffer(path),
        || load_corpus(provider, options, on_tile),
    );
    let source = source?;
    let corpus = corpus?;
    generate_mosaic(&source, &corpus)
}
