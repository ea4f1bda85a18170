//! Mosaic composition over a tile grid
//!
//! Every cell is averaged, matched against the corpus, and overwritten with
//! the matched tile. Grid rows own disjoint bands of the output, so they
//! are composed in parallel without synchronization.

use crate::analysis::color::average_color;
use crate::io::configuration::{CHANNELS, OPAQUE_ALPHA};
use crate::io::error::{MosaicError, Result};
use crate::spatial::buffer::PixelBuffer;
use crate::spatial::grid::{Cell, Grid};
use crate::spatial::tiles::{Tile, TileCorpus};
use rayon::prelude::*;
use std::collections::HashSet;

/// Composed mosaic and the tile chosen for each cell
#[derive(Debug, Clone)]
pub struct Mosaic {
    buffer: PixelBuffer,
    assignments: Vec<usize>,
    grid: Grid,
}

impl Mosaic {
    /// Output pixels
    pub const fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    /// Consume the mosaic and return its pixels
    pub fn into_buffer(self) -> PixelBuffer {
        self.buffer
    }

    /// Corpus index of the tile placed in each cell, row-major
    pub fn assignments(&self) -> &[usize] {
        &self.assignments
    }

    /// Grid the mosaic was composed on
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Corpus index placed at grid coordinates
    pub fn tile_at(&self, column: u32, row: u32) -> Option<usize> {
        if column >= self.grid.columns() {
            return None;
        }
        let index = row as usize * self.grid.columns() as usize + column as usize;
        self.assignments.get(index).copied()
    }

    /// Number of different tiles used
    pub fn distinct_tiles(&self) -> usize {
        self.assignments.iter().collect::<HashSet<_>>().len()
    }

    /// How often each corpus index was placed, indexed by tile
    pub fn usage_counts(&self, corpus_len: usize) -> Vec<usize> {
        let mut counts = vec![0; corpus_len];
        for &index in &self.assignments {
            if let Some(count) = counts.get_mut(index) {
                *count += 1;
            }
        }
        counts
    }
}

/// Replace every full cell of `source` with its nearest corpus tile
///
/// The tile size comes from the corpus. Pixels right of the last full
/// column or below the last full row are dropped, so the output equals the
/// source dimensions exactly when they are multiples of the tile size.
///
/// # Errors
///
/// Returns an error if:
/// - The corpus is empty
/// - The source is smaller than one tile on either axis
pub fn compose_mosaic(source: &PixelBuffer, corpus: &TileCorpus) -> Result<Mosaic> {
    if corpus.is_empty() {
        return Err(MosaicError::EmptyCorpus);
    }

    let tile_size = corpus.tile_size();
    let (width, height) = source.dimensions();
    let grid = Grid::over(width, height, tile_size)?;
    if grid.is_empty() {
        return Err(MosaicError::InvalidDimension { width, height });
    }

    let (out_width, out_height) = grid.covered_dimensions();
    let mut output = PixelBuffer::filled(out_width, out_height, [0, 0, 0, OPAQUE_ALPHA])?.into_data();
    let stride = out_width as usize * CHANNELS;
    let band_len = stride * tile_size as usize;

    let band_assignments = output
        .par_chunks_exact_mut(band_len)
        .enumerate()
        .map(|(row, band)| {
            grid.row_cells(row as u32)
                .map(|cell| compose_cell(source, corpus, &cell, &mut *band, stride))
                .collect::<Result<Vec<usize>>>()
        })
        .collect::<Result<Vec<Vec<usize>>>>()?;

    Ok(Mosaic {
        buffer: PixelBuffer::new(out_width, out_height, output)?,
        assignments: band_assignments.into_iter().flatten().collect(),
        grid,
    })
}

fn compose_cell(
    source: &PixelBuffer,
    corpus: &TileCorpus,
    cell: &Cell,
    band: &mut [u8],
    stride: usize,
) -> Result<usize> {
    let tile_size = corpus.tile_size();
    let region = source.region(cell.x, cell.y, tile_size, tile_size)?;
    let color = average_color(&region)?;
    let (index, tile) = corpus.closest(&color)?;
    copy_tile(tile, band, stride, cell.x)?;
    Ok(index)
}

// Writes the tile into a band whose rows start at multiples of `stride`
fn copy_tile(tile: &Tile, band: &mut [u8], stride: usize, x: u32) -> Result<()> {
    let tile_stride = tile.pixels().stride();
    let offset = x as usize * CHANNELS;
    let band_len = band.len();

    for (ty, tile_row) in tile.pixels().data().chunks_exact(tile_stride).enumerate() {
        let start = ty * stride + offset;
        let dest = band
            .get_mut(start..start + tile_stride)
            .ok_or(MosaicError::BufferLength {
                expected: start + tile_stride,
                actual: band_len,
            })?;
        dest.copy_from_slice(tile_row);
        for px in dest.chunks_exact_mut(CHANNELS) {
            if let Some(alpha) = px.get_mut(3) {
                *alpha = OPAQUE_ALPHA;
            }
        }
    }

    Ok(())
}
