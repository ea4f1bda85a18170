//! Nearest average color lookup over a tile corpus

use crate::analysis::color::Color;
use crate::io::error::{MosaicError, Result};
use crate::spatial::tiles::Tile;

/// Find the tile whose average color is closest to `target`
///
/// Distance is Euclidean in linear RGB. Only a strictly smaller distance
/// replaces the current best, so ties keep the lowest index.
///
/// # Errors
///
/// Returns an error if `tiles` is empty
pub fn find_closest_tile<'a>(target: &Color, tiles: &'a [Tile]) -> Result<(usize, &'a Tile)> {
    let mut best: Option<(usize, &'a Tile, f64)> = None;

    for (index, tile) in tiles.iter().enumerate() {
        let distance = target.distance(tile.average());
        match best {
            Some((_, _, best_distance)) if distance >= best_distance => {}
            _ => best = Some((index, tile, distance)),
        }
    }

    best.map(|(index, tile, _)| (index, tile))
        .ok_or(MosaicError::EmptyCorpus)
}
