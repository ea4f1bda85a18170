//! Photomosaic generation by nearest average color tile matching
//!
//! A source image is snapped to a grid of square cells by bilinear
//! resampling. Each cell is averaged and replaced by the corpus tile whose
//! average color is closest in linear RGB.

#![forbid(unsafe_code)]

/// Mosaic composition and the end-to-end generation pipeline
pub mod algorithm;
/// Color averaging and nearest tile matching
pub mod analysis;
/// Input/output operations, configuration and error handling
pub mod io;
/// Resampling and dimension normalization
pub mod math;
/// Pixel buffers, cell grids and tile corpora
pub mod spatial;

pub use algorithm::compositor::{Mosaic, compose_mosaic};
pub use algorithm::pipeline::{generate_from_path, generate_mosaic};
pub use io::error::{MosaicError, Result};
pub use spatial::buffer::PixelBuffer;
pub use spatial::tiles::{Tile, TileCorpus, TileProvider, load_corpus};
