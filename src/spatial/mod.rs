//! Spatial data structures
//!
//! This module contains spatial-related functionality including:
//! - RGBA pixel buffers and rectangular regions
//! - Partitioning of images into tile-sized cells
//! - Tile corpora and their providers

/// Pixel buffers and borrowed regions
pub mod buffer;
/// Cell grid over a normalized image
pub mod grid;
/// Tile preparation and corpus loading
pub mod tiles;

pub use buffer::{PixelBuffer, Region};
pub use grid::Grid;
