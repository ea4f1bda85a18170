//! Mathematical utilities for resizing images onto the tile grid

/// Bilinear resampling
pub mod interpolation;
/// Rounding of dimensions to tile multiples
pub mod normalization;
