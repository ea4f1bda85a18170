//! Mosaic assembly from a normalized image and a tile corpus

/// Per-cell averaging, matching and tile placement
pub mod compositor;
/// Normalize, resample and compose in one pass
pub mod pipeline;
