//! Average color extraction over pixel regions

use crate::io::error::{MosaicError, Result};
use crate::spatial::buffer::Region;

/// Mean RGB value, kept in floating point because it comes from averaging
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red component in `[0, 255]`
    pub r: f64,
    /// Green component in `[0, 255]`
    pub g: f64,
    /// Blue component in `[0, 255]`
    pub b: f64,
}

impl Color {
    /// Create a color from its components
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a color from 8-bit components
    pub fn from_rgb(rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self::new(f64::from(r), f64::from(g), f64::from(b))
    }

    /// Squared Euclidean distance in linear RGB
    ///
    /// Products and sums round separately so near ties resolve the same
    /// way on every target.
    #[allow(clippy::suboptimal_flops)]
    pub fn distance_squared(&self, other: &Self) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Euclidean distance in linear RGB
    pub fn distance(&self, other: &Self) -> f64 {
        self.distance_squared(other).sqrt()
    }
}

/// Arithmetic mean of R, G and B over every pixel of `region`
///
/// Alpha is ignored.
///
/// # Errors
///
/// Returns an error if the region covers no pixels
pub fn average_color(region: &Region<'_>) -> Result<Color> {
    if region.is_empty() {
        return Err(MosaicError::EmptyRegion);
    }

    let mut sums = [0u64; 3];
    let mut count = 0u64;
    for px in region.pixels() {
        for (sum, &value) in sums.iter_mut().zip(px) {
            *sum += u64::from(value);
        }
        count += 1;
    }

    if count == 0 {
        return Err(MosaicError::EmptyRegion);
    }

    let [r, g, b] = sums;
    let count = count as f64;
    Ok(Color::new(r as f64 / count, g as f64 / count, b as f64 / count))
}
