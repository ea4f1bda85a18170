//! Rounding of image dimensions to the tile grid

use crate::io::error::{MosaicError, Result};

/// Round `n` to the nearest multiple of `multiple`
///
/// Equidistant candidates resolve to the lower multiple. If the higher
/// multiple does not fit in a `u32` the lower one is returned.
///
/// # Errors
///
/// Returns an error if `multiple` is zero
pub fn nearest_multiple(n: u32, multiple: u32) -> Result<u32> {
    if multiple == 0 {
        return Err(MosaicError::InvalidDimension {
            width: n,
            height: multiple,
        });
    }

    let lower = n - n % multiple;
    if lower == n {
        return Ok(n);
    }

    let Some(higher) = lower.checked_add(multiple) else {
        return Ok(lower);
    };

    if n - lower <= higher - n {
        Ok(lower)
    } else {
        Ok(higher)
    }
}

/// Round both image dimensions to the tile grid
///
/// # Errors
///
/// Returns an error if:
/// - `tile_size` is zero
/// - Either dimension rounds down to zero (smaller than half a tile)
pub fn normalized_dimensions(width: u32, height: u32, tile_size: u32) -> Result<(u32, u32)> {
    let target_width = nearest_multiple(width, tile_size)?;
    let target_height = nearest_multiple(height, tile_size)?;

    if target_width == 0 || target_height == 0 {
        return Err(MosaicError::InvalidDimension {
            width: target_width,
            height: target_height,
        });
    }

    Ok((target_width, target_height))
}
