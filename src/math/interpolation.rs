//! Bilinear image resampling
//!
//! Each destination pixel maps back to a real-valued source coordinate and
//! blends the four surrounding source pixels by their fractional distance.
//! Neighbours past the right or bottom edge are clamped so edge pixels
//! duplicate instead of wrapping.

use crate::io::configuration::{CHANNELS, OPAQUE_ALPHA};
use crate::io::error::{MosaicError, Result};
use crate::spatial::buffer::PixelBuffer;
use rayon::prelude::*;

/// Blend four corner samples, first along x then along y
pub fn interpolate(
    top_left: f64,
    top_right: f64,
    bottom_left: f64,
    bottom_right: f64,
    x_weight: f64,
    y_weight: f64,
) -> f64 {
    let top = top_left * (1.0 - x_weight) + top_right * x_weight;
    let bottom = bottom_left * (1.0 - x_weight) + bottom_right * x_weight;
    top * (1.0 - y_weight) + bottom * y_weight
}

/// Floor index, clamped ceiling index, and fractional weight along one axis
fn axis_samples(dest: u32, dest_len: u32, source_len: u32) -> (u32, u32, f64) {
    let coord = (f64::from(dest) / f64::from(dest_len)) * f64::from(source_len);
    let last = source_len - 1;
    let floor = (coord.floor() as u32).min(last);
    let ceil = (floor + 1).min(last);
    (floor, ceil, coord - coord.floor())
}

// Halves round to even, matching clamped 8-bit canvas storage
fn to_channel(value: f64) -> u8 {
    value.round_ties_even().clamp(0.0, 255.0) as u8
}

fn source_row(source: &PixelBuffer, y: u32) -> Result<&[u8]> {
    source.row(y).ok_or(MosaicError::BufferLength {
        expected: (y as usize + 1) * source.stride(),
        actual: source.data().len(),
    })
}

fn source_pixel(row: &[u8], x: u32) -> Result<&[u8]> {
    let start = x as usize * CHANNELS;
    row.get(start..start + CHANNELS)
        .ok_or(MosaicError::BufferLength {
            expected: start + CHANNELS,
            actual: row.len(),
        })
}

/// Resize `source` to exactly `target_width` x `target_height`
///
/// Output alpha is always opaque regardless of the source alpha.
///
/// # Errors
///
/// Returns an error if either target dimension is zero
pub fn resample(source: &PixelBuffer, target_width: u32, target_height: u32) -> Result<PixelBuffer> {
    if target_width == 0 || target_height == 0 {
        return Err(MosaicError::InvalidDimension {
            width: target_width,
            height: target_height,
        });
    }

    let (source_width, source_height) = source.dimensions();
    let columns: Vec<(u32, u32, f64)> = (0..target_width)
        .map(|x| axis_samples(x, target_width, source_width))
        .collect();

    let mut output = PixelBuffer::filled(target_width, target_height, [0, 0, 0, OPAQUE_ALPHA])?
        .into_data();
    let stride = target_width as usize * CHANNELS;

    output
        .par_chunks_exact_mut(stride)
        .enumerate()
        .try_for_each(|(y, row)| -> Result<()> {
            let (y_floor, y_ceil, y_weight) = axis_samples(y as u32, target_height, source_height);
            let top = source_row(source, y_floor)?;
            let bottom = source_row(source, y_ceil)?;

            for (px, &(x_floor, x_ceil, x_weight)) in
                row.chunks_exact_mut(CHANNELS).zip(columns.iter())
            {
                let tl = source_pixel(top, x_floor)?;
                let tr = source_pixel(top, x_ceil)?;
                let bl = source_pixel(bottom, x_floor)?;
                let br = source_pixel(bottom, x_ceil)?;

                // RGB only, alpha stays opaque from the fill
                let corners = tl.iter().zip(tr).zip(bl).zip(br);
                for (out, (((&a, &b), &c), &d)) in px.iter_mut().zip(corners).take(3) {
                    *out = to_channel(interpolate(
                        f64::from(a),
                        f64::from(b),
                        f64::from(c),
                        f64::from(d),
                        x_weight,
                        y_weight,
                    ));
                }
            }
            Ok(())
        })?;

    PixelBuffer::new(target_width, target_height, output)
}
