//! Owned RGBA pixel buffers and borrowed rectangular regions
//!
//! Buffers are the only currency between pipeline stages. Each stage takes
//! its input by reference and hands a freshly allocated buffer to the next.

use crate::io::configuration::{CHANNELS, OPAQUE_ALPHA};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use image::RgbaImage;

/// Interleaved 8-bit RGBA pixels with positive dimensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap raw RGBA bytes
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Either dimension is zero
    /// - `data` is not exactly `width * height * 4` bytes long
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        let expected = Self::byte_len(width, height)?;
        if data.len() != expected {
            return Err(MosaicError::BufferLength {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self> {
        let len = Self::byte_len(width, height)?;
        let data = rgba.iter().copied().cycle().take(len).collect();
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of a decoded `image` buffer
    ///
    /// # Errors
    ///
    /// Returns an error if the image has a zero dimension
    pub fn from_rgba_image(image: RgbaImage) -> Result<Self> {
        let (width, height) = image.dimensions();
        Self::new(width, height, image.into_raw())
    }

    /// Convert into an `image` buffer for encoding
    ///
    /// # Errors
    ///
    /// Returns an error if the pixel data no longer matches the dimensions
    pub fn into_rgba_image(self) -> Result<RgbaImage> {
        let expected = self.data.len();
        RgbaImage::from_raw(self.width, self.height, self.data).ok_or(
            MosaicError::BufferLength {
                expected,
                actual: expected,
            },
        )
    }

    fn byte_len(width: u32, height: u32) -> Result<usize> {
        if width == 0 || height == 0 {
            return Err(MosaicError::InvalidDimension { width, height });
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(CHANNELS))
            .ok_or_else(|| {
                invalid_parameter(
                    "dimensions",
                    &format!("{width}x{height}"),
                    &"pixel count overflows addressable memory",
                )
            })
    }

    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Raw interleaved RGBA bytes
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Number of bytes in one row of pixels
    pub const fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// Bytes of row `y`, or `None` past the bottom edge
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        let stride = self.stride();
        let start = y as usize * stride;
        self.data.get(start..start + stride)
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width {
            return None;
        }
        let start = x as usize * CHANNELS;
        let px = self.row(y)?.get(start..start + CHANNELS)?;
        px.try_into().ok()
    }

    /// Borrow the whole buffer as a region
    pub const fn full_region(&self) -> Region<'_> {
        Region {
            buffer: self,
            x: 0,
            y: 0,
            width: self.width,
            height: self.height,
        }
    }

    /// Borrow a rectangular sub-region
    ///
    /// Zero-sized regions are allowed; averaging them fails later.
    ///
    /// # Errors
    ///
    /// Returns an error if the rectangle extends past the buffer edges
    pub fn region(&self, x: u32, y: u32, width: u32, height: u32) -> Result<Region<'_>> {
        let fits_x = x.checked_add(width).is_some_and(|end| end <= self.width);
        let fits_y = y.checked_add(height).is_some_and(|end| end <= self.height);
        if !(fits_x && fits_y) {
            return Err(invalid_parameter(
                "region",
                &format!("{width}x{height} at ({x}, {y})"),
                &format!("exceeds buffer of {}x{}", self.width, self.height),
            ));
        }
        Ok(Region {
            buffer: self,
            x,
            y,
            width,
            height,
        })
    }

    /// Force every alpha byte to fully opaque
    #[must_use]
    pub fn into_opaque(mut self) -> Self {
        for px in self.data.chunks_exact_mut(CHANNELS) {
            if let Some(alpha) = px.get_mut(3) {
                *alpha = OPAQUE_ALPHA;
            }
        }
        self
    }

    /// Check whether every pixel is fully opaque
    pub fn is_opaque(&self) -> bool {
        self.data
            .chunks_exact(CHANNELS)
            .all(|px| px.get(3) == Some(&OPAQUE_ALPHA))
    }
}

/// Borrowed rectangular view into a [`PixelBuffer`]
#[derive(Debug, Clone, Copy)]
pub struct Region<'a> {
    buffer: &'a PixelBuffer,
    x: u32,
    y: u32,
    width: u32,
    height: u32,
}

impl<'a> Region<'a> {
    /// Width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels covered
    pub const fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check whether the region covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Iterate the RGBA bytes of each row, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        let buffer = self.buffer;
        let start = self.x as usize * CHANNELS;
        let end = start + self.width as usize * CHANNELS;
        (self.y..self.y + self.height)
            .filter_map(move |row| buffer.row(row).and_then(|bytes| bytes.get(start..end)))
    }

    /// Iterate every pixel of the region in row-major order
    pub fn pixels(&self) -> impl Iterator<Item = &'a [u8]> + 'a {
        self.rows().flat_map(|row| row.chunks_exact(CHANNELS))
    }
}
