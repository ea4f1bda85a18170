//! Cell partitioning of a normalized image into tile-sized squares

use crate::io::error::{MosaicError, Result};

/// One tile-sized square of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Column index within the grid
    pub column: u32,
    /// Row index within the grid
    pub row: u32,
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
}

/// Full cells covering an image; partial strips at the right and bottom are excluded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    columns: u32,
    rows: u32,
    tile_size: u32,
}

impl Grid {
    /// Partition a `width` x `height` image into `tile_size` squares
    ///
    /// # Errors
    ///
    /// Returns an error if `tile_size` is zero
    pub const fn over(width: u32, height: u32, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(MosaicError::InvalidDimension {
                width: tile_size,
                height: tile_size,
            });
        }
        Ok(Self {
            columns: width / tile_size,
            rows: height / tile_size,
            tile_size,
        })
    }

    /// Number of full cells per row
    pub const fn columns(&self) -> u32 {
        self.columns
    }

    /// Number of full cell rows
    pub const fn rows(&self) -> u32 {
        self.rows
    }

    /// Edge length of each cell
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Total number of cells
    pub const fn cell_count(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    /// Check whether the image is too small to hold a single cell
    pub const fn is_empty(&self) -> bool {
        self.columns == 0 || self.rows == 0
    }

    /// Pixel dimensions covered by full cells
    pub const fn covered_dimensions(&self) -> (u32, u32) {
        (self.columns * self.tile_size, self.rows * self.tile_size)
    }

    /// Cell at grid coordinates, or `None` outside the grid
    pub const fn cell(&self, column: u32, row: u32) -> Option<Cell> {
        if column >= self.columns || row >= self.rows {
            return None;
        }
        Some(Cell {
            column,
            row,
            x: column * self.tile_size,
            y: row * self.tile_size,
        })
    }

    /// Cells of one grid row, left to right
    pub fn row_cells(&self, row: u32) -> impl Iterator<Item = Cell> + '_ {
        (0..self.columns).filter_map(move |column| self.cell(column, row))
    }

    /// Every cell in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| self.row_cells(row))
    }
}
