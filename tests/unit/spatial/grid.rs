//! Tests for partitioning images into tile-sized cells

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::spatial::grid::{Cell, Grid};

    // Tests partial strips are excluded from the cell count
    // Verified by rounding the column count up
    #[test]
    fn test_grid_excludes_remainder() {
        let grid = Grid::over(30, 25, 12).expect("positive tile size");

        assert_eq!(grid.columns(), 2);
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cell_count(), 4);
        assert_eq!(grid.covered_dimensions(), (24, 24));
        assert!(!grid.is_empty());
    }

    // Tests exact multiples are covered completely
    // Verified by subtracting one cell per axis
    #[test]
    fn test_grid_exact_multiple() {
        let grid = Grid::over(36, 24, 12).expect("positive tile size");

        assert_eq!((grid.columns(), grid.rows()), (3, 2));
        assert_eq!(grid.covered_dimensions(), (36, 24));
    }

    // Tests cells are produced row by row with pixel offsets
    // Verified by iterating columns in the outer loop
    #[test]
    fn test_cells_row_major() {
        let grid = Grid::over(24, 24, 12).expect("positive tile size");
        let cells: Vec<Cell> = grid.cells().collect();

        let positions: Vec<(u32, u32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(positions, vec![(0, 0), (12, 0), (0, 12), (12, 12)]);
        assert_eq!(
            cells.get(1),
            Some(&Cell {
                column: 1,
                row: 0,
                x: 12,
                y: 0
            })
        );
    }

    // Tests cell lookup outside the grid
    // Verified by removing the bounds check
    #[test]
    fn test_cell_lookup_bounds() {
        let grid = Grid::over(24, 12, 12).expect("positive tile size");

        assert!(grid.cell(1, 0).is_some());
        assert!(grid.cell(2, 0).is_none());
        assert!(grid.cell(0, 1).is_none());
        assert_eq!(grid.row_cells(0).count(), 2);
    }

    // Tests images narrower than a tile produce an empty grid
    // Verified by clamping the column count to one
    #[test]
    fn test_small_image_empty_grid() {
        let grid = Grid::over(11, 100, 12).expect("positive tile size");

        assert!(grid.is_empty());
        assert_eq!(grid.cells().count(), 0);
    }

    // Tests a zero tile size is rejected
    // Verified by removing the zero guard
    #[test]
    fn test_zero_tile_size_errors() {
        assert!(matches!(
            Grid::over(10, 10, 0),
            Err(MosaicError::InvalidDimension { .. })
        ));
    }
}
