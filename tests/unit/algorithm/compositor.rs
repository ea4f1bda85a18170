//! Tests for per-cell tile matching and placement

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::PixelBuffer;
    use photomosaic::algorithm::compositor::compose_mosaic;
    use photomosaic::io::configuration::CorpusOptions;
    use photomosaic::spatial::tiles::TileCorpus;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn solid(size: u32, rgb: [u8; 3]) -> PixelBuffer {
        let [r, g, b] = rgb;
        PixelBuffer::filled(size, size, [r, g, b, 255]).expect("valid buffer")
    }

    fn random_buffer(width: u32, height: u32, rng: &mut StdRng) -> PixelBuffer {
        let data = (0..width * height * 4).map(|_| rng.random::<u8>()).collect();
        PixelBuffer::new(width, height, data).expect("valid buffer")
    }

    fn cell_bytes(buffer: &PixelBuffer, x: u32, y: u32, size: u32) -> Vec<u8> {
        buffer
            .region(x, y, size, size)
            .expect("cell in bounds")
            .rows()
            .flatten()
            .copied()
            .collect()
    }

    // Tests an all-black source with a black tile equals that tile repeated
    // Verified by writing tiles at transposed offsets
    #[test]
    fn test_black_source_tiles_black() {
        let corpus = TileCorpus::from_buffers(
            &[solid(4, [255, 255, 255]), solid(4, [0, 0, 0])],
            CorpusOptions::new(4),
        )
        .expect("valid corpus");
        let source = PixelBuffer::filled(12, 8, [0, 0, 0, 255]).expect("valid buffer");

        let mosaic = compose_mosaic(&source, &corpus).expect("composition succeeds");

        assert_eq!(mosaic.buffer(), &source);
        assert!(mosaic.assignments().iter().all(|&index| index == 1));
        assert_eq!(mosaic.assignments().len(), 6);
    }

    // Tests output dimensions match tile-multiple inputs
    // Verified by adding a spare row of cells
    #[test]
    fn test_dimensions_preserved_on_multiples() {
        let corpus =
            TileCorpus::from_buffers(&[solid(3, [9, 9, 9])], CorpusOptions::new(3)).expect("valid corpus");
        let source = PixelBuffer::filled(9, 6, [1, 2, 3, 4]).expect("valid buffer");

        let mosaic = compose_mosaic(&source, &corpus).expect("composition succeeds");
        assert_eq!(mosaic.buffer().dimensions(), (9, 6));
        assert!(mosaic.buffer().is_opaque());
    }

    // Tests partial strips are cropped from the output
    // Verified by rounding grid dimensions up
    #[test]
    fn test_remainder_strips_cropped() {
        let corpus =
            TileCorpus::from_buffers(&[solid(12, [0, 0, 0])], CorpusOptions::new(12)).expect("valid corpus");
        let source = PixelBuffer::filled(30, 20, [0, 0, 0, 255]).expect("valid buffer");

        let mosaic = compose_mosaic(&source, &corpus).expect("composition succeeds");
        assert_eq!(mosaic.buffer().dimensions(), (24, 12));
        assert_eq!(mosaic.grid().cell_count(), 2);
    }

    // Tests every output cell is a byte-for-byte copy of its assigned tile
    // Verified by blending the tile with the source cell
    #[test]
    fn test_cells_match_assigned_tiles() {
        let mut rng = StdRng::seed_from_u64(3);
        let tiles: Vec<PixelBuffer> = (0..16).map(|_| random_buffer(4, 4, &mut rng)).collect();
        let corpus = TileCorpus::from_buffers(&tiles, CorpusOptions::new(4)).expect("valid corpus");
        let source = random_buffer(20, 12, &mut rng);

        let mosaic = compose_mosaic(&source, &corpus).expect("composition succeeds");

        for cell in mosaic.grid().cells() {
            let index = mosaic.tile_at(cell.column, cell.row).expect("cell assigned");
            let tile = corpus.get(index).expect("assigned index exists");
            let expected = cell_bytes(tile.pixels(), 0, 0, 4);
            assert_eq!(cell_bytes(mosaic.buffer(), cell.x, cell.y, 4), expected);
        }
    }

    // Tests assignments follow the nearest average color of each cell
    // Verified by matching against the whole image average
    #[test]
    fn test_assignment_follows_cell_color() {
        let corpus = TileCorpus::from_buffers(
            &[solid(2, [250, 0, 0]), solid(2, [0, 250, 0]), solid(2, [0, 0, 250])],
            CorpusOptions::new(2),
        )
        .expect("valid corpus");

        let data = (0..2u32)
            .flat_map(|y| {
                (0..6u32).flat_map(move |x| match (x / 2, y) {
                    (0, _) => [200, 10, 10, 255],
                    (1, _) => [10, 10, 200, 255],
                    _ => [10, 200, 10, 255],
                })
            })
            .collect();
        let source = PixelBuffer::new(6, 2, data).expect("valid buffer");

        let mosaic = compose_mosaic(&source, &corpus).expect("composition succeeds");
        assert_eq!(mosaic.assignments(), &[0, 2, 1]);
        assert_eq!(mosaic.distinct_tiles(), 3);
        assert_eq!(mosaic.usage_counts(corpus.len()), vec![1, 1, 1]);
    }

    // Tests sources smaller than a tile cannot be composed
    // Verified by returning an empty mosaic
    #[test]
    fn test_source_smaller_than_tile_errors() {
        let corpus =
            TileCorpus::from_buffers(&[solid(12, [0, 0, 0])], CorpusOptions::new(12)).expect("valid corpus");
        let source = PixelBuffer::filled(5, 30, [0, 0, 0, 255]).expect("valid buffer");

        assert!(matches!(
            compose_mosaic(&source, &corpus),
            Err(MosaicError::InvalidDimension { width: 5, height: 30 })
        ));
    }

    // Tests parallel composition is deterministic
    // Verified by sharing one output band between rows
    #[test]
    fn test_composition_deterministic() {
        let mut rng = StdRng::seed_from_u64(99);
        let tiles: Vec<PixelBuffer> = (0..8).map(|_| random_buffer(3, 3, &mut rng)).collect();
        let corpus = TileCorpus::from_buffers(&tiles, CorpusOptions::new(3)).expect("valid corpus");
        let source = random_buffer(30, 27, &mut rng);

        let first = compose_mosaic(&source, &corpus).expect("composition succeeds");
        let second = compose_mosaic(&source, &corpus).expect("composition succeeds");
        assert_eq!(first.buffer(), second.buffer());
        assert_eq!(first.assignments(), second.assignments());
    }
}
