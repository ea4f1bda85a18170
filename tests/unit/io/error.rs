//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::error::{WithTileIndex, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = MosaicError::FileSystem {
            path: "/tmp/tiles".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests tile failures name the index and chain to the cause
    // Verified by omitting the index from the message
    #[test]
    fn test_tile_load_failure_message() {
        let error = MosaicError::TileLoadFailure {
            index: 17,
            source: Box::new(MosaicError::TileSizeMismatch {
                width: 10,
                height: 12,
                expected: 12,
            }),
        };

        let message = error.to_string();
        assert!(message.contains("tile 17"));
        assert!(message.contains("10x12"));
        assert!(error.source().is_some());
    }

    // Tests the tile index wrapper converts foreign errors
    // Verified by returning the original error unchanged
    #[test]
    fn test_with_tile_index_wraps_io_errors() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));

        match result.with_tile_index(4) {
            Err(MosaicError::TileLoadFailure { index, source }) => {
                assert_eq!(index, 4);
                assert!(matches!(*source, MosaicError::FileSystem { .. }));
            }
            _ => unreachable!("Expected TileLoadFailure error type"),
        }
    }

    // Tests InvalidParameter error contains all fields
    // Verified by omitting value from message
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter("tile_size", &0, &"must be positive");

        let message = error.to_string();
        assert!(message.contains("tile_size"));
        assert!(message.contains('0'));
        assert!(message.contains("must be positive"));
    }

    // Tests ImageExport error with IO source
    // Verified by excluding source error from message
    #[test]
    fn test_image_export_error() {
        use std::path::PathBuf;

        let image_error = image::ImageError::IoError(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "access denied",
        ));

        let error = MosaicError::ImageExport {
            path: PathBuf::from("/restricted/output.png"),
            source: image_error,
        };

        let message = error.to_string();
        assert!(message.contains("/restricted/output.png"));
        assert!(error.source().is_some());
        assert!(
            message.contains("access denied"),
            "Error message should include source error details: {message}"
        );
    }

    // Tests dimension and corpus errors describe the problem
    // Verified by swapping width and height in the message
    #[test]
    fn test_core_error_messages() {
        let dimension = MosaicError::InvalidDimension {
            width: 0,
            height: 7,
        };
        assert!(dimension.to_string().contains("0x7"));
        assert!(dimension.source().is_none());

        assert!(MosaicError::EmptyCorpus.to_string().contains("no tiles"));
        assert!(MosaicError::EmptyRegion.to_string().contains("no pixels"));

        let length = MosaicError::BufferLength {
            expected: 16,
            actual: 12,
        };
        assert!(length.to_string().contains("12 bytes"));
    }
}
