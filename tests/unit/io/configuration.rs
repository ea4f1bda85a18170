//! Tests for mosaic configuration constants and corpus options

#[cfg(test)]
mod tests {
    use photomosaic::MosaicError;
    use photomosaic::io::configuration::{
        CHANNELS, CorpusOptions, DEFAULT_TILE_COUNT, DEFAULT_TILE_PATTERN, DEFAULT_TILE_SIZE,
        MAX_TILE_SIZE, OPAQUE_ALPHA, OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS, TILE_INDEX_PLACEHOLDER,
        TileSizePolicy,
    };

    // Tests default corpus shape
    // Verified by changing constant values
    #[test]
    fn test_default_corpus_values() {
        assert_eq!(DEFAULT_TILE_SIZE, 12);
        assert_eq!(DEFAULT_TILE_COUNT, 466);
    }

    // Tests default pattern carries the index placeholder
    // Verified by removing the placeholder
    #[test]
    fn test_default_pattern_has_placeholder() {
        assert!(DEFAULT_TILE_PATTERN.contains(TILE_INDEX_PLACEHOLDER));
    }

    // Tests pixel layout constants
    // Verified by changing channel count
    #[test]
    fn test_pixel_layout() {
        assert_eq!(CHANNELS, 4);
        assert_eq!(OPAQUE_ALPHA, u8::MAX);
    }

    // Tests filesystem safety of suffix
    // Verified by adding special character
    #[test]
    fn test_output_suffix_no_special_chars() {
        assert!(OUTPUT_SUFFIX.starts_with('_'));
        for ch in OUTPUT_SUFFIX.chars() {
            assert!(
                ch.is_alphanumeric() || ch == '_' || ch == '-',
                "Output suffix contains invalid character: {ch}"
            );
        }
    }

    // Tests extension list is lowercase and includes the default tile format
    // Verified by removing bmp
    #[test]
    fn test_supported_extensions() {
        assert!(SUPPORTED_EXTENSIONS.contains(&"bmp"));
        assert!(SUPPORTED_EXTENSIONS.contains(&"png"));
        assert!(
            SUPPORTED_EXTENSIONS
                .iter()
                .all(|ext| ext.chars().all(|c| c.is_ascii_lowercase()))
        );
    }

    // Tests options default to strict sizing at the default tile size
    // Verified by defaulting to resample
    #[test]
    fn test_corpus_options_default() {
        let options = CorpusOptions::default();
        assert_eq!(options.tile_size, DEFAULT_TILE_SIZE);
        assert_eq!(options.policy, TileSizePolicy::Strict);
        assert_eq!(
            CorpusOptions::new(8).with_policy(TileSizePolicy::Resample).policy,
            TileSizePolicy::Resample
        );
    }

    // Tests tile size validation bounds
    // Verified by accepting zero
    #[test]
    fn test_corpus_options_validation() {
        assert!(CorpusOptions::new(1).validate().is_ok());
        assert!(CorpusOptions::new(MAX_TILE_SIZE).validate().is_ok());
        assert!(matches!(
            CorpusOptions::new(0).validate(),
            Err(MosaicError::InvalidParameter {
                parameter: "tile_size",
                ..
            })
        ));
        assert!(CorpusOptions::new(MAX_TILE_SIZE + 1).validate().is_err());
    }
}
