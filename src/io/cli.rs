//! Command-line interface for turning images into photomosaics

use crate::algorithm::compositor::Mosaic;
use crate::algorithm::pipeline::{generate_from_path, generate_mosaic};
use crate::io::configuration::{
    CorpusOptions, DEFAULT_TILE_COUNT, DEFAULT_TILE_PATTERN, DEFAULT_TILE_SIZE, OUTPUT_EXTENSION,
    OUTPUT_SUFFIX, SUPPORTED_EXTENSIONS, TileSizePolicy,
};
use crate::io::corpus::PatternTileProvider;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{export_pixel_buffer, load_pixel_buffer};
use crate::io::progress::ProgressManager;
use crate::spatial::tiles::{TileProvider, load_corpus};
use clap::Parser;
use indicatif::ProgressBar;
use log::{info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "photomosaic")]
#[command(
    author,
    version,
    about = "Rebuild images from a corpus of small tiles matched by average color"
)]
/// Command-line arguments for the mosaic tool
pub struct Cli {
    /// Input image file or directory of images to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Edge length in pixels of the square tiles
    #[arg(short, long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Number of tiles in the corpus
    #[arg(short = 'c', long, default_value_t = DEFAULT_TILE_COUNT)]
    pub tile_count: usize,

    /// Tile path pattern, `{}` is replaced by the tile index
    #[arg(short = 'p', long = "tiles", default_value = DEFAULT_TILE_PATTERN)]
    pub tiles: String,

    /// Resize tiles that are not tile-size square instead of rejecting them
    #[arg(short, long)]
    pub resize_tiles: bool,

    /// Output file (single input only)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Corpus options selected by the tile size and resize flags
    pub const fn corpus_options(&self) -> CorpusOptions {
        let policy = if self.resize_tiles {
            TileSizePolicy::Resample
        } else {
            TileSizePolicy::Strict
        };
        CorpusOptions::new(self.tile_size).with_policy(policy)
    }

    /// Tile provider following the configured pattern and count
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern lacks the index placeholder
    pub fn tile_provider(&self) -> Result<PatternTileProvider> {
        PatternTileProvider::new(self.tiles.clone(), self.tile_count)
    }
}

/// Orchestrates mosaic generation for one file or a directory of files
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// A single input is decoded while the corpus loads; a batch loads the
    /// corpus once and reuses it for every file.
    ///
    /// # Errors
    ///
    /// Returns an error if argument validation, corpus loading, or any file fails
    pub fn process(&mut self) -> Result<()> {
        let options = self.cli.corpus_options();
        options.validate()?;
        let provider = self.cli.tile_provider()?;

        let files = self.collect_files()?;
        if files.is_empty() {
            info!("Nothing to process");
            return Ok(());
        }

        if self.cli.output.is_some() && files.len() > 1 {
            return Err(invalid_parameter(
                "output",
                &self.cli.target.display(),
                &"an explicit output path requires a single input file",
            ));
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        let corpus_bar = self
            .progress_manager
            .as_ref()
            .map(|pm| pm.corpus_bar(provider.tile_count()));
        let tick = |_: usize| {
            if let Some(ref bar) = corpus_bar {
                bar.inc(1);
            }
        };

        if let [single] = files.as_slice() {
            let start_time = Instant::now();
            self.start_file(single);
            let mosaic = generate_from_path(single, &provider, options, tick);
            finish_bar(corpus_bar.as_ref());
            self.write_mosaic(single, mosaic?, start_time)?;
        } else {
            let corpus = load_corpus(&provider, options, tick);
            finish_bar(corpus_bar.as_ref());
            let corpus = corpus?;

            for file in &files {
                let start_time = Instant::now();
                self.start_file(file);
                let source = load_pixel_buffer(file)?;
                let mosaic = generate_mosaic(&source, &corpus)?;
                self.write_mosaic(file, mosaic, start_time)?;
            }
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn start_file(&self, input_path: &Path) {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }
    }

    fn write_mosaic(&self, input_path: &Path, mosaic: Mosaic, start_time: Instant) -> Result<()> {
        let output_path = self
            .cli
            .output
            .clone()
            .unwrap_or_else(|| Self::get_output_path(input_path));

        export_pixel_buffer(mosaic.into_buffer(), &output_path)?;
        info!(
            "Wrote {} in {:.2?}",
            output_path.display(),
            start_time.elapsed()
        );

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }
        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if Self::is_supported_image(target) {
                if self.should_process_file(target) {
                    Ok(vec![target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &target.display(),
                    &format!("must be an image ({})", SUPPORTED_EXTENSIONS.join(", ")),
                ))
            }
        } else if target.is_dir() {
            let entries = std::fs::read_dir(target).map_err(|e| MosaicError::FileSystem {
                path: target.clone(),
                operation: "read directory",
                source: e,
            })?;
            let mut files = Vec::new();
            for entry in entries {
                let path = entry?.path();
                if Self::is_supported_image(&path)
                    && !Self::is_generated_output(&path)
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &target.display(),
                &"must be an image file or directory",
            ))
        }
    }

    /// Check whether a path has one of the supported image extensions
    pub fn is_supported_image(path: &Path) -> bool {
        path.extension()
            .and_then(|s| s.to_str())
            .is_some_and(|ext| {
                SUPPORTED_EXTENSIONS
                    .iter()
                    .any(|supported| supported.eq_ignore_ascii_case(ext))
            })
    }

    fn is_generated_output(path: &Path) -> bool {
        path.file_stem()
            .and_then(|s| s.to_str())
            .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() || self.cli.output.is_some() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    /// Default output location: `<stem>_mosaic.png` beside the input
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            OUTPUT_EXTENSION
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn finish_bar(bar: Option<&ProgressBar>) {
    if let Some(bar) = bar {
        bar.finish_and_clear();
    }
}
