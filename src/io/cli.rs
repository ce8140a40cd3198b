//! Command-line interface for batch-growing images from sample files

use crate::algorithm::model::TransitionModel;
use crate::algorithm::synthesis::{Growth, GrowthState, SynthesisConfig};
use crate::color::Compression;
use crate::io::configuration::{
    DEFAULT_COMPRESSION, DEFAULT_GROWTH_SPEED, DEFAULT_HEIGHT, DEFAULT_SEED, DEFAULT_SEED_POINTS, DEFAULT_WIDTH,
    FRAME_INTERVAL_MS, OUTPUT_SUFFIX, SAMPLE_EXTENSIONS,
};
use crate::io::error::{AlgorithmError, Result};
use crate::io::image::{export_grid_as_png, load_pixel_buffer};
use crate::io::progress::ProgressManager;
use clap::Parser;
use log::{info, warn};
use rand::{SeedableRng, rngs::StdRng};
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "markov-painting")]
#[command(
    author,
    version,
    about = "Grow new images from the color adjacencies of sample images"
)]
/// Command-line arguments for the image growth tool
pub struct Cli {
    /// Sample image or directory of sample images
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_HEIGHT)]
    pub height: usize,

    /// Color compression factor; channels are rounded down to multiples of it
    #[arg(short = 'k', long, default_value_t = DEFAULT_COMPRESSION)]
    pub compression: Compression,

    /// Number of seed points growth starts from
    #[arg(short, long, default_value_t = DEFAULT_SEED_POINTS)]
    pub points: usize,

    /// Growth speed in removals per millisecond per pending cell
    #[arg(long, default_value_t = DEFAULT_GROWTH_SPEED)]
    pub speed: f64,

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

    /// Synthesis parameters selected on the command line
    pub const fn synthesis_config(&self) -> SynthesisConfig {
        SynthesisConfig {
            width: self.width,
            height: self.height,
            seed_points: self.points,
            speed: self.speed,
        }
    }
}

/// Trains a model per sample file and writes one grown image for each
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
    /// # Errors
    ///
    /// Returns an error if the target is not a usable image or directory, the
    /// synthesis parameters are invalid, or a sample cannot be read or its
    /// result written
    pub fn process(&mut self) -> Result<()> {
        self.cli.synthesis_config().validate()?;
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            self.process_file(file, index)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if is_sample_image(&self.cli.target) {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(crate::io::error::io_error(
                    "Target file must be a PNG or JPEG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| AlgorithmError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry?.path();
                if is_sample_image(&path) && !is_output(&path) && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be an image file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        if Self::get_output_path(input_path).exists() {
            warn!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        let buffer = load_pixel_buffer(input_path)?;
        let mut model = TransitionModel::with_compression(self.cli.compression);
        model.train(&buffer);

        // Offset per file so each image in a batch differs but stays reproducible
        let rng = StdRng::seed_from_u64(self.cli.seed.wrapping_add(index as u64));
        let config = self.cli.synthesis_config();
        let mut growth = Growth::new(&model, config, rng)?;

        if let Err(err) = growth.seed() {
            if matches!(err, AlgorithmError::EmptyModel) {
                warn!(
                    "Skipping: {} (sample has no neighboring pixels to learn from)",
                    input_path.display()
                );
                return Ok(());
            }
            return Err(err);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, config.width * config.height);
        }

        loop {
            let removals = growth.stats().removals;
            let state = growth.tick(FRAME_INTERVAL_MS)?;
            // A frame whose budget rounds to zero still advances by one cell
            if state != GrowthState::Done && growth.stats().removals == removals {
                growth.step();
            }
            if let Some(ref mut pm) = self.progress_manager {
                pm.update_painted(index, growth.stats().painted);
            }
            if growth.state() == GrowthState::Done {
                break;
            }
        }

        export_grid_as_png(growth.grid(), &output_path)?;

        let stats = growth.stats();
        info!(
            "{} -> {}: {} keys, {} painted, {} holes in {:.2?}",
            input_path.display(),
            output_path.display(),
            model.len(),
            stats.painted,
            growth.grid().hole_count(),
            start_time.elapsed()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(())
    }

    /// Path the grown image for `input_path` is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!("{}{}.png", stem.to_string_lossy(), OUTPUT_SUFFIX);

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_sample_image(path: &Path) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .is_some_and(|ext| {
            SAMPLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
