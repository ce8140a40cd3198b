//! Default parameters and safety limits

use crate::color::Compression;

// Growth defaults
/// Number of seeds planted per image
pub const DEFAULT_SEED_POINTS: usize = 1;
/// Frontier removals per millisecond per pending cell during paced growth
pub const DEFAULT_GROWTH_SPEED: f64 = 0.06;
/// Presentation time advanced by each growth tick, in milliseconds
pub const FRAME_INTERVAL_MS: f64 = 16.0;
// Initial frontier allocation relative to the grid area
/// Fraction of the grid area reserved up front for the frontier
pub const FRONTIER_CAPACITY_FRACTION: f64 = 0.005;

// Safety limit to prevent excessive memory allocation
/// Maximum allowed output dimension
pub const MAX_GRID_DIMENSION: usize = 10_000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;
/// Default output width in pixels
pub const DEFAULT_WIDTH: usize = 800;
/// Default output height in pixels
pub const DEFAULT_HEIGHT: usize = 600;
/// Default color compression factor (no quantization)
pub const DEFAULT_COMPRESSION: Compression = Compression::NONE;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_markov";
/// Extensions accepted as sample images
pub const SAMPLE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];
