//! Randomized flood-fill growth of a new image from a transition model
//!
//! Growth starts from one or more seed cells painted with random model keys.
//! Painted cells wait in a [`RandomPool`]; each removal paints the cell's
//! unpainted neighbors with colors sampled from the model and queues them in
//! turn. Removing cells in random order gives organic, non-raster shapes.
//! A neighbor whose source color has no recorded transition stays a hole.

use crate::algorithm::model::TransitionModel;
use crate::algorithm::pool::RandomPool;
use crate::io::configuration::{
    DEFAULT_GROWTH_SPEED, DEFAULT_SEED_POINTS, FRONTIER_CAPACITY_FRACTION, MAX_GRID_DIMENSION,
};
use crate::io::error::{AlgorithmError, Result, invalid_parameter};
use crate::spatial::grid::{Cell, PixelGrid, neighbors};
use log::debug;
use rand::Rng;

/// Parameters of one synthesis run
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthesisConfig {
    /// Output width in pixels
    pub width: usize,
    /// Output height in pixels
    pub height: usize,
    /// Number of seeds planted before growth starts
    pub seed_points: usize,
    /// Frontier removals per millisecond per pending cell, used by [`Growth::tick`]
    pub speed: f64,
}

impl SynthesisConfig {
    /// Single-seed configuration with the default growth speed
    pub const fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            seed_points: DEFAULT_SEED_POINTS,
            speed: DEFAULT_GROWTH_SPEED,
        }
    }

    /// Check dimensions, seed count and speed
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidParameter`] for a zero or oversized
    /// dimension, zero seeds, or a negative or non-finite speed
    pub fn validate(&self) -> Result<()> {
        for (parameter, value) in [("width", self.width), ("height", self.height)] {
            if value == 0 || value > MAX_GRID_DIMENSION {
                return Err(invalid_parameter(
                    parameter,
                    &value,
                    &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
                ));
            }
        }
        if self.seed_points == 0 {
            return Err(invalid_parameter(
                "seed_points",
                &self.seed_points,
                &"at least one seed is required",
            ));
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(invalid_parameter(
                "speed",
                &self.speed,
                &"must be a finite, non-negative number",
            ));
        }
        Ok(())
    }
}

/// Lifecycle of a [`Growth`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GrowthState {
    /// Created, nothing painted yet
    Idle,
    /// Seeds painted and queued
    Seeded,
    /// At least one frontier cell processed, frontier not yet empty
    Growing,
    /// Frontier drained; the grid is final
    Done,
    /// Seeding failed because the model is empty
    Aborted,
}

/// Counters collected while growing
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GrowthStats {
    /// Cells painted, seeds included
    pub painted: usize,
    /// Frontier removals performed
    pub removals: usize,
    /// Neighbor evaluations that found no transition
    pub failed_transitions: usize,
}

/// One synthesis run, driven to completion or in paced ticks
///
/// The model is borrowed for the lifetime of the run, so it cannot be
/// retrained while a growth reads it. The grid is valid to read between any
/// two calls; abandoning a run is simply not calling it again.
pub struct Growth<'m, R> {
    model: &'m TransitionModel,
    config: SynthesisConfig,
    grid: PixelGrid,
    frontier: RandomPool<[usize; 2]>,
    rng: R,
    state: GrowthState,
    stats: GrowthStats,
}

impl<'m, R: Rng> Growth<'m, R> {
    /// Prepare an unseeded run
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`SynthesisConfig::validate`]
    pub fn new(model: &'m TransitionModel, config: SynthesisConfig, rng: R) -> Result<Self> {
        config.validate()?;
        let cells = config.width * config.height;
        let capacity = (cells as f64 * FRONTIER_CAPACITY_FRACTION) as usize;

        Ok(Self {
            model,
            config,
            grid: PixelGrid::new(config.width, config.height),
            frontier: RandomPool::with_capacity(capacity.max(1)),
            rng,
            state: GrowthState::Idle,
            stats: GrowthStats::default(),
        })
    }

    /// Paint the seed cells and queue them
    ///
    /// Each seed gets a uniformly random coordinate and a uniformly random
    /// model key as its color. A seed landing on an already painted cell is
    /// skipped. Calling this after seeding is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptyModel`] when the model has no keys; the
    /// run moves to [`GrowthState::Aborted`]
    pub fn seed(&mut self) -> Result<()> {
        match self.state {
            GrowthState::Idle => {}
            GrowthState::Aborted => return Err(AlgorithmError::EmptyModel),
            GrowthState::Seeded | GrowthState::Growing | GrowthState::Done => return Ok(()),
        }

        for _ in 0..self.config.seed_points {
            let x = self.rng.random_range(0..self.config.width);
            let y = self.rng.random_range(0..self.config.height);
            let color = match self.model.sample_seed_color(&mut self.rng) {
                Ok(color) => color,
                Err(err) => {
                    self.state = GrowthState::Aborted;
                    return Err(err);
                }
            };
            if self.grid.paint(x, y, color) {
                self.frontier.insert([x, y]);
                self.stats.painted += 1;
            }
        }

        debug!(
            "Seeded {}x{} growth with {} cell(s)",
            self.config.width, self.config.height, self.stats.painted
        );
        self.state = GrowthState::Seeded;
        Ok(())
    }

    /// Process one frontier cell
    ///
    /// Returns `false` once there is nothing left to process.
    pub fn step(&mut self) -> bool {
        if !matches!(self.state, GrowthState::Seeded | GrowthState::Growing) {
            return false;
        }
        let Some([x, y]) = self.frontier.remove_random(&mut self.rng) else {
            self.finish();
            return false;
        };
        self.state = GrowthState::Growing;
        self.stats.removals += 1;

        if let Some(color) = self.grid.color_at(x, y) {
            for (nx, ny) in neighbors(x, y, self.config.width, self.config.height) {
                if self.grid.get(nx, ny) != Some(Cell::Unpainted) {
                    continue;
                }
                match self.model.sample_transition(color, &mut self.rng) {
                    // Painting before queueing keeps each coordinate in the frontier at most once
                    Some(next) => {
                        if self.grid.paint(nx, ny, next) {
                            self.frontier.insert([nx, ny]);
                            self.stats.painted += 1;
                        }
                    }
                    None => self.stats.failed_transitions += 1,
                }
            }
        }

        if self.frontier.is_empty() {
            self.finish();
        }
        true
    }

    /// Advance by `dt` milliseconds of presentation time
    ///
    /// Performs `round(speed * dt * frontier.len())` removals, seeding first
    /// if the run is still idle. Ticks after completion do nothing.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptyModel`] when seeding an idle run fails
    pub fn tick(&mut self, dt: f64) -> Result<GrowthState> {
        if self.state == GrowthState::Idle {
            self.seed()?;
        }
        if matches!(self.state, GrowthState::Seeded | GrowthState::Growing) {
            let budget = (self.config.speed * dt * self.frontier.len() as f64).round();
            // Negative and NaN budgets saturate to zero
            let budget = budget as usize;
            for _ in 0..budget {
                if !self.step() {
                    break;
                }
            }
            if self.frontier.is_empty() {
                self.finish();
            }
        }
        Ok(self.state)
    }

    /// Seed if needed and grow until the frontier is empty
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptyModel`] when seeding fails
    pub fn run(&mut self) -> Result<()> {
        self.seed()?;
        while self.step() {}
        Ok(())
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GrowthState {
        self.state
    }

    /// Counters so far
    pub const fn stats(&self) -> GrowthStats {
        self.stats
    }

    /// Grid as painted so far
    pub const fn grid(&self) -> &PixelGrid {
        &self.grid
    }

    /// Coordinates still waiting to be processed
    pub const fn frontier(&self) -> &RandomPool<[usize; 2]> {
        &self.frontier
    }

    /// Configuration of this run
    pub const fn config(&self) -> &SynthesisConfig {
        &self.config
    }

    /// Consume the run and return its grid
    pub fn into_grid(self) -> PixelGrid {
        self.grid
    }

    fn finish(&mut self) {
        if self.state != GrowthState::Done {
            debug!(
                "Growth done: {} painted, {} holes, {} failed transitions",
                self.stats.painted,
                self.grid.hole_count(),
                self.stats.failed_transitions
            );
        }
        self.state = GrowthState::Done;
    }
}

/// Grow a `width` x `height` image from a single seed
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyModel`] for an untrained model, or
/// [`AlgorithmError::InvalidParameter`] for unusable dimensions
pub fn synthesize<R: Rng + ?Sized>(
    model: &TransitionModel,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Result<PixelGrid> {
    synthesize_with(model, SynthesisConfig::new(width, height), rng)
}

/// Grow an image to completion using an explicit configuration
///
/// # Errors
///
/// Returns [`AlgorithmError::EmptyModel`] for an untrained model, or
/// [`AlgorithmError::InvalidParameter`] for an invalid configuration
pub fn synthesize_with<R: Rng + ?Sized>(
    model: &TransitionModel,
    config: SynthesisConfig,
    rng: &mut R,
) -> Result<PixelGrid> {
    if model.is_empty() {
        return Err(AlgorithmError::EmptyModel);
    }
    let mut growth = Growth::new(model, config, rng)?;
    growth.run()?;
    Ok(growth.into_grid())
}
