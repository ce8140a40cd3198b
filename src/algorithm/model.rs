//! First-order color transition model learned from 4-connected pixel adjacencies
//!
//! For every pixel of a sample image, the raw colors of its in-bounds
//! neighbors are appended to a list keyed by the pixel's quantized color.
//! Duplicates are kept, so sampling uniformly from a list reproduces the
//! observed neighbor frequencies.

use crate::color::{Color, Compression, TransitionKey, quantize};
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::PixelBuffer;
use crate::spatial::grid::neighbors;
use log::{debug, warn};
use ndarray::Array2;
use rand::Rng;
use std::collections::HashMap;

/// Learned transitions from quantized colors to observed neighbor colors
///
/// Keys are stored in first-seen order so that uniform key selection is
/// reproducible for a given random source.
#[derive(Clone, Debug, Default)]
pub struct TransitionModel {
    compression: Compression,
    slots: HashMap<TransitionKey, usize>,
    keys: Vec<TransitionKey>,
    transitions: Vec<Vec<Color>>,
}

impl TransitionModel {
    /// Create an untrained model without quantization
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an untrained model using the given compression factor
    pub fn with_compression(compression: Compression) -> Self {
        Self {
            compression,
            ..Self::default()
        }
    }

    /// Compression factor applied to lookup keys
    pub const fn compression(&self) -> Compression {
        self.compression
    }

    /// Change the compression factor
    ///
    /// Keys recorded under a different factor would never be looked up again,
    /// so a trained model is cleared when the factor actually changes.
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidCompressionFactor`] for a zero factor;
    /// the current factor and all recorded transitions are kept
    pub fn set_compression(&mut self, factor: u32) -> Result<()> {
        let compression = Compression::new(factor)?;
        if compression != self.compression && !self.is_empty() {
            warn!(
                "Compression changed from {} to {compression}; discarding {} trained keys",
                self.compression,
                self.len()
            );
            self.reset();
        }
        self.compression = compression;
        Ok(())
    }

    /// Forget every recorded transition
    pub fn reset(&mut self) {
        self.slots.clear();
        self.keys.clear();
        self.transitions.clear();
    }

    /// Number of distinct keys
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Test if no transitions have been recorded
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Total number of recorded observations across all keys
    pub fn observation_count(&self) -> usize {
        self.transitions.iter().map(Vec::len).sum()
    }

    /// Keys in first-seen order
    pub fn keys(&self) -> &[TransitionKey] {
        &self.keys
    }

    /// Recorded neighbor colors for the key of `from`, in insertion order
    pub fn transitions(&self, from: Color) -> Option<&[Color]> {
        let key = self.key_for(from);
        self.slots
            .get(&key)
            .and_then(|&slot| self.transitions.get(slot))
            .map(Vec::as_slice)
    }

    /// Record one observation of `to` next to `from`
    ///
    /// Only the `from` side is quantized; `to` is stored as observed.
    pub fn add_transition(&mut self, from: Color, to: Color) {
        let key = self.key_for(from);
        let slot = match self.slots.get(&key) {
            Some(&slot) => slot,
            None => {
                let slot = self.transitions.len();
                self.slots.insert(key, slot);
                self.keys.push(key);
                self.transitions.push(Vec::new());
                slot
            }
        };
        if let Some(list) = self.transitions.get_mut(slot) {
            list.push(to);
        }
    }

    /// Learn transitions from every 4-connected neighbor pair of a pixel buffer
    ///
    /// Alpha is ignored. Training adds to any transitions already recorded.
    pub fn train(&mut self, buffer: &PixelBuffer) {
        let (width, height) = (buffer.width(), buffer.height());
        let before = self.observation_count();

        for y in 0..height {
            for x in 0..width {
                let Some(color) = buffer.color_at(x, y) else {
                    continue;
                };
                for (nx, ny) in neighbors(x, y, width, height) {
                    if let Some(neighbor) = buffer.color_at(nx, ny) {
                        self.add_transition(color, neighbor);
                    }
                }
            }
        }

        debug!(
            "Trained on {width}x{height} buffer: {} observations, {} keys",
            self.observation_count() - before,
            self.len()
        );
    }

    /// Learn transitions from a color matrix indexed `[row, col]`
    pub fn train_matrix(&mut self, matrix: &Array2<Color>) {
        let (height, width) = matrix.dim();
        for ((y, x), &color) in matrix.indexed_iter() {
            for (nx, ny) in neighbors(x, y, width, height) {
                if let Some(&neighbor) = matrix.get((ny, nx)) {
                    self.add_transition(color, neighbor);
                }
            }
        }
    }

    /// Draw a neighbor color for `from`
    ///
    /// Returns `None` when nothing was ever observed next to `from`'s key;
    /// synthesis leaves such cells unpainted.
    pub fn sample_transition<R: Rng + ?Sized>(&self, from: Color, rng: &mut R) -> Option<Color> {
        let list = self.transitions(from)?;
        if list.is_empty() {
            return None;
        }
        list.get(rng.random_range(0..list.len())).copied()
    }

    /// Draw a uniformly random key and return its (quantized) color
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::EmptyModel`] when the model is untrained
    pub fn sample_seed_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Color> {
        if self.keys.is_empty() {
            return Err(AlgorithmError::EmptyModel);
        }
        self.keys
            .get(rng.random_range(0..self.keys.len()))
            .map(|key| key.to_color())
            .ok_or(AlgorithmError::EmptyModel)
    }

    fn key_for(&self, color: Color) -> TransitionKey {
        TransitionKey::from_color(quantize(color, self.compression))
    }
}
