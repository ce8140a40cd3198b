//! Compression of color channels into coarser buckets
//!
//! A compression factor `k` maps every channel value `v` to `floor(v / k) * k`.
//! Training and sampling must use the same factor for their keys to line up, so
//! the factor travels with the transition model rather than living globally.

use crate::color::Color;
use crate::io::error::{AlgorithmError, Result};
use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

/// A positive integer compression factor
///
/// `Compression::default()` is 1, which leaves colors unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Compression(NonZeroU32);

impl Compression {
    /// Factor that leaves every color unchanged
    pub const NONE: Self = Self(NonZeroU32::MIN);

    /// Validate a compression factor
    ///
    /// # Errors
    ///
    /// Returns [`AlgorithmError::InvalidCompressionFactor`] when `factor` is zero
    pub fn new(factor: u32) -> Result<Self> {
        NonZeroU32::new(factor)
            .map(Self)
            .ok_or_else(|| AlgorithmError::InvalidCompressionFactor {
                value: factor.to_string(),
            })
    }

    /// The factor as a plain integer (always at least 1)
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Compression {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Compression {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || AlgorithmError::InvalidCompressionFactor {
            value: s.to_string(),
        };
        let factor = s.trim().parse::<u32>().map_err(|_parse| invalid())?;
        Self::new(factor).map_err(|_zero| invalid())
    }
}

/// Round a channel value down to a multiple of the compression factor
pub fn compress(value: u8, k: Compression) -> u8 {
    let k = k.get();
    (u32::from(value) / k * k) as u8
}

/// Apply [`compress`] to every channel of a color
pub fn quantize(color: Color, k: Compression) -> Color {
    Color::new(compress(color.r, k), compress(color.g, k), compress(color.b, k))
}
