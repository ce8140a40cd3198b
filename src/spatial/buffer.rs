//! Row-major pixel buffers exchanged with decoding and rendering collaborators

use crate::color::Color;
use crate::io::error::{AlgorithmError, Result};

/// Bytes per pixel of an RGBA buffer
pub const RGBA_CHANNELS: usize = 4;
/// Bytes per pixel of an RGB buffer
pub const RGB_CHANNELS: usize = 3;

/// A decoded image: `width * height` pixels stored row-major
///
/// Each pixel is `channels` bytes (`R, G, B[, A]`). Alpha is carried for the
/// renderer but ignored by training.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Wrap RGBA bytes (4 per pixel)
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly `width * height` RGBA pixels
    pub fn from_rgba(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, RGBA_CHANNELS, data)
    }

    /// Wrap RGB bytes (3 per pixel)
    ///
    /// # Errors
    ///
    /// Returns an error if `data` does not hold exactly `width * height` RGB pixels
    pub fn from_rgb(width: usize, height: usize, data: Vec<u8>) -> Result<Self> {
        Self::with_channels(width, height, RGB_CHANNELS, data)
    }

    fn with_channels(width: usize, height: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(channels))
            .ok_or_else(|| AlgorithmError::InvalidSourceData {
                reason: format!("{width}x{height} image is too large"),
            })?;

        if data.len() != expected {
            return Err(AlgorithmError::InvalidSourceData {
                reason: format!(
                    "expected {expected} bytes for a {width}x{height} image with {channels} channels, got {}",
                    data.len()
                ),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    // Caller guarantees `data.len() == width * height * RGBA_CHANNELS`
    pub(crate) const fn rgba_from_parts(width: usize, height: usize, data: Vec<u8>) -> Self {
        Self {
            width,
            height,
            channels: RGBA_CHANNELS,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Bytes per pixel (3 or 4)
    pub const fn channels(&self) -> usize {
        self.channels
    }

    /// Raw bytes, row-major
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consume the buffer and return its bytes
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Bytes of the pixel at `(x, y)`, or `None` outside the image
    pub fn pixel(&self, x: usize, y: usize) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let start = (y * self.width + x) * self.channels;
        self.data.get(start..start + self.channels)
    }

    /// Color of the pixel at `(x, y)`, or `None` outside the image
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.pixel(x, y).map(Color::from_pixel)
    }
}
