//! RGB color value and the packed integer key used for model lookups

use std::fmt;

/// An 8-bit-per-channel RGB color
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Color {
    /// Create a color from its three channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from the first three bytes of an RGB or RGBA pixel
    ///
    /// Missing channels read as zero.
    pub fn from_pixel(pixel: &[u8]) -> Self {
        let channel = |i: usize| pixel.get(i).copied().unwrap_or(0);
        Self::new(channel(0), channel(1), channel(2))
    }

    /// Opaque RGBA bytes for this color
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, 255]
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 24-bit packed form of a (quantized) color: `r << 16 | g << 8 | b`
///
/// Equal colors always pack to equal keys and every key decodes back to the
/// color it was built from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TransitionKey(u32);

impl TransitionKey {
    /// Pack a color into a key
    pub const fn from_color(color: Color) -> Self {
        Self(((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32)
    }

    /// Unpack the key into the color it encodes
    pub const fn to_color(self) -> Color {
        Color::new((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }

    /// Raw packed value
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl From<Color> for TransitionKey {
    fn from(color: Color) -> Self {
        Self::from_color(color)
    }
}
