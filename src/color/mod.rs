//! Color values, packed lookup keys and quantization

/// Quantization of colors into coarser buckets
pub mod quantize;
/// RGB color value and its packed transition key
pub mod rgb;

pub use quantize::{Compression, compress, quantize};
pub use rgb::{Color, TransitionKey};
