//! Markov-chain image growth from the color adjacencies of a sample image
//!
//! A [`TransitionModel`](algorithm::model::TransitionModel) records, for every
//! quantized color of a sample, the colors observed in its 4-connected
//! neighborhood. [`synthesize`](algorithm::synthesis::synthesize) then grows a
//! new image from a random seed, painting each reached cell with a color sampled
//! from its painted neighbor's transitions, in a random order driven by a
//! [`RandomPool`](algorithm::pool::RandomPool).

#![forbid(unsafe_code)]

/// Transition model, random pool and synthesis
pub mod algorithm;
/// Color values, packed keys and quantization
pub mod color;
/// Input/output operations, configuration and error handling
pub mod io;
/// Pixel buffers and the paintable grid
pub mod spatial;

pub use algorithm::model::TransitionModel;
pub use algorithm::synthesis::{Growth, GrowthState, SynthesisConfig, synthesize};
pub use color::{Color, Compression};
pub use io::error::{AlgorithmError, Result};
pub use spatial::{Cell, PixelBuffer, PixelGrid};
