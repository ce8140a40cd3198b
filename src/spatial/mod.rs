//! Spatial data structures shared by training and synthesis
//!
//! This module contains:
//! - The raw pixel buffer exchanged with decoding and rendering collaborators
//! - The pixel grid grown during synthesis
//! - 4-connected neighbor enumeration

/// Row-major RGB/RGBA pixel buffers
pub mod buffer;
/// Paintable pixel grid and neighbor offsets
pub mod grid;

pub use buffer::PixelBuffer;
pub use grid::{Cell, PixelGrid};
