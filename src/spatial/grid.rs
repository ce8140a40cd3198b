//! Paintable pixel grid grown during synthesis
//!
//! Cells start `Unpainted` and may be painted exactly once. The grid never
//! repaints or clears a cell, so a partially grown grid is always a valid image.

use crate::color::Color;
use crate::spatial::buffer::{PixelBuffer, RGBA_CHANNELS};
use ndarray::Array2;

/// Offsets `(dx, dy)` of the four axis-aligned neighbors: left, up, right, down
pub const ADJACENT: [(isize, isize); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// In-bounds 4-connected neighbors of `(x, y)` in a `width` x `height` area
///
/// Neighbors outside the area are skipped; there is no wraparound.
pub fn neighbors(
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, usize)> {
    ADJACENT.into_iter().filter_map(move |(dx, dy)| {
        let nx = x.checked_add_signed(dx)?;
        let ny = y.checked_add_signed(dy)?;
        (nx < width && ny < height).then_some((nx, ny))
    })
}

/// State of one grid cell
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Cell {
    /// Not reached, or reached without an available transition (a hole)
    #[default]
    Unpainted,
    /// Painted with a sampled color
    Painted(Color),
}

impl Cell {
    /// Color of a painted cell
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Painted(color) => Some(color),
            Self::Unpainted => None,
        }
    }

    /// Whether the cell has been painted
    pub const fn is_painted(self) -> bool {
        matches!(self, Self::Painted(_))
    }
}

/// A `width` x `height` grid of [`Cell`]s, stored `[row, col]`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelGrid {
    cells: Array2<Cell>,
}

impl PixelGrid {
    /// Create a grid with every cell unpainted
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::from_elem((height, width), Cell::Unpainted),
        }
    }

    /// Width in cells
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Height in cells
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Cell at `(x, y)`, or `None` outside the grid
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.cells.get((y, x)).copied()
    }

    /// Color at `(x, y)` if that cell is painted
    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.get(x, y).and_then(Cell::color)
    }

    /// Paint `(x, y)` if it is still unpainted
    ///
    /// Returns `true` when this call painted the cell. Painted cells and
    /// coordinates outside the grid are left untouched and return `false`.
    pub fn paint(&mut self, x: usize, y: usize, color: Color) -> bool {
        match self.cells.get_mut((y, x)) {
            Some(cell) if *cell == Cell::Unpainted => {
                *cell = Cell::Painted(color);
                true
            }
            _ => false,
        }
    }

    /// In-bounds neighbors of `(x, y)`
    pub fn neighbors(&self, x: usize, y: usize) -> impl Iterator<Item = (usize, usize)> {
        neighbors(x, y, self.width(), self.height())
    }

    /// Number of painted cells
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_painted()).count()
    }

    /// Number of unpainted cells (holes, once growth is done)
    pub fn hole_count(&self) -> usize {
        self.cells.len() - self.painted_count()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over `(x, y, cell)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| (col, row, cell))
    }

    /// Render the grid as an RGBA buffer
    ///
    /// Painted cells are opaque; unpainted cells are `[0, 0, 0, 0]`.
    pub fn to_rgba(&self) -> PixelBuffer {
        let mut data = Vec::with_capacity(self.len() * RGBA_CHANNELS);
        for cell in &self.cells {
            data.extend_from_slice(&cell.color().map_or([0; 4], Color::to_rgba));
        }
        PixelBuffer::rgba_from_parts(self.width(), self.height(), data)
    }
}
