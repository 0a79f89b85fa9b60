#![forbid(unsafe_code)]

//! Logical grid coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Number of rows and columns in the logical grid.
pub const GRID_DIM: u16 = 3;

/// Side length of one cell in fraction units of the 12-unit logical canvas.
pub const CELL_UNITS: u16 = 4;

/// A `(row, col)` cell of the logical grid.
///
/// Visible cells have both coordinates in `0..GRID_DIM`. Rows past the last
/// visible row are representable because placement keeps counting rows once
/// the grid is full; such cells are retained but never rendered.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct GridCell {
    pub row: u16,
    pub col: u16,
}

impl GridCell {
    /// Create a cell.
    #[inline]
    #[must_use]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies inside the rendered 3×3 region.
    #[inline]
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.row < GRID_DIM && self.col < GRID_DIM
    }

    /// All nine visible cells in row-major order.
    pub fn visible() -> impl Iterator<Item = GridCell> {
        (0..GRID_DIM).flat_map(|row| (0..GRID_DIM).map(move |col| GridCell::new(row, col)))
    }

    /// The cell's block on the 12-unit canvas as `(x, y, w, h)`.
    #[must_use]
    pub const fn unit_span(&self) -> (u32, u32, u16, u16) {
        (
            self.col as u32 * CELL_UNITS as u32,
            self.row as u32 * CELL_UNITS as u32,
            CELL_UNITS,
            CELL_UNITS,
        )
    }

    /// Recover a cell from a unit-canvas origin (integer division by the cell size).
    #[must_use]
    pub const fn from_unit_origin(x: u32, y: u32) -> Self {
        Self::new(
            (y / CELL_UNITS as u32) as u16,
            (x / CELL_UNITS as u32) as u16,
        )
    }
}

impl fmt::Display for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
