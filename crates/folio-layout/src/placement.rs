#![forbid(unsafe_code)]

//! Row-major placement for newly inserted tiles.
//!
//! # Invariants
//!
//! 1. The n-th tile (0-based) lands at `(n / 3, n % 3)`.
//! 2. While fewer than nine tiles exist, no two tiles share a cell.
//!
//! # Failure Modes
//!
//! None. From the tenth tile on the row index leaves the visible 3×3
//! region. The allocator neither wraps nor rejects: the tile is kept and
//! simply has no rendered region. Row indices saturate at `u16::MAX`.

use crate::cell::{GRID_DIM, GridCell};

/// Stateless row-major cell allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlacementAllocator;

impl PlacementAllocator {
    /// Cell for a tile inserted when `current_count` tiles already exist.
    #[must_use]
    pub fn allocate(current_count: usize) -> GridCell {
        let dim = usize::from(GRID_DIM);
        let row = u16::try_from(current_count / dim).unwrap_or(u16::MAX);
        // `current_count % dim < GRID_DIM`, so the cast is lossless.
        let col = (current_count % dim) as u16;
        GridCell::new(row, col)
    }

    /// Number of tiles that fit the visible region.
    #[must_use]
    pub const fn visible_capacity() -> usize {
        (GRID_DIM as usize) * (GRID_DIM as usize)
    }
}
