#![forbid(unsafe_code)]

//! Rendering boundary: partition fractions to concrete regions.
//!
//! [`GridLayout`] converts a [`PartitionSpec`] into integer track sizes for
//! a container [`Rect`], with a fixed gap between adjacent tracks. The gap
//! is extra space between regions, not part of the fraction units.
//!
//! # Example
//!
//! ```
//! use folio_core::geometry::Rect;
//! use folio_layout::{GridCell, GridLayout, PartitionSpec};
//!
//! let layout = GridLayout::compute(Rect::new(0, 0, 128, 68), &PartitionSpec::uniform(), 4);
//! assert_eq!(layout.region(GridCell::new(0, 0)), Some(Rect::new(0, 0, 40, 20)));
//! assert_eq!(layout.region(GridCell::new(1, 1)), Some(Rect::new(44, 24, 40, 20)));
//! assert_eq!(layout.region(GridCell::new(3, 0)), None);
//! ```
//!
//! # Invariants
//!
//! 1. Track sizes on each axis sum to the axis length minus both gaps
//!    (saturating at zero).
//! 2. Rounding leftovers go to the tracks with the largest fractional part,
//!    lower index first on ties.
//! 3. Gap units belong to no cell for hit testing.
//! 4. The router only targets cells a tile occupies; empty cells behave
//!    like gaps.

use folio_core::event::{PointerEvent, PointerEventKind};
use folio_core::geometry::Rect;

use crate::cell::{GRID_DIM, GridCell};
use crate::focus::CellEvent;
use crate::partition::{PartitionSpec, TOTAL_UNITS};

const TRACKS: usize = GRID_DIM as usize;

/// Solved regions for the visible 3×3 grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridLayout {
    row_heights: [u16; TRACKS],
    col_widths: [u16; TRACKS],
    row_positions: [u16; TRACKS],
    col_positions: [u16; TRACKS],
}

impl GridLayout {
    /// Lay out `spec` inside `area` with `gap` units between tracks.
    #[must_use]
    pub fn compute(area: Rect, spec: &PartitionSpec, gap: u16) -> Self {
        let total_gap = gap.saturating_mul(GRID_DIM - 1);
        let row_heights = split_tracks(area.height.saturating_sub(total_gap), &spec.rows);
        let col_widths = split_tracks(area.width.saturating_sub(total_gap), &spec.cols);

        Self {
            row_positions: positions(&row_heights, area.y, gap),
            col_positions: positions(&col_widths, area.x, gap),
            row_heights,
            col_widths,
        }
    }

    /// Region for a cell, or `None` for cells outside the visible grid.
    #[must_use]
    pub fn region(&self, cell: GridCell) -> Option<Rect> {
        if !cell.is_visible() {
            return None;
        }
        let (r, c) = (usize::from(cell.row), usize::from(cell.col));
        Some(Rect::new(
            self.col_positions[c],
            self.row_positions[r],
            self.col_widths[c],
            self.row_heights[r],
        ))
    }

    /// Cell whose region contains `(x, y)`.
    #[must_use]
    pub fn cell_at(&self, x: u16, y: u16) -> Option<GridCell> {
        GridCell::visible().find(|&cell| {
            self.region(cell)
                .is_some_and(|rect| rect.contains(x, y))
        })
    }

    #[inline]
    #[must_use]
    pub fn row_height(&self, row: usize) -> u16 {
        self.row_heights.get(row).copied().unwrap_or(0)
    }

    #[inline]
    #[must_use]
    pub fn col_width(&self, col: usize) -> u16 {
        self.col_widths.get(col).copied().unwrap_or(0)
    }

    /// Iterate over all visible cells with their regions.
    pub fn iter_cells(&self) -> impl Iterator<Item = (GridCell, Rect)> + '_ {
        GridCell::visible().filter_map(move |cell| self.region(cell).map(|rect| (cell, rect)))
    }
}

/// Proportional integer split with largest-remainder rounding.
fn split_tracks(available: u16, fractions: &[f64; TRACKS]) -> [u16; TRACKS] {
    let mut sizes = [0u16; TRACKS];
    let mut remainders = [0f64; TRACKS];
    let mut allocated: u32 = 0;

    for (i, &units) in fractions.iter().enumerate() {
        let exact = f64::from(available) * units / TOTAL_UNITS;
        let floor = exact.floor().clamp(0.0, f64::from(available));
        // Bounded by `available`, so the cast is lossless.
        sizes[i] = floor as u16;
        remainders[i] = exact - floor;
        allocated += u32::from(sizes[i]);
    }

    let mut leftover = u32::from(available).saturating_sub(allocated);
    let mut order: [usize; TRACKS] = std::array::from_fn(|i| i);
    order.sort_by(|&a, &b| remainders[b].total_cmp(&remainders[a]).then(a.cmp(&b)));
    for &i in order.iter().cycle() {
        if leftover == 0 {
            break;
        }
        sizes[i] = sizes[i].saturating_add(1);
        leftover -= 1;
    }

    sizes
}

fn positions(sizes: &[u16; TRACKS], start: u16, gap: u16) -> [u16; TRACKS] {
    let mut out = [start; TRACKS];
    let mut pos = start;
    for (i, &size) in sizes.iter().enumerate() {
        out[i] = pos;
        pos = pos.saturating_add(size).saturating_add(gap);
    }
    out
}

/// Derives per-cell enter/leave events from raw pointer positions.
///
/// The router remembers which cell the pointer was last over. Moving into a
/// different cell yields a leave for the old cell followed by an enter for
/// the new one; moving into a gap, an empty cell, or off the surface yields
/// only the leave.
#[derive(Debug, Clone, Default)]
pub struct HoverRouter {
    hovered: Option<GridCell>,
}

impl HoverRouter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell currently under the pointer, as last routed.
    #[must_use]
    pub fn hovered(&self) -> Option<GridCell> {
        self.hovered
    }

    /// Route a raw pointer event against `layout`.
    ///
    /// Only cells for which `occupied` holds can be entered.
    pub fn route(
        &mut self,
        layout: &GridLayout,
        event: PointerEvent,
        occupied: impl Fn(GridCell) -> bool,
    ) -> Vec<CellEvent> {
        let target = match event.kind {
            PointerEventKind::Moved => layout.cell_at(event.x, event.y).filter(|&c| occupied(c)),
            PointerEventKind::Left => None,
        };
        if target == self.hovered {
            return Vec::new();
        }

        let mut events = Vec::with_capacity(2);
        if let Some(prev) = self.hovered {
            events.push(CellEvent::Leave(prev));
        }
        if let Some(next) = target {
            events.push(CellEvent::Enter(next));
        }
        self.hovered = target;
        events
    }
}
