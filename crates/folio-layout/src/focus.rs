#![forbid(unsafe_code)]

//! Pointer focus tracking for the grid.
//!
//! Each cell is a two-state machine (unfocused / focused). At most one cell
//! is focused at a time, so the union collapses to a single
//! [`FocusState`]: either no focal cell or exactly one.
//!
//! # State Machine
//!
//! ```text
//!              enter(c)                 enter(c'), c' != c
//!   NoFocus ─────────────▶ FocusedAt(c) ───────────────────▶ FocusedAt(c')
//!      ▲                        │
//!      └──────── leave(c) ──────┘
//! ```
//!
//! # Invariants
//!
//! 1. Focus moves directly between cells; there is no intermediate
//!    `NoFocus` when the pointer enters a new cell without a leave.
//! 2. A leave for any cell other than the focal one is ignored.
//! 3. Transitions are applied synchronously; no timers or debounce.
//! 4. Only visible cells can become focal.

use serde::{Deserialize, Serialize};

use crate::cell::GridCell;

/// Current pointer focus of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FocusState {
    #[default]
    NoFocus,
    FocusedAt(GridCell),
}

impl FocusState {
    /// The focal cell, if any.
    #[inline]
    #[must_use]
    pub const fn cell(&self) -> Option<GridCell> {
        match self {
            Self::NoFocus => None,
            Self::FocusedAt(cell) => Some(*cell),
        }
    }

    #[inline]
    #[must_use]
    pub fn is_focused(&self, cell: GridCell) -> bool {
        self.cell() == Some(cell)
    }
}

/// Enter/leave event tagged with the cell whose region produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CellEvent {
    Enter(GridCell),
    Leave(GridCell),
}

impl CellEvent {
    #[must_use]
    pub const fn cell(&self) -> GridCell {
        match self {
            Self::Enter(cell) | Self::Leave(cell) => *cell,
        }
    }
}

/// Sole writer of [`FocusState`].
#[derive(Debug, Clone, Default)]
pub struct FocusTracker {
    state: FocusState,
}

impl FocusTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> FocusState {
        self.state
    }

    /// Pointer entered `cell`. Returns whether the focus state changed.
    pub fn enter(&mut self, cell: GridCell) -> bool {
        if !cell.is_visible() {
            #[cfg(feature = "tracing")]
            folio_core::debug!(message = "focus.enter.ignored", row = cell.row, col = cell.col);
            return false;
        }
        let next = FocusState::FocusedAt(cell);
        if self.state == next {
            return false;
        }
        #[cfg(feature = "tracing")]
        folio_core::trace!(
            message = "focus.enter",
            row = cell.row,
            col = cell.col,
            from = ?self.state
        );
        self.state = next;
        true
    }

    /// Pointer left `cell`. Returns whether the focus state changed.
    ///
    /// Stale leaves (for a cell that no longer holds focus) are dropped.
    pub fn leave(&mut self, cell: GridCell) -> bool {
        if !self.state.is_focused(cell) {
            #[cfg(feature = "tracing")]
            folio_core::trace!(
                message = "focus.leave.stale",
                row = cell.row,
                col = cell.col,
                current = ?self.state
            );
            return false;
        }
        #[cfg(feature = "tracing")]
        folio_core::trace!(message = "focus.leave", row = cell.row, col = cell.col);
        self.state = FocusState::NoFocus;
        true
    }

    /// Apply a tagged event. Returns whether the focus state changed.
    pub fn apply(&mut self, event: CellEvent) -> bool {
        match event {
            CellEvent::Enter(cell) => self.enter(cell),
            CellEvent::Leave(cell) => self.leave(cell),
        }
    }
}
