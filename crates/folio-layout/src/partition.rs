#![forbid(unsafe_code)]

//! Row/column partition solving.
//!
//! The 3×3 grid divides each axis into [`TOTAL_UNITS`] fraction units.
//! Without focus every track gets an equal third. With a focal cell the
//! focal row and column take `focus_expansion` units and the other two
//! tracks on each axis split the remainder evenly.
//!
//! # Invariants
//!
//! 1. `rows.sum() == cols.sum() == TOTAL_UNITS` for every focus state.
//! 2. Every fraction is strictly positive.
//! 3. `solve` is pure: equal inputs give equal outputs.
//!
//! # Failure Modes
//!
//! - `focus_expansion` outside `(0, TOTAL_UNITS)` or non-finite: rejected as
//!   a [`ConfigError`] when the solver is built. It is never clamped.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cell::GRID_DIM;
use crate::focus::FocusState;

/// Fraction units per axis.
pub const TOTAL_UNITS: f64 = 12.0;

/// Default units given to the focal row and column.
pub const DEFAULT_FOCUS_EXPANSION: f64 = 6.0;

/// Default spacing between adjacent regions, in raster units.
pub const DEFAULT_GAP: u16 = 4;

const TRACKS: usize = GRID_DIM as usize;

/// Per-grid configuration, read-only for the lifetime of a grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Units given to the focal row and column, in `(0, TOTAL_UNITS)`.
    pub focus_expansion: f64,
    /// Visual gap between adjacent regions. Added on top of the partition,
    /// never carved out of it.
    pub gap: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            focus_expansion: DEFAULT_FOCUS_EXPANSION,
            gap: DEFAULT_GAP,
        }
    }
}

impl LayoutConfig {
    #[must_use]
    pub fn with_focus_expansion(mut self, units: f64) -> Self {
        self.focus_expansion = units;
        self
    }

    #[must_use]
    pub fn with_gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Check that the configuration yields a strictly positive partition.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = self.focus_expansion;
        if !value.is_finite() {
            return Err(ConfigError::NonFiniteExpansion { value });
        }
        if value <= 0.0 || value >= TOTAL_UNITS {
            return Err(ConfigError::ExpansionOutOfRange {
                value,
                total: TOTAL_UNITS,
            });
        }
        Ok(())
    }
}

/// Invalid layout configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonFiniteExpansion { value: f64 },
    ExpansionOutOfRange { value: f64, total: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteExpansion { value } => {
                write!(f, "focus expansion must be finite, got {value}")
            }
            Self::ExpansionOutOfRange { value, total } => write!(
                f,
                "focus expansion {value} outside the open interval (0, {total})"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Row and column fractions of the 3×3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PartitionSpec {
    pub rows: [f64; TRACKS],
    pub cols: [f64; TRACKS],
}

impl Default for PartitionSpec {
    fn default() -> Self {
        Self::uniform()
    }
}

impl PartitionSpec {
    /// Equal thirds on both axes.
    #[must_use]
    pub fn uniform() -> Self {
        let third = TOTAL_UNITS / TRACKS as f64;
        Self {
            rows: [third; TRACKS],
            cols: [third; TRACKS],
        }
    }

    #[must_use]
    pub fn row_sum(&self) -> f64 {
        self.rows.iter().sum()
    }

    #[must_use]
    pub fn col_sum(&self) -> f64 {
        self.cols.iter().sum()
    }

    /// Row tracks as a `"3fr 6fr 3fr"` template.
    #[must_use]
    pub fn row_template(&self) -> String {
        template(&self.rows)
    }

    /// Column tracks as a `"6fr 3fr 3fr"` template.
    #[must_use]
    pub fn col_template(&self) -> String {
        template(&self.cols)
    }
}

fn template(tracks: &[f64; TRACKS]) -> String {
    tracks
        .iter()
        .map(|units| format!("{units}fr"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Pure partition solver bound to a validated focus expansion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartitionSolver {
    focus: f64,
    residual: f64,
}

impl PartitionSolver {
    /// Build a solver, rejecting configurations that would produce a
    /// non-positive track.
    pub fn new(config: &LayoutConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let focus = config.focus_expansion;
        Ok(Self {
            focus,
            // Derived from the focal share, never rounded on its own.
            residual: (TOTAL_UNITS - focus) / 2.0,
        })
    }

    /// Units of the focal track.
    #[must_use]
    pub fn focus_units(&self) -> f64 {
        self.focus
    }

    /// Units of each non-focal track while a cell holds focus.
    #[must_use]
    pub fn residual_units(&self) -> f64 {
        self.residual
    }

    /// Partition for the given focus state.
    ///
    /// A focal cell outside the visible grid has no track to expand and
    /// yields the uniform partition.
    #[must_use]
    pub fn solve(&self, focus: FocusState) -> PartitionSpec {
        match focus {
            FocusState::FocusedAt(cell) if cell.is_visible() => PartitionSpec {
                rows: self.tracks(usize::from(cell.row)),
                cols: self.tracks(usize::from(cell.col)),
            },
            _ => PartitionSpec::uniform(),
        }
    }

    fn tracks(&self, focal: usize) -> [f64; TRACKS] {
        std::array::from_fn(|i| if i == focal { self.focus } else { self.residual })
    }
}

/// One-shot solve from a raw configuration.
pub fn solve(focus: FocusState, config: &LayoutConfig) -> Result<PartitionSpec, ConfigError> {
    Ok(PartitionSolver::new(config)?.solve(focus))
}
