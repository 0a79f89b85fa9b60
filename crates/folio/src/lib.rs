#![forbid(unsafe_code)]

//! Folio public facade crate.
//!
//! Re-exports the showcase grid types from the internal crates, adds a
//! crate-level error type, JSON config loading, and a prelude.
//!
//! ```
//! use folio::prelude::*;
//!
//! let mut grid = MediaGrid::new(folio::showcase::stock_config())?;
//! grid.pointer_enter(GridCell::new(1, 0));
//! assert_eq!(grid.partition().rows, [3.0, 6.0, 3.0]);
//! assert_eq!(grid.caption_tile().map(|t| t.id.get()), Some(4));
//! # Ok::<(), folio::Error>(())
//! ```

use std::fmt;

pub mod showcase;

// --- Core re-exports -------------------------------------------------------

pub use folio_core::event::{PointerEvent, PointerEventKind};
pub use folio_core::geometry::Rect;

// --- Layout re-exports -----------------------------------------------------

pub use folio_layout::{
    CellEvent, ConfigError, FocusState, FocusTracker, GridCell, GridConfig, GridLayout,
    GridModel, HoverRouter, LayoutConfig, MediaDescriptor, MediaGrid, MediaKind, MediaTile,
    PartitionSolver, PartitionSpec, PartitionTransition, PlacementAllocator, TOTAL_UNITS, TileId,
};

#[cfg(feature = "tracing-json")]
pub use folio_core::logging::init_json_subscriber;

// --- Errors ---------------------------------------------------------------

/// Top-level error type for folio hosts.
#[derive(Debug)]
pub enum Error {
    /// Layout configuration rejected.
    Config(ConfigError),
    /// Configuration document could not be parsed.
    Parse(serde_json::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid grid config: {err}"),
            Self::Parse(err) => write!(f, "malformed grid config: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Parse(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err)
    }
}

/// Standard result type for folio APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// Parse and validate a [`GridConfig`] from JSON.
///
/// Missing fields fall back to defaults; an out-of-range focus expansion
/// is reported rather than clamped.
pub fn load_config(json: &str) -> Result<GridConfig> {
    let config: GridConfig = serde_json::from_str(json)?;
    config.layout.validate()?;
    Ok(config)
}

/// Parse a config and build the grid in one step.
pub fn grid_from_json(json: &str) -> Result<MediaGrid> {
    Ok(MediaGrid::new(load_config(json)?)?)
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        CellEvent, Error, FocusState, GridCell, GridConfig, LayoutConfig, MediaDescriptor,
        MediaGrid, MediaKind, PartitionSpec, PointerEvent, Rect, Result,
    };

    pub use crate::{core, layout};
}

pub use folio_core as core;
pub use folio_layout as layout;
