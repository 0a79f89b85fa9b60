#![forbid(unsafe_code)]

//! Adaptive media grid layout.
//!
//! A fixed 3×3 grid of media tiles whose row and column proportions follow
//! pointer focus: the focal row and column grow, the others share what is
//! left, and the total per axis never changes.
//!
//! # Primary responsibilities
//! - **GridModel**: ordered tile collection, append-only.
//! - **PlacementAllocator**: row-major cell for each new tile.
//! - **FocusTracker**: single focal cell or none, driven by enter/leave.
//! - **PartitionSolver**: row/column fractions from focus and config.
//! - **GridLayout**: fractions to concrete regions, plus hit testing.
//! - **MediaGrid**: the engine wiring the above together.

pub mod cell;
pub mod engine;
pub mod focus;
pub mod grid;
pub mod model;
pub mod partition;
pub mod placement;
pub mod transition;

pub use cell::{CELL_UNITS, GRID_DIM, GridCell};
pub use engine::{GridConfig, MediaGrid};
pub use focus::{CellEvent, FocusState, FocusTracker};
pub use folio_core::geometry::Rect;
pub use grid::{GridLayout, HoverRouter};
pub use model::{GridModel, MediaDescriptor, MediaKind, MediaTile, TileId};
pub use partition::{
    ConfigError, DEFAULT_FOCUS_EXPANSION, DEFAULT_GAP, LayoutConfig, PartitionSolver,
    PartitionSpec, TOTAL_UNITS, solve,
};
pub use placement::PlacementAllocator;
pub use transition::{DEFAULT_TRANSITION, PartitionTransition};
