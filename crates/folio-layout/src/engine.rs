#![forbid(unsafe_code)]

//! The adaptive media grid engine.
//!
//! [`MediaGrid`] owns the tile model and focus tracker and wires them to the
//! partition solver. Every operation runs to completion before returning;
//! callers pull the latest tiles, focus, and partition after each event.
//! [`MediaGrid::render`] always lays out the freshly solved partition; track
//! easing is opt-in through [`MediaGrid::with_transition`] and only affects
//! [`MediaGrid::render_displayed`].
//!
//! ```text
//! pointer enter/leave ─▶ FocusTracker ─▶ PartitionSolver ─▶ render(area)
//! insert(descriptor)  ─▶ PlacementAllocator ─▶ GridModel ──┘
//! ```

use std::time::Duration;

use folio_core::event::PointerEvent;
use folio_core::geometry::Rect;
use serde::{Deserialize, Serialize};

#[cfg(feature = "tracing")]
use web_time::Instant;

use crate::cell::GridCell;
use crate::focus::{CellEvent, FocusState, FocusTracker};
use crate::grid::{GridLayout, HoverRouter};
use crate::model::{GridModel, MediaDescriptor, MediaTile, TileId};
use crate::partition::{ConfigError, LayoutConfig, PartitionSolver, PartitionSpec};
use crate::transition::PartitionTransition;

/// Construction-time configuration for a grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub layout: LayoutConfig,
    pub initial_tiles: Vec<MediaDescriptor>,
}

impl GridConfig {
    #[must_use]
    pub fn new(layout: LayoutConfig) -> Self {
        Self {
            layout,
            initial_tiles: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_tiles(mut self, tiles: impl IntoIterator<Item = MediaDescriptor>) -> Self {
        self.initial_tiles = tiles.into_iter().collect();
        self
    }
}

/// Interactive 3×3 media grid.
#[derive(Debug, Clone)]
pub struct MediaGrid {
    config: LayoutConfig,
    solver: PartitionSolver,
    model: GridModel,
    focus: FocusTracker,
    router: HoverRouter,
    transition: PartitionTransition,
}

impl MediaGrid {
    /// Build a grid, rejecting an invalid focus expansion.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        let solver = PartitionSolver::new(&config.layout)?;
        let model = GridModel::with_tiles(config.initial_tiles);
        Ok(Self {
            config: config.layout,
            solver,
            model,
            focus: FocusTracker::new(),
            router: HoverRouter::new(),
            transition: PartitionTransition::new(PartitionSpec::uniform())
                .with_duration(Duration::ZERO),
        })
    }

    /// Ease displayed tracks over `duration` (e.g. [`DEFAULT_TRANSITION`]).
    /// Zero, the default, disables easing.
    ///
    /// [`DEFAULT_TRANSITION`]: crate::transition::DEFAULT_TRANSITION
    #[must_use]
    pub fn with_transition(mut self, duration: Duration) -> Self {
        self.transition = self.transition.with_duration(duration);
        self
    }

    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    // --- Tiles -----------------------------------------------------------

    /// Append a tile. `None` (and no change) for an empty media reference.
    pub fn insert(&mut self, descriptor: MediaDescriptor) -> Option<MediaTile> {
        self.model.insert(descriptor)
    }

    /// Snapshot of all tiles in insertion order.
    #[must_use]
    pub fn tiles(&self) -> Vec<MediaTile> {
        self.model.list()
    }

    #[must_use]
    pub fn model(&self) -> &GridModel {
        &self.model
    }

    // --- Focus -----------------------------------------------------------

    #[must_use]
    pub fn focus(&self) -> FocusState {
        self.focus.state()
    }

    /// Pointer entered the region of `cell`.
    pub fn pointer_enter(&mut self, cell: GridCell) -> bool {
        self.apply(CellEvent::Enter(cell))
    }

    /// Pointer left the region of `cell`.
    pub fn pointer_leave(&mut self, cell: GridCell) -> bool {
        self.apply(CellEvent::Leave(cell))
    }

    /// Apply a tagged enter/leave. Returns whether focus changed.
    pub fn apply(&mut self, event: CellEvent) -> bool {
        let changed = self.focus.apply(event);
        if changed {
            let target = self.partition();
            self.transition.retarget(target);
        }
        changed
    }

    /// Route a raw pointer event through hit testing against the regions
    /// currently on screen in `area`. Only cells holding a tile take focus.
    pub fn handle_pointer(&mut self, area: Rect, event: PointerEvent) -> bool {
        let layout = self.displayed_layout(area);
        let model = &self.model;
        let events = self
            .router
            .route(&layout, event, |cell| model.tile_at(cell).is_some());
        events
            .into_iter()
            .fold(false, |changed, ev| self.apply(ev) || changed)
    }

    /// Tile showing its caption: the first tile placed at the focal cell.
    #[must_use]
    pub fn caption_tile(&self) -> Option<&MediaTile> {
        self.focus.state().cell().and_then(|cell| self.model.tile_at(cell))
    }

    // --- Partition -------------------------------------------------------

    /// Partition for the current focus, solved fresh.
    #[must_use]
    pub fn partition(&self) -> PartitionSpec {
        #[cfg(feature = "tracing")]
        let _span =
            folio_core::debug_span!("partition.solve", focus = ?self.focus.state()).entered();
        self.solver.solve(self.focus.state())
    }

    /// Partition to draw this frame, eased toward [`Self::partition`].
    #[must_use]
    pub fn displayed_partition(&self) -> PartitionSpec {
        self.transition.sample()
    }

    /// Advance the track transition.
    pub fn tick(&mut self, dt: Duration) {
        self.transition.tick(dt);
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        !self.transition.is_settled()
    }

    // --- Rendering boundary ----------------------------------------------

    /// Regions for the solved partition.
    #[must_use]
    pub fn layout(&self, area: Rect) -> GridLayout {
        GridLayout::compute(area, &self.partition(), self.config.gap)
    }

    /// Regions for the eased partition currently on screen.
    #[must_use]
    pub fn displayed_layout(&self, area: Rect) -> GridLayout {
        GridLayout::compute(area, &self.displayed_partition(), self.config.gap)
    }

    /// Visible tiles with their regions for the current partition, in
    /// insertion order.
    ///
    /// Tiles placed outside the 3×3 grid are omitted.
    #[must_use]
    pub fn render(&self, area: Rect) -> Vec<(TileId, Rect)> {
        self.render_layout(&self.layout(area))
    }

    /// Like [`Self::render`], but sized from [`Self::displayed_partition`].
    #[must_use]
    pub fn render_displayed(&self, area: Rect) -> Vec<(TileId, Rect)> {
        self.render_layout(&self.displayed_layout(area))
    }

    fn render_layout(&self, layout: &GridLayout) -> Vec<(TileId, Rect)> {
        #[cfg(feature = "tracing")]
        let render_start = Instant::now();

        let regions: Vec<_> = self
            .model
            .iter()
            .filter_map(|tile| layout.region(tile.position).map(|rect| (tile.id, rect)))
            .collect();

        #[cfg(feature = "tracing")]
        folio_core::debug!(
            message = "grid.render",
            tiles = self.model.len(),
            rendered = regions.len(),
            render_duration_us = render_start.elapsed().as_micros() as u64
        );

        regions
    }
}
