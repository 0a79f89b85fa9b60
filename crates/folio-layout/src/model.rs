#![forbid(unsafe_code)]

//! Tile collection for the media grid.
//!
//! [`GridModel`] owns every placed [`MediaTile`] in insertion order and is
//! the single source of truth for tile positions. It supports append and
//! lookup only; tiles are never moved, edited, or removed.
//!
//! # Invariants
//!
//! 1. Tile ids are assigned from a monotonic counter starting at 1 and are
//!    never reused.
//! 2. A tile's cell is `PlacementAllocator::allocate(len_before_insert)`.
//! 3. A descriptor with an empty media reference is never admitted.

use serde::{Deserialize, Serialize};

use crate::cell::GridCell;
use crate::placement::PlacementAllocator;

/// Media type of a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// Stable tile identifier.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TileId(u64);

impl TileId {
    /// First id handed out by a fresh model.
    pub const FIRST: TileId = TileId(1);

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }

    fn next(self) -> TileId {
        TileId(self.0.saturating_add(1))
    }
}

/// Caller-supplied description of a tile to insert.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaDescriptor {
    /// Opaque reference to the image or video asset.
    pub source_ref: String,
    pub kind: MediaKind,
    /// Text shown while the tile holds focus. May be empty.
    pub caption: String,
}

impl MediaDescriptor {
    #[must_use]
    pub fn new(source_ref: impl Into<String>, kind: MediaKind, caption: impl Into<String>) -> Self {
        Self {
            source_ref: source_ref.into(),
            kind,
            caption: caption.into(),
        }
    }

    #[must_use]
    pub fn image(source_ref: impl Into<String>, caption: impl Into<String>) -> Self {
        Self::new(source_ref, MediaKind::Image, caption)
    }

    #[must_use]
    pub fn video(source_ref: impl Into<String>, caption: impl Into<String>) -> Self {
        Self::new(source_ref, MediaKind::Video, caption)
    }
}

/// A placed showcase entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaTile {
    pub id: TileId,
    pub source_ref: String,
    pub kind: MediaKind,
    /// Fixed logical placement, set once at insertion.
    pub position: GridCell,
    pub caption: String,
}

/// Ordered tile collection.
#[derive(Debug, Clone)]
pub struct GridModel {
    tiles: Vec<MediaTile>,
    next_id: TileId,
}

impl Default for GridModel {
    fn default() -> Self {
        Self::new()
    }
}

impl GridModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            next_id: TileId::FIRST,
        }
    }

    /// Create a model and insert `descriptors` in order.
    ///
    /// Descriptors with an empty media reference are skipped and do not
    /// consume a cell.
    #[must_use]
    pub fn with_tiles(descriptors: impl IntoIterator<Item = MediaDescriptor>) -> Self {
        let mut model = Self::new();
        for descriptor in descriptors {
            let _ = model.insert(descriptor);
        }
        model
    }

    /// Append a tile at the next row-major cell.
    ///
    /// Returns `None` and leaves the model untouched when
    /// `descriptor.source_ref` is empty.
    pub fn insert(&mut self, descriptor: MediaDescriptor) -> Option<MediaTile> {
        if descriptor.source_ref.is_empty() {
            #[cfg(feature = "tracing")]
            folio_core::debug!(message = "grid.insert.rejected", reason = "empty source_ref");
            return None;
        }

        let position = PlacementAllocator::allocate(self.tiles.len());
        let tile = MediaTile {
            id: self.next_id,
            source_ref: descriptor.source_ref,
            kind: descriptor.kind,
            position,
            caption: descriptor.caption,
        };
        self.next_id = self.next_id.next();

        #[cfg(feature = "tracing")]
        {
            folio_core::debug!(
                message = "grid.insert",
                id = tile.id.get(),
                row = position.row,
                col = position.col,
                visible = position.is_visible()
            );
            if !position.is_visible() {
                folio_core::warn!(
                    message = "grid.insert.overflow",
                    id = tile.id.get(),
                    row = position.row,
                    count = self.tiles.len() + 1
                );
            }
        }

        self.tiles.push(tile.clone());
        Some(tile)
    }

    /// Snapshot of all tiles in insertion order.
    ///
    /// Not a live view; re-fetch after inserting.
    #[must_use]
    pub fn list(&self) -> Vec<MediaTile> {
        self.tiles.clone()
    }

    /// Borrowing iterator over tiles in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &MediaTile> {
        self.tiles.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Look up a tile by id.
    #[must_use]
    pub fn get(&self, id: TileId) -> Option<&MediaTile> {
        self.tiles.iter().find(|tile| tile.id == id)
    }

    /// First tile (in insertion order) placed at `cell`.
    #[must_use]
    pub fn tile_at(&self, cell: GridCell) -> Option<&MediaTile> {
        self.tiles.iter().find(|tile| tile.position == cell)
    }
}
