#![forbid(unsafe_code)]

//! Canonical pointer event types.
//!
//! Hosts translate whatever their windowing layer reports (DOM
//! `pointermove`, terminal mouse reports) into [`PointerEvent`] values.
//! Coordinates are in the same raster as [`crate::geometry::Rect`].

use serde::{Deserialize, Serialize};

/// Kind of raw pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointerEventKind {
    /// Pointer moved to a new position inside the host surface.
    Moved,
    /// Pointer left the host surface entirely.
    Left,
}

/// A raw pointer event with a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PointerEvent {
    /// The type of pointer event.
    pub kind: PointerEventKind,

    /// X coordinate (0-indexed, leftmost column is 0).
    pub x: u16,

    /// Y coordinate (0-indexed, topmost row is 0).
    pub y: u16,
}

impl PointerEvent {
    /// Create a new pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: u16, y: u16) -> Self {
        Self { kind, x, y }
    }

    /// Pointer moved to `(x, y)`.
    #[must_use]
    pub const fn moved(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Moved, x, y)
    }

    /// Pointer left the surface. The position is the last known one.
    #[must_use]
    pub const fn left(x: u16, y: u16) -> Self {
        Self::new(PointerEventKind::Left, x, y)
    }

    /// Position as a tuple.
    #[must_use]
    pub const fn position(&self) -> (u16, u16) {
        (self.x, self.y)
    }
}
