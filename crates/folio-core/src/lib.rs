#![forbid(unsafe_code)]

//! Core: geometry, pointer events, and logging hooks.
//!
//! # Role in folio
//! `folio-core` is the input layer. It owns the integer raster geometry the
//! grid renderer lays out on and the raw pointer events a host forwards from
//! its windowing or DOM layer.
//!
//! # How it fits in the system
//! `folio-layout` consumes [`geometry::Rect`] for the rendering boundary and
//! turns [`event::PointerEvent`] values into per-cell enter/leave events.

pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root; the other folio crates log
// through these.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
