#![forbid(unsafe_code)]

//! Logging hooks.
//!
//! With the `tracing` feature the standard `tracing` macros are re-exported
//! here so downstream crates can log through `folio_core` without naming
//! `tracing` directly. Without it this module is empty and every log site in
//! the workspace compiles away.
//!
//! The `tracing-json` feature adds [`init_json_subscriber`], a one-call
//! setup for hosts that want line-delimited JSON logs filtered by
//! `RUST_LOG`.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

/// Install a global JSON subscriber filtered by `RUST_LOG` (default `info`).
///
/// Returns `false` if a global subscriber was already installed.
#[cfg(feature = "tracing-json")]
pub fn init_json_subscriber() -> bool {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
