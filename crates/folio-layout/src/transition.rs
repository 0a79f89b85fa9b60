#![forbid(unsafe_code)]

//! Eased track resizing between partitions.
//!
//! When focus changes, hosts may animate the tracks from the partition on
//! screen to the newly solved one instead of snapping. A
//! [`PartitionTransition`] interpolates every fraction with an ease-in-out
//! cubic curve over a fixed duration.
//!
//! # Invariants
//!
//! 1. `sample()` equals the start partition at `elapsed == 0` and the target
//!    once `elapsed >= duration`.
//! 2. Every sample sums to `TOTAL_UNITS` per axis: the last track absorbs the
//!    interpolation rounding.
//! 3. `retarget()` starts from the current sample, so a new focus change
//!    mid-flight never jumps.
//!
//! # Failure Modes
//!
//! - Zero duration: every retarget snaps immediately.

use std::time::Duration;

use crate::partition::{PartitionSpec, TOTAL_UNITS};

/// Track transition length used by the showcase.
pub const DEFAULT_TRANSITION: Duration = Duration::from_millis(400);

/// Interpolates track fractions from one partition to another.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionTransition {
    from: PartitionSpec,
    to: PartitionSpec,
    elapsed: Duration,
    duration: Duration,
}

impl PartitionTransition {
    /// Settled transition resting at `initial`.
    #[must_use]
    pub fn new(initial: PartitionSpec) -> Self {
        Self {
            from: initial,
            to: initial,
            elapsed: DEFAULT_TRANSITION,
            duration: DEFAULT_TRANSITION,
        }
    }

    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self.elapsed = self.elapsed.min(duration);
        self
    }

    /// Start moving toward `target` from wherever the tracks are now.
    pub fn retarget(&mut self, target: PartitionSpec) {
        if target == self.to {
            return;
        }
        self.from = self.sample();
        self.to = target;
        self.elapsed = Duration::ZERO;
    }

    /// Advance by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt).min(self.duration);
    }

    /// Linear progress in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.progress() >= 1.0
    }

    #[must_use]
    pub fn target(&self) -> PartitionSpec {
        self.to
    }

    /// Partition to display right now.
    #[must_use]
    pub fn sample(&self) -> PartitionSpec {
        if self.is_settled() {
            return self.to;
        }
        let t = ease_in_out_cubic(self.progress());
        PartitionSpec {
            rows: lerp_tracks(&self.from.rows, &self.to.rows, t),
            cols: lerp_tracks(&self.from.cols, &self.to.cols, t),
        }
    }
}

fn ease_in_out_cubic(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

fn lerp_tracks(from: &[f64; 3], to: &[f64; 3], t: f64) -> [f64; 3] {
    let a = from[0] + (to[0] - from[0]) * t;
    let b = from[1] + (to[1] - from[1]) * t;
    [a, b, TOTAL_UNITS - a - b]
}
