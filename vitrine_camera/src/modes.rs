// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Length of a timed camera approach.
///
/// An approach started with [`crate::Camera::begin_approach`] completes after
/// this much progress has accumulated in [`crate::Camera::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ApproachDuration {
    /// Complete after a wall-clock duration, independent of frame rate.
    Time(Duration),
    /// Complete after a fixed number of ticks, whatever their `dt`.
    ///
    /// This couples the approach to the frame rate; it exists for hosts that
    /// want frame-exact parity with a step-counted animation.
    Frames(u32),
}

impl Default for ApproachDuration {
    fn default() -> Self {
        Self::Time(Duration::from_millis(1500))
    }
}

/// Progress of a timed approach.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ApproachProgress {
    /// Requested length of the approach.
    pub duration: ApproachDuration,
    /// Wall-clock time accumulated so far.
    pub elapsed: Duration,
    /// Ticks accumulated so far.
    pub frames: u32,
}

impl ApproachProgress {
    pub(crate) fn new(duration: ApproachDuration) -> Self {
        Self {
            duration,
            elapsed: Duration::ZERO,
            frames: 0,
        }
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.frames = self.frames.saturating_add(1);
    }

    /// Normalized progress in `[0, 1]`.
    ///
    /// A zero-length approach is complete immediately.
    #[must_use]
    pub fn fraction(&self) -> f64 {
        let t = match self.duration {
            ApproachDuration::Time(total) if total.is_zero() => 1.0,
            ApproachDuration::Time(total) => self.elapsed.as_secs_f64() / total.as_secs_f64(),
            ApproachDuration::Frames(0) => 1.0,
            ApproachDuration::Frames(total) => f64::from(self.frames) / f64::from(total),
        };
        t.min(1.0)
    }

    /// Returns `true` once the approach has run its full length.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.fraction() >= 1.0
    }
}

/// How the camera moves toward its targets on each tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Exponential easing with the configured pan/zoom factors; wheel momentum
    /// is applied.
    #[default]
    Ordinary,
    /// Time-bounded quadratic ease toward a one-shot target.
    Approach(ApproachProgress),
}
