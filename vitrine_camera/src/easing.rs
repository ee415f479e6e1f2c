// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Easing curves shared by the camera and by image tweens.

/// Quadratic ease-in/ease-out over `t` in `[0, 1]`.
///
/// Inputs outside the unit interval are clamped first, so the result is
/// always in `[0, 1]` with `f(0) = 0` and `f(1) = 1`.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

/// Cubic ease-out over `t` in `[0, 1]`; fast start, soft landing.
#[must_use]
pub fn ease_out_cubic(t: f64) -> f64 {
    let u = 1.0 - t.clamp(0.0, 1.0);
    1.0 - u * u * u
}

/// Moves `current` a fraction `factor` of the way toward `target`.
///
/// This is the per-frame exponential ease: repeated application converges on
/// `target` without overshooting for `factor` in `(0, 1]`.
#[must_use]
pub fn approach(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// A named easing curve.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    /// Identity curve.
    Linear,
    /// [`ease_in_out_quad`].
    InOutQuad,
    /// [`ease_out_cubic`].
    #[default]
    OutCubic,
}

impl Easing {
    /// Evaluates the curve at `t`, clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::InOutQuad => ease_in_out_quad(t),
            Self::OutCubic => ease_out_cubic(t),
        }
    }
}
