// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Tuning for wheel-driven zoom momentum.
///
/// Wheel deltas accumulate into a momentum value. Each ordinary tick while
/// `|momentum| > threshold`, a slice `momentum * gain` is converted into a
/// zoom factor `exp(-slice * sensitivity)` and the momentum decays by `decay`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WheelConfig {
    /// Fraction of the momentum consumed per tick.
    pub gain: f64,
    /// Multiplicative momentum decay per tick.
    pub decay: f64,
    /// Momentum magnitude at or below which wheel zoom stops.
    pub threshold: f64,
    /// Exponent scale converting a wheel slice into a zoom factor.
    pub sensitivity: f64,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            gain: 0.12,
            decay: 0.94,
            threshold: 0.05,
            sensitivity: 0.0015,
        }
    }
}

/// Camera limits and easing factors.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CameraConfig {
    /// Smallest allowed scale.
    pub min_scale: f64,
    /// Largest allowed scale.
    pub max_scale: f64,
    /// Per-tick pan interpolation factor, in `(0, 1]`.
    pub pan_ease: f64,
    /// Per-tick zoom interpolation factor, in `(0, 1]`.
    pub zoom_ease: f64,
    /// Whether wheel input zooms the camera.
    pub wheel_zoom: bool,
    /// Wheel momentum tuning.
    pub wheel: WheelConfig,
}

impl CameraConfig {
    /// Pointer-and-wheel configuration: scale in `[0.7, 2.0]`, wheel zoom on.
    #[must_use]
    pub fn desktop() -> Self {
        Self {
            min_scale: 0.7,
            max_scale: 2.0,
            pan_ease: 0.07,
            zoom_ease: 0.05,
            wheel_zoom: true,
            wheel: WheelConfig::default(),
        }
    }

    /// Touch configuration: scale in `[0.9, 3.0]`, wheel zoom off.
    #[must_use]
    pub fn mobile() -> Self {
        Self {
            min_scale: 0.9,
            max_scale: 3.0,
            wheel_zoom: false,
            ..Self::desktop()
        }
    }

    /// Returns a copy with ordered scale limits and eases clamped into `(0, 1]`.
    ///
    /// Non-finite or non-positive scale limits fall back to the desktop preset.
    #[must_use]
    pub fn normalized(self) -> Self {
        let fallback = Self::desktop();
        let sane = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v } else { d };
        let a = sane(self.min_scale, fallback.min_scale);
        let b = sane(self.max_scale, fallback.max_scale);
        let ease = |v: f64, d: f64| if v.is_finite() && v > 0.0 { v.min(1.0) } else { d };
        Self {
            min_scale: a.min(b),
            max_scale: a.max(b),
            pan_ease: ease(self.pan_ease, fallback.pan_ease),
            zoom_ease: ease(self.zoom_ease, fallback.zoom_ease),
            ..self
        }
    }

    /// Clamps `scale` into `[min_scale, max_scale]`.
    #[must_use]
    pub fn clamp_scale(&self, scale: f64) -> f64 {
        if scale.is_nan() {
            return self.min_scale;
        }
        scale.clamp(self.min_scale, self.max_scale)
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::desktop()
    }
}
