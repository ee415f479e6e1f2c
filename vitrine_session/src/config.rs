// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.
//!
//! All types have defaults reproducing the reference gallery: 320-unit images
//! with 40-unit gaps, a pull-back to `0.7`, framing at `1.0`, and an
//! 800 ms / 400 ms / 1500 ms activation timeline.

use core::fmt;
use core::time::Duration;

use vitrine_camera::{ApproachDuration, CameraConfig};

/// Input modality of the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Pointer-and-wheel host: clicks activate groups, the wheel zooms.
    #[default]
    Desktop,
    /// Touch host: clicks are handed back to the embedder to open a group in
    /// its own UI, and there is no wheel zoom.
    Mobile,
}

/// Geometry of group formation, as fractions of the viewport size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutConfig {
    /// Nominal image size in world units.
    pub image_size: f64,
    /// Minimum nominal gap between neighboring images.
    pub min_gap: f64,
    /// The group's world center sits at `x = -width * center_offset`.
    pub center_offset: f64,
    /// Spiral radius limit, as a fraction of viewport width.
    pub radius_width_fraction: f64,
    /// Spiral radius limit, as a fraction of viewport height.
    pub radius_height_fraction: f64,
    /// Horizontal screen anchor for the group center, as a fraction of width.
    pub anchor_x: f64,
    /// Vertical screen anchor for the group center, as a fraction of height.
    pub anchor_y: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            image_size: 320.0,
            min_gap: 40.0,
            center_offset: 0.4,
            radius_width_fraction: 0.28,
            radius_height_fraction: 0.45,
            anchor_x: 0.28,
            anchor_y: 0.5,
        }
    }
}

/// Durations of the activation sequence and image transitions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Timeline {
    /// Pull-back before the group forms.
    pub fade: Duration,
    /// Formation lead time before the camera starts framing.
    pub form: Duration,
    /// Length of the framing approach; the session unlocks when it ends.
    pub framing: ApproachDuration,
    /// Transition time for images moving to their spiral slots.
    pub settle: Duration,
    /// Transition time for programmatic moves after a drag ends.
    pub release_settle: Duration,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(800),
            form: Duration::from_millis(400),
            framing: ApproachDuration::Time(Duration::from_millis(1500)),
            settle: Duration::from_millis(1000),
            release_settle: Duration::from_millis(500),
        }
    }
}

/// Complete session configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionConfig {
    /// Host modality.
    pub platform: Platform,
    /// Camera limits and easing.
    pub camera: CameraConfig,
    /// Formation geometry.
    pub layout: LayoutConfig,
    /// Activation timeline.
    pub timeline: Timeline,
    /// Scale the camera pulls back to when a group is activated.
    pub zoom_out_scale: f64,
    /// Scale the camera frames an activated group at.
    pub framing_scale: f64,
    /// Stacking value the z counter resets to on each activation.
    pub base_z: i32,
}

impl SessionConfig {
    /// Defaults for the given platform, with the matching camera preset.
    #[must_use]
    pub fn for_platform(platform: Platform) -> Self {
        let camera = match platform {
            Platform::Desktop => CameraConfig::desktop(),
            Platform::Mobile => CameraConfig::mobile(),
        };
        let defaults = Self::default();
        Self {
            platform,
            camera,
            zoom_out_scale: camera.clamp_scale(defaults.zoom_out_scale),
            framing_scale: camera.clamp_scale(defaults.framing_scale),
            ..defaults
        }
    }

    /// Checks the configuration for values the session cannot honor.
    ///
    /// Returns the configuration unchanged on success so it can be chained
    /// after deserialization.
    pub fn validate(self) -> Result<Self, ConfigError> {
        let layout = &self.layout;
        let positive = |v: f64| v.is_finite() && v > 0.0;
        let non_negative = |v: f64| v.is_finite() && v >= 0.0;
        let unit = |v: f64| v > 0.0 && v <= 1.0;
        if !positive(layout.image_size) {
            return Err(ConfigError::InvalidLayout("image_size"));
        }
        if !non_negative(layout.min_gap) {
            return Err(ConfigError::InvalidLayout("min_gap"));
        }
        for (name, v) in [
            ("center_offset", layout.center_offset),
            ("radius_width_fraction", layout.radius_width_fraction),
            ("radius_height_fraction", layout.radius_height_fraction),
            ("anchor_x", layout.anchor_x),
            ("anchor_y", layout.anchor_y),
        ] {
            if !v.is_finite() {
                return Err(ConfigError::InvalidLayout(name));
            }
        }

        let cam = &self.camera;
        if !positive(cam.min_scale) || !positive(cam.max_scale) || cam.min_scale > cam.max_scale {
            return Err(ConfigError::InvalidScaleLimits {
                min: cam.min_scale,
                max: cam.max_scale,
            });
        }
        if !unit(cam.pan_ease) {
            return Err(ConfigError::InvalidEase("pan_ease"));
        }
        if !unit(cam.zoom_ease) {
            return Err(ConfigError::InvalidEase("zoom_ease"));
        }
        for (name, v) in [
            ("zoom_out_scale", self.zoom_out_scale),
            ("framing_scale", self.framing_scale),
        ] {
            if !(cam.min_scale..=cam.max_scale).contains(&v) {
                return Err(ConfigError::ScaleOutOfRange { field: name, value: v });
            }
        }
        Ok(self)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            platform: Platform::Desktop,
            camera: CameraConfig::desktop(),
            layout: LayoutConfig::default(),
            timeline: Timeline::default(),
            zoom_out_scale: 0.7,
            framing_scale: 1.0,
            base_z: 4000,
        }
    }
}

/// A configuration value the session cannot honor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConfigError {
    /// A layout field is non-finite or out of its domain.
    InvalidLayout(&'static str),
    /// Scale limits are non-positive, non-finite, or inverted.
    InvalidScaleLimits {
        /// Configured minimum.
        min: f64,
        /// Configured maximum.
        max: f64,
    },
    /// An ease factor lies outside `(0, 1]`.
    InvalidEase(&'static str),
    /// A scale target lies outside the camera's scale limits.
    ScaleOutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// Configured value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLayout(field) => write!(f, "layout field `{field}` is out of range"),
            Self::InvalidScaleLimits { min, max } => {
                write!(f, "invalid camera scale limits [{min}, {max}]")
            }
            Self::InvalidEase(field) => write!(f, "camera `{field}` must lie in (0, 1]"),
            Self::ScaleOutOfRange { field, value } => {
                write!(f, "`{field}` = {value} lies outside the camera scale limits")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
