// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::config::CameraConfig;
use crate::easing::{approach, ease_in_out_quad};
use crate::modes::{ApproachDuration, ApproachProgress, CameraMode};

/// Eased pan/zoom camera over a world-space plane.
///
/// The camera keeps a *current* pan/zoom and a *target* pan/zoom. Each call to
/// [`Camera::tick`] moves the current state toward the target, either by the
/// configured exponential ease or, during a timed approach, by a quadratic
/// ease with a fixed end time.
///
/// The screen transform is `translate(origin) * scale(scale)`: a world point
/// `w` appears on screen at `origin + w * scale`.
///
/// The current scale always lies within the configured scale limits.
#[derive(Clone, Debug)]
pub struct Camera {
    config: CameraConfig,
    origin: Vec2,
    scale: f64,
    target_origin: Vec2,
    target_scale: f64,
    pan_limits: Option<Rect>,
    wheel_momentum: f64,
    pointer: Point,
    mode: CameraMode,
    world_to_screen: Affine,
    screen_to_world: Affine,
}

impl Camera {
    /// Creates a camera at rest with the world origin at the screen origin.
    ///
    /// The initial scale is `1.0`, clamped into the configured limits.
    #[must_use]
    pub fn new(config: CameraConfig) -> Self {
        let config = config.normalized();
        let scale = config.clamp_scale(1.0);
        let mut camera = Self {
            config,
            origin: Vec2::ZERO,
            scale,
            target_origin: Vec2::ZERO,
            target_scale: scale,
            pan_limits: None,
            wheel_momentum: 0.0,
            pointer: Point::ORIGIN,
            mode: CameraMode::Ordinary,
            world_to_screen: Affine::IDENTITY,
            screen_to_world: Affine::IDENTITY,
        };
        camera.rebuild_transforms();
        camera
    }

    /// Creates a camera at rest with the world origin at the center of a
    /// viewport of the given size.
    #[must_use]
    pub fn centered(config: CameraConfig, viewport: Size) -> Self {
        let mut camera = Self::new(config);
        let center = viewport.to_vec2() * 0.5;
        camera.origin = center;
        camera.target_origin = center;
        camera.pointer = center.to_point();
        camera.rebuild_transforms();
        camera
    }

    /// Returns the active configuration.
    #[must_use]
    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    /// Current pan offset in screen pixels.
    #[must_use]
    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Current zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Target pan offset.
    #[must_use]
    pub fn target_origin(&self) -> Vec2 {
        self.target_origin
    }

    /// Target zoom factor.
    #[must_use]
    pub fn target_scale(&self) -> f64 {
        self.target_scale
    }

    /// Returns the current movement mode.
    #[must_use]
    pub fn mode(&self) -> CameraMode {
        self.mode
    }

    /// Returns `true` while a timed approach is running.
    #[must_use]
    pub fn is_approaching(&self) -> bool {
        matches!(self.mode, CameraMode::Approach(_))
    }

    /// Accumulated wheel momentum.
    #[must_use]
    pub fn wheel_momentum(&self) -> f64 {
        self.wheel_momentum
    }

    /// Last pointer position recorded as the zoom anchor.
    #[must_use]
    pub fn pointer(&self) -> Point {
        self.pointer
    }

    /// Sets the minimum and maximum scale.
    ///
    /// The range is normalized so that `min <= max`; current and target scales
    /// are clamped into it.
    pub fn set_scale_limits(&mut self, min_scale: f64, max_scale: f64) {
        self.config = CameraConfig {
            min_scale,
            max_scale,
            ..self.config
        }
        .normalized();
        self.scale = self.config.clamp_scale(self.scale);
        self.target_scale = self.config.clamp_scale(self.target_scale);
        self.rebuild_transforms();
    }

    /// Restricts target pan offsets to `limits` (screen pixels), or lifts the
    /// restriction with `None`.
    ///
    /// Limits are applied to the targets on every tick, so the current pan
    /// eases back inside rather than jumping.
    pub fn set_pan_limits(&mut self, limits: Option<Rect>) {
        self.pan_limits = limits.map(|r| r.abs());
    }

    /// Returns the pan limits, if any.
    #[must_use]
    pub fn pan_limits(&self) -> Option<Rect> {
        self.pan_limits
    }

    /// Sets the pan/zoom goal. `scale` is clamped into the scale limits.
    pub fn set_target(&mut self, origin: Vec2, scale: f64) {
        self.target_origin = origin;
        self.target_scale = self.config.clamp_scale(scale);
    }

    /// Sets only the zoom goal, leaving the pan goal unchanged.
    pub fn set_target_scale(&mut self, scale: f64) {
        self.target_scale = self.config.clamp_scale(scale);
    }

    /// Jumps the current state onto the targets, cancelling any easing still
    /// in flight.
    pub fn snap_to_target(&mut self) {
        self.origin = self.target_origin;
        self.scale = self.target_scale;
        self.rebuild_transforms();
    }

    /// Starts a timed quadratic-ease approach toward `origin`/`scale`.
    ///
    /// The camera returns to ordinary easing once `duration` has elapsed.
    pub fn begin_approach(&mut self, origin: Vec2, scale: f64, duration: ApproachDuration) {
        self.set_target(origin, scale);
        self.mode = CameraMode::Approach(ApproachProgress::new(duration));
    }

    /// Records the pointer position used as the wheel-zoom anchor.
    pub fn set_pointer(&mut self, screen: Point) {
        self.pointer = screen;
    }

    /// Adds a wheel delta to the zoom momentum.
    ///
    /// Ignored when wheel zoom is disabled by the configuration.
    pub fn add_wheel(&mut self, delta_y: f64) {
        if self.config.wheel_zoom && delta_y.is_finite() {
            self.wheel_momentum += delta_y;
        }
    }

    /// Discards any accumulated wheel momentum.
    pub fn reset_momentum(&mut self) {
        self.wheel_momentum = 0.0;
    }

    /// Advances the camera by one frame of `dt`.
    pub fn tick(&mut self, dt: Duration) {
        match self.mode {
            CameraMode::Ordinary => {
                if self.config.wheel_zoom {
                    self.apply_wheel_momentum();
                }
                self.clamp_targets();
                self.origin = self.origin.lerp(self.target_origin, self.config.pan_ease);
                self.scale = approach(self.scale, self.target_scale, self.config.zoom_ease);
            }
            CameraMode::Approach(mut progress) => {
                progress.advance(dt);
                let k = ease_in_out_quad(progress.fraction());
                self.clamp_targets();
                self.origin = self.origin.lerp(self.target_origin, k);
                self.scale = approach(self.scale, self.target_scale, k);
                self.mode = if progress.is_complete() {
                    CameraMode::Ordinary
                } else {
                    CameraMode::Approach(progress)
                };
            }
        }
        self.scale = self.config.clamp_scale(self.scale);
        self.rebuild_transforms();
    }

    /// Multiplies the scale by `factor` while keeping `anchor` (screen
    /// coordinates) over the same world point.
    ///
    /// The change is immediate: targets are set to the new state.
    pub fn zoom_about_screen_point(&mut self, anchor: Point, factor: f64) {
        if factor <= 0.0 || !factor.is_finite() {
            return;
        }
        let world = self.screen_to_world(anchor);
        self.scale = self.config.clamp_scale(self.scale * factor);
        self.origin = anchor.to_vec2() - world.to_vec2() * self.scale;
        self.target_scale = self.scale;
        self.target_origin = self.origin;
        self.rebuild_transforms();
    }

    /// World-to-screen transform for the current state.
    #[must_use]
    pub fn transform(&self) -> Affine {
        self.world_to_screen
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn world_to_screen(&self, pt: Point) -> Point {
        self.world_to_screen * pt
    }

    /// Converts a screen point into world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, pt: Point) -> Point {
        self.screen_to_world * pt
    }

    /// Converts a screen-space displacement into a world-space displacement.
    #[must_use]
    pub fn screen_to_world_delta(&self, delta: Vec2) -> Vec2 {
        delta / self.scale
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> CameraDebugInfo {
        CameraDebugInfo {
            origin: self.origin,
            scale: self.scale,
            target_origin: self.target_origin,
            target_scale: self.target_scale,
            min_scale: self.config.min_scale,
            max_scale: self.config.max_scale,
            wheel_momentum: self.wheel_momentum,
            pointer: self.pointer,
            mode: self.mode,
        }
    }

    fn apply_wheel_momentum(&mut self) {
        let wheel = self.config.wheel;
        if self.wheel_momentum.abs() <= wheel.threshold {
            return;
        }
        let slice = self.wheel_momentum * wheel.gain;
        self.wheel_momentum *= wheel.decay;
        let factor = (-slice * wheel.sensitivity).exp();
        self.zoom_about_screen_point(self.pointer, factor);
    }

    fn clamp_targets(&mut self) {
        if let Some(limits) = self.pan_limits {
            self.target_origin = Vec2::new(
                self.target_origin.x.clamp(limits.x0, limits.x1),
                self.target_origin.y.clamp(limits.y0, limits.y1),
            );
        }
    }

    fn rebuild_transforms(&mut self) {
        self.world_to_screen = Affine::translate(self.origin) * Affine::scale(self.scale);
        self.screen_to_world = self.world_to_screen.inverse();
    }
}

/// Debug snapshot of a [`Camera`] state.
#[derive(Clone, Copy, Debug)]
pub struct CameraDebugInfo {
    /// Current pan offset in screen pixels.
    pub origin: Vec2,
    /// Current zoom factor.
    pub scale: f64,
    /// Target pan offset.
    pub target_origin: Vec2,
    /// Target zoom factor.
    pub target_scale: f64,
    /// Minimum scale.
    pub min_scale: f64,
    /// Maximum scale.
    pub max_scale: f64,
    /// Accumulated wheel momentum.
    pub wheel_momentum: f64,
    /// Zoom anchor in screen coordinates.
    pub pointer: Point,
    /// Movement mode.
    pub mode: CameraMode,
}
