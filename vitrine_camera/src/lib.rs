// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Camera: an eased pan/zoom camera for large image canvases.
//!
//! This crate provides a small, headless camera model mapping an unbounded
//! world plane onto a screen. It focuses on:
//! - Current and target pan/zoom with per-frame exponential easing.
//! - Wheel momentum that zooms about the cursor, keeping the world point under
//!   the pointer fixed.
//! - Timed quadratic-ease approaches with a predictable end, for framing
//!   content.
//! - Coordinate conversion between world and screen space.
//!
//! It does **not** own a scene, a frame scheduler, or input routing. Callers
//! are expected to:
//! - Call [`Camera::tick`] once per rendered frame with the frame's `dt`.
//! - Forward wheel deltas and pointer positions from their event loop.
//! - Apply [`Camera::transform`] when drawing.
//!
//! ## Minimal example
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::{Point, Size, Vec2};
//! use vitrine_camera::{Camera, CameraConfig};
//!
//! let mut camera = Camera::centered(CameraConfig::desktop(), Size::new(800.0, 600.0));
//!
//! // Ask for a new pan/zoom; the camera drifts toward it frame by frame.
//! camera.set_target(Vec2::new(200.0, 150.0), 1.5);
//! for _ in 0..600 {
//!     camera.tick(Duration::from_millis(16));
//! }
//! assert!((camera.scale() - 1.5).abs() < 1e-6);
//!
//! // Screen points convert back into world space for hit testing.
//! let world = camera.screen_to_world(Point::new(200.0, 150.0));
//! assert!(world.x.abs() < 1e-3 && world.y.abs() < 1e-3);
//! ```
//!
//! ## Timed approaches
//!
//! ```rust
//! use core::time::Duration;
//! use kurbo::Vec2;
//! use vitrine_camera::{ApproachDuration, Camera, CameraConfig};
//!
//! let mut camera = Camera::new(CameraConfig::desktop());
//! camera.begin_approach(
//!     Vec2::new(400.0, 300.0),
//!     1.0,
//!     ApproachDuration::Time(Duration::from_millis(1500)),
//! );
//! let mut frames = 0;
//! while camera.is_approaching() {
//!     camera.tick(Duration::from_millis(10));
//!     frames += 1;
//! }
//! assert_eq!(frames, 150);
//! assert!((camera.origin() - Vec2::new(400.0, 300.0)).hypot() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Zoom is uniform and axis aligned; there is no rotation.
//! - The pan offset is expressed in screen pixels, the zoom as a scalar.
//! - Wheel zoom is immediate (targets follow the current state) so momentum
//!   and easing never fight each other.
//!
//! This crate is `no_std`.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

mod camera;
mod config;
pub mod easing;
mod modes;

pub use camera::{Camera, CameraDebugInfo};
pub use config::{CameraConfig, WheelConfig};
pub use modes::{ApproachDuration, ApproachProgress, CameraMode};
