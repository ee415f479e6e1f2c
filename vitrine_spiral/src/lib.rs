// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Spiral: golden-angle spiral placement for image groups.
//!
//! Given a member count, a world-space center and a radius limit, this crate
//! computes one position per member on a Fermat-style spiral stepped by the
//! [`GOLDEN_ANGLE`]. Two adjustments make it behave for arbitrary group sizes:
//!
//! - **Density**: member spacing shrinks as the group grows
//!   ([`density`], clamped to `[0.8, 2.2]`).
//! - **Blended radius**: a pure `√i` spiral bunches members near the center
//!   for large groups and overflows the limit; blending it 40/60 with a radius
//!   growing linearly in `i / n` keeps later members moving outward, and a
//!   final clamp keeps every member inside `max_radius`.
//!
//! Placement is a pure function of its inputs: the same count and parameters
//! always yield the same positions.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_spiral::SpiralParams;
//!
//! let params = SpiralParams::new(Point::new(-400.0, 0.0), 300.0);
//! let positions = params.place(9);
//! assert_eq!(positions.len(), 9);
//! // The first member always lands on the center.
//! assert_eq!(positions[0], Point::new(-400.0, 0.0));
//! for p in &positions {
//!     assert!((*p - params.center).hypot() <= 300.0 + 1e-9);
//! }
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod spiral;

pub use spiral::{
    GOLDEN_ANGLE, MAX_DENSITY, MIN_DENSITY, REFERENCE_COUNT, SpiralParams, SpiralSlot,
    SpiralSlots, density,
};
