// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vitrine Event State: pointer bookkeeping for direct manipulation.
//!
//! This crate provides small, focused state holders for pointer gestures that
//! span several events:
//!
//! - [`pointer`]: Pointer ids and buttons.
//! - [`drag`]: Track a grabbed item's start position against pointer movement,
//!   converting screen deltas into world positions under zoom.
//! - [`capture`]: Exclusive per-pointer capture, so each pointer drives at most
//!   one drag and stray moves are dropped.
//!
//! The crate does not assume any particular windowing or event system. Callers
//! hit-test and route raw events themselves, then feed positions and pointer
//! ids in here.
//!
//! ## Drag with capture
//!
//! ```rust
//! use kurbo::Point;
//! use vitrine_event_state::capture::PointerCapture;
//! use vitrine_event_state::drag::DragState;
//! use vitrine_event_state::pointer::PointerId;
//!
//! let mut capture = PointerCapture::<&str>::new();
//! let mouse = PointerId(1);
//!
//! // Press on "photo" at screen (100, 100); the photo sits at world (0, 0).
//! capture.capture(mouse, "photo", DragState::new(Point::new(100.0, 100.0), Point::ZERO));
//!
//! // Move; the camera is zoomed out to 0.5, so 10 px covers 20 world units.
//! let grabbed = capture.get_mut(mouse).unwrap();
//! let world = grabbed.drag.world_position(Point::new(110.0, 100.0), 0.5);
//! assert_eq!(world, Point::new(20.0, 0.0));
//!
//! capture.release(mouse);
//! ```
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod capture;
pub mod drag;
pub mod pointer;
