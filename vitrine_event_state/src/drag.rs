// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track a grabbed item's origin against pointer movement.
//!
//! ## Usage
//!
//! 1) Begin a drag with [`DragState::new`], passing the pointer's screen
//!    position and the grabbed item's world position.
//! 2) On each move event, call [`DragState::update`] for the incremental
//!    screen delta, or [`DragState::world_position`] for the item's new
//!    world position under the current zoom.
//! 3) Drop the state when the pointer is released.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vitrine_event_state::drag::DragState;
//!
//! // Grab an item at world (100, 50) with the pointer at screen (10, 20).
//! let mut drag = DragState::new(Point::new(10.0, 20.0), Point::new(100.0, 50.0));
//!
//! // Move the pointer by (30, -10) screen pixels while zoomed in 2x.
//! let pos = Point::new(40.0, 10.0);
//! assert_eq!(drag.update(pos).x, 30.0);
//! assert_eq!(drag.world_position(pos, 2.0), Point::new(115.0, 45.0));
//! ```

use kurbo::{Point, Vec2};

/// Tracks one drag from press to release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position when the drag started, in screen coordinates.
    pub pointer_start: Point,
    /// Last recorded pointer position, in screen coordinates.
    pub last_pos: Point,
    /// World position of the grabbed item when the drag started.
    pub item_start: Point,
}

impl DragState {
    /// Starts tracking a drag of an item at `item_start` (world space) grabbed
    /// with the pointer at `pointer_start` (screen space).
    #[must_use]
    pub fn new(pointer_start: Point, item_start: Point) -> Self {
        Self {
            pointer_start,
            last_pos: pointer_start,
            item_start,
        }
    }

    /// Records a new pointer position and returns the screen delta since the
    /// previous one.
    pub fn update(&mut self, pos: Point) -> Vec2 {
        let delta = pos - self.last_pos;
        self.last_pos = pos;
        delta
    }

    /// Total screen offset from the drag start to `pos`.
    #[must_use]
    pub fn total_offset(&self, pos: Point) -> Vec2 {
        pos - self.pointer_start
    }

    /// World position of the grabbed item for a pointer at `pos`, given the
    /// camera `scale` (screen pixels per world unit).
    ///
    /// Dividing by the scale keeps the item glued to the cursor at any zoom.
    /// A non-positive or non-finite scale leaves the item where it started.
    #[must_use]
    pub fn world_position(&self, pos: Point, scale: f64) -> Point {
        if scale <= 0.0 || !scale.is_finite() {
            return self.item_start;
        }
        self.item_start + self.total_offset(pos) / scale
    }
}
