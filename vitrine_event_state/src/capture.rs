// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exclusive pointer capture: route each pointer's moves to one drag target.
//!
//! A pointer that pressed on a draggable item *captures* it: subsequent move
//! and release events for that pointer id go to that item, wherever the
//! pointer wanders. Each pointer id holds at most one capture at a time, and
//! events from pointers without a capture are not routed anywhere.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use vitrine_event_state::capture::PointerCapture;
//! use vitrine_event_state::drag::DragState;
//! use vitrine_event_state::pointer::PointerId;
//!
//! let mut capture = PointerCapture::<u32>::new();
//! let finger = PointerId(7);
//!
//! assert!(capture.capture(finger, 42, DragState::new(Point::ZERO, Point::ZERO)));
//! // The same pointer cannot grab a second item mid-drag.
//! assert!(!capture.capture(finger, 43, DragState::new(Point::ZERO, Point::ZERO)));
//! assert_eq!(capture.target(finger), Some(&42));
//!
//! let (target, _drag) = capture.release(finger).unwrap();
//! assert_eq!(target, 42);
//! assert!(capture.is_empty());
//! ```

use hashbrown::HashMap;

use crate::drag::DragState;
use crate::pointer::PointerId;

/// A captured target together with its drag bookkeeping.
#[derive(Debug, Clone, PartialEq)]
pub struct Captured<K> {
    /// Item receiving this pointer's events.
    pub target: K,
    /// Drag state for the gesture.
    pub drag: DragState,
}

/// Per-pointer capture table.
#[derive(Debug, Clone)]
pub struct PointerCapture<K> {
    active: HashMap<PointerId, Captured<K>>,
}

impl<K> Default for PointerCapture<K> {
    fn default() -> Self {
        Self {
            active: HashMap::new(),
        }
    }
}

impl<K> PointerCapture<K> {
    /// Creates an empty capture table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures `target` for `pointer`.
    ///
    /// Returns `false` and leaves the existing capture untouched when the
    /// pointer already holds one.
    pub fn capture(&mut self, pointer: PointerId, target: K, drag: DragState) -> bool {
        if self.active.contains_key(&pointer) {
            return false;
        }
        self.active.insert(pointer, Captured { target, drag });
        true
    }

    /// Releases the capture held by `pointer`, returning its target and final
    /// drag state.
    pub fn release(&mut self, pointer: PointerId) -> Option<(K, DragState)> {
        self.active.remove(&pointer).map(|c| (c.target, c.drag))
    }

    /// Returns the target captured by `pointer`, if any.
    #[must_use]
    pub fn target(&self, pointer: PointerId) -> Option<&K> {
        self.active.get(&pointer).map(|c| &c.target)
    }

    /// Returns the capture held by `pointer` for updating.
    pub fn get_mut(&mut self, pointer: PointerId) -> Option<&mut Captured<K>> {
        self.active.get_mut(&pointer)
    }

    /// Returns `true` when `pointer` holds a capture.
    #[must_use]
    pub fn is_captured(&self, pointer: PointerId) -> bool {
        self.active.contains_key(&pointer)
    }

    /// Number of pointers currently holding a capture.
    #[must_use]
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Returns `true` when no pointer holds a capture.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    /// Drops every capture.
    pub fn clear(&mut self) {
        self.active.clear();
    }
}

impl<K: PartialEq> PointerCapture<K> {
    /// Returns `true` when any pointer has captured `target`.
    #[must_use]
    pub fn is_target_captured(&self, target: &K) -> bool {
        self.active.values().any(|c| &c.target == target)
    }
}
