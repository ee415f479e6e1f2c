// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input routing.
//!
//! The host forwards wheel, pointer and click events here after its own hit
//! testing. Wheel input drives camera zoom, pointer input drives drags, and
//! clicks drive group activation. Every positioned event also refreshes the
//! camera's zoom anchor.

use kurbo::Point;
use vitrine_event_state::pointer::{PointerButton, PointerId};

use crate::image::ImageId;
use crate::phase::ClickOutcome;
use crate::session::ViewportSession;
use crate::trace::SessionTrace;

/// An input event in screen coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Wheel or trackpad scroll.
    Wheel {
        /// Vertical scroll delta; positive scrolls down and zooms out.
        delta_y: f64,
        /// Pointer position.
        position: Point,
    },
    /// A pointer button went down.
    PointerDown {
        /// Pointer.
        pointer: PointerId,
        /// Pressed button.
        button: PointerButton,
        /// Pointer position.
        position: Point,
        /// Image under the pointer, if any.
        target: Option<ImageId>,
    },
    /// A pointer moved.
    PointerMove {
        /// Pointer.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// A pointer button went up.
    PointerUp {
        /// Pointer.
        pointer: PointerId,
        /// Pointer position.
        position: Point,
    },
    /// An image was clicked.
    Click {
        /// Clicked image.
        image: ImageId,
    },
}

/// What an [`InputEvent`] did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InputOutcome {
    /// Wheel momentum was added to the camera.
    Zoomed,
    /// A drag began on the image.
    DragStarted(ImageId),
    /// The dragged image moved.
    Dragged(ImageId),
    /// A drag ended on the image.
    DragEnded(ImageId),
    /// A click was routed to the activation state machine.
    Click(ClickOutcome),
    /// The event had no effect beyond updating the pointer position.
    Ignored,
}

impl<T: SessionTrace> ViewportSession<T> {
    /// Routes one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::Wheel { delta_y, position } => {
                if self.wheel(delta_y, position) {
                    InputOutcome::Zoomed
                } else {
                    InputOutcome::Ignored
                }
            }
            InputEvent::PointerDown {
                pointer,
                button,
                position,
                target,
            } => match target {
                Some(image) if self.begin_drag(pointer, button, position, image) => {
                    InputOutcome::DragStarted(image)
                }
                _ => {
                    self.track_pointer(position);
                    InputOutcome::Ignored
                }
            },
            InputEvent::PointerMove { pointer, position } => self
                .drag_to(pointer, position)
                .map_or(InputOutcome::Ignored, InputOutcome::Dragged),
            InputEvent::PointerUp { pointer, position } => self
                .end_drag(pointer, position)
                .map_or(InputOutcome::Ignored, InputOutcome::DragEnded),
            InputEvent::Click { image } => InputOutcome::Click(self.handle_click(image)),
        }
    }

    /// Feeds a wheel delta into the camera's zoom momentum, anchored at
    /// `position`.
    ///
    /// Dropped while an activation sequence holds the camera, and on hosts
    /// without wheel zoom. Returns `true` when the delta was applied.
    pub fn wheel(&mut self, delta_y: f64, position: Point) -> bool {
        self.track_pointer(position);
        if self.is_locked() || !self.camera().config().wheel_zoom {
            return false;
        }
        self.camera_mut().add_wheel(delta_y);
        true
    }
}
