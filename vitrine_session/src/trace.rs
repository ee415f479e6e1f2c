// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observability hooks for a viewport session.
//!
//! The session does not log by itself. Instead it reports what it does to a
//! [`SessionTrace`] sink: phase transitions, ignored activations, layout
//! results and drags. [`NoTrace`] discards everything, [`RecordingTrace`]
//! keeps the events for inspection, and with the `tracing` feature
//! `TracingTrace` forwards them to the `tracing` ecosystem.

use alloc::vec::Vec;

use kurbo::{Point, Vec2};
use vitrine_event_state::pointer::PointerId;

use crate::image::{GroupId, ImageId};
use crate::phase::{IgnoreReason, PhaseKind};

/// Something a session did.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    /// The activation state machine moved between phases.
    PhaseChanged {
        /// Phase left.
        from: PhaseKind,
        /// Phase entered.
        to: PhaseKind,
    },
    /// A group became active and the camera locked.
    GroupActivated {
        /// Activated group.
        group: GroupId,
        /// Number of member images.
        members: usize,
    },
    /// An activation or deactivation request was dropped.
    Ignored {
        /// Group named by the request, if any.
        group: Option<GroupId>,
        /// Why it was dropped.
        reason: IgnoreReason,
    },
    /// Spiral positions were computed for the active group.
    LayoutComputed {
        /// Laid-out group.
        group: GroupId,
        /// Number of members placed.
        members: usize,
        /// World-space spiral center.
        center: Point,
        /// Radius limit used.
        max_radius: f64,
    },
    /// The camera began its timed framing approach.
    FramingStarted {
        /// Target pan.
        origin: Vec2,
        /// Target scale.
        scale: f64,
    },
    /// The framing approach finished and the camera lock was released.
    Unlocked {
        /// Group that remains active.
        group: GroupId,
    },
    /// The active group was closed.
    Deactivated {
        /// Closed group.
        group: GroupId,
    },
    /// A pointer grabbed an image.
    DragStarted {
        /// Grabbed image.
        image: ImageId,
        /// Grabbing pointer.
        pointer: PointerId,
        /// Stacking value assigned to the image.
        z_index: i32,
    },
    /// A pointer let go of an image.
    DragEnded {
        /// Released image.
        image: ImageId,
        /// Releasing pointer.
        pointer: PointerId,
        /// Final world position.
        world: Point,
    },
}

/// Receives [`SessionEvent`]s as they happen.
pub trait SessionTrace {
    /// Called once per event, in order.
    fn event(&mut self, event: &SessionEvent);
}

/// Discards all events.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTrace;

impl SessionTrace for NoTrace {
    fn event(&mut self, _event: &SessionEvent) {}
}

/// Records every event in order.
#[derive(Clone, Debug, Default)]
pub struct RecordingTrace {
    events: Vec<SessionEvent>,
}

impl RecordingTrace {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[SessionEvent] {
        &self.events
    }

    /// Phase transitions recorded so far, as `(from, to)` pairs.
    pub fn phase_changes(&self) -> impl Iterator<Item = (PhaseKind, PhaseKind)> + '_ {
        self.events.iter().filter_map(|e| match e {
            SessionEvent::PhaseChanged { from, to } => Some((*from, *to)),
            _ => None,
        })
    }

    /// Clears the recorded events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl SessionTrace for RecordingTrace {
    fn event(&mut self, event: &SessionEvent) {
        self.events.push(event.clone());
    }
}

impl<T: SessionTrace + ?Sized> SessionTrace for &mut T {
    fn event(&mut self, event: &SessionEvent) {
        (**self).event(event);
    }
}

/// Forwards events to `tracing` at `DEBUG` level, ignored requests at `INFO`.
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingTrace;

#[cfg(feature = "tracing")]
impl SessionTrace for TracingTrace {
    fn event(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::PhaseChanged { from, to } => {
                tracing::debug!(?from, ?to, "phase changed");
            }
            SessionEvent::GroupActivated { group, members } => {
                tracing::debug!(group = %group, members, "group activated");
            }
            SessionEvent::Ignored { group, reason } => {
                tracing::info!(group = ?group, ?reason, "request ignored");
            }
            SessionEvent::LayoutComputed {
                group,
                members,
                center,
                max_radius,
            } => {
                tracing::debug!(
                    group = %group,
                    members,
                    center_x = center.x,
                    center_y = center.y,
                    max_radius,
                    "spiral layout computed"
                );
            }
            SessionEvent::FramingStarted { origin, scale } => {
                tracing::debug!(origin_x = origin.x, origin_y = origin.y, scale, "framing started");
            }
            SessionEvent::Unlocked { group } => {
                tracing::debug!(group = %group, "camera unlocked");
            }
            SessionEvent::Deactivated { group } => {
                tracing::debug!(group = %group, "group deactivated");
            }
            SessionEvent::DragStarted {
                image,
                pointer,
                z_index,
            } => {
                tracing::debug!(image = image.0, pointer = pointer.0, z_index, "drag started");
            }
            SessionEvent::DragEnded {
                image,
                pointer,
                world,
            } => {
                tracing::debug!(
                    image = image.0,
                    pointer = pointer.0,
                    x = world.x,
                    y = world.y,
                    "drag ended"
                );
            }
        }
    }
}
