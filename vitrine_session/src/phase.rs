// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use crate::image::GroupId;

/// Phase of the group activation sequence.
///
/// `Idle → Locking → Fading → Forming → Framing → Idle`. The camera is locked
/// from `Locking` until `Framing` ends; elapsed counters advance with
/// [`crate::ViewportSession::tick`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Phase {
    /// No transition in progress.
    #[default]
    Idle,
    /// Camera snapped and the group marked active; passes straight to `Fading`.
    Locking,
    /// Camera pulls back while the group's presentation appears.
    Fading {
        /// Time spent in this phase.
        elapsed: Duration,
    },
    /// Members move into their spiral slots.
    Forming {
        /// Time spent in this phase.
        elapsed: Duration,
    },
    /// Camera runs its timed approach onto the group.
    Framing {
        /// Time spent in this phase.
        elapsed: Duration,
    },
}

impl Phase {
    /// The phase without its counters.
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Self::Idle => PhaseKind::Idle,
            Self::Locking => PhaseKind::Locking,
            Self::Fading { .. } => PhaseKind::Fading,
            Self::Forming { .. } => PhaseKind::Forming,
            Self::Framing { .. } => PhaseKind::Framing,
        }
    }

    /// Time spent in the current phase; zero for `Idle` and `Locking`.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        match self {
            Self::Idle | Self::Locking => Duration::ZERO,
            Self::Fading { elapsed } | Self::Forming { elapsed } | Self::Framing { elapsed } => {
                *elapsed
            }
        }
    }
}

/// [`Phase`] discriminant, for tracing and comparisons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    /// See [`Phase::Idle`].
    Idle,
    /// See [`Phase::Locking`].
    Locking,
    /// See [`Phase::Fading`].
    Fading,
    /// See [`Phase::Forming`].
    Forming,
    /// See [`Phase::Framing`].
    Framing,
}

/// Why a request was dropped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IgnoreReason {
    /// An activation sequence holds the camera lock.
    Locked,
    /// A group is already open; clicks belong to it.
    GroupActive,
    /// There is no active group to close.
    NoActiveGroup,
    /// The image id is not part of the session.
    UnknownImage,
}

/// Result of an activation request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationOutcome {
    /// The sequence started; the camera is locked.
    Started,
    /// Nothing changed.
    Ignored(IgnoreReason),
}

/// Result of a click on an image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The clicked image's group started activating.
    Activated(GroupId),
    /// Touch host: the embedder should open this group in its own UI.
    OpenMobileGroup(GroupId),
    /// Nothing changed.
    Ignored(IgnoreReason),
}
