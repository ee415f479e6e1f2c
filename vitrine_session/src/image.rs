// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Images placed on the canvas and the groups they belong to.

use alloc::sync::Arc;
use core::fmt;
use core::time::Duration;

use kurbo::Point;
use vitrine_camera::easing::Easing;

/// Opacity of an image outside the active group.
pub const FLOATING_OPACITY: f64 = 0.15;

/// Index of an image in the session's fixed image set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ImageId(pub usize);

/// Tag shared by the images of one group.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(Arc<str>);

impl GroupId {
    /// Creates a group id from a tag.
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self(Arc::from(tag))
    }

    /// Returns the tag.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for GroupId {
    fn from(tag: &str) -> Self {
        Self::new(tag)
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GroupId({:?})", &*self.0)
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An in-flight eased move of the displayed position.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Tween {
    from: Point,
    to: Point,
    elapsed: Duration,
    duration: Duration,
}

impl Tween {
    fn sample(&self) -> Point {
        let t = if self.duration.is_zero() {
            1.0
        } else {
            self.elapsed.as_secs_f64() / self.duration.as_secs_f64()
        };
        self.from.lerp(self.to, Easing::OutCubic.apply(t))
    }

    fn is_done(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// One image on the canvas.
///
/// `world` is the authoritative world-space position. `display` is where the
/// image is drawn: it follows `world` through an eased transition, except
/// while the image is being dragged, when it tracks `world` exactly.
#[derive(Clone, Debug)]
pub struct Image {
    group: GroupId,
    world: Point,
    target: Point,
    display: Point,
    floating: bool,
    z_index: i32,
    transition: Option<Duration>,
    tween: Option<Tween>,
}

impl Image {
    /// Creates an image of `group` resting at `position`.
    #[must_use]
    pub fn new(group: impl Into<GroupId>, position: Point) -> Self {
        Self {
            group: group.into(),
            world: position,
            target: position,
            display: position,
            floating: false,
            z_index: 0,
            transition: Some(Duration::ZERO),
            tween: None,
        }
    }

    /// Group this image belongs to.
    #[must_use]
    pub fn group(&self) -> &GroupId {
        &self.group
    }

    /// Authoritative world-space position.
    #[must_use]
    pub fn world(&self) -> Point {
        self.world
    }

    /// Layout goal.
    #[must_use]
    pub fn target(&self) -> Point {
        self.target
    }

    /// World-space position to draw at this frame.
    #[must_use]
    pub fn display(&self) -> Point {
        self.display
    }

    /// `true` when the image is outside the active group.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        self.floating
    }

    /// Presentation opacity: dimmed while floating.
    #[must_use]
    pub fn opacity(&self) -> f64 {
        if self.floating { FLOATING_OPACITY } else { 1.0 }
    }

    /// Stacking order; larger values draw on top.
    #[must_use]
    pub fn z_index(&self) -> i32 {
        self.z_index
    }

    /// `true` while the image is under direct manual control.
    #[must_use]
    pub fn is_manual(&self) -> bool {
        self.transition.is_none()
    }

    /// `true` while an eased transition is still moving the image.
    #[must_use]
    pub fn is_settling(&self) -> bool {
        self.tween.is_some()
    }

    pub(crate) fn set_floating(&mut self, floating: bool) {
        self.floating = floating;
    }

    pub(crate) fn set_z_index(&mut self, z: i32) {
        self.z_index = z;
    }

    /// Moves the layout goal without touching the current position.
    pub(crate) fn set_target(&mut self, target: Point) {
        self.target = target;
    }

    pub(crate) fn set_transition(&mut self, duration: Duration) {
        self.transition = Some(duration);
    }

    /// Moves the image to `position`, easing the displayed position there
    /// under the current transition.
    pub(crate) fn move_to(&mut self, position: Point) {
        self.world = position;
        self.target = position;
        match self.transition {
            Some(duration) if !duration.is_zero() => {
                self.tween = Some(Tween {
                    from: self.display,
                    to: position,
                    elapsed: Duration::ZERO,
                    duration,
                });
            }
            _ => {
                self.tween = None;
                self.display = position;
            }
        }
    }

    /// Hands the image to direct manipulation: transitions stop and the
    /// display jumps onto the authoritative position.
    pub(crate) fn begin_manual(&mut self) {
        self.transition = None;
        self.tween = None;
        self.display = self.world;
    }

    /// Returns the image to eased transitions of `duration`.
    pub(crate) fn end_manual(&mut self, duration: Duration) {
        self.transition = Some(duration);
    }

    pub(crate) fn advance(&mut self, dt: Duration) {
        if let Some(tween) = &mut self.tween {
            tween.elapsed = tween.elapsed.saturating_add(dt);
            self.display = tween.sample();
            if tween.is_done() {
                self.display = tween.to;
                self.tween = None;
            }
        }
    }
}
