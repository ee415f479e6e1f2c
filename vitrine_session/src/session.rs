// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::time::Duration;

use kurbo::{Point, Size, Vec2};
use vitrine_camera::Camera;
use vitrine_event_state::pointer::{PointerButton, PointerId};

use crate::config::{Platform, SessionConfig};
use crate::drag::DragController;
use crate::frame::GroupFrame;
use crate::image::{GroupId, Image, ImageId};
use crate::phase::{ActivationOutcome, ClickOutcome, IgnoreReason, Phase};
use crate::trace::{NoTrace, SessionEvent, SessionTrace};

/// Camera state recorded when a group is activated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StoredView {
    /// Pan at activation time.
    pub origin: Vec2,
    /// Scale at activation time.
    pub scale: f64,
}

/// One viewport: the camera, the fixed image set, and the group activation
/// and drag state layered on top.
///
/// All mutation goes through methods; time only moves in
/// [`ViewportSession::tick`], which the host calls once per frame with the
/// frame's duration (or with synthetic durations in tests).
#[derive(Debug)]
pub struct ViewportSession<T = NoTrace> {
    config: SessionConfig,
    viewport: Size,
    camera: Camera,
    images: Vec<Image>,
    active_group: Option<GroupId>,
    locked: bool,
    phase: Phase,
    top_z: i32,
    stored: StoredView,
    frame: Option<GroupFrame>,
    drags: DragController,
    trace: T,
}

impl ViewportSession<NoTrace> {
    /// Creates a session over `images` in a viewport of `viewport` pixels.
    ///
    /// The camera starts centered on the world origin at scale `1.0`.
    #[must_use]
    pub fn new(config: SessionConfig, viewport: Size, images: impl IntoIterator<Item = Image>) -> Self {
        Self::with_trace(config, viewport, images, NoTrace)
    }
}

impl<T: SessionTrace> ViewportSession<T> {
    /// Like [`ViewportSession::new`], reporting events to `trace`.
    #[must_use]
    pub fn with_trace(
        config: SessionConfig,
        viewport: Size,
        images: impl IntoIterator<Item = Image>,
        trace: T,
    ) -> Self {
        let camera = Camera::centered(config.camera, viewport);
        let stored = StoredView {
            origin: camera.origin(),
            scale: camera.scale(),
        };
        Self {
            config,
            viewport,
            camera,
            images: images.into_iter().collect(),
            active_group: None,
            locked: false,
            phase: Phase::Idle,
            top_z: config.base_z,
            stored,
            frame: None,
            drags: DragController::new(),
            trace,
        }
    }

    /// Session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    /// Updates the viewport size used by subsequent layouts.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// The camera.
    #[must_use]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub(crate) fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Records a pointer position as the camera's zoom anchor.
    pub fn track_pointer(&mut self, screen: Point) {
        self.camera.set_pointer(screen);
    }

    /// Current camera scale, for converting screen deltas into world deltas.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.camera.scale()
    }

    /// All images, indexed by [`ImageId`].
    #[must_use]
    pub fn images(&self) -> &[Image] {
        &self.images
    }

    /// The image with the given id.
    #[must_use]
    pub fn image(&self, id: ImageId) -> Option<&Image> {
        self.images.get(id.0)
    }

    /// Ids of the images in `group`, in image order.
    pub fn group_members<'a>(&'a self, group: &'a GroupId) -> impl Iterator<Item = ImageId> + 'a {
        self.images
            .iter()
            .enumerate()
            .filter(move |(_, img)| img.group() == group)
            .map(|(i, _)| ImageId(i))
    }

    /// The open group, if any.
    #[must_use]
    pub fn active_group(&self) -> Option<&GroupId> {
        self.active_group.as_ref()
    }

    /// `true` from activation until the framing approach completes.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Current activation phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current top of the stacking counter.
    #[must_use]
    pub fn top_z(&self) -> i32 {
        self.top_z
    }

    /// Camera state recorded at the last activation.
    #[must_use]
    pub fn stored_view(&self) -> StoredView {
        self.stored
    }

    /// Geometry of the last formation, while its group is open.
    #[must_use]
    pub fn frame(&self) -> Option<&GroupFrame> {
        self.frame.as_ref()
    }

    /// Drag bookkeeping.
    #[must_use]
    pub fn drags(&self) -> &DragController {
        &self.drags
    }

    /// The trace sink.
    #[must_use]
    pub fn trace(&self) -> &T {
        &self.trace
    }

    /// The trace sink, mutably.
    pub fn trace_mut(&mut self) -> &mut T {
        &mut self.trace
    }

    /// Consumes the session, returning its trace sink.
    pub fn into_trace(self) -> T {
        self.trace
    }

    /// Starts the activation sequence for `group`.
    ///
    /// Wheel momentum is always discarded. While another sequence holds the
    /// lock the request is dropped and nothing else changes. Otherwise the
    /// camera snaps to its target (recorded as the [`StoredView`]), `group`
    /// becomes active, every other image floats, and the camera begins to
    /// pull back. A group with no members still runs the full sequence.
    pub fn activate_group(&mut self, group: impl Into<GroupId>) -> ActivationOutcome {
        let group = group.into();
        self.camera.reset_momentum();
        if self.locked {
            self.emit(SessionEvent::Ignored {
                group: Some(group),
                reason: IgnoreReason::Locked,
            });
            return ActivationOutcome::Ignored(IgnoreReason::Locked);
        }

        self.locked = true;
        self.set_phase(Phase::Locking);
        self.camera.snap_to_target();
        self.stored = StoredView {
            origin: self.camera.origin(),
            scale: self.camera.scale(),
        };
        self.drags
            .end_all(&mut self.images, self.config.timeline.release_settle);
        self.top_z = self.config.base_z;
        self.frame = None;

        let mut members = 0;
        for image in &mut self.images {
            let member = image.group() == &group;
            image.set_floating(!member);
            members += usize::from(member);
        }
        self.emit(SessionEvent::GroupActivated {
            group: group.clone(),
            members,
        });
        self.active_group = Some(group);

        self.camera.set_target_scale(self.config.zoom_out_scale);
        self.set_phase(Phase::Fading {
            elapsed: Duration::ZERO,
        });
        ActivationOutcome::Started
    }

    /// Handles a click on `image`.
    ///
    /// On touch hosts the click is handed back as
    /// [`ClickOutcome::OpenMobileGroup`]. On desktop it activates the image's
    /// group unless a group is already open.
    pub fn handle_click(&mut self, image: ImageId) -> ClickOutcome {
        let Some(group) = self.image(image).map(|i| i.group().clone()) else {
            return ClickOutcome::Ignored(IgnoreReason::UnknownImage);
        };
        if self.config.platform == Platform::Mobile {
            return ClickOutcome::OpenMobileGroup(group);
        }
        if self.active_group.is_some() {
            self.emit(SessionEvent::Ignored {
                group: Some(group),
                reason: IgnoreReason::GroupActive,
            });
            return ClickOutcome::Ignored(IgnoreReason::GroupActive);
        }
        match self.activate_group(group.clone()) {
            ActivationOutcome::Started => ClickOutcome::Activated(group),
            ActivationOutcome::Ignored(reason) => ClickOutcome::Ignored(reason),
        }
    }

    /// Closes the open group: images stop floating and the camera heads back
    /// to the [`StoredView`].
    ///
    /// Returns the closed group, or `None` while locked or with nothing open.
    pub fn deactivate(&mut self) -> Option<GroupId> {
        if self.locked {
            self.emit(SessionEvent::Ignored {
                group: self.active_group.clone(),
                reason: IgnoreReason::Locked,
            });
            return None;
        }
        let Some(group) = self.active_group.take() else {
            self.emit(SessionEvent::Ignored {
                group: None,
                reason: IgnoreReason::NoActiveGroup,
            });
            return None;
        };
        self.drags
            .end_all(&mut self.images, self.config.timeline.release_settle);
        for image in &mut self.images {
            image.set_floating(false);
        }
        self.frame = None;
        self.camera.set_target(self.stored.origin, self.stored.scale);
        self.emit(SessionEvent::Deactivated {
            group: group.clone(),
        });
        Some(group)
    }

    /// Grabs `image` with `pointer` pressed at `screen`.
    ///
    /// Only the primary button drags, and only members of the open group can
    /// be dragged. Returns `true` when the drag started.
    pub fn begin_drag(
        &mut self,
        pointer: PointerId,
        button: PointerButton,
        screen: Point,
        image: ImageId,
    ) -> bool {
        self.camera.set_pointer(screen);
        if !button.is_primary() {
            return false;
        }
        let Some(active) = &self.active_group else {
            return false;
        };
        let Some(target) = self.images.get_mut(image.0) else {
            return false;
        };
        if target.group() != active {
            return false;
        }
        if !self
            .drags
            .begin(pointer, screen, image, target, &mut self.top_z)
        {
            return false;
        }
        self.emit(SessionEvent::DragStarted {
            image,
            pointer,
            z_index: self.top_z,
        });
        true
    }

    /// Moves the image dragged by `pointer` to follow `screen`.
    ///
    /// Returns the moved image; moves from pointers without a drag do nothing.
    pub fn drag_to(&mut self, pointer: PointerId, screen: Point) -> Option<ImageId> {
        self.camera.set_pointer(screen);
        let scale = self.camera.scale();
        self.drags.drag_to(pointer, screen, &mut self.images, scale)
    }

    /// Releases the drag held by `pointer`.
    pub fn end_drag(&mut self, pointer: PointerId, screen: Point) -> Option<ImageId> {
        self.camera.set_pointer(screen);
        let (image, world) =
            self.drags
                .end(pointer, &mut self.images, self.config.timeline.release_settle)?;
        self.emit(SessionEvent::DragEnded {
            image,
            pointer,
            world,
        });
        Some(image)
    }

    /// Advances the session by one frame of `dt`.
    ///
    /// Order within a frame: activation timeline, image transitions, camera.
    /// Phase delays carry leftover time into the next phase, so a long frame
    /// does not stretch the sequence.
    pub fn tick(&mut self, dt: Duration) {
        self.advance_timeline(dt);
        for image in &mut self.images {
            image.advance(dt);
        }
        self.camera.tick(dt);
        if matches!(self.phase, Phase::Framing { .. }) && !self.camera.is_approaching() {
            self.unlock();
        }
    }

    fn advance_timeline(&mut self, dt: Duration) {
        let timeline = self.config.timeline;
        let mut budget = dt;
        loop {
            match self.phase {
                Phase::Fading { elapsed } => {
                    let elapsed = elapsed.saturating_add(budget);
                    if elapsed < timeline.fade {
                        self.phase = Phase::Fading { elapsed };
                        return;
                    }
                    budget = elapsed - timeline.fade;
                    self.form_group();
                }
                Phase::Forming { elapsed } => {
                    let elapsed = elapsed.saturating_add(budget);
                    if elapsed < timeline.form {
                        self.phase = Phase::Forming { elapsed };
                        return;
                    }
                    budget = elapsed - timeline.form;
                    self.frame_group();
                }
                Phase::Framing { elapsed } => {
                    self.phase = Phase::Framing {
                        elapsed: elapsed.saturating_add(budget),
                    };
                    return;
                }
                Phase::Idle | Phase::Locking => return,
            }
        }
    }

    /// Computes the spiral for the active group and sends members on their
    /// way, first member on top.
    fn form_group(&mut self) {
        let layout = self.config.layout;
        let frame = GroupFrame::for_viewport(self.viewport, &layout);
        let params = frame.spiral(&layout);
        let members: Vec<usize> = match &self.active_group {
            Some(group) => self
                .images
                .iter()
                .enumerate()
                .filter(|(_, img)| img.group() == group)
                .map(|(i, _)| i)
                .collect(),
            None => Vec::new(),
        };

        let settle = self.config.timeline.settle;
        for (slot, &index) in params.slots(members.len()).zip(&members) {
            let Some(image) = self.images.get_mut(index) else {
                continue;
            };
            let rank = i32::try_from(slot.index).unwrap_or(i32::MAX);
            image.set_z_index(self.top_z.saturating_sub(rank));
            // A dragged image keeps following its pointer; only its goal moves.
            if self.drags.is_dragging(ImageId(index)) {
                image.set_target(slot.position);
                continue;
            }
            image.set_transition(settle);
            image.move_to(slot.position);
        }

        self.frame = Some(frame);
        if let Some(group) = self.active_group.clone() {
            self.emit(SessionEvent::LayoutComputed {
                group,
                members: members.len(),
                center: frame.center,
                max_radius: frame.max_radius,
            });
        }
        self.set_phase(Phase::Forming {
            elapsed: Duration::ZERO,
        });
    }

    /// Points the camera's timed approach at the group's screen anchor.
    fn frame_group(&mut self) {
        let frame = self
            .frame
            .unwrap_or_else(|| GroupFrame::for_viewport(self.viewport, &self.config.layout));
        let scale = self.camera.config().clamp_scale(self.config.framing_scale);
        let origin = frame.camera_origin(scale);
        self.camera
            .begin_approach(origin, scale, self.config.timeline.framing);
        self.emit(SessionEvent::FramingStarted { origin, scale });
        self.set_phase(Phase::Framing {
            elapsed: Duration::ZERO,
        });
    }

    fn unlock(&mut self) {
        self.locked = false;
        self.set_phase(Phase::Idle);
        if let Some(group) = self.active_group.clone() {
            self.emit(SessionEvent::Unlocked { group });
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        let from = self.phase.kind();
        self.phase = phase;
        let to = phase.kind();
        if from != to {
            self.emit(SessionEvent::PhaseChanged { from, to });
        }
    }

    fn emit(&mut self, event: SessionEvent) {
        self.trace.event(&event);
    }
}
