// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

use kurbo::Point;
use vitrine_event_state::capture::PointerCapture;
use vitrine_event_state::drag::DragState;
use vitrine_event_state::pointer::PointerId;

use crate::image::{Image, ImageId};

/// Per-pointer direct manipulation of images in world space.
///
/// Each pointer drags at most one image, and each image follows at most one
/// pointer. While dragged, an image's transitions are off and its position is
/// `start + pointer_delta / scale`, so it stays under the cursor at any zoom.
#[derive(Clone, Debug, Default)]
pub struct DragController {
    capture: PointerCapture<ImageId>,
}

impl DragController {
    /// Creates a controller with no drags in progress.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Image dragged by `pointer`, if any.
    #[must_use]
    pub fn dragged_image(&self, pointer: PointerId) -> Option<ImageId> {
        self.capture.target(pointer).copied()
    }

    /// `true` when some pointer is dragging `image`.
    #[must_use]
    pub fn is_dragging(&self, image: ImageId) -> bool {
        self.capture.is_target_captured(&image)
    }

    /// Number of drags in progress.
    #[must_use]
    pub fn active_drags(&self) -> usize {
        self.capture.len()
    }

    /// Grabs `image` with `pointer` at screen position `screen`.
    ///
    /// The image leaves eased transitions and is raised above everything
    /// stacked so far by bumping `top_z`. Returns `false` without touching
    /// anything if the pointer or the image is already in a drag.
    pub(crate) fn begin(
        &mut self,
        pointer: PointerId,
        screen: Point,
        id: ImageId,
        image: &mut Image,
        top_z: &mut i32,
    ) -> bool {
        if self.capture.is_captured(pointer) || self.capture.is_target_captured(&id) {
            return false;
        }
        image.begin_manual();
        *top_z = top_z.saturating_add(1);
        image.set_z_index(*top_z);
        self.capture
            .capture(pointer, id, DragState::new(screen, image.world()))
    }

    /// Moves the image dragged by `pointer` so it tracks `screen` at `scale`.
    ///
    /// Moves from pointers without a drag are ignored.
    pub(crate) fn drag_to(
        &mut self,
        pointer: PointerId,
        screen: Point,
        images: &mut [Image],
        scale: f64,
    ) -> Option<ImageId> {
        let captured = self.capture.get_mut(pointer)?;
        captured.drag.update(screen);
        let world = captured.drag.world_position(screen, scale);
        let id = captured.target;
        images.get_mut(id.0)?.move_to(world);
        Some(id)
    }

    /// Ends the drag held by `pointer`, returning the image and its final
    /// world position.
    pub(crate) fn end(
        &mut self,
        pointer: PointerId,
        images: &mut [Image],
        release_settle: Duration,
    ) -> Option<(ImageId, Point)> {
        let (id, _) = self.capture.release(pointer)?;
        let image = images.get_mut(id.0)?;
        image.end_manual(release_settle);
        Some((id, image.world()))
    }

    /// Ends every drag in progress.
    pub(crate) fn end_all(&mut self, images: &mut [Image], release_settle: Duration) {
        for image in images.iter_mut().filter(|i| i.is_manual()) {
            image.end_manual(release_settle);
        }
        self.capture.clear();
    }
}
