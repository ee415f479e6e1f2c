// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size, Vec2};
use vitrine_spiral::SpiralParams;

use crate::config::LayoutConfig;

/// Where a group forms in world space and where it is shown on screen.
///
/// The group forms around a world-space center left of the world origin and
/// is framed at a screen anchor left of the viewport center, leaving the
/// right-hand side free for a description panel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GroupFrame {
    /// World-space center of the spiral.
    pub center: Point,
    /// Spiral radius limit in world units.
    pub max_radius: f64,
    /// Screen position the center is framed at.
    pub anchor: Point,
}

impl GroupFrame {
    /// Derives the frame for a viewport of `viewport` pixels.
    #[must_use]
    pub fn for_viewport(viewport: Size, layout: &LayoutConfig) -> Self {
        let (w, h) = (viewport.width, viewport.height);
        Self {
            center: Point::new(-w * layout.center_offset, 0.0),
            max_radius: (w * layout.radius_width_fraction)
                .min(h * layout.radius_height_fraction)
                .max(0.0),
            anchor: Point::new(w * layout.anchor_x, h * layout.anchor_y),
        }
    }

    /// Camera pan that puts `center` on `anchor` at the given scale.
    #[must_use]
    pub fn camera_origin(&self, scale: f64) -> Vec2 {
        self.anchor.to_vec2() - self.center.to_vec2() * scale
    }

    /// Spiral parameters for laying out a group in this frame.
    #[must_use]
    pub fn spiral(&self, layout: &LayoutConfig) -> SpiralParams {
        SpiralParams::new(self.center, self.max_radius)
            .with_item_size(layout.image_size, layout.min_gap)
    }
}
