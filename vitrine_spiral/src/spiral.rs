// Copyright 2025 the Vitrine Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;
use core::iter::FusedIterator;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Point, Vec2};

/// The golden angle, `π·(3 − √5)` radians.
///
/// Successive multiples of this angle never line up, so points placed at
/// `i · GOLDEN_ANGLE` spread evenly around the center at every radius.
pub const GOLDEN_ANGLE: f64 = 2.399_963_229_728_653;

/// Members per unit of density; a group of this size packs at density `1.0`.
pub const REFERENCE_COUNT: f64 = 14.0;

/// Lower density bound, reached by small groups.
pub const MIN_DENSITY: f64 = 0.8;

/// Upper density bound, reached by large groups.
pub const MAX_DENSITY: f64 = 2.2;

const SPIRAL_WEIGHT: f64 = 0.4;
const LINEAR_WEIGHT: f64 = 0.6;

/// Packing density for a group of `count` members, in
/// `[MIN_DENSITY, MAX_DENSITY]`.
///
/// Larger groups pack tighter.
#[must_use]
pub fn density(count: usize) -> f64 {
    (count as f64 / REFERENCE_COUNT).clamp(MIN_DENSITY, MAX_DENSITY)
}

/// Inputs to a spiral placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralParams {
    /// World-space center of the spiral.
    pub center: Point,
    /// Largest distance any member may be placed from `center`.
    pub max_radius: f64,
    /// Nominal member size in world units.
    pub image_size: f64,
    /// Minimum nominal gap between neighbors in world units.
    pub min_gap: f64,
}

impl SpiralParams {
    /// Parameters for 320-unit images with a 40-unit gap.
    ///
    /// A negative or non-finite `max_radius` is treated as `0.0`.
    #[must_use]
    pub fn new(center: Point, max_radius: f64) -> Self {
        Self {
            center,
            max_radius,
            image_size: 320.0,
            min_gap: 40.0,
        }
    }

    /// Returns a copy with the given member size and gap.
    #[must_use]
    pub fn with_item_size(self, image_size: f64, min_gap: f64) -> Self {
        Self {
            image_size,
            min_gap,
            ..self
        }
    }

    /// Radial spacing unit for a group of `count` members.
    #[must_use]
    pub fn spacing(&self, count: usize) -> f64 {
        (self.image_size + self.min_gap) / density(count)
    }

    fn radius_limit(&self) -> f64 {
        if self.max_radius.is_finite() {
            self.max_radius.max(0.0)
        } else {
            0.0
        }
    }

    /// Computes the slot for member `index` of a `count`-member group.
    ///
    /// The radius blends a `√index` spiral with a radius growing linearly in
    /// `index / count`, then clamps to the radius limit.
    #[must_use]
    pub fn slot(&self, index: usize, count: usize) -> SpiralSlot {
        let i = index as f64;
        let n = count.max(1) as f64;
        let max_radius = self.radius_limit();

        let angle = i * GOLDEN_ANGLE;
        let spiral_radius = i.sqrt() * self.spacing(count);
        let linear_radius = (i / n) * max_radius;
        let radius = (SPIRAL_WEIGHT * spiral_radius + LINEAR_WEIGHT * linear_radius).min(max_radius);

        let (sin, cos) = angle.sin_cos();
        SpiralSlot {
            index,
            angle,
            radius,
            position: self.center + Vec2::new(cos, sin) * radius,
        }
    }

    /// Iterates the slots of a `count`-member group in member order.
    #[must_use]
    pub fn slots(&self, count: usize) -> SpiralSlots {
        SpiralSlots {
            params: *self,
            next: 0,
            count,
        }
    }

    /// Collects the positions of a `count`-member group in member order.
    #[must_use]
    pub fn place(&self, count: usize) -> Vec<Point> {
        self.slots(count).map(|s| s.position).collect()
    }
}

/// One member's placement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpiralSlot {
    /// Member index within the group.
    pub index: usize,
    /// Polar angle in radians.
    pub angle: f64,
    /// Distance from the spiral center.
    pub radius: f64,
    /// World-space position.
    pub position: Point,
}

/// Iterator over the slots of a group, produced by [`SpiralParams::slots`].
#[derive(Clone, Debug)]
pub struct SpiralSlots {
    params: SpiralParams,
    next: usize,
    count: usize,
}

impl Iterator for SpiralSlots {
    type Item = SpiralSlot;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.count {
            return None;
        }
        let slot = self.params.slot(self.next, self.count);
        self.next += 1;
        Some(slot)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.count - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SpiralSlots {}

impl FusedIterator for SpiralSlots {}
