//! Spiral cursor used to propose candidate locations.
//!
//! The cursor walks an Archimedean-like spiral around the cloud center:
//! the angle advances in fixed steps and, after each full turn, the radius
//! grows by one ring. The cursor is never rewound, so consecutive searches
//! keep moving outward.

use std::f64::consts::{PI, TAU};

use glam::DVec2;
use tagcloud_core::Point;

/// Distance between consecutive rings.
pub const RING_STEP: f64 = 1.0;

/// Angle increment between candidates on the same ring (5 degrees).
pub const ANGLE_STEP: f64 = PI / 36.0;

/// Position on the spiral, as a (layer, angle) pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SpiralCursor {
    layer: u32,
    angle: f64,
}

impl SpiralCursor {
    /// A cursor at layer 0, angle 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current ring index.
    pub fn layer(&self) -> u32 {
        self.layer
    }

    /// Current angle in radians, within `[0, 2π]`.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Step the angle; wrap to the next ring once a full turn is exceeded.
    pub(crate) fn advance(&mut self, angle_step: f64) {
        self.angle += angle_step;
        if self.angle > TAU {
            self.angle = 0.0;
            self.next_layer();
        }
    }

    pub(crate) fn next_layer(&mut self) {
        self.layer += 1;
    }

    /// Candidate point for the current state.
    ///
    /// Coordinates are rounded half to even after adding the center, so
    /// `x.5` offsets resolve the same way on every platform.
    pub fn point(&self, center: Point, ring_step: f64) -> Point {
        let radius = f64::from(self.layer) * ring_step;
        let origin = DVec2::new(f64::from(center.x), f64::from(center.y));
        let raw = origin + DVec2::from_angle(self.angle) * radius;
        Point::new(raw.x.round_ties_even() as i32, raw.y.round_ties_even() as i32)
    }
}
