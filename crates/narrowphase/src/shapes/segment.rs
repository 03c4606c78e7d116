//! Line segment between two points

use crate::foundation::math::{utils, Vec3};
use crate::shapes::Line;

/// Line segment between two endpoints
///
/// The direction is implicit as `b - a`; a point on the segment is
/// `a + direction() * t` for `t` in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// First endpoint
    pub a: Vec3,
    /// Second endpoint
    pub b: Vec3,
}

impl Segment {
    /// Create a new segment
    pub const fn new(a: Vec3, b: Vec3) -> Self {
        Self { a, b }
    }

    /// The segment's vector from `a` to `b`
    pub fn direction(&self) -> Vec3 {
        self.b - self.a
    }

    /// Length of the segment
    pub fn length(&self) -> f32 {
        self.direction().magnitude()
    }

    /// Squared length of the segment
    pub fn length_squared(&self) -> f32 {
        self.direction().magnitude_squared()
    }

    /// The infinite line carrying the segment
    pub fn to_line(&self) -> Line {
        Line::new(self.a, self.direction().normalize())
    }

    /// Smallest distance between a point and the segment
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.distance_squared_to_point(point).sqrt()
    }

    /// Smallest squared distance between a point and the segment
    pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
        let direction = self.direction();
        let t = utils::clamp01((point - self.a).dot(&direction) / direction.magnitude_squared());
        let projection = self.a + direction * t;

        (point - projection).magnitude_squared()
    }
}
