//! Ray with a bounded reach

use crate::foundation::math::Vec3;
use crate::shapes::Segment;

/// Ray from `origin` along `direction`, bounded by `max_distance`
///
/// The direction is NOT required to be unit length: the effective endpoint
/// is `origin + direction * max_distance`, so a non-unit direction scales
/// the reach multiplicatively. Normalize the direction first when
/// `max_distance` must be a true metric distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Start of the ray
    pub origin: Vec3,
    /// Direction of travel
    pub direction: Vec3,
    /// Reach along the direction, as a multiple of the direction's length
    pub max_distance: f32,
}

impl Ray {
    /// Create a new ray
    pub const fn new(origin: Vec3, direction: Vec3, max_distance: f32) -> Self {
        Self {
            origin,
            direction,
            max_distance,
        }
    }

    /// Get a point along the ray at parametric position `t`
    ///
    /// `t = 1` is the ray's effective endpoint.
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * self.max_distance * t
    }

    /// The segment covering the ray's full reach
    ///
    /// Every ray cast is defined as the cast of this segment, so ray and
    /// segment queries agree exactly over the ray's extent.
    pub fn to_segment(&self) -> Segment {
        Segment::new(self.origin, self.origin + self.direction * self.max_distance)
    }
}
