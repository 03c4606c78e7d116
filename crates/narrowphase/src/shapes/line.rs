//! Infinite line

use crate::foundation::math::Vec3;

/// Infinite line through `origin` along `direction`
///
/// The direction should be unit length for the distance helpers to return
/// true metric distances. Lines do not participate in intersection queries;
/// casting a line reports [`QueryError::Unsupported`](crate::query::QueryError).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    /// A point on the line
    pub origin: Vec3,
    /// The line's direction
    pub direction: Vec3,
}

impl Line {
    /// Create a new line
    pub const fn new(origin: Vec3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    /// Closest point on the line to a point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        self.origin + self.direction * (point - self.origin).dot(&self.direction)
    }

    /// Smallest distance between the line and a point
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).magnitude()
    }

    /// Smallest squared distance between the line and a point
    pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
        (point - self.closest_point(point)).magnitude_squared()
    }
}
