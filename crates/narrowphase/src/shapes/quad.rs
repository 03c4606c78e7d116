//! Oriented rectangle

use crate::foundation::math::{Rot3, Vec2, Vec3};

/// Finite rectangle with an orthonormal (right, up, forward) frame
///
/// The quad lies in the plane spanned by `right` and `forward`, facing
/// along `up`. `size.x` is the edge along `right`, `size.y` the edge along
/// `forward`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    /// Center of the rectangle
    pub origin: Vec3,
    /// Edge lengths along `right` and `forward`
    pub size: Vec2,
    /// Facing direction, perpendicular to the rectangle
    pub up: Vec3,
    /// In-plane axis carrying `size.x`
    pub right: Vec3,
    /// In-plane axis carrying `size.y`
    pub forward: Vec3,
}

impl Quad {
    /// Create a quad with an explicit frame
    pub const fn new(origin: Vec3, size: Vec2, up: Vec3, right: Vec3, forward: Vec3) -> Self {
        Self {
            origin,
            size,
            up,
            right,
            forward,
        }
    }

    /// Create a quad in the world XZ plane, facing +Y
    pub fn axis_aligned(origin: Vec3, size: Vec2) -> Self {
        Self::new(origin, size, Vec3::y(), Vec3::x(), Vec3::z())
    }

    /// Create a quad by rotating the axis-aligned frame by Euler angles (radians)
    pub fn from_euler(origin: Vec3, size: Vec2, angles: Vec3) -> Self {
        let rotation = Rot3::from_euler_angles(angles.x, angles.y, angles.z);

        Self::new(
            origin,
            size,
            rotation * Vec3::y(),
            rotation * Vec3::x(),
            rotation * Vec3::z(),
        )
    }

    /// Check if a point on the quad's plane lies within the rectangle
    ///
    /// Only the in-plane coordinates are inspected; the caller is expected
    /// to have intersected the quad's plane first.
    pub fn contains_point(&self, point: Vec3) -> bool {
        let local = point - self.origin;
        let u = local.dot(&self.right);
        let v = local.dot(&self.forward);

        u.abs() <= self.size.x / 2.0 && v.abs() <= self.size.y / 2.0
    }
}
