//! Oriented bounding box

use crate::foundation::math::{Rot3, Vec3};
use crate::shapes::AABB;

/// Oriented bounding box: a center, half-extents, and an Euler rotation
///
/// The rotation matrix is rebuilt from the Euler angles on demand; nothing
/// is cached, so the angles can be mutated freely between queries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OBB {
    /// Center of the box
    pub origin: Vec3,
    /// Half-size along each local axis
    pub extents: Vec3,
    /// Euler angles in radians (rotation about x, y, z)
    pub angles: Vec3,
}

impl OBB {
    /// Create a new oriented box
    pub const fn new(origin: Vec3, extents: Vec3, angles: Vec3) -> Self {
        Self {
            origin,
            extents,
            angles,
        }
    }

    /// The box's world rotation
    pub fn rotation(&self) -> Rot3 {
        Rot3::from_euler_angles(self.angles.x, self.angles.y, self.angles.z)
    }

    /// The eight corners of the box in world space, front face first
    pub fn vertices(&self) -> [Vec3; 8] {
        let rotation = self.rotation();
        let e = self.extents;

        [
            // Front
            self.origin + rotation * Vec3::new(-e.x, e.y, e.z),
            self.origin + rotation * Vec3::new(e.x, e.y, e.z),
            self.origin + rotation * Vec3::new(-e.x, -e.y, e.z),
            self.origin + rotation * Vec3::new(e.x, -e.y, e.z),
            // Back
            self.origin + rotation * Vec3::new(e.x, e.y, -e.z),
            self.origin + rotation * Vec3::new(-e.x, e.y, -e.z),
            self.origin + rotation * Vec3::new(e.x, -e.y, -e.z),
            self.origin + rotation * Vec3::new(-e.x, -e.y, -e.z),
        ]
    }

    /// The smallest world-axis-aligned box containing this box
    pub fn bounding_aabb(&self) -> AABB {
        let vertices = self.vertices();
        let mut min = vertices[0];
        let mut max = vertices[0];

        for vertex in &vertices[1..] {
            for i in 0..3 {
                min[i] = min[i].min(vertex[i]);
                max[i] = max[i].max(vertex[i]);
            }
        }

        AABB::from_min_max(min, max)
    }
}
