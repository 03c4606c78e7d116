//! Axis-aligned bounding box

use crate::foundation::math::Vec3;

/// Axis-Aligned Bounding Box described by a center origin and a full size
///
/// The extents (half-size) and the min/max corners are derived fields,
/// cached at construction and rebuilt by every mutator so that
/// `min = origin - extents` and `max = origin + extents` always hold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AABB {
    origin: Vec3,
    size: Vec3,
    extents: Vec3,
    min: Vec3,
    max: Vec3,
}

impl AABB {
    /// Create a new box from its center and full size
    pub fn new(origin: Vec3, size: Vec3) -> Self {
        let mut aabb = Self {
            origin,
            size,
            extents: Vec3::zeros(),
            min: Vec3::zeros(),
            max: Vec3::zeros(),
        };
        aabb.rebuild();
        aabb
    }

    /// Create a new box from its minimum and maximum corners
    pub fn from_min_max(min: Vec3, max: Vec3) -> Self {
        Self::new((min + max) * 0.5, max - min)
    }

    /// Create a cube from its center and edge length
    pub fn cube(origin: Vec3, edge: f32) -> Self {
        Self::new(origin, Vec3::new(edge, edge, edge))
    }

    /// Restore the derived fields from `origin` and `size`
    ///
    /// Must be called by every mutator.
    fn rebuild(&mut self) {
        self.extents = self.size * 0.5;
        self.min = self.origin - self.extents;
        self.max = self.origin + self.extents;
    }

    /// Center of the box
    pub const fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Full size of the box
    pub const fn size(&self) -> Vec3 {
        self.size
    }

    /// Half-size of the box
    pub const fn extents(&self) -> Vec3 {
        self.extents
    }

    /// Minimum corner of the box
    pub const fn min(&self) -> Vec3 {
        self.min
    }

    /// Maximum corner of the box
    pub const fn max(&self) -> Vec3 {
        self.max
    }

    /// Grow the box by `amount` on every side
    pub fn expand(&mut self, amount: f32) {
        self.size += Vec3::new(amount, amount, amount) * 2.0;
        self.rebuild();
    }

    /// Grow the box by a per-axis amount on every side
    pub fn expand_by(&mut self, amount: Vec3) {
        self.size += amount * 2.0;
        self.rebuild();
    }

    /// Closest point on or inside the box to a point
    pub fn closest_point(&self, point: Vec3) -> Vec3 {
        let mut closest = Vec3::zeros();

        for i in 0..3 {
            closest[i] = point[i].clamp(self.min[i], self.max[i]);
        }

        closest
    }

    /// Check if the box contains a point
    pub fn contains(&self, point: Vec3) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
            && self.min.z <= point.z
            && point.z <= self.max.z
    }

    /// The corner selected by a 3-bit index
    ///
    /// Bit 0 picks max over min on x, bit 1 on y, bit 2 on z; corners that
    /// differ in exactly one bit share an edge.
    pub fn corner(&self, n: usize) -> Vec3 {
        Vec3::new(
            if n & 1 != 0 { self.max.x } else { self.min.x },
            if n & 2 != 0 { self.max.y } else { self.min.y },
            if n & 4 != 0 { self.max.z } else { self.min.z },
        )
    }

    /// Distance between the box and a point (zero inside)
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.distance_squared_to_point(point).sqrt()
    }

    /// Squared distance between the box and a point (zero inside)
    pub fn distance_squared_to_point(&self, point: Vec3) -> f32 {
        let mut sqr_distance = 0.0;

        for i in 0..3 {
            let value = point[i];

            if value < self.min[i] {
                sqr_distance += (self.min[i] - value) * (self.min[i] - value);
            } else if value > self.max[i] {
                sqr_distance += (value - self.max[i]) * (value - self.max[i]);
            }
        }

        sqr_distance
    }

    /// The eight corners of the box, front face first
    pub fn vertices(&self) -> [Vec3; 8] {
        let e = self.extents;

        [
            // Front
            self.origin + Vec3::new(-e.x, e.y, e.z),
            self.origin + Vec3::new(e.x, e.y, e.z),
            self.origin + Vec3::new(-e.x, -e.y, e.z),
            self.origin + Vec3::new(e.x, -e.y, e.z),
            // Back
            self.origin + Vec3::new(e.x, e.y, -e.z),
            self.origin + Vec3::new(-e.x, e.y, -e.z),
            self.origin + Vec3::new(e.x, -e.y, -e.z),
            self.origin + Vec3::new(-e.x, -e.y, -e.z),
        ]
    }

    /// Outward normal of the face nearest to a point on the box surface
    ///
    /// Picks the axis whose per-component distance from the box center to
    /// the point is closest to the box's extent on that axis.
    pub fn face_normal(&self, point: Vec3) -> Vec3 {
        let local = point - self.origin;
        let mut best = f32::MAX;
        let mut normal = Vec3::zeros();

        for i in 0..3 {
            let distance = (self.extents[i] - local[i].abs()).abs();

            if distance < best {
                best = distance;
                normal = Vec3::zeros();
                normal[i] = local[i];
            }
        }

        normal.normalize()
    }

    /// Check if this box overlaps another box
    pub fn intersects(&self, other: &Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
            && self.min.z <= other.max.z
            && self.max.z >= other.min.z
    }
}
