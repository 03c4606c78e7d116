//! Infinite plane in normal/distance form

use crate::foundation::math::{Mat3, Vec3, EPSILON};
use crate::shapes::Line;

/// Infinite plane described by a unit normal and a signed distance from the origin
///
/// A point `p` lies on the plane when `dot(normal, p) + distance == 0`.
/// The normal should be unit length for [`Plane::distance_to_point`] and
/// [`Plane::side`] to be metrically meaningful; the type does not enforce it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    /// The plane's normal
    pub normal: Vec3,
    /// Signed distance from the world origin along the normal
    pub distance: f32,
}

impl Plane {
    /// Create a plane from a normal and a signed distance
    pub const fn new(normal: Vec3, distance: f32) -> Self {
        Self { normal, distance }
    }

    /// Create the plane through `point` with the given normal
    pub fn from_point_normal(point: Vec3, normal: Vec3) -> Self {
        Self {
            normal,
            distance: -point.dot(&normal),
        }
    }

    /// Create the plane through three points (right-hand winding)
    pub fn from_points(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(&(c - a)).normalize();
        Self {
            normal,
            distance: -a.dot(&normal),
        }
    }

    /// Signed cartesian value classifying a point against the plane
    ///
    /// Positive above the plane (normal side), zero on it, negative below.
    pub fn side(&self, point: Vec3) -> f32 {
        self.normal.dot(&point) + self.distance
    }

    /// Smallest distance between a point and the plane
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.side(point) / self.normal.magnitude()
    }

    /// Check whether two points lie on the same side of the plane
    ///
    /// Points exactly on the plane only pair with other on-plane points.
    pub fn same_side(&self, a: Vec3, b: Vec3) -> bool {
        let side_a = self.side(a);
        let side_b = self.side(b);

        (side_a > 0.0 && side_b > 0.0)
            || (side_a < 0.0 && side_b < 0.0)
            || (side_a == 0.0 && side_b == 0.0)
    }

    /// The same plane with its normal inverted
    pub fn flipped(&self) -> Self {
        Self {
            normal: -self.normal,
            distance: -self.distance,
        }
    }

    /// Translate the plane along its normal
    pub fn translate(&mut self, amount: f32) {
        self.distance += amount;
    }

    /// Intersection line of two planes
    ///
    /// Returns `None` when the planes are parallel (colinear normals).
    pub fn intersection_of(p1: &Self, p2: &Self) -> Option<Line> {
        let direction = p1.normal.cross(&p2.normal);

        if direction.magnitude_squared() <= EPSILON {
            return None;
        }

        // Anchor the line by cutting with a third plane through the origin,
        // perpendicular to the line itself.
        let anchor = Self::intersection_point(p1, p2, &Self::new(direction, 0.0))?;

        Some(Line::new(anchor, direction.normalize()))
    }

    /// Intersection point of three planes
    ///
    /// Returns `None` when the three normals do not span 3D space (the
    /// normal matrix is singular).
    pub fn intersection_point(p1: &Self, p2: &Self, p3: &Self) -> Option<Vec3> {
        let matrix = Mat3::new(
            p1.normal.x, p1.normal.y, p1.normal.z,
            p2.normal.x, p2.normal.y, p2.normal.z,
            p3.normal.x, p3.normal.y, p3.normal.z,
        );

        if matrix.determinant().abs() <= EPSILON {
            return None;
        }

        let inverse = matrix.try_inverse()?;

        Some(inverse * Vec3::new(-p1.distance, -p2.distance, -p3.distance))
    }
}
