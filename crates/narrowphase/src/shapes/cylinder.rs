//! Finite and infinite cylinders

use crate::foundation::math::Vec3;
use crate::shapes::Plane;

/// Capped cylinder: an infinite cylinder bounded by two capping planes
///
/// The caps are perpendicular to `direction`, at `origin ± direction * height / 2`.
/// The direction should be unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    /// Center of the axis
    pub origin: Vec3,
    /// Direction of the axis
    pub direction: Vec3,
    /// Length of the axis between the caps
    pub height: f32,
    /// Radius of the cylinder
    pub radius: f32,
}

impl Cylinder {
    /// Create a new capped cylinder
    pub const fn new(origin: Vec3, direction: Vec3, height: f32, radius: f32) -> Self {
        Self {
            origin,
            direction,
            height,
            radius,
        }
    }

    /// The two cap centers `(p, q)` at `origin ± direction * height / 2`
    pub fn cap_points(&self) -> (Vec3, Vec3) {
        let half_axis = self.direction * (self.height / 2.0);

        (self.origin + half_axis, self.origin - half_axis)
    }

    /// The two outward-facing capping planes, through each cap center
    pub fn cap_planes(&self) -> (Plane, Plane) {
        let (p, q) = self.cap_points();

        (
            Plane::from_point_normal(p, self.direction),
            Plane::from_point_normal(q, -self.direction),
        )
    }

    /// Drop the caps, keeping axis and radius
    pub const fn to_infinite(&self) -> InfiniteCylinder {
        InfiniteCylinder {
            origin: self.origin,
            direction: self.direction,
            radius: self.radius,
        }
    }
}

/// Cylinder of infinite extent along its axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InfiniteCylinder {
    /// A point on the axis
    pub origin: Vec3,
    /// Direction of the axis
    pub direction: Vec3,
    /// Radius of the cylinder
    pub radius: f32,
}

impl InfiniteCylinder {
    /// Create a new infinite cylinder
    pub const fn new(origin: Vec3, direction: Vec3, radius: f32) -> Self {
        Self {
            origin,
            direction,
            radius,
        }
    }
}
