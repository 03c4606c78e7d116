//! Capsule

use crate::foundation::math::Vec3;
use crate::shapes::{Cylinder, Sphere};

/// Capsule: a finite cylinder with hemispherical end caps
///
/// The cap-sphere centers sit at `origin ± direction * height / 2`, the
/// same points as the matching cylinder's cap centers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Capsule {
    /// Center of the axis
    pub origin: Vec3,
    /// Direction of the axis
    pub direction: Vec3,
    /// Length of the axis between the cap-sphere centers
    pub height: f32,
    /// Radius of the cylinder and both cap spheres
    pub radius: f32,
}

impl Capsule {
    /// Create a new capsule
    pub const fn new(origin: Vec3, direction: Vec3, height: f32, radius: f32) -> Self {
        Self {
            origin,
            direction,
            height,
            radius,
        }
    }

    /// Create the capsule whose cap-sphere centers are exactly `a` and `b`
    pub fn between(a: Vec3, b: Vec3, radius: f32) -> Self {
        Self {
            origin: (a + b) * 0.5,
            direction: (b - a).normalize(),
            height: (b - a).magnitude(),
            radius,
        }
    }

    /// The two cap-sphere centers `(p, q)` at `origin ± direction * height / 2`
    pub fn cap_points(&self) -> (Vec3, Vec3) {
        let half_axis = self.direction * (self.height / 2.0);

        (self.origin + half_axis, self.origin - half_axis)
    }

    /// The two cap spheres
    pub fn cap_spheres(&self) -> (Sphere, Sphere) {
        let (p, q) = self.cap_points();

        (Sphere::new(p, self.radius), Sphere::new(q, self.radius))
    }

    /// The capsule's cylindrical body
    pub const fn to_cylinder(&self) -> Cylinder {
        Cylinder {
            origin: self.origin,
            direction: self.direction,
            height: self.height,
            radius: self.radius,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_between_caps_land_on_endpoints() {
        let capsule = Capsule::between(Vec3::new(1.0, 1.0, 1.0), Vec3::new(-1.0, 1.0, 1.0), 0.5);
        let (p, q) = capsule.cap_points();

        assert_relative_eq!(p, Vec3::new(-1.0, 1.0, 1.0));
        assert_relative_eq!(q, Vec3::new(1.0, 1.0, 1.0));
        assert_relative_eq!(capsule.height, 2.0);
    }

    #[test]
    fn test_to_cylinder_shares_axis() {
        let capsule = Capsule::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 3.0, 0.5);
        let cylinder = capsule.to_cylinder();

        assert_eq!(cylinder.origin, capsule.origin);
        assert_eq!(cylinder.height, capsule.height);
        assert_eq!(cylinder.radius, capsule.radius);
    }
}
