//! Closed shape union with exhaustive query dispatch

use std::fmt;

use crate::foundation::math::{Vec3, EPSILON};
use crate::query::{Intersection, QueryError};
use crate::shapes::{
    Capsule, Cylinder, InfiniteCylinder, Line, Plane, Quad, Ray, Segment, Sphere, AABB, OBB,
};

/// Discriminant naming every primitive that can appear in a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Infinite line caster
    Line,
    /// Segment caster
    Segment,
    /// Ray caster
    Ray,
    /// Plane target
    Plane,
    /// Quad target
    Quad,
    /// Oriented box target
    OBB,
    /// Axis-aligned box target
    AABB,
    /// Sphere target
    Sphere,
    /// Capped cylinder target
    Cylinder,
    /// Infinite cylinder target
    InfiniteCylinder,
    /// Capsule target
    Capsule,
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Line => "line",
            Self::Segment => "segment",
            Self::Ray => "ray",
            Self::Plane => "plane",
            Self::Quad => "quad",
            Self::OBB => "obb",
            Self::AABB => "aabb",
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::InfiniteCylinder => "infinite cylinder",
            Self::Capsule => "capsule",
        };

        f.write_str(name)
    }
}

/// Any target shape, as a closed sum type
///
/// Dispatch over the variants is exhaustive pattern matching: a new shape
/// variant fails to compile until every query family handles it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// Infinite plane
    Plane(Plane),
    /// Oriented rectangle
    Quad(Quad),
    /// Oriented box
    OBB(OBB),
    /// Axis-aligned box
    AABB(AABB),
    /// Sphere
    Sphere(Sphere),
    /// Capped cylinder
    Cylinder(Cylinder),
    /// Infinite cylinder
    InfiniteCylinder(InfiniteCylinder),
    /// Capsule
    Capsule(Capsule),
}

impl Shape {
    /// The discriminant for this shape
    pub const fn kind(&self) -> ShapeKind {
        match self {
            Self::Plane(_) => ShapeKind::Plane,
            Self::Quad(_) => ShapeKind::Quad,
            Self::OBB(_) => ShapeKind::OBB,
            Self::AABB(_) => ShapeKind::AABB,
            Self::Sphere(_) => ShapeKind::Sphere,
            Self::Cylinder(_) => ShapeKind::Cylinder,
            Self::InfiniteCylinder(_) => ShapeKind::InfiniteCylinder,
            Self::Capsule(_) => ShapeKind::Capsule,
        }
    }

    /// Cast a segment against this shape with the default tolerance
    pub fn intersect_segment(&self, segment: &Segment) -> Option<Intersection> {
        self.intersect_segment_with_epsilon(segment, EPSILON)
    }

    /// Cast a segment against this shape with an explicit tolerance
    pub fn intersect_segment_with_epsilon(
        &self,
        segment: &Segment,
        epsilon: f32,
    ) -> Option<Intersection> {
        match self {
            Self::Plane(plane) => segment.intersect_plane(plane, epsilon),
            Self::Quad(quad) => segment.intersect_quad(quad, epsilon),
            Self::OBB(obb) => segment.intersect_obb(obb, epsilon),
            Self::AABB(aabb) => segment.intersect_aabb(aabb, epsilon),
            Self::Sphere(sphere) => segment.intersect_sphere(sphere),
            Self::Cylinder(cylinder) => segment.intersect_cylinder(cylinder, epsilon),
            Self::InfiniteCylinder(cylinder) => segment.intersect_infinite_cylinder(cylinder),
            Self::Capsule(capsule) => segment.intersect_capsule(capsule, epsilon),
        }
    }

    /// Cast a ray against this shape with the default tolerance
    pub fn intersect_ray(&self, ray: &Ray) -> Option<Intersection> {
        self.intersect_ray_with_epsilon(ray, EPSILON)
    }

    /// Cast a ray against this shape with an explicit tolerance
    pub fn intersect_ray_with_epsilon(&self, ray: &Ray, epsilon: f32) -> Option<Intersection> {
        self.intersect_segment_with_epsilon(&ray.to_segment(), epsilon)
    }

    /// Cast an infinite line against this shape
    ///
    /// No line algorithm is implemented for any target; the query always
    /// reports [`QueryError::Unsupported`] rather than a fabricated miss.
    pub fn intersect_line(&self, _line: &Line) -> Result<Option<Intersection>, QueryError> {
        Err(QueryError::unsupported(ShapeKind::Line, self.kind()))
    }

    /// Check static overlap with another shape
    ///
    /// Implemented for box pairs (oriented vs oriented, axis-aligned vs
    /// axis-aligned); every other pairing reports
    /// [`QueryError::Unsupported`].
    pub fn collides_with(&self, other: &Self) -> Result<bool, QueryError> {
        match (self, other) {
            (Self::OBB(lhs), Self::OBB(rhs)) => Ok(lhs.intersects(rhs)),
            (Self::AABB(lhs), Self::AABB(rhs)) => Ok(lhs.intersects(rhs)),
            _ => Err(QueryError::unsupported(self.kind(), other.kind())),
        }
    }

    /// Resolve a sphere sweeping by `displacement` against this shape
    ///
    /// Implemented for the axis-aligned box target; every other target
    /// reports [`QueryError::Unsupported`].
    pub fn sweep_sphere(
        &self,
        sphere: &Sphere,
        displacement: Vec3,
    ) -> Result<Option<Intersection>, QueryError> {
        self.sweep_sphere_with_epsilon(sphere, displacement, EPSILON)
    }

    /// Resolve a sphere sweep with an explicit tolerance
    pub fn sweep_sphere_with_epsilon(
        &self,
        sphere: &Sphere,
        displacement: Vec3,
        epsilon: f32,
    ) -> Result<Option<Intersection>, QueryError> {
        match self {
            Self::AABB(aabb) => Ok(sphere.sweep_aabb(aabb, displacement, epsilon)),
            _ => Err(QueryError::unsupported(ShapeKind::Sphere, self.kind())),
        }
    }
}
