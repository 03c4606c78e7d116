//! Ray and segment casts against each target shape
//!
//! Every algorithm is parametric over the caster's span: a hit exists only
//! for `t` in `[0, 1]`, where `t = 0` is the caster's start and `t = 1` its
//! end. [`Ray`] casts delegate to the segment covering the ray's reach, so
//! both casters share one set of algorithms.
//!
//! On a hit the returned [`Intersection`] carries the first impact along
//! the caster and an outward normal facing it.

use std::mem;

use crate::foundation::math::Vec3;
use crate::query::Intersection;
use crate::shapes::{
    Capsule, Cylinder, InfiniteCylinder, Line, Plane, Quad, Ray, Segment, Sphere, AABB, OBB,
};

impl Segment {
    /// Cast against a plane
    ///
    /// Misses when the segment is parallel to the plane (within `epsilon`)
    /// or crosses it outside the segment's span. The returned normal is the
    /// plane's normal flipped, if needed, to oppose the segment direction.
    pub fn intersect_plane(&self, plane: &Plane, epsilon: f32) -> Option<Intersection> {
        let direction = self.direction();
        let denom = direction.dot(&plane.normal);

        if denom.abs() <= epsilon {
            return None;
        }

        let t = -(plane.distance + self.a.dot(&plane.normal)) / denom;

        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let impact = self.a + direction * t;
        let normal = if denom > 0.0 { -plane.normal } else { plane.normal };

        Some(Intersection::new(impact, normal))
    }

    /// Cast against a quad
    ///
    /// A plane cast against the quad's carrier plane, then a bounds check
    /// in the quad's local rectangle.
    pub fn intersect_quad(&self, quad: &Quad, epsilon: f32) -> Option<Intersection> {
        let plane = Plane::from_point_normal(quad.origin, quad.up);
        let hit = self.intersect_plane(&plane, epsilon)?;

        quad.contains_point(hit.impact).then_some(hit)
    }

    /// Cast against an oriented box
    ///
    /// The segment is carried into the box's local frame, tested against
    /// the un-rotated box, and the result is rotated back to world space.
    pub fn intersect_obb(&self, obb: &OBB, epsilon: f32) -> Option<Intersection> {
        let rotation = obb.rotation();
        let inverse = rotation.inverse();
        let local = Self::new(inverse * (self.a - obb.origin), inverse * (self.b - obb.origin));

        let hit = local.intersect_aabb(&AABB::new(Vec3::zeros(), obb.extents * 2.0), epsilon)?;

        Some(Intersection::new(
            obb.origin + rotation * hit.impact,
            rotation * hit.normal,
        ))
    }

    /// Cast against an axis-aligned box using the slab method
    ///
    /// Each axis clips the parametric interval against its min/max planes;
    /// an axis the segment is parallel to (within `epsilon`) is skipped. A
    /// segment that starts on or inside the box never reports a hit: only
    /// entries with `t > 0` count.
    pub fn intersect_aabb(&self, aabb: &AABB, epsilon: f32) -> Option<Intersection> {
        let direction = self.direction();
        let mut tmin = 0.0_f32;
        let mut tmax = 1.0_f32;

        for i in 0..3 {
            if direction[i].abs() <= epsilon {
                continue;
            }

            let mut t1 = (aabb.min()[i] - self.a[i]) / direction[i];
            let mut t2 = (aabb.max()[i] - self.a[i]) / direction[i];

            if t2 < t1 {
                mem::swap(&mut t1, &mut t2);
            }

            if t2 < tmin || t1 > tmax {
                return None;
            }

            tmin = tmin.max(t1);
            tmax = tmax.min(t2);

            if tmin > tmax {
                return None;
            }
        }

        if tmin == 0.0 {
            return None;
        }

        let impact = self.a + direction * tmin;

        Some(Intersection::new(impact, aabb.face_normal(impact)))
    }

    /// Cast against a sphere
    ///
    /// Solves the classic quadratic and considers only the entry root, so
    /// a segment starting inside the sphere reports no hit.
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<Intersection> {
        let direction = self.direction();
        let oc = self.a - sphere.origin;

        let a = direction.magnitude_squared();
        let b = 2.0 * oc.dot(&direction);
        let c = oc.magnitude_squared() - sphere.radius * sphere.radius;
        let delta = b * b - 4.0 * a * c;

        if delta < 0.0 {
            return None;
        }

        let t = (-b - delta.sqrt()) / (2.0 * a);

        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let impact = self.a + direction * t;
        let normal = (impact - sphere.origin).normalize();

        Some(Intersection::new(impact, normal))
    }

    /// Cast against a capped cylinder
    ///
    /// The segment's end must lie between the capping planes. A start
    /// beyond a cap plane is tested against that cap's disc first; a
    /// cap-plane hit outside the disc falls through to the remaining
    /// candidates rather than rejecting. Whatever remains reduces to the
    /// infinite-cylinder body test.
    pub fn intersect_cylinder(&self, cylinder: &Cylinder, epsilon: f32) -> Option<Intersection> {
        let (p, q) = cylinder.cap_points();
        let (plane_p, plane_q) = cylinder.cap_planes();
        let radius_sqr = cylinder.radius * cylinder.radius;

        if plane_p.side(self.b) >= 0.0 || plane_q.side(self.b) >= 0.0 {
            return None;
        }

        if plane_p.side(self.a) >= 0.0 {
            match self.intersect_plane(&plane_p, epsilon) {
                Some(hit) if (hit.impact - p).magnitude_squared() <= radius_sqr => {
                    return Some(hit);
                }
                Some(_) => {}
                None => return None,
            }
        }

        if plane_q.side(self.a) >= 0.0 {
            match self.intersect_plane(&plane_q, epsilon) {
                Some(hit) if (hit.impact - q).magnitude_squared() <= radius_sqr => {
                    return Some(hit);
                }
                Some(_) => {}
                None => return None,
            }
        }

        self.intersect_infinite_cylinder(&cylinder.to_infinite())
    }

    /// Cast against an infinite cylinder
    ///
    /// The quadratic is solved in the plane perpendicular to the axis;
    /// only the entry root is considered, as for the sphere.
    pub fn intersect_infinite_cylinder(
        &self,
        cylinder: &InfiniteCylinder,
    ) -> Option<Intersection> {
        let direction = self.direction();
        let oc = self.a - cylinder.origin;
        let axis = cylinder.direction;

        let axial_dir = direction.dot(&axis);
        let axial_oc = oc.dot(&axis);

        let a = direction.magnitude_squared() - axial_dir * axial_dir;
        let b = 2.0 * (oc.dot(&direction) - axial_dir * axial_oc);
        let c = oc.magnitude_squared() - axial_oc * axial_oc - cylinder.radius * cylinder.radius;
        let delta = b * b - 4.0 * a * c;

        if delta < 0.0 {
            return None;
        }

        let t = (-b - delta.sqrt()) / (2.0 * a);

        if !(0.0..=1.0).contains(&t) {
            return None;
        }

        let impact = self.a + direction * t;
        let axis_line = Line::new(cylinder.origin, cylinder.direction);
        let normal = (impact - axis_line.closest_point(impact)).normalize();

        Some(Intersection::new(impact, normal))
    }

    /// Cast against a capsule
    ///
    /// An ordered first-match search over the capsule's three surfaces:
    /// the start's position against the cap planes decides which cap
    /// sphere is likeliest and is tried first, then the cylindrical body,
    /// then the far cap sphere. The first sub-test to hit wins, which is
    /// not guaranteed to be the globally nearest impact; the order is part
    /// of the documented behavior.
    pub fn intersect_capsule(&self, capsule: &Capsule, epsilon: f32) -> Option<Intersection> {
        let body = capsule.to_cylinder();
        let (plane_p, plane_q) = body.cap_planes();
        let (sphere_p, sphere_q) = capsule.cap_spheres();

        if plane_p.side(self.a) >= 0.0 {
            return self
                .intersect_sphere(&sphere_p)
                .or_else(|| self.intersect_cylinder(&body, epsilon))
                .or_else(|| self.intersect_sphere(&sphere_q));
        }

        if plane_q.side(self.a) >= 0.0 {
            return self
                .intersect_sphere(&sphere_q)
                .or_else(|| self.intersect_cylinder(&body, epsilon))
                .or_else(|| self.intersect_sphere(&sphere_p));
        }

        self.intersect_cylinder(&body, epsilon)
            .or_else(|| self.intersect_sphere(&sphere_p))
            .or_else(|| self.intersect_sphere(&sphere_q))
    }
}

impl Ray {
    /// Cast against a plane over the ray's reach
    pub fn intersect_plane(&self, plane: &Plane, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_plane(plane, epsilon)
    }

    /// Cast against a quad over the ray's reach
    pub fn intersect_quad(&self, quad: &Quad, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_quad(quad, epsilon)
    }

    /// Cast against an oriented box over the ray's reach
    pub fn intersect_obb(&self, obb: &OBB, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_obb(obb, epsilon)
    }

    /// Cast against an axis-aligned box over the ray's reach
    pub fn intersect_aabb(&self, aabb: &AABB, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_aabb(aabb, epsilon)
    }

    /// Cast against a sphere over the ray's reach
    pub fn intersect_sphere(&self, sphere: &Sphere) -> Option<Intersection> {
        self.to_segment().intersect_sphere(sphere)
    }

    /// Cast against a capped cylinder over the ray's reach
    pub fn intersect_cylinder(&self, cylinder: &Cylinder, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_cylinder(cylinder, epsilon)
    }

    /// Cast against an infinite cylinder over the ray's reach
    pub fn intersect_infinite_cylinder(
        &self,
        cylinder: &InfiniteCylinder,
    ) -> Option<Intersection> {
        self.to_segment().intersect_infinite_cylinder(cylinder)
    }

    /// Cast against a capsule over the ray's reach
    pub fn intersect_capsule(&self, capsule: &Capsule, epsilon: f32) -> Option<Intersection> {
        self.to_segment().intersect_capsule(capsule, epsilon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::{Vec2, EPSILON};
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_4;

    #[test]
    fn test_segment_plane_crossing() {
        // XZ plane, probe falling straight down through it
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        let segment = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -5.0, 0.0));

        let hit = segment.intersect_plane(&plane, EPSILON).expect("crosses plane");
        assert_relative_eq!(hit.impact, Vec3::new(0.0, 0.0, 0.0));
        // The normal faces the caster, opposing the downward direction
        assert_relative_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_segment_plane_normal_flips_toward_caster() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        let segment = Segment::new(Vec3::new(0.0, -5.0, 0.0), Vec3::new(0.0, 5.0, 0.0));

        let hit = segment.intersect_plane(&plane, EPSILON).expect("crosses plane");
        assert_relative_eq!(hit.normal, Vec3::new(0.0, -1.0, 0.0));
    }

    #[test]
    fn test_segment_plane_parallel_misses() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        let segment = Segment::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(5.0, 1.0, 0.0));

        assert!(segment.intersect_plane(&plane, EPSILON).is_none());
    }

    #[test]
    fn test_segment_plane_short_of_crossing() {
        let plane = Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0);
        let segment = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

        assert!(segment.intersect_plane(&plane, EPSILON).is_none());
    }

    #[test]
    fn test_segment_quad_bounds() {
        let quad = Quad::axis_aligned(Vec3::zeros(), Vec2::new(2.0, 2.0));
        let inside = Segment::new(Vec3::new(0.5, 1.0, 0.5), Vec3::new(0.5, -1.0, 0.5));
        let outside = Segment::new(Vec3::new(1.5, 1.0, 0.0), Vec3::new(1.5, -1.0, 0.0));

        let hit = inside.intersect_quad(&quad, EPSILON).expect("within bounds");
        assert_relative_eq!(hit.impact, Vec3::new(0.5, 0.0, 0.5));

        // Crosses the carrier plane but outside the rectangle
        assert!(outside.intersect_quad(&quad, EPSILON).is_none());
    }

    #[test]
    fn test_segment_aabb_hit() {
        let aabb = AABB::cube(Vec3::zeros(), 2.0);
        let segment = Segment::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-5.0, 0.0, 0.0));

        let hit = segment.intersect_aabb(&aabb, EPSILON).expect("crosses box");
        assert_relative_eq!(hit.impact, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_aabb_start_inside_is_policy_miss() {
        // Entry at t == 0 is deliberately not a hit
        let aabb = AABB::cube(Vec3::zeros(), 2.0);
        let from_center = Segment::new(Vec3::zeros(), Vec3::new(5.0, 0.0, 0.0));

        assert!(from_center.intersect_aabb(&aabb, EPSILON).is_none());
    }

    #[test]
    fn test_segment_aabb_parallel_axis_outside_slab() {
        let aabb = AABB::cube(Vec3::zeros(), 2.0);
        // Parallel to x inside no slab on y
        let segment = Segment::new(Vec3::new(-5.0, 3.0, 0.0), Vec3::new(5.0, 3.0, 0.0));

        assert!(segment.intersect_aabb(&aabb, EPSILON).is_none());
    }

    #[test]
    fn test_segment_obb_rotated_hit() {
        let obb = OBB::new(
            Vec3::zeros(),
            Vec3::new(1.0, 1.0, 1.0),
            Vec3::new(0.0, 0.0, FRAC_PI_4),
        );
        let segment = Segment::new(Vec3::new(3.0, 0.5, 0.0), Vec3::new(0.0, 0.5, 0.0));

        let hit = segment.intersect_obb(&obb, EPSILON).expect("crosses box");
        assert_relative_eq!(hit.impact, Vec3::new(0.91421, 0.5, 0.0), epsilon = 1e-4);

        let half_sqrt2 = 2.0_f32.sqrt() / 2.0;
        assert_relative_eq!(hit.normal, Vec3::new(half_sqrt2, half_sqrt2, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_segment_obb_identity_matches_aabb() {
        let obb = OBB::new(Vec3::new(1.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 1.0), Vec3::zeros());
        let aabb = AABB::cube(Vec3::new(1.0, 0.0, 0.0), 2.0);
        let segment = Segment::new(Vec3::new(5.0, 0.5, 0.0), Vec3::new(-5.0, 0.5, 0.0));

        let obb_hit = segment.intersect_obb(&obb, EPSILON).expect("hit");
        let aabb_hit = segment.intersect_aabb(&aabb, EPSILON).expect("hit");

        assert_relative_eq!(obb_hit.impact, aabb_hit.impact, epsilon = 1e-5);
        assert_relative_eq!(obb_hit.normal, aabb_hit.normal, epsilon = 1e-5);
    }

    #[test]
    fn test_segment_sphere_hit() {
        let sphere = Sphere::new(Vec3::zeros(), 1.0);
        let segment = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -5.0, 0.0));

        let hit = segment.intersect_sphere(&sphere).expect("crosses sphere");
        assert_relative_eq!(hit.impact, Vec3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_segment_sphere_tangent_single_root() {
        // Grazing segment: discriminant is ~zero, one root at the tangent point
        let sphere = Sphere::new(Vec3::zeros(), 1.0);
        let segment = Segment::new(Vec3::new(-5.0, 1.0, 0.0), Vec3::new(5.0, 1.0, 0.0));

        let hit = segment.intersect_sphere(&sphere).expect("tangent");
        assert_relative_eq!(hit.impact, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-4);
    }

    #[test]
    fn test_segment_sphere_miss() {
        let sphere = Sphere::new(Vec3::zeros(), 1.0);
        let segment = Segment::new(Vec3::new(-5.0, 1.5, 0.0), Vec3::new(5.0, 1.5, 0.0));

        assert!(segment.intersect_sphere(&sphere).is_none());
    }

    #[test]
    fn test_segment_sphere_start_inside_misses() {
        // Only the entry root counts; exiting from inside is not a hit
        let sphere = Sphere::new(Vec3::zeros(), 1.0);
        let segment = Segment::new(Vec3::zeros(), Vec3::new(0.0, 5.0, 0.0));

        assert!(segment.intersect_sphere(&sphere).is_none());
    }

    #[test]
    fn test_segment_cylinder_side_hit() {
        let cylinder = Cylinder::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 4.0, 1.0);
        let segment = Segment::new(Vec3::new(3.0, 0.0, 0.0), Vec3::zeros());

        let hit = segment.intersect_cylinder(&cylinder, EPSILON).expect("side hit");
        assert_relative_eq!(hit.impact, Vec3::new(1.0, 0.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_cylinder_cap_hit() {
        let cylinder = Cylinder::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 4.0, 1.0);
        let segment = Segment::new(Vec3::new(0.5, 5.0, 0.0), Vec3::new(0.5, 0.0, 0.0));

        let hit = segment.intersect_cylinder(&cylinder, EPSILON).expect("cap hit");
        assert_relative_eq!(hit.impact, Vec3::new(0.5, 2.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_segment_cylinder_cap_miss_falls_through_to_body() {
        // Crosses the cap plane outside the disc, then strikes the side
        let cylinder = Cylinder::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 4.0, 1.0);
        let segment = Segment::new(Vec3::new(2.0, 3.0, 0.0), Vec3::zeros());

        let hit = segment.intersect_cylinder(&cylinder, EPSILON).expect("body hit");
        assert_relative_eq!(hit.impact, Vec3::new(1.0, 1.5, 0.0), epsilon = 1e-5);
        assert_relative_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-5);
    }

    #[test]
    fn test_segment_cylinder_end_outside_slab_misses() {
        let cylinder = Cylinder::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 4.0, 1.0);
        let segment = Segment::new(Vec3::new(3.0, 3.0, 0.0), Vec3::new(-3.0, 3.0, 0.0));

        assert!(segment.intersect_cylinder(&cylinder, EPSILON).is_none());
    }

    #[test]
    fn test_segment_infinite_cylinder_ignores_caps() {
        let cylinder = InfiniteCylinder::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 1.0);
        // Far above any finite cylinder's caps
        let segment = Segment::new(Vec3::new(3.0, 100.0, 0.0), Vec3::new(0.0, 100.0, 0.0));

        let hit = segment
            .intersect_infinite_cylinder(&cylinder)
            .expect("infinite extent");
        assert_relative_eq!(hit.impact, Vec3::new(1.0, 100.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_capsule_cap_hit() {
        let capsule = Capsule::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 2.0, 0.5);
        let segment = Segment::new(Vec3::new(0.0, 3.0, 0.0), Vec3::zeros());

        let hit = segment.intersect_capsule(&capsule, EPSILON).expect("cap hit");
        assert_relative_eq!(hit.impact, Vec3::new(0.0, 1.5, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(0.0, 1.0, 0.0));
    }

    #[test]
    fn test_segment_capsule_side_hit() {
        let capsule = Capsule::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 2.0, 0.5);
        let segment = Segment::new(Vec3::new(2.0, 0.0, 0.0), Vec3::zeros());

        let hit = segment.intersect_capsule(&capsule, EPSILON).expect("side hit");
        assert_relative_eq!(hit.impact, Vec3::new(0.5, 0.0, 0.0));
        assert_relative_eq!(hit.normal, Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_segment_capsule_miss() {
        let capsule = Capsule::new(Vec3::zeros(), Vec3::new(0.0, 1.0, 0.0), 2.0, 0.5);
        let segment = Segment::new(Vec3::new(2.0, 5.0, 0.0), Vec3::new(-2.0, 5.0, 0.0));

        assert!(segment.intersect_capsule(&capsule, EPSILON).is_none());
    }

    #[test]
    fn test_ray_matches_segment_over_reach() {
        let aabb = AABB::cube(Vec3::zeros(), 2.0);
        let ray = Ray::new(Vec3::new(5.0, 0.0, 0.0), Vec3::new(-1.0, 0.0, 0.0), 10.0);
        let segment = ray.to_segment();

        let ray_hit = ray.intersect_aabb(&aabb, EPSILON).expect("hit");
        let segment_hit = segment.intersect_aabb(&aabb, EPSILON).expect("hit");

        assert_relative_eq!(ray_hit.impact, segment_hit.impact);
        assert_relative_eq!(ray_hit.normal, segment_hit.normal);
    }

    #[test]
    fn test_ray_max_distance_limits_reach() {
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0);
        let short = Ray::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 5.0);
        let long = Ray::new(Vec3::zeros(), Vec3::new(1.0, 0.0, 0.0), 20.0);

        assert!(short.intersect_sphere(&sphere).is_none());
        assert!(long.intersect_sphere(&sphere).is_some());
    }

    #[test]
    fn test_ray_direction_magnitude_scales_reach() {
        // max_distance multiplies the direction's own length
        let sphere = Sphere::new(Vec3::new(10.0, 0.0, 0.0), 1.0);
        let ray = Ray::new(Vec3::zeros(), Vec3::new(2.0, 0.0, 0.0), 5.0);

        assert!(ray.intersect_sphere(&sphere).is_some());
    }
}
