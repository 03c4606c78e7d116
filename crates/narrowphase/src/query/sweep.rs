//! Continuous collision: swept sphere vs static box
//!
//! The moving sphere is reduced to a segment cast by Minkowski expansion:
//! growing the box by the sphere's radius turns "sphere center path hits
//! the expanded box" into the exact continuous-collision condition. The
//! raw impact is then classified against the unexpanded box into a face,
//! edge, or vertex Voronoi region, and the edge and vertex cases reuse the
//! capsule cast along the box's own edges.

use log::trace;

use crate::foundation::math::Vec3;
use crate::query::Intersection;
use crate::shapes::{Capsule, Segment, Sphere, AABB};

impl Sphere {
    /// Check if the sphere, moving by `displacement`, strikes a static box
    ///
    /// Returns the first contact: the impact point lies on the unexpanded
    /// box for face contacts and on the radius-expanded edge/corner
    /// geometry otherwise. Inherits the segment/box boundary policy: a
    /// sphere whose center starts on or inside the expanded box reports no
    /// contact.
    pub fn sweep_aabb(
        &self,
        aabb: &AABB,
        displacement: Vec3,
        epsilon: f32,
    ) -> Option<Intersection> {
        let mut expanded = *aabb;
        expanded.expand(self.radius);

        let movement = Segment::new(self.origin, self.origin + displacement);
        let hit = movement.intersect_aabb(&expanded, epsilon)?;

        // 6-bit region code against the unexpanded box: per axis, bit in
        // `u` when the impact is below the box minimum, bit in `v` when
        // above the maximum
        let mut u = 0_usize;
        let mut v = 0_usize;

        for i in 0..3 {
            if hit.impact[i] < aabb.min()[i] {
                u |= 1 << i;
            }
            if hit.impact[i] > aabb.max()[i] {
                v |= 1 << i;
            }
        }

        let region = u | v;
        trace!("swept sphere impact region u={u:03b} v={v:03b}");

        if region == 7 {
            // Vertex region: the contact is the nearest hit among the
            // three edge capsules meeting at the crossed corner
            let corner = aabb.corner(v);
            let mut best: Option<Intersection> = None;
            let mut best_distance = f32::MAX;

            for axis_bit in [1_usize, 2, 4] {
                let edge = Capsule::between(corner, aabb.corner(v ^ axis_bit), self.radius);

                if let Some(candidate) = movement.intersect_capsule(&edge, epsilon) {
                    let distance = (candidate.impact - self.origin).magnitude_squared();

                    if distance < best_distance {
                        best_distance = distance;
                        best = Some(candidate);
                    }
                }
            }

            return best;
        }

        if region.count_ones() <= 1 {
            // Face region: the true contact is the closest point on the
            // unexpanded box; the slab normal already matches the face
            return Some(Intersection::new(aabb.closest_point(hit.impact), hit.normal));
        }

        // Edge region: one capsule along the edge shared by the two
        // crossed faces
        let edge = Capsule::between(aabb.corner(u ^ 7), aabb.corner(v), self.radius);
        movement.intersect_capsule(&edge, epsilon)
    }
}
