//! Separating-axis overlap test for oriented boxes
//!
//! Two convex shapes are disjoint exactly when some axis exists onto which
//! their projections do not overlap. For a pair of oriented boxes the
//! candidate axes are each box's three local axes plus the nine pairwise
//! cross products, fifteen in total.

use log::trace;

use crate::foundation::math::Vec3;
use crate::shapes::OBB;

/// Scalar interval covered by a shape's projection onto an axis
///
/// Produced fresh per axis test; never persisted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    /// Lower bound of the interval
    pub min: f32,
    /// Upper bound of the interval
    pub max: f32,
}

impl Range {
    /// Create a new interval
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Project a box's eight vertices onto an axis
    ///
    /// The axis need not be unit length: both boxes' projections scale by
    /// the same factor, so overlap is unaffected.
    pub fn project_obb(axis: &Vec3, obb: &OBB) -> Self {
        let mut range = Self::new(f32::MAX, f32::MIN);

        for vertex in obb.vertices() {
            let dot = axis.dot(&vertex);

            range.min = range.min.min(dot);
            range.max = range.max.max(dot);
        }

        range
    }

    /// Check if two intervals overlap (closed bounds)
    pub fn overlaps(&self, other: &Self) -> bool {
        !(self.max < other.min || self.min > other.max)
    }
}

impl OBB {
    /// Check if this box overlaps another box
    ///
    /// A world-AABB rejection pass runs first; survivors go through the
    /// full fifteen-axis separating-axis test, short-circuiting on the
    /// first separating axis found. Near-parallel boxes produce degenerate
    /// cross-product axes whose projections collapse to a point and
    /// overlap trivially; they are not special-cased.
    pub fn intersects(&self, other: &Self) -> bool {
        if !self.bounding_aabb().intersects(&other.bounding_aabb()) {
            return false;
        }

        let lhs_rotation = self.rotation();
        let rhs_rotation = other.rotation();

        let lhs_axes = [
            lhs_rotation * Vec3::x(),
            lhs_rotation * Vec3::y(),
            lhs_rotation * Vec3::z(),
        ];
        let rhs_axes = [
            rhs_rotation * Vec3::x(),
            rhs_rotation * Vec3::y(),
            rhs_rotation * Vec3::z(),
        ];

        for axis in lhs_axes.iter().chain(rhs_axes.iter()) {
            if !Range::project_obb(axis, self).overlaps(&Range::project_obb(axis, other)) {
                trace!("separating axis found along a face normal: {axis:?}");
                return false;
            }
        }

        for lhs in &lhs_axes {
            for rhs in &rhs_axes {
                let axis = lhs.cross(rhs);

                if !Range::project_obb(&axis, self).overlaps(&Range::project_obb(&axis, other)) {
                    trace!("separating axis found along an edge pair: {axis:?}");
                    return false;
                }
            }
        }

        true
    }
}
