//! Query hit record

use crate::foundation::math::Vec3;

/// Result of a successful intersection query
///
/// Queries return `Option<Intersection>`: `Some` carries the first impact
/// along the caster together with an outward surface normal, `None` means
/// no contact. Nothing is ever partially written on a miss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection {
    /// Point of impact in world space
    pub impact: Vec3,
    /// Surface normal at the impact, facing the caster
    pub normal: Vec3,
}

impl Intersection {
    /// Create a new intersection record
    pub const fn new(impact: Vec3, normal: Vec3) -> Self {
        Self { impact, normal }
    }
}
