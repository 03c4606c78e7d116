//! # Narrowphase
//!
//! Narrow-phase geometric queries for real-time applications.
//!
//! ## Features
//!
//! - **Ray and segment casts**: first-hit queries against planes, quads,
//!   boxes (axis-aligned and oriented), spheres, cylinders, and capsules
//! - **Static collision**: oriented-box overlap via the separating-axis
//!   theorem, with a world-AABB pre-pass
//! - **Continuous collision**: swept sphere vs static box, resolved through
//!   Voronoi-region classification (face/edge/vertex contacts)
//! - **Typed unsupported queries**: shape pairs without an implementation
//!   report [`QueryError::Unsupported`](query::QueryError) instead of
//!   masquerading as a miss
//!
//! ## Quick Start
//!
//! ```rust
//! use narrowphase::prelude::*;
//!
//! let floor = Shape::Plane(Plane::new(Vec3::new(0.0, 1.0, 0.0), 0.0));
//! let probe = Segment::new(Vec3::new(0.0, 5.0, 0.0), Vec3::new(0.0, -5.0, 0.0));
//!
//! let hit = floor.intersect_segment(&probe).expect("probe crosses the floor");
//! assert_eq!(hit.impact, Vec3::new(0.0, 0.0, 0.0));
//! ```
//!
//! Every query is a pure function over value-type shapes: no shared state,
//! no locks, safe to run from any number of threads.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod foundation;
pub mod query;
pub mod shapes;

/// Common imports for library users
pub mod prelude {
    pub use crate::{
        foundation::math::{Vec2, Vec3, EPSILON},
        query::{Intersection, QueryError, Shape, ShapeKind},
        shapes::{
            Capsule, Cylinder, InfiniteCylinder, Line, Plane, Quad, Ray, Segment, Sphere, AABB,
            OBB,
        },
    };
}
