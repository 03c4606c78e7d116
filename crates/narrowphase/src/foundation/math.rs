//! Math utilities and types
//!
//! Provides fundamental math types for 3D geometric queries.

pub use nalgebra::{Matrix3, Matrix4, Rotation3, Vector2, Vector3, Vector4};

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// 3D vector type
pub type Vec3 = Vector3<f32>;

/// 4D vector type
pub type Vec4 = Vector4<f32>;

/// 3x3 matrix type
pub type Mat3 = Matrix3<f32>;

/// 4x4 matrix type
pub type Mat4 = Matrix4<f32>;

/// 3D rotation type
pub type Rot3 = Rotation3<f32>;

/// Default tolerance for parallelism and colinearity checks
///
/// Every cast function takes an explicit epsilon so callers can tighten or
/// loosen the tolerance per query; this constant is the default magnitude
/// used by the [`Shape`](crate::query::Shape) dispatcher entry points.
pub const EPSILON: f32 = 1e-6;

/// Math utility functions
pub mod utils {
    /// Clamp a value to the [0, 1] interval
    pub fn clamp01(value: f32) -> f32 {
        value.clamp(0.0, 1.0)
    }
}
