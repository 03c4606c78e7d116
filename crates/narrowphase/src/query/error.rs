//! Typed query errors

use thiserror::Error;

use crate::query::ShapeKind;

/// Errors surfaced by the query dispatchers
///
/// "No collision" is never an error; it is the `None` / `Ok(false)` arm of
/// the query result. An `Err` means the query itself could not be answered.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The shape pair has no implemented algorithm
    ///
    /// Distinct from a miss so callers cannot mistake missing functionality
    /// for a genuine negative.
    #[error("{caster} vs {target} query is not implemented")]
    Unsupported {
        /// The querying shape
        caster: ShapeKind,
        /// The target shape
        target: ShapeKind,
    },
}

impl QueryError {
    pub(crate) const fn unsupported(caster: ShapeKind, target: ShapeKind) -> Self {
        Self::Unsupported { caster, target }
    }
}
