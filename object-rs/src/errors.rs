//! Module errors

use std::io;
use thiserror::Error;

/// Errors raised while building objects from external vertex data.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectError {
    /// The vertex list is empty, so the origin (centroid) is undefined.
    #[error("mesh has no vertices")]
    EmptyMesh,

    /// A vertex was supplied with the wrong number of components.
    #[error("dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch { expected: usize, found: usize },

    /// A polygon references a vertex that does not exist.
    #[error("vertex index {index} out of range for {len} vertices")]
    IndexOutOfRange { index: usize, len: usize },
}

impl From<geometry::DimensionMismatch> for ObjectError {
    fn from(value: geometry::DimensionMismatch) -> Self {
        ObjectError::DimensionMismatch {
            expected: value.expected,
            found: value.found,
        }
    }
}

/// Errors raised while loading a [`crate::MotionScript`].
#[derive(Error, Debug)]
pub enum ScriptError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid motion script: {0}")]
    Json(#[from] serde_json::Error),
}
