use thiserror::Error;

/// A runtime collection of scalars could not be turned into a fixed-size vector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("dimension mismatch: expected {expected} components, found {found}")]
pub struct DimensionMismatch {
    pub expected: usize,
    pub found: usize,
}
