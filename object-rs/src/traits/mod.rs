use geometry::{Real, Vector3D};

use crate::errors::ObjectError;

/// Read access to the current geometry of an object.
pub trait Shape3D {
    type Scalar: Real;

    /// Current vertices, in construction order.
    fn vertices(&self) -> &[Vector3D<Self::Scalar>];
    /// Current origin (centroid).
    fn origin(&self) -> &Vector3D<Self::Scalar>;
}

/// Objects that can be built from a plain vertex list.
pub trait FromVertices<T: Real>: Sized {
    fn from_vertices(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError>;
}
