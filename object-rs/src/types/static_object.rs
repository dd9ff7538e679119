use geometry::{Real, Vector3D};

use crate::errors::ObjectError;
use crate::traits::{FromVertices, Shape3D};

/// Immutable vertex set and its centroid.
#[derive(Clone, Debug, PartialEq)]
pub struct StaticObject<T: Real = f64> {
    vertices: Vec<Vector3D<T>>,
    origin: Vector3D<T>,
}

impl<T: Real> StaticObject<T> {
    /// Builds the object and computes its origin as the arithmetic mean of `vertices`.
    ///
    /// Fails with [`ObjectError::EmptyMesh`] if `vertices` is empty.
    pub fn new(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        if vertices.is_empty() {
            return Err(ObjectError::EmptyMesh);
        }
        let sum = vertices
            .iter()
            .fold(Vector3D::zeros(), |acc, vertex| acc + *vertex);
        let origin = sum / nalgebra::convert::<f64, T>(vertices.len() as f64);

        Ok(Self { vertices, origin })
    }

    pub fn vertices(&self) -> &[Vector3D<T>] {
        &self.vertices
    }

    pub fn origin(&self) -> &Vector3D<T> {
        &self.origin
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector3D<T>> {
        self.vertices.iter()
    }
}

impl<T: Real> Shape3D for StaticObject<T> {
    type Scalar = T;

    fn vertices(&self) -> &[Vector3D<T>] {
        &self.vertices
    }

    fn origin(&self) -> &Vector3D<T> {
        &self.origin
    }
}

impl<T: Real> FromVertices<T> for StaticObject<T> {
    fn from_vertices(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_centroid() {
        let object = StaticObject::new(vec![
            Vector3D::xyz(0.0, 0.0, 0.0),
            Vector3D::xyz(2.0, 0.0, 0.0),
            Vector3D::xyz(2.0, 4.0, 0.0),
            Vector3D::xyz(0.0, 4.0, 6.0),
        ])
        .unwrap();

        assert_eq!(object.origin().inner(), [1.0, 2.0, 1.5]);
        assert_eq!(object.len(), 4);
    }

    #[test]
    fn test_single_vertex() {
        let object = StaticObject::new(vec![Vector3D::xyz(3.0, -1.0, 2.0)]).unwrap();
        assert_eq!(object.origin(), &object.vertices()[0]);
    }

    #[test]
    fn test_empty_mesh() {
        let result = StaticObject::<f64>::new(Vec::new());
        assert_eq!(result, Err(ObjectError::EmptyMesh));
    }
}
