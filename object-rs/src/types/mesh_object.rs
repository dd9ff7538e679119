use geometry::{Real, Vector3D};

use crate::errors::ObjectError;
use crate::traits::{FromVertices, Shape3D};

/// An object of kind `O` plus the grouping of its vertices into polygons.
///
/// Every index in the vertex order is checked against the vertex count at construction, and
/// no object kind changes its vertex count afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct MeshObject<O> {
    object: O,
    vertex_order: Vec<Vec<usize>>,
}

impl<O> MeshObject<O> {
    pub fn new<T: Real>(
        vertices: Vec<Vector3D<T>>,
        vertex_order: Vec<Vec<usize>>,
    ) -> Result<Self, ObjectError>
    where
        O: FromVertices<T>,
    {
        check_indices(&vertex_order, vertices.len())?;
        Ok(Self {
            object: O::from_vertices(vertices)?,
            vertex_order,
        })
    }

    /// Wraps an already built object.
    pub fn with_object(object: O, vertex_order: Vec<Vec<usize>>) -> Result<Self, ObjectError>
    where
        O: Shape3D,
    {
        check_indices(&vertex_order, object.vertices().len())?;
        Ok(Self {
            object,
            vertex_order,
        })
    }

    /// Builds the vertex list and vertex order from explicit polygons.
    ///
    /// Vertices equal to one already seen are stored once and referenced by index.
    pub fn from_polygons<T: Real>(polygons: Vec<Vec<Vector3D<T>>>) -> Result<Self, ObjectError>
    where
        O: FromVertices<T>,
    {
        let mut vertices: Vec<Vector3D<T>> = Vec::new();
        let vertex_order: Vec<Vec<usize>> = polygons
            .into_iter()
            .map(|polygon| {
                polygon
                    .into_iter()
                    .map(|vertex| match vertices.iter().position(|seen| *seen == vertex) {
                        Some(index) => index,
                        None => {
                            vertices.push(vertex);
                            vertices.len() - 1
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        Ok(Self {
            object: O::from_vertices(vertices)?,
            vertex_order,
        })
    }

    pub fn vertex_order(&self) -> &[Vec<usize>] {
        &self.vertex_order
    }

    pub fn object(&self) -> &O {
        &self.object
    }

    pub fn object_mut(&mut self) -> &mut O {
        &mut self.object
    }

    pub fn into_inner(self) -> O {
        self.object
    }

    /// Current vertices of every polygon, in vertex order.
    pub fn polygons(
        &self,
    ) -> impl Iterator<Item = impl Iterator<Item = &Vector3D<O::Scalar>> + '_> + '_
    where
        O: Shape3D,
    {
        let vertices = self.object.vertices();
        self.vertex_order
            .iter()
            .map(move |group| group.iter().map(move |&index| &vertices[index]))
    }
}

fn check_indices(vertex_order: &[Vec<usize>], len: usize) -> Result<(), ObjectError> {
    match vertex_order.iter().flatten().find(|&&index| index >= len) {
        Some(&index) => Err(ObjectError::IndexOutOfRange { index, len }),
        None => Ok(()),
    }
}
