pub mod box3d;

pub use box3d::Box3D;

use geometry::Vector3D;

/// Fixture geometry with explicit polygon topology.
pub trait Renderable3D {
    fn vertices(&self) -> Vec<Vector3D>;
    fn faces(&self) -> Vec<Vec<usize>>;

    /// Faces expanded into their vertices.
    fn polygons(&self) -> Vec<Vec<Vector3D>> {
        let vertices = self.vertices();
        self.faces()
            .iter()
            .map(|face| face.iter().map(|&index| vertices[index]).collect())
            .collect()
    }
}
