use super::Renderable3D;
use geometry::Vector3D;

const N_BOX_VERTICES: usize = 8;
const N_BOX_FACES: usize = 6;

fn box_faces() -> [[usize; 4]; N_BOX_FACES] {
    [
        [0, 1, 2, 3],
        [4, 5, 6, 7],
        [0, 1, 5, 4],
        [1, 2, 6, 5],
        [2, 3, 7, 6],
        [3, 0, 4, 7],
    ]
}

/// Axis-aligned box centered on the origin. Vertices 0..4 form the bottom ring, 4..8 the top.
#[derive(Debug, Clone, PartialEq)]
pub struct Box3D {
    vertices: [Vector3D; N_BOX_VERTICES],
}

impl Box3D {
    pub fn cuboid(half_x: f64, half_y: f64, half_z: f64) -> Self {
        let vertices = [
            Vector3D::xyz(-half_x, -half_y, -half_z),
            Vector3D::xyz(half_x, -half_y, -half_z),
            Vector3D::xyz(half_x, half_y, -half_z),
            Vector3D::xyz(-half_x, half_y, -half_z),
            Vector3D::xyz(-half_x, -half_y, half_z),
            Vector3D::xyz(half_x, -half_y, half_z),
            Vector3D::xyz(half_x, half_y, half_z),
            Vector3D::xyz(-half_x, half_y, half_z),
        ];

        Self { vertices }
    }

    /// Cube with every vertex at ±1 on each axis.
    pub fn unit() -> Self {
        Self::cuboid(1.0, 1.0, 1.0)
    }

    pub fn translated(&self, translation: &Vector3D) -> Self {
        Self {
            vertices: self.vertices.map(|vertex| vertex + *translation),
        }
    }

    pub fn vertices(&self) -> Vec<Vector3D> {
        self.vertices.to_vec()
    }

    pub fn faces(&self) -> Vec<Vec<usize>> {
        box_faces().iter().map(|face| face.to_vec()).collect()
    }

    pub fn polygons(&self) -> Vec<Vec<Vector3D>> {
        Renderable3D::polygons(self)
    }
}

impl Default for Box3D {
    fn default() -> Self {
        Self::unit()
    }
}

impl Renderable3D for Box3D {
    fn vertices(&self) -> Vec<Vector3D> {
        Box3D::vertices(self)
    }

    fn faces(&self) -> Vec<Vec<usize>> {
        Box3D::faces(self)
    }
}
