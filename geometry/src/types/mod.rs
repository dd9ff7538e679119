pub mod matrix;
pub mod matrix3d;
pub mod vector;
pub mod vector3d;

pub use matrix::Matrix;
pub use matrix3d::Matrix3D;
pub use vector::Vector;
pub use vector3d::Vector3D;
