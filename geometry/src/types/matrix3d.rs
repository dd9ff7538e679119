use crate::constants::N_XYZ_COORDINATES;
use crate::traits::Real;
use crate::types::matrix::Matrix;
use crate::types::vector3d::Vector3D;
use crate::utils::to_radians;

pub type Matrix3D<T = f64> = Matrix<T, N_XYZ_COORDINATES>;

impl<T: Real> Matrix<T, N_XYZ_COORDINATES> {
    /// Rotation matrix for the intrinsic X-Y-Z composition of the three angles, in radians.
    ///
    /// Applying the matrix built from `(x, y, z)` and then the one built from `(-x, -y, -z)`
    /// does not in general return to the start; use [`Matrix::transpose`] for the inverse.
    pub fn rotation_radians(x: T, y: T, z: T) -> Self {
        let (sin_x, cos_x) = (x.sin(), x.cos());
        let (sin_y, cos_y) = (y.sin(), y.cos());
        let (sin_z, cos_z) = (z.sin(), z.cos());

        Self::new([
            [
                cos_y * cos_z,
                cos_x * sin_z + sin_x * sin_y * cos_z,
                sin_x * sin_z - cos_x * sin_y * cos_z,
            ],
            [
                -cos_y * sin_z,
                cos_x * cos_z - sin_x * sin_y * sin_z,
                sin_x * cos_z + cos_x * sin_y * sin_z,
            ],
            [sin_y, -sin_x * cos_y, cos_x * cos_y],
        ])
    }

    pub fn rotation_radians_vector(radians: &Vector3D<T>) -> Self {
        Self::rotation_radians(radians.x(), radians.y(), radians.z())
    }

    /// Same as [`Matrix::rotation_radians`], each angle converted from degrees first.
    pub fn rotation_degrees(x: T, y: T, z: T) -> Self {
        Self::rotation_radians(to_radians(x), to_radians(y), to_radians(z))
    }

    pub fn rotation_degrees_vector(degrees: &Vector3D<T>) -> Self {
        Self::rotation_degrees(degrees.x(), degrees.y(), degrees.z())
    }
}
