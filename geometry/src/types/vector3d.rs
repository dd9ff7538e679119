use crate::constants::{N_XYZ_COORDINATES, X_COORD_IDX, Y_COORD_IDX, Z_COORD_IDX};
use crate::traits::Real;
use crate::types::matrix3d::Matrix3D;
use crate::types::vector::Vector;
use crate::utils::wrap_degrees;

pub type Vector3D<T = f64> = Vector<T, N_XYZ_COORDINATES>;

impl<T: Real> Vector<T, N_XYZ_COORDINATES> {
    pub fn xyz(x: T, y: T, z: T) -> Self {
        Self::new([x, y, z])
    }

    pub fn x(&self) -> T {
        self.0[X_COORD_IDX]
    }

    pub fn y(&self) -> T {
        self.0[Y_COORD_IDX]
    }

    pub fn z(&self) -> T {
        self.0[Z_COORD_IDX]
    }

    pub fn translate(&mut self, translation: &Self) {
        *self += *translation;
    }

    /// Rotates about the zero vector.
    pub fn rotate(&mut self, rotation: &Matrix3D<T>) {
        *self = *rotation * *self;
    }

    /// Rotates about `point`: `rotation * (self - point) + point`.
    pub fn rotate_about(&mut self, point: &Self, rotation: &Matrix3D<T>) {
        *self = self.rotated_about(point, rotation);
    }

    pub fn rotated_about(&self, point: &Self, rotation: &Matrix3D<T>) -> Self {
        *rotation * (*self - *point) + *point
    }

    pub fn rotate_radians(&mut self, radians: &Self) {
        self.rotate(&Matrix3D::rotation_radians_vector(radians));
    }

    pub fn rotate_radians_about(&mut self, point: &Self, radians: &Self) {
        self.rotate_about(point, &Matrix3D::rotation_radians_vector(radians));
    }

    pub fn rotate_degrees(&mut self, degrees: &Self) {
        self.rotate(&Matrix3D::rotation_degrees_vector(degrees));
    }

    pub fn rotate_degrees_about(&mut self, point: &Self, degrees: &Self) {
        self.rotate_about(point, &Matrix3D::rotation_degrees_vector(degrees));
    }

    /// Every component reduced into `[0, 360)`.
    pub fn wrapped_degrees(&self) -> Self {
        self.map(wrap_degrees)
    }
}
