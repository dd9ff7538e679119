use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub};

use geometry::{Real, Vector, Vector3D};

use crate::constants::N_STEP_COMPONENTS;

/// Pose delta: translation `(tx, ty, tz)` followed by rotation in degrees `(rx, ry, rz)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step<T: Real = f64>(Vector<T, N_STEP_COMPONENTS>);

impl<T: Real> Step<T> {
    pub fn new(tx: T, ty: T, tz: T, rx: T, ry: T, rz: T) -> Self {
        Self(Vector::new([tx, ty, tz, rx, ry, rz]))
    }

    pub fn from_parts(translation: &Vector3D<T>, rotation: &Vector3D<T>) -> Self {
        Self::new(
            translation.x(),
            translation.y(),
            translation.z(),
            rotation.x(),
            rotation.y(),
            rotation.z(),
        )
    }

    pub fn zeros() -> Self {
        Self(Vector::zeros())
    }

    pub fn translation(&self) -> Vector3D<T> {
        Vector3D::xyz(self.0[0], self.0[1], self.0[2])
    }

    pub fn rotation(&self) -> Vector3D<T> {
        Vector3D::xyz(self.0[3], self.0[4], self.0[5])
    }

    pub fn as_vector(&self) -> &Vector<T, N_STEP_COMPONENTS> {
        &self.0
    }

    pub fn inner(&self) -> [T; N_STEP_COMPONENTS] {
        self.0.inner()
    }
}

impl<T: Real> Default for Step<T> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real> From<[T; N_STEP_COMPONENTS]> for Step<T> {
    fn from(data: [T; N_STEP_COMPONENTS]) -> Self {
        Self(Vector::new(data))
    }
}

impl<T: Real> Add for Step<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: Real> AddAssign for Step<T> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl<T: Real> Sub for Step<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<T: Real> Neg for Step<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: Real> Mul<T> for Step<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<T: Real> Div<T> for Step<T> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self(self.0 / rhs)
    }
}
