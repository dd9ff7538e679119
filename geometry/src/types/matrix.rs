use nalgebra::SMatrix;

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::traits::Real;
use crate::types::vector::Vector;

/// Square `N x N` matrix, addressed by rows.
///
/// `matrix.row(i)` returns row `i` as a [`Vector`]. Matrix-vector products are the row-wise
/// dot products with the vector. Matrix-matrix products stay row-major on both sides: entry
/// `(i, j)` is row `i` of the left operand dotted with row `j` of the right operand, so
/// `a * b` equals `a * b.transpose()` in column convention.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix<T: Real, const N: usize>(pub(crate) SMatrix<T, N, N>);

impl<T: Real, const N: usize> Matrix<T, N> {
    /// Builds a matrix from row-major scalars.
    pub fn new(rows: [[T; N]; N]) -> Self {
        Self(SMatrix::from_fn(|row, column| rows[row][column]))
    }

    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self {
        Self(SMatrix::from_fn(|row, column| rows[row][column]))
    }

    pub fn from_element(scalar: T) -> Self {
        Self(SMatrix::from_element(scalar))
    }

    pub fn zeros() -> Self {
        Self(SMatrix::zeros())
    }

    pub fn identity() -> Self {
        Self(SMatrix::identity())
    }

    pub fn from_matrix(data: SMatrix<T, N, N>) -> Self {
        Self(data)
    }

    pub fn as_matrix(&self) -> &SMatrix<T, N, N> {
        &self.0
    }

    pub fn row(&self, index: usize) -> Vector<T, N> {
        Vector::new(std::array::from_fn(|column| self.0[(index, column)]))
    }

    pub fn column(&self, index: usize) -> Vector<T, N> {
        Vector::new(std::array::from_fn(|row| self.0[(row, index)]))
    }

    pub fn rows(&self) -> [Vector<T, N>; N] {
        std::array::from_fn(|index| self.row(index))
    }

    pub fn transpose(&self) -> Self {
        Self(self.0.transpose())
    }

    pub fn map<F: FnMut(T) -> T>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }
}

impl<T: Real, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize> From<[[T; N]; N]> for Matrix<T, N> {
    fn from(value: [[T; N]; N]) -> Self {
        Self::new(value)
    }
}

/// `matrix[(row, column)]`
impl<T: Real, const N: usize> Index<(usize, usize)> for Matrix<T, N> {
    type Output = T;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Real, const N: usize> IndexMut<(usize, usize)> for Matrix<T, N> {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Real, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(self.0 * rhs.0)
    }
}

/// Row by row product: `result[(i, j)] = self.row(i) * rhs.row(j)`.
impl<T: Real, const N: usize> Mul for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0.transpose())
    }
}

impl<T: Real, const N: usize> MulAssign for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs
    }
}

impl<T: Real, const N: usize> Add for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: Real, const N: usize> Sub for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<T: Real, const N: usize> AddAssign for Matrix<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl<T: Real, const N: usize> SubAssign for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

impl<T: Real, const N: usize> Add<T> for Matrix<T, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self(self.0.add_scalar(rhs))
    }
}

impl<T: Real, const N: usize> Sub<T> for Matrix<T, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|x| x - rhs)
    }
}

impl<T: Real, const N: usize> Mul<T> for Matrix<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<T: Real, const N: usize> Div<T> for Matrix<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<T: Real, const N: usize> Rem<T> for Matrix<T, N> {
    type Output = Self;

    fn rem(self, rhs: T) -> Self::Output {
        self.map(|x| x % rhs)
    }
}

impl<T: Real, const N: usize> AddAssign<T> for Matrix<T, N> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs
    }
}

impl<T: Real, const N: usize> SubAssign<T> for Matrix<T, N> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Matrix<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Matrix<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs
    }
}

impl<T: Real, const N: usize> RemAssign<T> for Matrix<T, N> {
    fn rem_assign(&mut self, rhs: T) {
        *self = *self % rhs
    }
}
