use nalgebra::SVector;
#[cfg(any(feature = "serde-serialize", test))]
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Rem, RemAssign, Sub,
    SubAssign,
};

use crate::errors::DimensionMismatch;
use crate::traits::Real;

/// Ordered, fixed-length sequence of `N` scalars.
///
/// Arithmetic against a scalar or another vector is elementwise and always returns a new
/// `Vector<T, N>`. The product of two vectors (`a * b`) is their dot product.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector<T: Real, const N: usize>(pub(crate) SVector<T, N>);

impl<T: Real, const N: usize> Vector<T, N> {
    pub fn new(data: [T; N]) -> Self {
        Self(SVector::from(data))
    }

    /// Vector with every component set to `scalar`.
    pub fn from_element(scalar: T) -> Self {
        Self(SVector::from_element(scalar))
    }

    pub fn zeros() -> Self {
        Self(SVector::zeros())
    }

    pub fn from_vector(data: SVector<T, N>) -> Self {
        Self(data)
    }

    pub fn as_vector(&self) -> &SVector<T, N> {
        &self.0
    }

    pub fn inner(&self) -> [T; N] {
        std::array::from_fn(|i| self.0[i])
    }

    pub fn len(&self) -> usize {
        N
    }

    pub fn is_empty(&self) -> bool {
        N == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }

    pub fn dot(&self, rhs: &Self) -> T {
        self.0.dot(&rhs.0)
    }

    /// Applies `f` to every component.
    pub fn map<F: FnMut(T) -> T>(&self, f: F) -> Self {
        Self(self.0.map(f))
    }

    pub fn component_mul(&self, rhs: &Self) -> Self {
        Self(self.0.component_mul(&rhs.0))
    }

    pub fn component_div(&self, rhs: &Self) -> Self {
        Self(self.0.component_div(&rhs.0))
    }

    pub fn component_rem(&self, rhs: &Self) -> Self {
        Self(self.0.zip_map(&rhs.0, |lhs, rhs| lhs % rhs))
    }

    /// In-place elementwise product. `*=` between vectors is not offered since `*` is the dot
    /// product.
    pub fn component_mul_assign(&mut self, rhs: &Self) {
        self.0.component_mul_assign(&rhs.0)
    }
}

impl<T: Real, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<T: Real, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(value: [T; N]) -> Self {
        Self::new(value)
    }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(value: Vector<T, N>) -> Self {
        value.inner()
    }
}

impl<T: Real, const N: usize> From<Vector<T, N>> for Vec<T> {
    fn from(value: Vector<T, N>) -> Self {
        value.inner().to_vec()
    }
}

impl<T: Real, const N: usize> TryFrom<Vec<T>> for Vector<T, N> {
    type Error = DimensionMismatch;

    fn try_from(value: Vec<T>) -> Result<Self, Self::Error> {
        let found = value.len();
        let data: [T; N] = value
            .try_into()
            .map_err(|_| DimensionMismatch { expected: N, found })?;
        Ok(Self::new(data))
    }
}

impl<T: Real, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T: Real, const N: usize> IndexMut<usize> for Vector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

impl<T: Real, const N: usize> Add for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl<T: Real, const N: usize> Sub for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl<T: Real, const N: usize> AddAssign for Vector<T, N> {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

impl<T: Real, const N: usize> SubAssign for Vector<T, N> {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0
    }
}

/// Elementwise quotient.
impl<T: Real, const N: usize> Div for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: Self) -> Self::Output {
        self.component_div(&rhs)
    }
}

/// Elementwise remainder.
impl<T: Real, const N: usize> Rem for Vector<T, N> {
    type Output = Self;

    fn rem(self, rhs: Self) -> Self::Output {
        self.component_rem(&rhs)
    }
}

impl<T: Real, const N: usize> DivAssign for Vector<T, N> {
    fn div_assign(&mut self, rhs: Self) {
        *self = self.component_div(&rhs)
    }
}

impl<T: Real, const N: usize> RemAssign for Vector<T, N> {
    fn rem_assign(&mut self, rhs: Self) {
        *self = self.component_rem(&rhs)
    }
}

/// Dot product.
impl<T: Real, const N: usize> Mul for Vector<T, N> {
    type Output = T;

    fn mul(self, rhs: Self) -> Self::Output {
        self.dot(&rhs)
    }
}

impl<T: Real, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl<T: Real, const N: usize> Add<T> for Vector<T, N> {
    type Output = Self;

    fn add(self, rhs: T) -> Self::Output {
        Self(self.0.add_scalar(rhs))
    }
}

impl<T: Real, const N: usize> Sub<T> for Vector<T, N> {
    type Output = Self;

    fn sub(self, rhs: T) -> Self::Output {
        self.map(|x| x - rhs)
    }
}

impl<T: Real, const N: usize> Mul<T> for Vector<T, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self::Output {
        Self(self.0 * rhs)
    }
}

impl<T: Real, const N: usize> Div<T> for Vector<T, N> {
    type Output = Self;

    fn div(self, rhs: T) -> Self::Output {
        Self(self.0 / rhs)
    }
}

impl<T: Real, const N: usize> Rem<T> for Vector<T, N> {
    type Output = Self;

    fn rem(self, rhs: T) -> Self::Output {
        self.map(|x| x % rhs)
    }
}

impl<T: Real, const N: usize> AddAssign<T> for Vector<T, N> {
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs
    }
}

impl<T: Real, const N: usize> SubAssign<T> for Vector<T, N> {
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs
    }
}

impl<T: Real, const N: usize> MulAssign<T> for Vector<T, N> {
    fn mul_assign(&mut self, rhs: T) {
        self.0 *= rhs
    }
}

impl<T: Real, const N: usize> DivAssign<T> for Vector<T, N> {
    fn div_assign(&mut self, rhs: T) {
        self.0 /= rhs
    }
}

impl<T: Real, const N: usize> RemAssign<T> for Vector<T, N> {
    fn rem_assign(&mut self, rhs: T) {
        *self = *self % rhs
    }
}

#[cfg(any(feature = "serde-serialize", test))]
impl<T: Real + Serialize, const N: usize> Serialize for Vector<T, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.inner().as_slice().serialize(serializer)
    }
}

#[cfg(any(feature = "serde-serialize", test))]
#[derive(Deserialize)]
#[serde(untagged)]
enum VectorRepr<T> {
    Array(Vec<T>),
    Labelled { x: T, y: T, z: T },
}

#[cfg(any(feature = "serde-serialize", test))]
impl<'de, T: Real + Deserialize<'de>, const N: usize> Deserialize<'de> for Vector<T, N> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accepts `[a, b, ...]` for any N and `{"x": a, "y": b, "z": c}` for 3D vectors
        let scalars = match VectorRepr::<T>::deserialize(deserializer)? {
            VectorRepr::Array(scalars) => scalars,
            VectorRepr::Labelled { x, y, z } => vec![x, y, z],
        };
        Self::try_from(scalars).map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Vector4 = Vector<f64, 4>;

    #[test]
    fn test_new() {
        let data = [1.0, 2.0, 3.0, 4.0];
        let vector = Vector4::new(data);
        assert_eq!(vector.inner(), data);
        assert_eq!(vector.len(), 4);
        assert_eq!(vector[2], 3.0);
    }

    #[test]
    fn test_zeros_is_default() {
        assert_eq!(Vector4::zeros(), Vector4::default());
        assert_eq!(Vector4::zeros().inner(), [0.0; 4]);
        assert_eq!(Vector4::from_element(2.5).inner(), [2.5; 4]);
    }

    #[test]
    fn test_index_mut() {
        let mut vector = Vector4::zeros();
        vector[3] = 7.0;
        assert_eq!(vector.inner(), [0.0, 0.0, 0.0, 7.0]);
    }

    #[test]
    fn test_add_sub_vector() {
        let a = Vector4::new([1.0, 2.0, 3.0, 4.0]);
        let b = Vector4::new([4.0, 3.0, 2.0, 1.0]);
        assert_eq!((a + b).inner(), [5.0; 4]);
        assert_eq!((a - b).inner(), [-3.0, -1.0, 1.0, 3.0]);

        let mut c = a;
        c += b;
        c -= a;
        assert_eq!(c, b);
    }

    #[test]
    fn test_dot_product() {
        let a = Vector4::new([1.0, 2.0, 3.0, 4.0]);
        let b = Vector4::new([2.0, 0.0, -1.0, 0.5]);
        assert_eq!(a * b, 1.0);
        assert_eq!(a.dot(&b), b.dot(&a));
    }

    #[test]
    fn test_scalar_operators() {
        let a = Vector4::new([2.0, 4.0, 6.0, 8.0]);
        assert_eq!((a + 1.0).inner(), [3.0, 5.0, 7.0, 9.0]);
        assert_eq!((a - 1.0).inner(), [1.0, 3.0, 5.0, 7.0]);
        assert_eq!((a * 0.5).inner(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((a / 2.0).inner(), [1.0, 2.0, 3.0, 4.0]);
        assert_eq!((a % 3.0).inner(), [2.0, 1.0, 0.0, 2.0]);
    }

    #[test]
    fn test_scalar_assign_operators() {
        let mut a = Vector4::new([2.0, 4.0, 6.0, 8.0]);
        a += 2.0;
        assert_eq!(a.inner(), [4.0, 6.0, 8.0, 10.0]);
        a -= 1.0;
        assert_eq!(a.inner(), [3.0, 5.0, 7.0, 9.0]);
        a *= 2.0;
        assert_eq!(a.inner(), [6.0, 10.0, 14.0, 18.0]);
        a /= 2.0;
        assert_eq!(a.inner(), [3.0, 5.0, 7.0, 9.0]);
        a %= 4.0;
        assert_eq!(a.inner(), [3.0, 1.0, 3.0, 1.0]);
    }

    #[test]
    fn test_componentwise() {
        let a = Vector4::new([2.0, 9.0, 6.0, 7.0]);
        let b = Vector4::new([2.0, 3.0, 4.0, 5.0]);
        assert_eq!(a.component_mul(&b).inner(), [4.0, 27.0, 24.0, 35.0]);
        assert_eq!(a.component_div(&b).inner(), [1.0, 3.0, 1.5, 1.4]);
        assert_eq!(a.component_rem(&b).inner(), [0.0, 0.0, 2.0, 2.0]);

        assert_eq!((a / b).inner(), [1.0, 3.0, 1.5, 1.4]);
        assert_eq!((a % b).inner(), [0.0, 0.0, 2.0, 2.0]);

        let mut c = a;
        c.component_mul_assign(&b);
        assert_eq!(c.inner(), [4.0, 27.0, 24.0, 35.0]);
        c /= b;
        assert_eq!(c, a);
        c %= b;
        assert_eq!(c.inner(), [0.0, 0.0, 2.0, 2.0]);
    }

    #[test]
    fn test_neg() {
        let a = Vector4::new([1.0, -2.0, 0.0, 4.0]);
        assert_eq!((-a).inner(), [-1.0, 2.0, -0.0, -4.0]);
    }

    #[test]
    fn test_try_from_vec() {
        let vector = Vector4::try_from(vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(vector.inner(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_try_from_vec_invalid_length() {
        let result = Vector4::try_from(vec![1.0, 2.0]);
        assert_eq!(
            result,
            Err(DimensionMismatch {
                expected: 4,
                found: 2
            })
        );
    }

    #[test]
    fn test_serialize() {
        let vector = Vector::<f64, 3>::new([1.0, 2.0, 3.0]);
        let serialized = serde_json::to_string(&vector).unwrap();
        assert_eq!(serialized, "[1.0,2.0,3.0]");
    }

    #[test]
    fn test_deserialize_array() {
        let vector: Vector4 = serde_json::from_str("[1.0, 2.0, 3.0, 4.0]").unwrap();
        assert_eq!(vector.inner(), [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_deserialize_labelled() {
        let vector: Vector<f64, 3> = serde_json::from_str(r#"{"x": 1.0, "y": 2.0, "z": 3.0}"#).unwrap();
        assert_eq!(vector.inner(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_deserialize_wrong_length() {
        let result: Result<Vector4, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("expected 4 components, found 3"));
    }
}
