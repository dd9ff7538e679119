use nalgebra::RealField;

/// Scalar type the kernel is generic over.
///
/// Any `nalgebra` real field that is also `Copy` qualifies, in practice `f32` and `f64`.
/// Trigonometry, `%` and the conversion from `f64` literals all come from `RealField`.
pub trait Real: RealField + Copy {}

impl<T: RealField + Copy> Real for T {}
