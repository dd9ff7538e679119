//! # Crate geometry
//!
//! Fixed-size numeric vectors and square matrices used by the pose engine.
//!
//! `Vector<T, N>` and `Matrix<T, N>` are thin wrappers over `nalgebra` storage whose operators
//! always return the concrete wrapper type. The 3D specializations add in-place translation,
//! rotation about a point, and the closed-form Euler rotation matrix builder.
//!
//! ```rust
//! use geometry::{Matrix3D, Vector3D};
//!
//! let mut vertex = Vector3D::<f64>::xyz(1.0, 0.0, 0.0);
//! vertex.rotate_degrees(&Vector3D::xyz(0.0, 0.0, 90.0));
//! assert!((vertex.y() + 1.0).abs() < 1e-12);
//!
//! let identity = Matrix3D::<f64>::rotation_degrees(0.0, 0.0, 0.0);
//! assert_eq!(identity * vertex, vertex);
//! ```

pub mod constants;
pub mod errors;
#[doc(hidden)]
pub mod traits;
#[doc(hidden)]
pub mod types;
pub mod utils;

#[doc(inline)]
pub use errors::DimensionMismatch;
#[doc(inline)]
pub use traits::Real;
#[doc(inline)]
pub use types::{Matrix, Matrix3D, Vector, Vector3D};
#[doc(inline)]
pub use utils::{to_degrees, to_radians, wrap_degrees};
