/// Number of coordinates of a 3D vector.
pub const N_XYZ_COORDINATES: usize = 3;

pub(crate) const X_COORD_IDX: usize = 0;
pub(crate) const Y_COORD_IDX: usize = 1;
pub(crate) const Z_COORD_IDX: usize = 2;

/// Degrees in a half turn, used by the degree/radian conversions.
pub const HALF_TURN_DEGREES: f64 = 180.0;
/// Degrees in a full turn. Accumulated rotations are kept in `[0, FULL_TURN_DEGREES)`.
pub const FULL_TURN_DEGREES: f64 = 360.0;
