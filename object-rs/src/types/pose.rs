use geometry::{Real, Vector3D};

use super::step::Step;

/// Accumulated placement of a dynamic object relative to its base vertices.
///
/// `rotation` holds Euler angles in degrees, each kept in `[0, 360)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose<T: Real = f64> {
    pub translation: Vector3D<T>,
    pub rotation: Vector3D<T>,
}

impl<T: Real> Pose<T> {
    /// Builds a pose, wrapping `rotation` into `[0, 360)`.
    pub fn new(translation: Vector3D<T>, rotation: Vector3D<T>) -> Self {
        Self {
            translation,
            rotation: rotation.wrapped_degrees(),
        }
    }

    pub fn identity() -> Self {
        Self {
            translation: Vector3D::zeros(),
            rotation: Vector3D::zeros(),
        }
    }

    /// Pose reached after applying the whole of `step` in one go.
    pub fn advanced_by(&self, step: &Step<T>) -> Self {
        Self::new(
            self.translation + step.translation(),
            self.rotation + step.rotation(),
        )
    }
}

impl<T: Real> Default for Pose<T> {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_wraps_rotation() {
        let pose = Pose::new(Vector3D::zeros(), Vector3D::xyz(-90.0, 360.0, 450.0));
        assert_eq!(pose.rotation.inner(), [270.0, 0.0, 90.0]);
    }

    #[test]
    fn test_advanced_by() {
        let pose = Pose::new(Vector3D::xyz(1.0, 0.0, 0.0), Vector3D::xyz(0.0, 0.0, 300.0));
        let advanced = pose.advanced_by(&Step::new(9.0, 1.0, 0.0, 0.0, 0.0, 90.0));
        assert_eq!(advanced.translation.inner(), [10.0, 1.0, 0.0]);
        assert_eq!(advanced.rotation.inner(), [0.0, 0.0, 30.0]);
    }

    #[test]
    fn test_default_is_identity() {
        assert_eq!(Pose::<f64>::default(), Pose::identity());
    }
}
