use geometry::{Matrix3D, Real, Vector3D};
use log::trace;

use super::pose::Pose;
use super::static_object::StaticObject;
use super::step::Step;
use crate::errors::ObjectError;
use crate::traits::{FromVertices, Shape3D};

/// Object whose current vertices are derived from its base vertices and an accumulated [`Pose`].
///
/// Every mutation only touches the accumulators and then calls [`DynamicObject::update`], which
/// recomputes all current vertices from scratch. Errors therefore never compound across updates.
#[derive(Clone, Debug, PartialEq)]
pub struct DynamicObject<T: Real = f64> {
    absolute: StaticObject<T>,
    vertices: Vec<Vector3D<T>>,
    origin: Vector3D<T>,
    pose: Pose<T>,
}

impl<T: Real> DynamicObject<T> {
    pub fn new(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        Ok(Self::from_static(StaticObject::new(vertices)?))
    }

    pub fn from_static(absolute: StaticObject<T>) -> Self {
        let mut object = Self {
            vertices: absolute.vertices().to_vec(),
            origin: *absolute.origin(),
            absolute,
            pose: Pose::identity(),
        };
        object.update();
        object
    }

    /// Adds `delta` to the translation accumulator.
    pub fn translate_absolute(&mut self, delta: &Vector3D<T>) {
        self.pose.translation += *delta;
        self.update();
    }

    /// Translates by `delta` expressed in the frame given by `reference_rotation` (degrees).
    pub fn translate_relative(&mut self, delta: &Vector3D<T>, reference_rotation: &Vector3D<T>) {
        let rotation = Matrix3D::rotation_degrees_vector(reference_rotation);
        self.translate_absolute(&(rotation * *delta));
    }

    /// Translates by `delta` expressed in the object's own current frame.
    pub fn translate_forward(&mut self, delta: &Vector3D<T>) {
        let heading = self.pose.rotation;
        self.translate_relative(delta, &heading);
    }

    /// Adds `delta` (degrees) to the rotation accumulator.
    pub fn rotate_absolute(&mut self, delta: &Vector3D<T>) {
        self.pose.rotation = (self.pose.rotation + *delta).wrapped_degrees();
        self.update();
    }

    /// Revolves the object's origin about `pivot` by `delta` degrees, then spins the
    /// object itself by the same `delta`.
    pub fn rotate_absolute_about(&mut self, delta: &Vector3D<T>, pivot: &Vector3D<T>) {
        let rotation = Matrix3D::rotation_degrees_vector(delta);
        let revolved = self.origin.rotated_about(pivot, &rotation);
        self.pose.translation += revolved - self.origin;
        self.rotate_absolute(delta);
    }

    /// Applies both halves of `step` with a single recomputation.
    pub fn step(&mut self, step: &Step<T>) {
        self.pose.translation += step.translation();
        self.pose.rotation = (self.pose.rotation + step.rotation()).wrapped_degrees();
        self.update();
    }

    /// Replaces both accumulators, wrapping the rotation into `[0, 360)`.
    pub fn set_pose(&mut self, pose: Pose<T>) {
        self.pose = Pose::new(pose.translation, pose.rotation);
        self.update();
    }

    /// Recomputes current vertices and origin from the base vertices and the accumulators.
    pub fn update(&mut self) {
        let translation = self.pose.translation;
        let rotation = Matrix3D::rotation_degrees_vector(&self.pose.rotation);
        let origin = *self.absolute.origin() + translation;

        self.vertices.clear();
        self.vertices.extend(
            self.absolute
                .iter()
                .map(|vertex| (*vertex + translation).rotated_about(&origin, &rotation)),
        );
        self.origin = origin;
        trace!("dynamic object updated to {:?}", self.pose);
    }

    pub fn pose(&self) -> &Pose<T> {
        &self.pose
    }

    pub fn translation(&self) -> &Vector3D<T> {
        &self.pose.translation
    }

    pub fn rotation(&self) -> &Vector3D<T> {
        &self.pose.rotation
    }

    pub fn vertices(&self) -> &[Vector3D<T>] {
        &self.vertices
    }

    pub fn origin(&self) -> &Vector3D<T> {
        &self.origin
    }

    pub fn absolute_vertices(&self) -> &[Vector3D<T>] {
        self.absolute.vertices()
    }

    pub fn absolute_origin(&self) -> &Vector3D<T> {
        self.absolute.origin()
    }
}

impl<T: Real> Shape3D for DynamicObject<T> {
    type Scalar = T;

    fn vertices(&self) -> &[Vector3D<T>] {
        &self.vertices
    }

    fn origin(&self) -> &Vector3D<T> {
        &self.origin
    }
}

impl<T: Real> FromVertices<T> for DynamicObject<T> {
    fn from_vertices(vertices: Vec<Vector3D<T>>) -> Result<Self, ObjectError> {
        Self::new(vertices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use once_cell::sync::Lazy;
    use test_utils::assertions::{assert_vector_close, assert_vertices_close};
    use test_utils::renderable::Box3D;

    const TOLERANCE: f64 = 1e-9;

    static UNIT_CUBE: Lazy<Vec<Vector3D>> = Lazy::new(|| Box3D::unit().vertices());

    fn cube() -> DynamicObject {
        DynamicObject::new(UNIT_CUBE.clone()).unwrap()
    }

    #[test]
    fn test_new_keeps_base_vertices() {
        let object = cube();
        assert_eq!(object.vertices(), UNIT_CUBE.as_slice());
        assert_eq!(object.origin(), &Vector3D::zeros());
        assert_eq!(object.pose(), &Pose::identity());
    }

    #[test]
    fn test_empty_mesh() {
        assert_eq!(
            DynamicObject::<f64>::new(Vec::new()),
            Err(ObjectError::EmptyMesh)
        );
    }

    #[test]
    fn test_translate_absolute() {
        let mut object = cube();
        object.translate_absolute(&Vector3D::xyz(1.0, 2.0, 3.0));

        assert_eq!(object.origin().inner(), [1.0, 2.0, 3.0]);
        for (current, base) in object.vertices().iter().zip(UNIT_CUBE.iter()) {
            assert_eq!(*current, *base + Vector3D::xyz(1.0, 2.0, 3.0));
        }
    }

    #[test]
    fn test_rotate_absolute_about_own_origin() {
        let mut object = cube();
        object.translate_absolute(&Vector3D::xyz(5.0, 0.0, 0.0));
        object.rotate_absolute(&Vector3D::xyz(0.0, 0.0, 90.0));

        assert_eq!(object.origin().inner(), [5.0, 0.0, 0.0]);
        let expected: Vec<_> = UNIT_CUBE
            .iter()
            .map(|v| Vector3D::xyz(5.0 + v.y(), -v.x(), v.z()))
            .collect();
        assert_vertices_close(object.vertices(), &expected, TOLERANCE);
    }

    #[test]
    fn test_rotation_accumulator_wraps() {
        let mut object = cube();
        object.rotate_absolute(&Vector3D::xyz(-90.0, 350.0, 0.0));
        object.rotate_absolute(&Vector3D::xyz(0.0, 20.0, 720.0));
        assert_eq!(object.rotation().inner(), [270.0, 10.0, 0.0]);
    }

    #[test]
    fn test_full_turn_restores_vertices() {
        let mut object = cube();
        for _ in 0..4 {
            object.rotate_absolute(&Vector3D::xyz(0.0, 90.0, 0.0));
        }
        assert_eq!(object.rotation().inner(), [0.0, 0.0, 0.0]);
        assert_eq!(object.vertices(), UNIT_CUBE.as_slice());
    }

    #[test]
    fn test_rotate_absolute_about_pivot() {
        let mut object = cube();
        object.rotate_absolute_about(&Vector3D::xyz(0.0, 0.0, 90.0), &Vector3D::xyz(0.0, 2.0, 0.0));

        // origin (0,0,0) revolves about (0,2,0): offset (0,-2,0) maps to (-2,0,0)
        assert_vector_close(object.origin(), &Vector3D::xyz(-2.0, 2.0, 0.0), TOLERANCE);
        assert_eq!(object.rotation().inner(), [0.0, 0.0, 90.0]);
    }

    #[test]
    fn test_translate_relative() {
        let mut object = cube();
        object.translate_relative(&Vector3D::xyz(1.0, 0.0, 0.0), &Vector3D::xyz(0.0, 0.0, 90.0));
        assert_vector_close(object.translation(), &Vector3D::xyz(0.0, -1.0, 0.0), TOLERANCE);
        assert_eq!(object.rotation().inner(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_translate_forward_uses_heading() {
        let mut object = cube();
        object.rotate_absolute(&Vector3D::xyz(0.0, 0.0, 90.0));
        object.translate_forward(&Vector3D::xyz(1.0, 0.0, 0.0));
        assert_vector_close(object.translation(), &Vector3D::xyz(0.0, -1.0, 0.0), TOLERANCE);
    }

    #[test]
    fn test_step_matches_separate_calls() {
        let mut stepped = cube();
        stepped.step(&Step::new(1.0, 2.0, 3.0, 10.0, 20.0, 30.0));

        let mut manual = cube();
        manual.translate_absolute(&Vector3D::xyz(1.0, 2.0, 3.0));
        manual.rotate_absolute(&Vector3D::xyz(10.0, 20.0, 30.0));

        assert_eq!(stepped, manual);
    }

    #[test]
    fn test_set_pose_replays_accumulators() {
        let mut object = cube();
        object.translate_absolute(&Vector3D::xyz(0.1, 0.2, 0.3));
        object.rotate_absolute(&Vector3D::xyz(33.0, 10.0, 275.0));
        object.translate_absolute(&Vector3D::xyz(-4.0, 0.5, 1.25));
        object.rotate_absolute(&Vector3D::xyz(100.0, -30.0, 190.0));

        let mut replayed = cube();
        replayed.set_pose(*object.pose());

        assert_eq!(replayed.vertices(), object.vertices());
        assert_eq!(replayed.origin(), object.origin());
    }
}
