use geometry::Vector3D;

pub fn assert_vector_close(actual: &Vector3D, expected: &Vector3D, tolerance: f64) {
    let within = actual
        .iter()
        .zip(expected.iter())
        .all(|(a, e)| (a - e).abs() <= tolerance);
    assert!(
        within,
        "vectors differ by more than {tolerance}: {actual:?} != {expected:?}"
    );
}

pub fn assert_vertices_close(actual: &[Vector3D], expected: &[Vector3D], tolerance: f64) {
    assert_eq!(actual.len(), expected.len(), "vertex count mismatch");
    for (actual, expected) in actual.iter().zip(expected) {
        assert_vector_close(actual, expected, tolerance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_close_vectors() {
        assert_vector_close(
            &Vector3D::xyz(1.0, 2.0, 3.0),
            &Vector3D::xyz(1.0 + 1e-12, 2.0, 3.0 - 1e-12),
            1e-9,
        );
    }

    #[test]
    #[should_panic]
    fn test_distant_vectors() {
        assert_vector_close(&Vector3D::xyz(1.0, 2.0, 3.0), &Vector3D::zeros(), 1e-9);
    }

    #[test]
    #[should_panic(expected = "vertex count mismatch")]
    fn test_vertex_count_mismatch() {
        assert_vertices_close(&[Vector3D::zeros()], &[], 1e-9);
    }
}
