use glam::Vec3;

use crate::obj::MeshVertex;

/// Face normal in the winding the model format expects:
/// `normalize(cross(p2 - p0, p1 - p0))`.
///
/// Zero-area faces yield `Vec3::ZERO` rather than NaN.
#[inline]
pub fn face_normal(p0: Vec3, p1: Vec3, p2: Vec3) -> Vec3 {
    (p2 - p0).cross(p1 - p0).normalize_or_zero()
}

/// Replaces every vertex normal with the normalized sum of the normals of the
/// faces that reference it.
///
/// `indices` is a triangle list; every index must be in bounds for `vertices`.
pub fn accumulate_normals(vertices: &mut [MeshVertex], indices: &[u32]) {
    for v in vertices.iter_mut() {
        v.normal = Vec3::ZERO;
    }

    for tri in indices.chunks_exact(3) {
        let [i0, i1, i2] = [tri[0] as usize, tri[1] as usize, tri[2] as usize];
        let normal = face_normal(
            vertices[i0].position,
            vertices[i1].position,
            vertices[i2].position,
        );
        vertices[i0].normal += normal;
        vertices[i1].normal += normal;
        vertices[i2].normal += normal;
    }

    for v in vertices.iter_mut() {
        v.normal = v.normal.normalize_or_zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertex(x: f32, y: f32, z: f32) -> MeshVertex {
        MeshVertex {
            position: Vec3::new(x, y, z),
            normal: Vec3::ZERO,
        }
    }

    #[test]
    fn face_normal_is_unit_length() {
        let n = face_normal(Vec3::ZERO, Vec3::new(4.0, 0.0, 0.0), Vec3::new(0.0, 0.0, 3.0));
        assert!((n.length() - 1.0).abs() < 1e-6);
        assert!((n - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn reversed_winding_flips_normal() {
        let (a, b, c) = (Vec3::ZERO, Vec3::X, Vec3::Y);
        assert_eq!(face_normal(a, b, c), -face_normal(a, c, b));
    }

    #[test]
    fn previous_normals_are_discarded() {
        let mut vertices = vec![
            vertex(0.0, 0.0, 0.0),
            vertex(1.0, 0.0, 0.0),
            vertex(0.0, 1.0, 0.0),
        ];
        vertices[0].normal = Vec3::new(100.0, 0.0, 0.0);

        accumulate_normals(&mut vertices, &[0, 1, 2]);

        assert!((vertices[0].normal - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn large_and_small_faces_weigh_equally() {
        // Face normals are normalized before accumulation, so area does not bias the average.
        let mut vertices = vec![
            vertex(0.0, 0.0, 0.0),
            vertex(10.0, 0.0, 0.0),
            vertex(0.0, 10.0, 0.0),
            vertex(0.0, 0.0, 0.1),
        ];
        accumulate_normals(&mut vertices, &[0, 1, 2, 0, 2, 3]);

        let expected = Vec3::new(-1.0, 0.0, -1.0).normalize();
        assert!((vertices[0].normal - expected).length() < 1e-5);
    }
}
