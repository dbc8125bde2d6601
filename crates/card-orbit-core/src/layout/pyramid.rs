//! Tetrahedral "pyramid" arrangement with random placement on each face

use rand::Rng;

use crate::spatial::{Pose, Triangle, Vec3};

/// Number of faces cards are dealt onto
pub const FACE_COUNT: usize = 4;

/// One face of the pyramid with its outward unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PyramidFace {
    pub triangle: Triangle,
    pub normal: Vec3,
}

/// Regular tetrahedron centred on the origin with its apex on +Y.
#[derive(Debug, Clone, PartialEq)]
pub struct Tetrahedron {
    pub faces: [PyramidFace; FACE_COUNT],
}

impl Tetrahedron {
    /// Build the solid whose vertices all lie at distance `radius` from the
    /// origin. Face windings are fixed up so every normal points outward.
    pub fn new(radius: f64) -> Self {
        let sqrt3 = 3.0_f64.sqrt();
        let edge = radius * (8.0_f64 / 3.0).sqrt();
        let base_y = -radius / 3.0;

        let apex = Vec3::new(0.0, radius, 0.0);
        let b0 = Vec3::new(-edge / 2.0, base_y, edge / (2.0 * sqrt3));
        let b1 = Vec3::new(edge / 2.0, base_y, edge / (2.0 * sqrt3));
        let b2 = Vec3::new(0.0, base_y, -edge / sqrt3);

        let centre = (apex + b0 + b1 + b2) * 0.25;
        let faces = [
            Triangle::new(apex, b0, b1),
            Triangle::new(apex, b1, b2),
            Triangle::new(apex, b2, b0),
            Triangle::new(b0, b2, b1),
        ]
        .map(|triangle| {
            let outward = triangle.centroid() - centre;
            let triangle = if triangle.normal().dot(&outward) < 0.0 {
                Triangle::new(triangle.a, triangle.c, triangle.b)
            } else {
                triangle
            };
            PyramidFace {
                triangle,
                normal: triangle.normal(),
            }
        });

        Self { faces }
    }

    /// Face an item is dealt onto (round-robin)
    pub fn face_for(index: usize) -> usize {
        index % FACE_COUNT
    }
}

/// Cards scattered uniformly over the four faces, each facing out of its face.
pub fn pyramid<R: Rng + ?Sized>(count: usize, radius: f64, rng: &mut R) -> Vec<Pose> {
    if count == 0 {
        return Vec::new();
    }
    let solid = Tetrahedron::new(radius);

    (0..count)
        .map(|i| {
            let face = &solid.faces[Tetrahedron::face_for(i)];
            let a: f64 = rng.gen();
            let b: f64 = rng.gen();
            let point = face.triangle.sample(a, b);
            Pose::looking_at(point, point + face.normal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_vertices_on_circumsphere() {
        let solid = Tetrahedron::new(1800.0);
        for face in &solid.faces {
            for v in [face.triangle.a, face.triangle.b, face.triangle.c] {
                assert!((v.length() - 1800.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn test_normals_point_outward() {
        let solid = Tetrahedron::new(1800.0);
        for face in &solid.faces {
            assert!((face.normal.length() - 1.0).abs() < EPS);
            assert!(face.normal.dot(&face.triangle.centroid()) > 0.0);
        }
        // base face looks straight down
        assert!((solid.faces[3].normal.y + 1.0).abs() < EPS);
    }

    #[test]
    fn test_points_stay_on_assigned_face() {
        let mut rng = StdRng::seed_from_u64(7);
        let solid = Tetrahedron::new(1800.0);
        let poses = pyramid(64, 1800.0, &mut rng);
        assert_eq!(poses.len(), 64);

        for (i, pose) in poses.iter().enumerate() {
            let face = &solid.faces[i % 4];
            let (u, v, w) = face.triangle.barycentric(pose.position);
            assert!((u + v + w - 1.0).abs() < EPS);
            assert!(u >= -EPS && v >= -EPS && w >= -EPS, "item {i}: {u} {v} {w}");
            let off_plane = (pose.position - face.triangle.a).dot(&face.normal);
            assert!(off_plane.abs() < 1e-6);
        }
    }

    #[test]
    fn test_cards_face_out_of_their_face() {
        let mut rng = StdRng::seed_from_u64(11);
        let solid = Tetrahedron::new(1800.0);
        for (i, pose) in pyramid(12, 1800.0, &mut rng).iter().enumerate() {
            let normal = solid.faces[i % 4].normal;
            assert!((pose.orientation.forward().dot(&normal) - 1.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_face_assignment_cycles() {
        let faces: Vec<usize> = (0..9).map(Tetrahedron::face_for).collect();
        assert_eq!(faces, vec![0, 1, 2, 3, 0, 1, 2, 3, 0]);
    }
}
