//! Triangles and barycentric sampling

use super::Vec3;

/// A triangle in 3D space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub a: Vec3,
    pub b: Vec3,
    pub c: Vec3,
}

impl Triangle {
    pub const fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        Self { a, b, c }
    }

    /// Unit normal following the a -> b -> c winding
    pub fn normal(&self) -> Vec3 {
        (self.b - self.a).cross(&(self.c - self.a)).normalize()
    }

    pub fn centroid(&self) -> Vec3 {
        (self.a + self.b + self.c) * (1.0 / 3.0)
    }

    /// Point with barycentric weights `(u, v, w)` over `(a, b, c)`
    pub fn point_at(&self, u: f64, v: f64, w: f64) -> Vec3 {
        self.a * u + self.b * v + self.c * w
    }

    /// Uniform-area sample from two numbers in `[0, 1)`
    pub fn sample(&self, r1: f64, r2: f64) -> Vec3 {
        let s = r1.sqrt();
        self.point_at(1.0 - s, s * (1.0 - r2), s * r2)
    }

    /// Barycentric weights of `p` projected onto the triangle's plane
    pub fn barycentric(&self, p: Vec3) -> (f64, f64, f64) {
        let v0 = self.b - self.a;
        let v1 = self.c - self.a;
        let v2 = p - self.a;
        let d00 = v0.dot(&v0);
        let d01 = v0.dot(&v1);
        let d11 = v1.dot(&v1);
        let d20 = v2.dot(&v0);
        let d21 = v2.dot(&v1);
        let denom = d00 * d11 - d01 * d01;
        if denom == 0.0 {
            return (1.0, 0.0, 0.0);
        }
        let v = (d11 * d20 - d01 * d21) / denom;
        let w = (d00 * d21 - d01 * d20) / denom;
        (1.0 - v - w, v, w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit() -> Triangle {
        Triangle::new(
            Vec3::ZERO,
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 1.0, 0.0),
        )
    }

    #[test]
    fn test_normal() {
        let n = unit().normal();
        assert!((n.z - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_barycentric_recovers_weights() {
        let t = unit();
        let p = t.point_at(0.2, 0.3, 0.5);
        let (u, v, w) = t.barycentric(p);
        assert!((u - 0.2).abs() < 1e-12);
        assert!((v - 0.3).abs() < 1e-12);
        assert!((w - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_sample_corners() {
        let t = unit();
        assert_eq!(t.sample(0.0, 0.7), t.a);
        let p = t.sample(0.999_999, 0.0);
        assert!(p.distance(&t.b) < 1e-3);
    }
}
