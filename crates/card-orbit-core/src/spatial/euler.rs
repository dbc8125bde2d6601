//! Euler-angle orientation (XYZ order, radians)

use serde::{Deserialize, Serialize};

use super::Vec3;

/// Threshold past which the Y rotation is treated as gimbal-locked
const GIMBAL_LIMIT: f64 = 0.999_999_9;

/// Orientation of a card as XYZ-order Euler angles.
///
/// Cards are flat and face along their local +Z axis, so an orientation
/// is fully described by where that axis points and which way is up.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Euler {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Euler {
    /// Facing forward, no rotation
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Orientation whose local +Z axis points from `eye` toward `target`,
    /// keeping world +Y as up.
    pub fn look_at(eye: Vec3, target: Vec3) -> Self {
        let up = Vec3::UP;

        let mut z = target - eye;
        if z.length_squared() == 0.0 {
            z = Vec3::FORWARD;
        }
        z = z.normalize();

        let mut x = up.cross(&z);
        if x.length_squared() == 0.0 {
            // up and z are parallel; nudge z off the axis
            if up.z.abs() == 1.0 {
                z.x += 0.0001;
            } else {
                z.z += 0.0001;
            }
            z = z.normalize();
            x = up.cross(&z);
        }
        x = x.normalize();
        let y = z.cross(&x);

        Self::from_basis(x, y, z)
    }

    /// Decompose an orthonormal basis (columns of a rotation matrix).
    fn from_basis(x: Vec3, y: Vec3, z: Vec3) -> Self {
        let m13 = z.x;
        let pitch = m13.clamp(-1.0, 1.0).asin();

        if m13.abs() < GIMBAL_LIMIT {
            Self {
                x: (-z.y).atan2(z.z),
                y: pitch,
                z: (-y.x).atan2(x.x),
            }
        } else {
            Self {
                x: y.z.atan2(y.y),
                y: pitch,
                z: 0.0,
            }
        }
    }

    /// Direction of the local +Z axis after rotation
    pub fn forward(&self) -> Vec3 {
        let (sx, cx) = self.x.sin_cos();
        let (sy, cy) = self.y.sin_cos();
        Vec3::new(sy, -sx * cy, cx * cy)
    }

    /// Componentwise interpolation of the three angles
    pub fn lerp(&self, other: &Euler, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }
}
