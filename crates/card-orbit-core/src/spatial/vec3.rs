//! 3D vector used for card positions and directions

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Sub};

/// A vector (or point) in 3D space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    /// Zero vector / origin
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };
    /// Unit vector pointing up (+Y)
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };
    /// Unit vector pointing forward (+Z)
    pub const FORWARD: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// Create a new 3D vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Length of the vector
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    /// Squared length (avoids sqrt)
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Unit-length copy, or zero when the vector has no length
    pub fn normalize(&self) -> Self {
        let len = self.length();
        if len > 0.0 {
            *self * (1.0 / len)
        } else {
            Self::ZERO
        }
    }

    pub fn dot(&self, other: &Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(&self, other: &Vec3) -> Self {
        Self {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Vec3) -> f64 {
        (*self - *other).length()
    }

    /// Componentwise linear interpolation
    pub fn lerp(&self, other: &Vec3, t: f64) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Point from spherical coordinates: polar angle `phi` measured from +Y,
    /// azimuth `theta` measured from +Z toward +X.
    pub fn from_spherical(radius: f64, phi: f64, theta: f64) -> Self {
        let sin_phi_radius = phi.sin() * radius;
        Self {
            x: sin_phi_radius * theta.sin(),
            y: phi.cos() * radius,
            z: sin_phi_radius * theta.cos(),
        }
    }

    /// Point from cylindrical coordinates around the Y axis
    pub fn from_cylindrical(radius: f64, theta: f64, y: f64) -> Self {
        Self {
            x: radius * theta.sin(),
            y,
            z: radius * theta.cos(),
        }
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Self::Output {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}
