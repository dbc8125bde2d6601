//! Position + orientation of a card

use serde::{Deserialize, Serialize};

use super::{Euler, Vec3};

/// Where a card sits and which way it faces
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Euler,
}

impl Pose {
    pub const fn new(position: Vec3, orientation: Euler) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Pose at `position` facing forward
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            orientation: Euler::IDENTITY,
        }
    }

    /// Pose at `position` oriented toward `target`
    pub fn looking_at(position: Vec3, target: Vec3) -> Self {
        Self {
            position,
            orientation: Euler::look_at(position, target),
        }
    }
}
