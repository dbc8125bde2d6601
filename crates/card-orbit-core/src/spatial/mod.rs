//! Spatial primitives for card placement
//!
//! Uses a right-handed coordinate system:
//! - X: Right (+) / Left (-)
//! - Y: Up (+) / Down (-)
//! - Z: Toward the viewer (+) / Away (-)

mod euler;
mod pose;
mod triangle;
mod vec3;

pub use euler::Euler;
pub use pose::Pose;
pub use triangle::Triangle;
pub use vec3::Vec3;
