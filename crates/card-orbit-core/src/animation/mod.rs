//! Animation primitives driven by host time

mod easing;
mod tween;

pub use easing::{ease_exp_in_out, Easing};
pub use tween::{Animation, Interpolate};

/// Which pose component an animation drives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AnimatedProperty {
    Position,
    Orientation,
}

/// Registry key for one animated property of one item
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnimationKey {
    pub index: usize,
    pub property: AnimatedProperty,
}

impl AnimationKey {
    pub fn position(index: usize) -> Self {
        Self {
            index,
            property: AnimatedProperty::Position,
        }
    }

    pub fn orientation(index: usize) -> Self {
        Self {
            index,
            property: AnimatedProperty::Orientation,
        }
    }
}
