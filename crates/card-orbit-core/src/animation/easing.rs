//! Easing curves

use serde::{Deserialize, Serialize};

/// Easing function types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    #[default]
    Linear,
    EaseInOutExpo,
}

impl Easing {
    /// Apply the curve to a progress value; input is clamped to 0..=1
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Easing::Linear => t,
            Easing::EaseInOutExpo => ease_exp_in_out(t),
        }
    }
}

/// Exponential ease-in-ease-out
pub fn ease_exp_in_out(t: f64) -> f64 {
    if t == 0.0 {
        return 0.0;
    }
    if t == 1.0 {
        return 1.0;
    }
    if t < 0.5 {
        0.5 * 2.0_f64.powf(20.0 * t - 10.0)
    } else {
        1.0 - 0.5 * 2.0_f64.powf(-20.0 * t + 10.0)
    }
}
