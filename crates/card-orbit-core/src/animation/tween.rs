//! Typed, time-based animations

use super::Easing;
use crate::spatial::{Euler, Vec3};

/// Values that can be blended by an [`Animation`]
pub trait Interpolate: Copy {
    fn interpolate(&self, to: &Self, t: f64) -> Self;
}

impl Interpolate for Vec3 {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(to, t)
    }
}

impl Interpolate for Euler {
    fn interpolate(&self, to: &Self, t: f64) -> Self {
        self.lerp(to, t)
    }
}

/// Carries no value; used for handles that only mark time.
impl Interpolate for () {
    fn interpolate(&self, _to: &Self, _t: f64) -> Self {}
}

/// One value animated from `from` to `to` over a window of host time.
///
/// Times are in milliseconds of whatever clock the host passes to
/// [`Animation::sample`].
#[derive(Debug, Clone)]
pub struct Animation<T> {
    pub from: T,
    pub to: T,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub easing: Easing,
}

impl<T: Interpolate> Animation<T> {
    pub fn new(from: T, to: T, start_ms: f64, duration_ms: f64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
            easing: Easing::Linear,
        }
    }

    /// Set easing function
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Local progress in 0..=1 at `now_ms`
    pub fn progress(&self, now_ms: f64) -> f64 {
        if self.duration_ms <= 0.0 {
            return 1.0;
        }
        ((now_ms - self.start_ms) / self.duration_ms).clamp(0.0, 1.0)
    }

    pub fn end_ms(&self) -> f64 {
        self.start_ms + self.duration_ms
    }

    /// Value at `now_ms` and whether the animation has finished.
    ///
    /// A finished animation yields `to` exactly.
    pub fn sample(&self, now_ms: f64) -> (T, bool) {
        let progress = self.progress(now_ms);
        if progress >= 1.0 {
            return (self.to, true);
        }
        let eased = self.easing.apply(progress);
        (self.from.interpolate(&self.to, eased), false)
    }
}
