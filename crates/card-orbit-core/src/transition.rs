//! Transition engine: moves every card from its current pose to a new
//! arrangement.
//!
//! The engine owns no cards. It keeps a registry of running animations keyed
//! by `(item index, property)` and applies them to the host's items each time
//! the host calls [`TransitionEngine::advance`]. There are no timers or
//! threads; the host drives everything once per frame.
//!
//! Starting a transition clears the previous registry first, so two
//! transitions never fight over the same pose.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::animation::{AnimatedProperty, Animation, AnimationKey, Easing};
use crate::error::{OrbitError, Result};
use crate::layout::ArrangementKind;
use crate::registry::Item;
use crate::spatial::{Euler, Pose, Vec3};

/// Identifier of one `transition` call
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TransitionId(pub u64);

/// Bookkeeping for the transition currently in flight
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub id: TransitionId,
    pub kind: Option<ArrangementKind>,
    pub started_at_ms: f64,
    pub duration_ms: f64,
}

#[derive(Debug, Clone)]
enum PoseAnimation {
    Position(Animation<Vec3>),
    Orientation(Animation<Euler>),
}

/// What happened during one [`TransitionEngine::advance`] call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceReport {
    /// Pose components written this tick
    pub updated: usize,
    /// Pose animations that completed and were removed this tick
    pub retired: usize,
    /// Whether the render callback fired
    pub rendered: bool,
    /// Whether the transition finished on this tick
    pub finished: bool,
}

pub struct TransitionEngine<R = StdRng> {
    rng: R,
    animations: BTreeMap<AnimationKey, PoseAnimation>,
    render_handle: Option<Animation<()>>,
    current: Option<Transition>,
    next_id: u64,
}

impl TransitionEngine<StdRng> {
    /// Engine whose per-property durations are reproducible
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TransitionEngine<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            animations: BTreeMap::new(),
            render_handle: None,
            current: None,
            next_id: 1,
        }
    }

    /// Start moving `items` toward `targets` over `duration_ms`.
    ///
    /// Each position and orientation gets its own duration drawn from
    /// `[duration_ms, 2 * duration_ms)`; a render handle keeps the frame
    /// callback firing for `2 * duration_ms`. Items without a matching target
    /// are left alone. Empty `items` is a no-op and returns `Ok(None)`.
    pub fn transition(
        &mut self,
        items: &[Item],
        targets: &[Pose],
        duration_ms: f64,
        now_ms: f64,
        kind: Option<ArrangementKind>,
    ) -> Result<Option<TransitionId>> {
        // the render window and the longest pose animation run for `2 * duration_ms`
        if !(duration_ms * 2.0).is_finite() || duration_ms <= 0.0 {
            return Err(OrbitError::InvalidDuration(duration_ms));
        }
        if items.is_empty() {
            return Ok(None);
        }

        self.cancel();

        for (item, target) in items.iter().zip(targets) {
            let position_ms = self.jittered(duration_ms);
            let orientation_ms = self.jittered(duration_ms);

            self.animations.insert(
                AnimationKey::position(item.index),
                PoseAnimation::Position(
                    Animation::new(item.pose.position, target.position, now_ms, position_ms)
                        .with_easing(Easing::EaseInOutExpo),
                ),
            );
            self.animations.insert(
                AnimationKey::orientation(item.index),
                PoseAnimation::Orientation(
                    Animation::new(item.pose.orientation, target.orientation, now_ms, orientation_ms)
                        .with_easing(Easing::EaseInOutExpo),
                ),
            );
        }

        self.render_handle = Some(Animation::new((), (), now_ms, duration_ms * 2.0));

        let id = TransitionId(self.next_id);
        self.next_id += 1;
        self.current = Some(Transition {
            id,
            kind,
            started_at_ms: now_ms,
            duration_ms,
        });

        tracing::debug!(
            transition = id.0,
            kind = kind.map(|k| k.as_str()).unwrap_or("custom"),
            animated = items.len().min(targets.len()),
            skipped = items.len().saturating_sub(targets.len()),
            duration_ms,
            "transition started"
        );

        Ok(Some(id))
    }

    /// Apply every running animation at `now_ms`, then fire `render` if the
    /// render handle is still live.
    ///
    /// Keys whose index has no item in `items` are dropped.
    pub fn advance<F>(&mut self, now_ms: f64, items: &mut [Item], render: &mut F) -> AdvanceReport
    where
        F: FnMut() + ?Sized,
    {
        let mut report = AdvanceReport::default();
        if !self.is_active() {
            return report;
        }

        let mut done = Vec::new();
        for (key, animation) in &self.animations {
            let Some(item) = items.get_mut(key.index) else {
                done.push(*key);
                continue;
            };
            let finished = match animation {
                PoseAnimation::Position(anim) => {
                    let (value, finished) = anim.sample(now_ms);
                    item.pose.position = value;
                    finished
                }
                PoseAnimation::Orientation(anim) => {
                    let (value, finished) = anim.sample(now_ms);
                    item.pose.orientation = value;
                    finished
                }
            };
            report.updated += 1;
            if finished {
                done.push(*key);
            }
        }
        for key in &done {
            self.animations.remove(key);
        }
        report.retired = done.len();

        if let Some(handle) = self.render_handle.as_ref() {
            let (_, finished) = handle.sample(now_ms);
            render();
            report.rendered = true;
            if finished {
                self.render_handle = None;
            }
        }

        if !self.is_active() {
            report.finished = true;
            if let Some(transition) = self.current.take() {
                tracing::debug!(transition = transition.id.0, "transition finished");
            }
        }

        report
    }

    /// Drop every animation of the current transition immediately.
    pub fn cancel(&mut self) {
        if let Some(previous) = self.current.take() {
            tracing::debug!(
                transition = previous.id.0,
                remaining = self.animations.len(),
                "transition cancelled"
            );
        }
        self.animations.clear();
        self.render_handle = None;
    }

    /// Whether anything is still scheduled
    pub fn is_active(&self) -> bool {
        !self.animations.is_empty() || self.render_handle.is_some()
    }

    /// Number of live pose animations (two per animated item at the start)
    pub fn active_animations(&self) -> usize {
        self.animations.len()
    }

    /// Live pose animations for one property
    pub fn active_for(&self, property: AnimatedProperty) -> usize {
        self.animations
            .keys()
            .filter(|key| key.property == property)
            .count()
    }

    pub fn current(&self) -> Option<&Transition> {
        self.current.as_ref()
    }

    /// Host time by which everything scheduled will have completed
    pub fn settles_at_ms(&self) -> Option<f64> {
        let poses = self.animations.values().map(|animation| match animation {
            PoseAnimation::Position(anim) => anim.end_ms(),
            PoseAnimation::Orientation(anim) => anim.end_ms(),
        });
        poses
            .chain(self.render_handle.as_ref().map(Animation::end_ms))
            .fold(None, |latest: Option<f64>, end| {
                Some(latest.map_or(end, |l| l.max(end)))
            })
    }

    fn jittered(&mut self, duration_ms: f64) -> f64 {
        self.rng.gen::<f64>() * duration_ms + duration_ms
    }
}

impl<R> std::fmt::Debug for TransitionEngine<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransitionEngine")
            .field("animations", &self.animations.len())
            .field("rendering", &self.render_handle.is_some())
            .field("current", &self.current)
            .finish()
    }
}
