//! card-orbit-core: spatial arrangements and transitions for 3D card walls
//!
//! This crate provides:
//! - Spatial primitives (vectors, Euler orientations, poses, triangles)
//! - Layout generators for the table, sphere, helix, grid and pyramid arrangements
//! - Typed, host-driven animations with exponential easing
//! - An item registry and a transition engine that animates it between arrangements
//! - A host-owned viewport state tying it all together
//!
//! Nothing here spawns threads or timers. The host calls
//! [`ViewportState::frame`] (or [`TransitionEngine::advance`]) once per frame
//! with its current time in milliseconds.

pub mod animation;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod registry;
pub mod spatial;
pub mod theme;
pub mod transition;
pub mod viewport;

// Re-export commonly used types
pub use animation::{ease_exp_in_out, AnimatedProperty, Animation, AnimationKey, Easing};
pub use dataset::Record;
pub use error::{OrbitError, Result};
pub use layout::{compute_arrangements, ArrangementKind, Arrangements, LayoutParams};
pub use registry::{Item, ItemRegistry, RenderHandle};
pub use spatial::{Euler, Pose, Triangle, Vec3};
pub use theme::{CardStyle, NetWorthBand, Rgb};
pub use transition::{AdvanceReport, Transition, TransitionEngine, TransitionId};
pub use viewport::{CameraSettings, ViewportSettings, ViewportState};
