//! card-orbit: data records as animated 3D card arrangements
//!
//! The heavy lifting lives in [`card_orbit_core`] (layouts, transitions) and
//! [`card_orbit_config`] (settings). This crate wires them to dataset sources
//! through an async startup pipeline.

pub mod pipeline;
pub mod source;

pub use card_orbit_config;
pub use card_orbit_core;

pub use card_orbit_config::AppConfig;
pub use card_orbit_core::{ArrangementKind, Pose, Record, ViewportState};
pub use pipeline::{Bootstrapped, Pipeline, PipelineError};
pub use source::{DatasetSource, JsonRowsSource, SourceError, StaticSource};
