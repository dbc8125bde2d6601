//! Error types for the card-orbit core

use thiserror::Error;

/// Result alias used throughout the core crate.
pub type Result<T> = std::result::Result<T, OrbitError>;

/// Errors surfaced by layout and transition operations.
#[derive(Debug, Error, PartialEq)]
pub enum OrbitError {
    #[error("transition duration must be a positive, finite number of milliseconds, got {0}")]
    InvalidDuration(f64),

    #[error("unknown arrangement `{0}` (expected table, sphere, helix, grid or pyramid)")]
    UnknownArrangement(String),

    #[error("dataset is empty")]
    EmptyDataset,
}
