//! Where card records come from
//!
//! Fetching is the only asynchronous step before the frame loop starts, so it
//! sits behind an async trait. Sources never touch the scene; the pipeline
//! decides what to do with what they return.

mod json_rows;
mod memory;

use std::path::PathBuf;

use async_trait::async_trait;
use card_orbit_core::Record;
use thiserror::Error;

pub use json_rows::JsonRowsSource;
pub use memory::StaticSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("dataset {path} is not a list of rows: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset source unavailable: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human-readable description used in logs
    fn describe(&self) -> String;

    /// Fetch every record, in display order
    async fn fetch(&self) -> Result<Vec<Record>, SourceError>;
}
