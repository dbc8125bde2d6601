//! Startup sequence from configuration to a populated scene
//!
//! Each step is awaited in order and fails with a typed error. Nothing is
//! handed back until every step succeeded, so a failed fetch never leaves a
//! half-built scene behind.

use card_orbit_config::{AppConfig, ConfigError};
use card_orbit_core::{ArrangementKind, OrbitError, ViewportState};
use thiserror::Error;

use crate::source::{DatasetSource, SourceError};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("configuration rejected: {0}")]
    Config(#[from] ConfigError),

    #[error("dataset fetch failed: {0}")]
    Source(#[from] SourceError),

    #[error("dataset rejected: {0}")]
    Dataset(#[from] OrbitError),
}

/// A scene ready for its first frame
#[derive(Debug)]
pub struct Bootstrapped {
    pub viewport: ViewportState,
    /// Arrangement to select once `initial_at_ms` is reached
    pub initial: ArrangementKind,
    pub initial_at_ms: f64,
}

impl Bootstrapped {
    /// Select the initial arrangement if its time has come.
    ///
    /// Returns `true` the first time it fires.
    pub fn start_initial_if_due(&mut self, now_ms: f64) -> Result<bool, PipelineError> {
        if self.viewport.selected().is_some() || now_ms < self.initial_at_ms {
            return Ok(false);
        }
        tracing::info!(arrangement = %self.initial, "initial animation started");
        Ok(self.viewport.select(self.initial, now_ms)?.is_some())
    }
}

pub struct Pipeline;

impl Pipeline {
    /// Validate `config`, fetch records from `source` and build the scene.
    pub async fn run(
        config: &AppConfig,
        source: &dyn DatasetSource,
        now_ms: f64,
    ) -> Result<Bootstrapped, PipelineError> {
        let result = Self::steps(config, source, now_ms).await;
        if let Err(err) = &result {
            tracing::error!("startup failed: {}", err);
        }
        result
    }

    async fn steps(
        config: &AppConfig,
        source: &dyn DatasetSource,
        now_ms: f64,
    ) -> Result<Bootstrapped, PipelineError> {
        config.validate()?;

        tracing::info!("fetching dataset from {}", source.describe());
        let records = source.fetch().await?;
        tracing::info!(rows = records.len(), "got rows, creating cards");

        let mut viewport = ViewportState::new(config.viewport_settings());
        viewport.load_dataset(records)?;

        Ok(Bootstrapped {
            viewport,
            initial: config.animation.initial_arrangement,
            initial_at_ms: now_ms + config.animation.initial_delay_ms,
        })
    }

    /// Refetch and swap in a new dataset.
    ///
    /// On any failure the viewport keeps its current cards and arrangements.
    pub async fn reload(
        viewport: &mut ViewportState,
        source: &dyn DatasetSource,
    ) -> Result<usize, PipelineError> {
        let records = match source.fetch().await {
            Ok(records) => records,
            Err(err) => {
                tracing::error!("failed to read data: {}", err);
                return Err(err.into());
            }
        };
        viewport.load_dataset(records)?;
        Ok(viewport.registry().len())
    }
}
