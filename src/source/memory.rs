use async_trait::async_trait;
use card_orbit_core::Record;

use super::{DatasetSource, SourceError};

/// Records held in memory; handy for demos and tests
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<Record>,
}

impl StaticSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// `count` placeholder records named `#0`, `#1`, ...
    pub fn placeholders(count: usize) -> Self {
        Self::new(
            (0..count)
                .map(|i| Record::new(format!("#{i}"), ""))
                .collect(),
        )
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    fn describe(&self) -> String {
        format!("{} in-memory records", self.records.len())
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        Ok(self.records.clone())
    }
}
