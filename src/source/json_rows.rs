use std::path::{Path, PathBuf};

use async_trait::async_trait;
use card_orbit_core::Record;
use serde::Deserialize;
use serde_json::Value;

use super::{DatasetSource, SourceError};

/// Rows as returned by a spreadsheet "values" endpoint, or a bare array
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RowsDocument {
    Bare(Vec<Vec<Value>>),
    Values {
        #[serde(default)]
        values: Vec<Vec<Value>>,
    },
}

impl RowsDocument {
    fn into_rows(self) -> Vec<Vec<Value>> {
        match self {
            RowsDocument::Values { values } => values,
            RowsDocument::Bare(rows) => rows,
        }
    }
}

/// Reads spreadsheet-style rows from a JSON file
#[derive(Debug, Clone)]
pub struct JsonRowsSource {
    path: PathBuf,
    skip_rows: usize,
}

impl JsonRowsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            skip_rows: 0,
        }
    }

    /// Drop leading rows such as a header
    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parse(&self, content: &str) -> Result<Vec<Record>, SourceError> {
        let document: RowsDocument =
            serde_json::from_str(content).map_err(|source| SourceError::Decode {
                path: self.path.clone(),
                source,
            })?;

        Ok(document
            .into_rows()
            .into_iter()
            .skip(self.skip_rows)
            .map(|row| {
                let cells: Vec<String> = row.iter().map(cell_text).collect();
                Record::from_row(&cells)
            })
            .collect())
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[async_trait]
impl DatasetSource for JsonRowsSource {
    fn describe(&self) -> String {
        format!("json rows at {}", self.path.display())
    }

    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        let content =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| SourceError::Read {
                    path: self.path.clone(),
                    source,
                })?;
        let records = self.parse(&content)?;
        tracing::debug!(rows = records.len(), "read {}", self.path.display());
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_json(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_reads_values_document() {
        let file = write_json(
            r#"{"range": "Sheet1!A2:F", "values": [
                ["Ada", "", "x", "UK", "y", "$250,000"],
                ["Grace", "https://img/g.png", "x", "US"]
            ]}"#,
        );
        let records = JsonRowsSource::new(file.path()).fetch().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Ada");
        assert_eq!(records[0].photo_url, None);
        assert_eq!(records[1].photo_url.as_deref(), Some("https://img/g.png"));
        assert_eq!(records[1].net_worth, None);
    }

    #[tokio::test]
    async fn test_reads_bare_rows_and_skips_header() {
        let file = write_json(r#"[["Name","Photo","Age","Country","Role","Net Worth"],["Linus", null, 54, "FI", null, 150000]]"#);
        let records = JsonRowsSource::new(file.path())
            .skip_rows(1)
            .fetch()
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "FI");
        assert_eq!(records[0].net_worth.as_deref(), Some("150000"));
    }

    #[tokio::test]
    async fn test_sheet_without_values_is_empty() {
        let file = write_json(r#"{"range": "Sheet1!A2:F"}"#);
        let records = JsonRowsSource::new(file.path()).fetch().await.unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = JsonRowsSource::new(dir.path().join("rows.json"))
            .fetch()
            .await
            .unwrap_err();
        assert!(matches!(err, SourceError::Read { .. }));
    }

    #[tokio::test]
    async fn test_malformed_file() {
        let file = write_json(r#"{"values": "nope"}"#);
        let err = JsonRowsSource::new(file.path()).fetch().await.unwrap_err();
        assert!(matches!(err, SourceError::Decode { .. }));
    }
}
