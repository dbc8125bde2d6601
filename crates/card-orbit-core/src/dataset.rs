//! Source records shown on the cards

use serde::{Deserialize, Serialize};

const NAME_COLUMN: usize = 0;
const PHOTO_COLUMN: usize = 1;
const COUNTRY_COLUMN: usize = 3;
const NET_WORTH_COLUMN: usize = 5;

/// One row of the dataset.
///
/// The core only needs the number of records; the fields pass through to
/// whoever builds the visual card.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    pub photo_url: Option<String>,
    pub country: String,
    pub net_worth: Option<String>,
}

impl Record {
    pub fn new(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            country: country.into(),
            ..Self::default()
        }
    }

    pub fn with_net_worth(mut self, net_worth: impl Into<String>) -> Self {
        self.net_worth = Some(net_worth.into());
        self
    }

    /// Build a record from a spreadsheet row.
    ///
    /// Columns: 0 name, 1 photo URL, 3 country, 5 net worth. Short rows are
    /// accepted; blank photo or net-worth cells become `None`.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Self {
        let cell = |idx: usize| row.get(idx).map(|s| s.as_ref().trim()).unwrap_or("");
        let optional = |idx: usize| Some(cell(idx)).filter(|s| !s.is_empty()).map(str::to_string);

        Self {
            name: cell(NAME_COLUMN).to_string(),
            photo_url: optional(PHOTO_COLUMN),
            country: cell(COUNTRY_COLUMN).to_string(),
            net_worth: optional(NET_WORTH_COLUMN),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_full_row() {
        let row = [
            "Ada", "https://img/ada.png", "ignored", "UK", "ignored", "$250,000",
        ];
        let record = Record::from_row(&row);
        assert_eq!(record.name, "Ada");
        assert_eq!(record.photo_url.as_deref(), Some("https://img/ada.png"));
        assert_eq!(record.country, "UK");
        assert_eq!(record.net_worth.as_deref(), Some("$250,000"));
    }

    #[test]
    fn test_from_short_row() {
        let row = vec!["Grace".to_string(), String::new()];
        let record = Record::from_row(&row);
        assert_eq!(record.name, "Grace");
        assert_eq!(record.photo_url, None);
        assert_eq!(record.country, "");
        assert_eq!(record.net_worth, None);
    }
}
