//! Named arrangements

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OrbitError;

/// One of the supported spatial arrangements
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArrangementKind {
    #[default]
    Table,
    Sphere,
    Helix,
    Grid,
    Pyramid,
}

impl ArrangementKind {
    pub const ALL: [ArrangementKind; 5] = [
        ArrangementKind::Table,
        ArrangementKind::Sphere,
        ArrangementKind::Helix,
        ArrangementKind::Grid,
        ArrangementKind::Pyramid,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ArrangementKind::Table => "table",
            ArrangementKind::Sphere => "sphere",
            ArrangementKind::Helix => "helix",
            ArrangementKind::Grid => "grid",
            ArrangementKind::Pyramid => "pyramid",
        }
    }

    /// Whether the generated poses depend on the random source
    pub fn is_randomized(&self) -> bool {
        matches!(self, ArrangementKind::Pyramid)
    }
}

impl fmt::Display for ArrangementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArrangementKind {
    type Err = OrbitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| OrbitError::UnknownArrangement(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("Helix".parse::<ArrangementKind>(), Ok(ArrangementKind::Helix));
        assert_eq!(" grid ".parse::<ArrangementKind>(), Ok(ArrangementKind::Grid));
    }

    #[test]
    fn test_parse_unknown() {
        let err = "cube".parse::<ArrangementKind>().unwrap_err();
        assert_eq!(err, OrbitError::UnknownArrangement("cube".to_string()));
    }

    #[test]
    fn test_display_round_trip() {
        for kind in ArrangementKind::ALL {
            assert_eq!(kind.to_string().parse::<ArrangementKind>(), Ok(kind));
        }
    }
}
