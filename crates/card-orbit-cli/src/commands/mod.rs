pub mod layout;
pub mod simulate;

use std::path::Path;

use anyhow::{Context, Result};
use card_orbit::AppConfig;

pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    AppConfig::discover(path).context("Failed to load configuration")
}

/// clap value parser for arrangement names
pub fn parse_kind(s: &str) -> Result<card_orbit::ArrangementKind, String> {
    s.parse().map_err(|e: card_orbit::card_orbit_core::OrbitError| e.to_string())
}
