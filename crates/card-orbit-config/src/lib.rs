//! Configuration for card-orbit
//!
//! Settings live in a TOML file. Every field has a default, so an empty file
//! (or no file at all) yields a working configuration.
//!
//! ```toml
//! [layout]
//! helix_radius = 900.0
//!
//! [animation]
//! transition_ms = 1500.0
//! initial_arrangement = "sphere"
//! seed = 42
//! ```

use std::path::{Path, PathBuf};

use card_orbit_core::{ArrangementKind, CameraSettings, LayoutParams, ViewportSettings};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const CONFIG_FILE_NAME: &str = "config.toml";

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("invalid config value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Radii of the curved arrangements
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub sphere_radius: f64,
    pub helix_radius: f64,
    pub pyramid_radius: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        let params = LayoutParams::default();
        Self {
            sphere_radius: params.sphere_radius,
            helix_radius: params.helix_radius,
            pyramid_radius: params.pyramid_radius,
        }
    }
}

/// Transition timing and scene motion
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Base transition length in milliseconds
    pub transition_ms: f64,
    /// Delay before the first arrangement is selected after a load
    pub initial_delay_ms: f64,
    pub initial_arrangement: ArrangementKind,
    /// Fixed seed for reproducible scatter, pyramid and durations
    pub seed: Option<u64>,
    pub spin_per_frame: f64,
    pub scatter_extent: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            transition_ms: 2000.0,
            initial_delay_ms: 500.0,
            initial_arrangement: ArrangementKind::Table,
            seed: None,
            spin_per_frame: 0.0015,
            scatter_extent: 2000.0,
        }
    }
}

/// Where the dataset comes from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// JSON file of spreadsheet rows
    pub path: Option<PathBuf>,
    /// Leading rows to drop (e.g. a header)
    pub skip_rows: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub layout: LayoutConfig,
    pub animation: AnimationConfig,
    pub camera: CameraSettings,
    pub dataset: DatasetConfig,
}

impl AppConfig {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content).map_err(|err| match err {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        tracing::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Use the file at `explicit` if given, otherwise the per-user config file
    /// if it exists, otherwise the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => {
                tracing::debug!("no config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        positive("layout.sphere_radius", self.layout.sphere_radius)?;
        positive("layout.helix_radius", self.layout.helix_radius)?;
        positive("layout.pyramid_radius", self.layout.pyramid_radius)?;
        positive("animation.transition_ms", self.animation.transition_ms)?;
        doubles_finite("animation.transition_ms", self.animation.transition_ms)?;
        non_negative("animation.initial_delay_ms", self.animation.initial_delay_ms)?;
        non_negative("animation.scatter_extent", self.animation.scatter_extent)?;
        doubles_finite("animation.scatter_extent", self.animation.scatter_extent)?;
        if !self.animation.spin_per_frame.is_finite() {
            return Err(invalid("animation.spin_per_frame", "must be finite"));
        }
        positive("camera.fov_degrees", self.camera.fov_degrees)?;
        positive("camera.near", self.camera.near)?;
        if self.camera.far <= self.camera.near {
            return Err(invalid("camera.far", "must be greater than camera.near"));
        }
        if self.camera.max_distance < self.camera.min_distance {
            return Err(invalid(
                "camera.max_distance",
                "must not be less than camera.min_distance",
            ));
        }
        Ok(())
    }

    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn layout_params(&self) -> LayoutParams {
        LayoutParams {
            sphere_radius: self.layout.sphere_radius,
            helix_radius: self.layout.helix_radius,
            pyramid_radius: self.layout.pyramid_radius,
        }
    }

    pub fn viewport_settings(&self) -> ViewportSettings {
        ViewportSettings {
            layout: self.layout_params(),
            camera: self.camera,
            transition_ms: self.animation.transition_ms,
            scatter_extent: self.animation.scatter_extent,
            spin_per_frame: self.animation.spin_per_frame,
            seed: self.animation.seed,
        }
    }
}

/// Per-user config file location, e.g. `~/.config/card-orbit/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "card-orbit").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

fn positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must be positive, got {value}")))
    }
}

/// Values that get doubled downstream (render window, scatter width)
fn doubles_finite(field: &'static str, value: f64) -> Result<()> {
    if (value * 2.0).is_finite() {
        Ok(())
    } else {
        Err(invalid(field, format!("is too large, got {value}")))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(invalid(field, format!("must not be negative, got {value}")))
    }
}
