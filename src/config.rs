//! Detector configuration.
//!
//! ```rust
//! use mths::Config;
//!
//! let config = Config::default().with_events(5).with_radius(500.0);
//! assert!(config.validate().is_ok());
//!
//! let json = r#"{ "events": 4, "keep_overlapping": true }"#;
//! let config = Config::from_json_str(json).unwrap();
//! assert_eq!(config.events, 4);
//! assert_eq!(config.radius, 1320.0);
//! ```

use crate::error::{MthsError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for one detection run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Minimum number of events a circle must contain.
    #[serde(default = "Config::default_events")]
    pub events: usize,

    /// Radius of every evaluation circle, in the units of the input coordinates.
    #[serde(default = "Config::default_radius")]
    pub radius: f64,

    /// Keep partially overlapping hot spots, dropping only exact duplicates.
    #[serde(default)]
    pub keep_overlapping: bool,

    /// Segments per quarter circle when the evaluation disc is built as a polygon.
    #[serde(default = "Config::default_quadrant_segments")]
    pub quadrant_segments: usize,
}

impl Config {
    const fn default_events() -> usize {
        3
    }

    const fn default_radius() -> f64 {
        1320.0
    }

    const fn default_quadrant_segments() -> usize {
        16
    }

    pub fn with_events(mut self, events: usize) -> Self {
        self.events = events;
        self
    }

    pub fn with_radius(mut self, radius: f64) -> Self {
        self.radius = radius;
        self
    }

    pub fn with_keep_overlapping(mut self, keep_overlapping: bool) -> Self {
        self.keep_overlapping = keep_overlapping;
        self
    }

    pub fn with_quadrant_segments(mut self, segments: usize) -> Self {
        self.quadrant_segments = segments;
        self
    }

    /// Validate configuration values
    pub fn validate(&self) -> std::result::Result<(), String> {
        if !self.radius.is_finite() {
            return Err("Radius must be finite (not NaN or infinity)".to_string());
        }

        if self.radius < 0.0 {
            return Err("Radius must not be negative".to_string());
        }

        if self.quadrant_segments == 0 {
            return Err("Quadrant segments must be greater than zero".to_string());
        }

        Ok(())
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate().map_err(MthsError::InvalidConfig)?;
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Config =
            toml::from_str(toml_str).map_err(|e| MthsError::Toml(e.to_string()))?;
        config.validate().map_err(MthsError::InvalidConfig)?;
        Ok(config)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| MthsError::Serialization(e.to_string()))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events: Self::default_events(),
            radius: Self::default_radius(),
            keep_overlapping: false,
            quadrant_segments: Self::default_quadrant_segments(),
        }
    }
}
