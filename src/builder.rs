//! Detector builder for fluent configuration
//!
//! ```rust
//! use mths::DetectorBuilder;
//!
//! let mut detector = DetectorBuilder::new()
//!     .points(vec![(0.0, 0.0), (0.0, 0.0), (0.0, 0.0)])
//!     .events(3)
//!     .radius(100.0)
//!     .build()?;
//!
//! assert_eq!(detector.process().len(), 1);
//! # Ok::<(), mths::MthsError>(())
//! ```

use crate::config::Config;
use crate::detector::HotSpotDetector;
use crate::error::Result;
use crate::types::PointSet;
use geo::Point;
use serde_json::Value;

#[derive(Debug, Clone)]
enum PointSource {
    Points(Vec<Point>),
    Json(Value),
}

/// Builder for a [`HotSpotDetector`].
///
/// Points and parameters may be supplied in any order; all validation is
/// deferred to [`build`](Self::build).
#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    source: PointSource,
    config: Config,
}

impl DetectorBuilder {
    /// Create a new builder with no points and the default configuration.
    pub fn new() -> Self {
        Self {
            source: PointSource::Points(Vec::new()),
            config: Config::default(),
        }
    }

    /// Use these points, replacing any previously supplied.
    pub fn points<I, P>(mut self, points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        self.source = PointSource::Points(points.into_iter().map(Into::into).collect());
        self
    }

    /// Use loosely typed JSON points, replacing any previously supplied.
    pub fn json_points(mut self, points: Value) -> Self {
        self.source = PointSource::Json(points);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    pub fn events(mut self, events: usize) -> Self {
        self.config = self.config.with_events(events);
        self
    }

    pub fn radius(mut self, radius: f64) -> Self {
        self.config = self.config.with_radius(radius);
        self
    }

    pub fn keep_overlapping(mut self, keep_overlapping: bool) -> Self {
        self.config = self.config.with_keep_overlapping(keep_overlapping);
        self
    }

    pub fn quadrant_segments(mut self, segments: usize) -> Self {
        self.config = self.config.with_quadrant_segments(segments);
        self
    }

    /// Validate points and configuration and build the detector.
    pub fn build(self) -> Result<HotSpotDetector> {
        let points = match self.source {
            PointSource::Points(points) => PointSet::new(points)?,
            PointSource::Json(value) => PointSet::from_json(&value)?,
        };
        HotSpotDetector::new(points, self.config)
    }
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
