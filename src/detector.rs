//! The hot spot detector: validation up front, then generation and selection.
//!
//! ```rust
//! use mths::{Config, HotSpotDetector};
//!
//! let points = vec![(0.0, 0.0), (3.0, 1.0), (1.0, 2.0), (5_000.0, 5_000.0)];
//! let mut detector = HotSpotDetector::from_coordinates(points, Config::default())?;
//!
//! let hot_spots = detector.process();
//! assert_eq!(hot_spots.len(), 1);
//! assert_eq!(hot_spots[0].contained_indices, vec![0, 1, 2]);
//! # Ok::<(), mths::MthsError>(())
//! ```

use crate::builder::DetectorBuilder;
use crate::candidates::CandidateGenerator;
use crate::config::Config;
use crate::error::{MthsError, Result};
use crate::selection::SelectionStrategy;
use crate::spatial_index::PointIndex;
use crate::types::{PointSet, ProcessStats};
use geo::Point;
use mths_types::hotspot::HotSpot;
use serde_json::Value;

/// Point count above which a run is logged as expensive.
pub const LARGE_INPUT_POINTS: usize = 5_000;

/// Detects micro-time hot spots in the points of a single time window.
///
/// The point set and its spatial index are built once at construction and
/// never change. Each call to [`process`](Self::process) recomputes the
/// result from scratch, so repeated calls return identical hot spots.
#[derive(Debug)]
pub struct HotSpotDetector {
    points: PointSet,
    index: PointIndex,
    config: Config,
    result: Vec<HotSpot>,
    stats: ProcessStats,
}

impl HotSpotDetector {
    /// Create a detector over an already validated point set.
    pub fn new(points: PointSet, config: Config) -> Result<Self> {
        config.validate().map_err(MthsError::InvalidConfig)?;

        if points.len() > LARGE_INPUT_POINTS {
            log::warn!(
                "{} points yield {} candidate pairs; processing may be slow",
                points.len(),
                points.pair_count()
            );
        }

        let index = PointIndex::build(&points);

        Ok(Self {
            points,
            index,
            config,
            result: Vec::new(),
            stats: ProcessStats::default(),
        })
    }

    /// Create a detector from `(x, y)` tuples, `[x, y]` arrays or `geo::Point`s.
    pub fn from_coordinates<I, P>(coordinates: I, config: Config) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::new(PointSet::from_coordinates(coordinates)?, config)
    }

    /// Create a detector from loosely typed JSON points.
    ///
    /// Fails with [`MthsError::InvalidInput`] unless `points` is an array.
    pub fn from_json(points: &Value, config: Config) -> Result<Self> {
        Self::new(PointSet::from_json(points)?, config)
    }

    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::new()
    }

    /// Run generation and selection, replacing any previous result.
    pub fn process(&mut self) -> &[HotSpot] {
        let generator = CandidateGenerator::new(&self.points, &self.index, &self.config);
        let (candidates, mut stats) = generator.generate();

        let selected = self.strategy().select(candidates);
        stats.selected = selected.len();

        log::debug!(
            "Found {} hot spots among {} points (events >= {}, radius {})",
            stats.selected,
            self.points.len(),
            self.config.events,
            self.config.radius
        );

        self.stats = stats;
        self.result = selected;
        &self.result
    }

    /// Hot spots from the last `process` call; empty before the first call.
    pub fn result(&self) -> &[HotSpot] {
        &self.result
    }

    pub fn into_result(self) -> Vec<HotSpot> {
        self.result
    }

    pub fn stats(&self) -> ProcessStats {
        self.stats
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn points(&self) -> &PointSet {
        &self.points
    }

    pub fn strategy(&self) -> SelectionStrategy {
        SelectionStrategy::from_keep_overlapping(self.config.keep_overlapping)
    }

    /// The last result as a GeoJSON `FeatureCollection` string.
    #[cfg(feature = "geojson")]
    pub fn to_geojson(&self) -> Result<String> {
        crate::export::hot_spots_to_geojson(&self.result)
    }
}
