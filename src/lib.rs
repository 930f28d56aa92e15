//! Micro-time hot spot detection.
//!
//! Given the point events of one short time window, find circles of at most a
//! fixed radius that hold at least a minimum number of events, and reduce them
//! to a minimally overlapping set.
//!
//! ```rust
//! use mths::{Config, Mths};
//!
//! // two tight clusters far apart
//! let mut points = Vec::new();
//! for (cx, cy) in [(0.0, 0.0), (10_000.0, 10_000.0)] {
//!     for (dx, dy) in [(0.0, 0.0), (5.0, 0.0), (0.0, 5.0), (5.0, 5.0), (2.0, 3.0)] {
//!         points.push((cx + dx, cy + dy));
//!     }
//! }
//!
//! let mut mths = Mths::from_coordinates(points, Config::default().with_radius(100.0))?;
//! let hot_spots = mths.process();
//!
//! assert_eq!(hot_spots.len(), 2);
//! assert!(hot_spots.iter().all(|h| h.contained_count == 5));
//! # Ok::<(), mths::MthsError>(())
//! ```

pub mod builder;
pub mod candidates;
pub mod compute;
pub mod config;
pub mod detector;
pub mod error;
#[cfg(feature = "geojson")]
pub mod export;
pub mod selection;
pub mod spatial_index;
pub mod types;

pub use builder::DetectorBuilder;
pub use config::Config;
pub use detector::HotSpotDetector;
pub use error::{MthsError, Result};

pub type Mths = HotSpotDetector;

pub use geo::{Point, Polygon};

pub use mths_types::circle::Circle;
pub use mths_types::hotspot::HotSpot;

pub use candidates::{Anchor, CandidateGenerator};
pub use selection::SelectionStrategy;
pub use spatial_index::PointIndex;
pub use types::{PointSet, ProcessStats};

#[cfg(feature = "geojson")]
pub use export::{hot_spot_to_feature, hot_spots_to_feature_collection, hot_spots_to_geojson};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{Config, DetectorBuilder, HotSpot, HotSpotDetector, Mths, MthsError, Result};

    pub use geo::{Point, Polygon};

    pub use crate::{PointSet, ProcessStats, SelectionStrategy};
}
