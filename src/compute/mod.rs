//! Geometry and validation primitives used by the detector.
//!
//! Everything here is a pure function over `geo` types: distances, the
//! polygonal evaluation disc, polygon areas, the minimum enclosing circle,
//! and input validation.

pub mod enclosing;
pub mod geometry;
pub mod validation;

pub use enclosing::minimum_enclosing_circle;
pub use geometry::{circle_polygon, distance_between, midpoint, polygon_area, round_to};
