//! Planar geometry helpers built on the geo crate.

use geo::{Area, Distance, Euclidean, LineString, Point, Polygon};
use std::f64::consts::TAU;

/// Euclidean distance between two planar points.
///
/// # Examples
///
/// ```rust
/// use mths::compute::distance_between;
/// use geo::Point;
///
/// let d = distance_between(&Point::new(0.0, 0.0), &Point::new(3.0, 4.0));
/// assert_eq!(d, 5.0);
/// ```
pub fn distance_between(point1: &Point, point2: &Point) -> f64 {
    Euclidean.distance(*point1, *point2)
}

/// Point halfway between two points. This is the centre of the smallest
/// circle through both.
pub fn midpoint(point1: &Point, point2: &Point) -> Point {
    Point::new(
        (point1.x() + point2.x()) / 2.0,
        (point1.y() + point2.y()) / 2.0,
    )
}

/// Build a disc around `center` as a regular polygon.
///
/// The ring has `4 * quadrant_segments` vertices, all lying on the circle of
/// the given radius, wound counter-clockwise starting due east of the center.
/// A zero segment count is treated as one.
///
/// # Examples
///
/// ```rust
/// use mths::compute::circle_polygon;
/// use geo::Point;
///
/// let disc = circle_polygon(Point::new(0.0, 0.0), 10.0, 16);
/// // 64 vertices plus the closing coordinate
/// assert_eq!(disc.exterior().0.len(), 65);
/// ```
pub fn circle_polygon(center: Point, radius: f64, quadrant_segments: usize) -> Polygon {
    let vertex_count = 4 * quadrant_segments.max(1);
    let ring: Vec<(f64, f64)> = (0..vertex_count)
        .map(|k| {
            let angle = TAU * k as f64 / vertex_count as f64;
            (
                center.x() + radius * angle.cos(),
                center.y() + radius * angle.sin(),
            )
        })
        .collect();

    Polygon::new(LineString::from(ring), vec![])
}

/// Unsigned planar area of a polygon.
pub fn polygon_area(polygon: &Polygon) -> f64 {
    polygon.unsigned_area()
}

/// Round to a fixed number of decimal digits.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}
