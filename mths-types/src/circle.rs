use geo::Point;
use serde::{Deserialize, Serialize};

/// Relative slack applied when testing whether a point lies on a circle.
const COVER_TOLERANCE: f64 = 1e-10;

/// A planar circle given by its center and radius.
///
/// # Examples
///
/// ```
/// use mths_types::circle::Circle;
/// use geo::Point;
///
/// let circle = Circle::new(Point::new(1.0, 1.0), 2.0);
/// assert!(circle.covers(&Point::new(3.0, 1.0)));
/// assert!(!circle.covers(&Point::new(3.5, 1.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Point<f64>,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point<f64>, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Degenerate circle of radius zero around a single point.
    pub fn from_point(center: Point<f64>) -> Self {
        Self {
            center,
            radius: 0.0,
        }
    }

    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Closed containment test with a small relative tolerance.
    ///
    /// Points on the circumference count as covered. This is what enclosing
    /// circle construction needs; hot spot membership uses the strict test of
    /// the spatial index instead.
    pub fn covers(&self, point: &Point<f64>) -> bool {
        let dx = point.x() - self.center.x();
        let dy = point.y() - self.center.y();
        let sq_dist = dx * dx + dy * dy;
        let sq_radius = self.radius * self.radius;
        sq_dist <= sq_radius + sq_radius * COVER_TOLERANCE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_boundary_point() {
        let circle = Circle::new(Point::new(0.0, 0.0), 5.0);
        assert!(circle.covers(&Point::new(3.0, 4.0)));
        assert!(circle.covers(&Point::new(0.0, 0.0)));
        assert!(!circle.covers(&Point::new(3.0, 4.1)));
    }

    #[test]
    fn test_degenerate_circle() {
        let circle = Circle::from_point(Point::new(2.0, 2.0));
        assert_eq!(circle.radius(), 0.0);
        assert!(circle.covers(&Point::new(2.0, 2.0)));
        assert!(!circle.covers(&Point::new(2.0, 2.000001)));
    }
}
