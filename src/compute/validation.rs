//! Validation for planar input coordinates.

use crate::error::{MthsError, Result};
use geo::Point;

/// Smallest point set a circle can be anchored on.
pub const MIN_POINTS: usize = 2;

/// Validates that a point has finite coordinates.
///
/// Coordinates are planar and carry no range restriction.
///
/// # Examples
///
/// ```
/// use mths::compute::validation::validate_point;
/// use geo::Point;
///
/// assert!(validate_point(&Point::new(571_000.0, 4_770_000.0)).is_ok());
/// assert!(validate_point(&Point::new(f64::NAN, 0.0)).is_err());
/// ```
pub fn validate_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(MthsError::InvalidInput(format!(
            "X coordinate must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(MthsError::InvalidInput(format!(
            "Y coordinate must be finite, got: {}",
            y
        )));
    }

    Ok(())
}

/// Validates multiple points.
pub fn validate_points(points: &[Point]) -> Result<()> {
    for (idx, point) in points.iter().enumerate() {
        validate_point(point)
            .map_err(|e| MthsError::InvalidInput(format!("Point at index {}: {}", idx, e)))?;
    }
    Ok(())
}

/// Validates that enough points were supplied to anchor a circle.
pub fn validate_point_count(count: usize) -> Result<()> {
    if count < MIN_POINTS {
        return Err(MthsError::InsufficientPoints { found: count });
    }
    Ok(())
}
