//! Input point arena and run statistics.
//!
//! Every hot spot refers to its member points by index into a [`PointSet`];
//! the set is never reordered or mutated after construction.
use crate::compute::validation::{validate_point_count, validate_points};
use crate::error::{MthsError, Result};
use geo::Point;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::ops::Index;

/// The ordered, immutable sequence of input points for one time window.
///
/// # Example
///
/// ```rust
/// use mths::PointSet;
///
/// let points = PointSet::from_coordinates(vec![(0.0, 0.0), (10.0, 0.0)]).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[1].x(), 10.0);
///
/// assert!(PointSet::from_coordinates(vec![(0.0, 0.0)]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Build a point set, rejecting fewer than two points or non-finite coordinates.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        validate_point_count(points.len())?;
        validate_points(&points)?;
        Ok(Self { points })
    }

    /// Build a point set from anything convertible into a `geo::Point`:
    /// `(x, y)` tuples, `[x, y]` arrays, coordinates or points themselves.
    pub fn from_coordinates<I, P>(coordinates: I) -> Result<Self>
    where
        I: IntoIterator<Item = P>,
        P: Into<Point>,
    {
        Self::new(coordinates.into_iter().map(Into::into).collect())
    }

    /// Build a point set from loosely typed JSON.
    ///
    /// The value must be an array whose entries are either `[x, y]` number
    /// pairs or `{"x": .., "y": ..}` objects.
    pub fn from_json(value: &Value) -> Result<Self> {
        let entries = value.as_array().ok_or_else(|| {
            MthsError::InvalidInput(format!(
                "Points must be a list, got {}",
                json_type_name(value)
            ))
        })?;

        let points = entries
            .iter()
            .enumerate()
            .map(|(idx, entry)| {
                point_from_json(entry).map_err(|e| {
                    MthsError::InvalidInput(format!("Point at index {}: {}", idx, e))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn as_slice(&self) -> &[Point] {
        &self.points
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }

    /// Collect the points at the given indices, in the order given.
    ///
    /// Out-of-range indices are skipped.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices
            .iter()
            .filter_map(|&idx| self.points.get(idx).copied())
            .collect()
    }

    /// Number of unordered index pairs, `n * (n - 1) / 2`.
    pub fn pair_count(&self) -> usize {
        let n = self.points.len();
        n * n.saturating_sub(1) / 2
    }

    /// All unordered index pairs `(i, j)` with `i < j`, in lexicographic order.
    pub fn pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.points.len();
        (0..n).flat_map(move |i| (i + 1..n).map(move |j| (i, j)))
    }
}

impl Index<usize> for PointSet {
    type Output = Point;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a PointSet {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

fn point_from_json(entry: &Value) -> std::result::Result<Point, String> {
    let (x, y) = match entry {
        Value::Array(coords) => {
            if coords.len() < 2 {
                return Err(format!(
                    "coordinate must have at least 2 values, got {}",
                    coords.len()
                ));
            }
            (coords[0].as_f64(), coords[1].as_f64())
        }
        Value::Object(map) => (
            map.get("x").and_then(Value::as_f64),
            map.get("y").and_then(Value::as_f64),
        ),
        other => {
            return Err(format!(
                "expected a coordinate pair, got {}",
                json_type_name(other)
            ));
        }
    };

    match (x, y) {
        (Some(x), Some(y)) => Ok(Point::new(x, y)),
        _ => Err("coordinates must be numbers".to_string()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Counters describing the last detection run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessStats {
    /// Unordered point pairs enumerated.
    pub pairs_enumerated: usize,
    /// Pairs sharing identical coordinates.
    pub coincident_pairs: usize,
    /// Pairs whose evaluation circle was queried against the index.
    pub pairs_evaluated: usize,
    /// Evaluated pairs that met the minimum event count.
    pub candidates: usize,
    /// Hot spots kept after selection.
    pub selected: usize,
}
