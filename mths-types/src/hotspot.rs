use geo::{Point, Polygon};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A circle that holds at least the configured minimum number of events.
///
/// `geometry` is the evaluation disc built at the configured radius around
/// `center`; `min_radius` is the radius of the smallest circle enclosing the
/// contained points, which is usually smaller.
///
/// `contained_indices` index into the point set the record was generated
/// from and are kept sorted ascending.
///
/// # Examples
///
/// ```
/// use mths_types::hotspot::HotSpot;
/// use geo::{Point, polygon};
///
/// let geometry = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 0.0, y: 1.0)];
/// let spot = HotSpot::new(geometry, Point::new(0.0, 0.0), vec![4, 1, 2], 0.5, 0.5);
///
/// assert_eq!(spot.contained_indices(), &[1, 2, 4]);
/// assert_eq!(spot.contained_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HotSpot {
    pub geometry: Polygon<f64>,
    pub center: Point<f64>,
    pub contained_indices: Vec<usize>,
    pub contained_count: usize,
    pub min_radius: f64,
    pub area: f64,
}

impl HotSpot {
    pub fn new(
        geometry: Polygon<f64>,
        center: Point<f64>,
        mut contained_indices: Vec<usize>,
        min_radius: f64,
        area: f64,
    ) -> Self {
        contained_indices.sort_unstable();
        contained_indices.dedup();
        let contained_count = contained_indices.len();
        Self {
            geometry,
            center,
            contained_indices,
            contained_count,
            min_radius,
            area,
        }
    }

    pub fn geometry(&self) -> &Polygon<f64> {
        &self.geometry
    }

    pub fn center(&self) -> Point<f64> {
        self.center
    }

    pub fn centroid_x(&self) -> f64 {
        self.center.x()
    }

    pub fn centroid_y(&self) -> f64 {
        self.center.y()
    }

    pub fn contained_indices(&self) -> &[usize] {
        &self.contained_indices
    }

    pub fn contained_count(&self) -> usize {
        self.contained_count
    }

    pub fn min_radius(&self) -> f64 {
        self.min_radius
    }

    pub fn area(&self) -> f64 {
        self.area
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.contained_indices.binary_search(&index).is_ok()
    }

    /// Whether two hot spots share at least one member point.
    ///
    /// Walks both sorted index lists once.
    pub fn overlaps(&self, other: &HotSpot) -> bool {
        let (mut a, mut b) = (
            self.contained_indices.iter().peekable(),
            other.contained_indices.iter().peekable(),
        );
        while let (Some(x), Some(y)) = (a.peek(), b.peek()) {
            match x.cmp(y) {
                Ordering::Less => {
                    a.next();
                }
                Ordering::Greater => {
                    b.next();
                }
                Ordering::Equal => return true,
            }
        }
        false
    }
}
