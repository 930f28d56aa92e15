//! 2D point index using an R-tree for polygon containment queries.
//!
//! The index is bulk loaded once from a [`PointSet`] and never modified.
//! Each entry remembers its position in the set, so queries answer with
//! point indices rather than coordinates.
//!
//! A containment query runs in two stages: the R-tree prunes to points inside
//! the polygon's bounding rectangle, then each survivor is tested against the
//! polygon itself with strict (interior-only) containment.

use crate::types::PointSet;
use geo::{BoundingRect, Contains, Point, Polygon};
use rstar::{AABB, Point as RstarPoint, RTree};

/// A 2D point wrapper for use with the R-tree spatial index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct IndexedPoint {
    pub x: f64,
    pub y: f64,
    /// Position of the point in its `PointSet`.
    pub index: usize,
}

impl IndexedPoint {
    pub fn new(x: f64, y: f64, index: usize) -> Self {
        Self { x, y, index }
    }

    fn corner(x: f64, y: f64) -> Self {
        Self::new(x, y, usize::MAX)
    }
}

impl RstarPoint for IndexedPoint {
    type Scalar = f64;
    const DIMENSIONS: usize = 2;

    fn generate(mut generator: impl FnMut(usize) -> Self::Scalar) -> Self {
        Self::corner(generator(0), generator(1))
    }

    fn nth(&self, index: usize) -> Self::Scalar {
        match index {
            0 => self.x,
            1 => self.y,
            _ => unreachable!(),
        }
    }

    fn nth_mut(&mut self, index: usize) -> &mut Self::Scalar {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => unreachable!(),
        }
    }
}

/// Read-only R-tree over the points of one detection run.
#[derive(Clone)]
pub struct PointIndex {
    tree: RTree<IndexedPoint>,
}

impl std::fmt::Debug for PointIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PointIndex")
            .field("size", &self.tree.size())
            .finish()
    }
}

impl PointIndex {
    /// Bulk load an index over every point in the set.
    pub fn build(points: &PointSet) -> Self {
        let entries: Vec<IndexedPoint> = points
            .iter()
            .enumerate()
            .map(|(index, p)| IndexedPoint::new(p.x(), p.y(), index))
            .collect();

        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    pub fn len(&self) -> usize {
        self.tree.size()
    }

    pub fn is_empty(&self) -> bool {
        self.tree.size() == 0
    }

    /// Indices of all indexed points strictly inside `polygon`, sorted ascending.
    ///
    /// Points on the polygon boundary are not returned.
    pub fn query_contains(&self, polygon: &Polygon) -> Vec<usize> {
        let Some(rect) = polygon.bounding_rect() else {
            return Vec::new();
        };
        let (min, max) = (rect.min(), rect.max());
        if ![min.x, min.y, max.x, max.y].iter().all(|v| v.is_finite()) {
            log::warn!("Rejecting containment query with non-finite bounds");
            return Vec::new();
        }

        let envelope = AABB::from_corners(
            IndexedPoint::corner(min.x, min.y),
            IndexedPoint::corner(max.x, max.y),
        );

        let mut indices: Vec<usize> = self
            .tree
            .locate_in_envelope(&envelope)
            .filter(|entry| polygon.contains(&Point::new(entry.x, entry.y)))
            .map(|entry| entry.index)
            .collect();
        indices.sort_unstable();
        indices
    }
}
