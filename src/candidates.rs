//! Candidate generation.
//!
//! Every unordered pair of input points is a potential anchor for a hot spot.
//! A pair close enough to share a circle of the configured radius yields an
//! evaluation disc centred between them; the disc becomes a candidate when it
//! strictly contains at least the configured number of events.
//!
//! Any circle of radius `r` holding two or more points holds some pair at most
//! `2r` apart, so walking all pairs misses no qualifying circle. The walk is
//! `O(n²)` pairs times one index query per surviving pair.

use crate::compute::{
    circle_polygon, distance_between, midpoint, minimum_enclosing_circle, polygon_area, round_to,
};
use crate::config::Config;
use crate::spatial_index::PointIndex;
use crate::types::{PointSet, ProcessStats};
use geo::Point;
use mths_types::hotspot::HotSpot;

/// Decimal digits kept on a candidate's area.
pub const AREA_DIGITS: i32 = 4;

/// How a point pair seeds an evaluation circle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Anchor {
    /// Both points share coordinates; the circle is centred on them.
    Coincident(Point),
    /// Distinct points within `2 * radius`; the circle is centred on the
    /// centre of their minimum enclosing circle, i.e. their midpoint.
    Pair(Point),
    /// The points are more than `2 * radius` apart.
    TooFar,
}

impl Anchor {
    /// Classify a pair of points against the configured radius.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mths::candidates::Anchor;
    /// use geo::Point;
    ///
    /// let a = Point::new(0.0, 0.0);
    /// assert_eq!(Anchor::classify(&a, &a, 10.0), Anchor::Coincident(a));
    /// assert_eq!(
    ///     Anchor::classify(&a, &Point::new(4.0, 0.0), 10.0),
    ///     Anchor::Pair(Point::new(2.0, 0.0))
    /// );
    /// assert_eq!(Anchor::classify(&a, &Point::new(30.0, 0.0), 10.0), Anchor::TooFar);
    /// ```
    pub fn classify(a: &Point, b: &Point, radius: f64) -> Self {
        let distance = distance_between(a, b);

        if distance == 0.0 {
            return Anchor::Coincident(*a);
        }

        if distance <= radius * 2.0 {
            return Anchor::Pair(midpoint(a, b));
        }

        Anchor::TooFar
    }

    pub fn center(&self) -> Option<Point> {
        match self {
            Anchor::Coincident(center) | Anchor::Pair(center) => Some(*center),
            Anchor::TooFar => None,
        }
    }
}

/// Enumerates point pairs and evaluates their circles against the index.
pub struct CandidateGenerator<'a> {
    points: &'a PointSet,
    index: &'a PointIndex,
    config: &'a Config,
}

impl<'a> CandidateGenerator<'a> {
    pub fn new(points: &'a PointSet, index: &'a PointIndex, config: &'a Config) -> Self {
        Self {
            points,
            index,
            config,
        }
    }

    /// Produce every candidate holding at least `config.events` points.
    ///
    /// Candidates come out in pair order, `(0, 1), (0, 2), ..., (n-2, n-1)`.
    /// Only the `selected` counter of the returned stats is left at zero.
    pub fn generate(&self) -> (Vec<HotSpot>, ProcessStats) {
        let mut stats = ProcessStats::default();
        let mut candidates = Vec::new();

        for (i, j) in self.points.pairs() {
            stats.pairs_enumerated += 1;

            let anchor = Anchor::classify(&self.points[i], &self.points[j], self.config.radius);
            if matches!(anchor, Anchor::Coincident(_)) {
                stats.coincident_pairs += 1;
            }
            let Some(center) = anchor.center() else {
                continue;
            };

            stats.pairs_evaluated += 1;
            if let Some(candidate) = self.evaluate(center) {
                log::trace!(
                    "Candidate from pair ({}, {}) at ({}, {}) holds {} points",
                    i,
                    j,
                    center.x(),
                    center.y(),
                    candidate.contained_count
                );
                candidates.push(candidate);
            }
        }

        stats.candidates = candidates.len();
        log::debug!(
            "Evaluated {} of {} pairs ({} coincident), {} candidates with >= {} events",
            stats.pairs_evaluated,
            stats.pairs_enumerated,
            stats.coincident_pairs,
            stats.candidates,
            self.config.events
        );

        (candidates, stats)
    }

    /// Build the evaluation disc at `center` and keep it if it is dense enough.
    pub fn evaluate(&self, center: Point) -> Option<HotSpot> {
        // A zero-radius disc has no interior, so it can never contain a point.
        if self.config.radius <= 0.0 {
            return None;
        }

        let geometry = circle_polygon(center, self.config.radius, self.config.quadrant_segments);
        let contained = self.index.query_contains(&geometry);

        // With `events` at zero the count check alone would accept an empty disc.
        if contained.is_empty() || contained.len() < self.config.events {
            return None;
        }

        let members = self.points.select(&contained);
        let min_radius = minimum_enclosing_circle(&members)?.radius;
        let area = round_to(polygon_area(&geometry), AREA_DIGITS);

        Some(HotSpot::new(geometry, center, contained, min_radius, area))
    }
}
