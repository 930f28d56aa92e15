//! Minimum enclosing circle of a finite planar point set.
//!
//! Iterative form of Welzl's algorithm: each point that falls outside the
//! running circle is pinned to the boundary and the circle is rebuilt from the
//! points seen so far. Points are visited in a shuffled order; input that
//! arrives sorted in space would otherwise rebuild the circle at nearly every
//! step and go quadratic. The shuffle uses a fixed seed, so the result is
//! reproducible for a given slice.

use geo::Point;
use mths_types::circle::Circle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Determinant magnitude below which three points are treated as collinear.
const COLLINEAR_EPSILON: f64 = 1e-12;

/// Seed for the visit-order shuffle.
const SHUFFLE_SEED: u64 = 0x6d74_6873;

/// Computes the smallest circle containing every point in `points`.
///
/// Returns `None` for an empty slice.
///
/// # Examples
///
/// ```rust
/// use mths::compute::minimum_enclosing_circle;
/// use geo::Point;
///
/// let points = [Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(1.0, 0.5)];
/// let circle = minimum_enclosing_circle(&points).unwrap();
/// assert!((circle.radius - 1.0).abs() < 1e-9);
/// assert!((circle.center.x() - 1.0).abs() < 1e-9);
/// ```
pub fn minimum_enclosing_circle(points: &[Point]) -> Option<Circle> {
    let mut points = points.to_vec();
    points.shuffle(&mut StdRng::seed_from_u64(SHUFFLE_SEED));

    let (first, rest) = points.split_first()?;
    let mut circle = Circle::from_point(*first);

    for (i, p) in rest.iter().enumerate() {
        if !circle.covers(p) {
            // points[..=i] are everything seen before p
            circle = circle_with_one(&points[..=i], *p);
        }
    }

    Some(circle)
}

fn circle_with_one(points: &[Point], b1: Point) -> Circle {
    let mut circle = Circle::from_point(b1);

    for (j, p) in points.iter().enumerate() {
        if !circle.covers(p) {
            circle = circle_with_two(&points[..j], b1, *p);
        }
    }

    circle
}

fn circle_with_two(points: &[Point], b1: Point, b2: Point) -> Circle {
    let mut circle = circle_from_two(b1, b2);

    for p in points {
        if !circle.covers(p) {
            circle = circle_from_three(b1, b2, *p);
        }
    }

    circle
}

fn circle_from_two(p1: Point, p2: Point) -> Circle {
    let center = Point::new((p1.x() + p2.x()) / 2.0, (p1.y() + p2.y()) / 2.0);
    let radius = distance(&center, &p1).max(distance(&center, &p2));
    Circle::new(center, radius)
}

/// Circumcircle of a triangle, or the widest pair's circle when collinear.
fn circle_from_three(p1: Point, p2: Point, p3: Point) -> Circle {
    let (ax, ay) = (p1.x(), p1.y());
    let (bx, by) = (p2.x(), p2.y());
    let (cx, cy) = (p3.x(), p3.y());

    // Translate to p1 to keep the determinant well conditioned on large coordinates.
    let (bx, by) = (bx - ax, by - ay);
    let (cx, cy) = (cx - ax, cy - ay);
    let d = 2.0 * (bx * cy - by * cx);

    let scale = (bx * bx + by * by).max(cx * cx + cy * cy);
    if d.abs() <= COLLINEAR_EPSILON * scale.max(f64::MIN_POSITIVE) {
        let d12 = sq_distance(&p1, &p2);
        let d23 = sq_distance(&p2, &p3);
        let d13 = sq_distance(&p1, &p3);
        return if d12 >= d23 && d12 >= d13 {
            circle_from_two(p1, p2)
        } else if d23 >= d13 {
            circle_from_two(p2, p3)
        } else {
            circle_from_two(p1, p3)
        };
    }

    let b_sq = bx * bx + by * by;
    let c_sq = cx * cx + cy * cy;
    let ux = (cy * b_sq - by * c_sq) / d;
    let uy = (bx * c_sq - cx * b_sq) / d;

    let center = Point::new(ax + ux, ay + uy);
    let radius = distance(&center, &p1)
        .max(distance(&center, &p2))
        .max(distance(&center, &p3));
    Circle::new(center, radius)
}

fn sq_distance(a: &Point, b: &Point) -> f64 {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

fn distance(a: &Point, b: &Point) -> f64 {
    sq_distance(a, b).sqrt()
}
