//! Minimum enclosing circle of at most three points.
//!
//! These are the base cases of the incremental algorithm: the candidate
//! circle is always determined by a support set of at most three input
//! points.

use crate::bounding_volume::Circle;
use crate::math::{Point, Real};
use na;
use num::Zero;

/// Computes the minimum circle enclosing at most three support points.
///
/// An empty support set yields a circle of radius 0 centered at the origin.
///
/// # Panics
/// Panics if `pts` contains more than three points: the support set of a
/// minimum enclosing circle never exceeds three points.
pub fn circle_from_support(pts: &[Point<Real>], eps: Real) -> Circle {
    match *pts {
        [] => Circle::new(Point::origin(), 0.0),
        [a] => Circle::new(a, 0.0),
        [a, b] => Circle::from_diameter(a, b),
        [a, b, c] => circle_from_triplet(a, b, c, eps),
        _ => panic!("A minimum enclosing circle has at most 3 support points."),
    }
}

/// Computes the minimum circle enclosing the three points `a`, `b`, `c`.
///
/// Each of the three diameter circles is tried first: if one of them already
/// contains the remaining point, it is the answer (the circumcircle of an
/// obtuse triangle is larger than the diameter circle of its longest side).
/// Otherwise the result is the circumcircle of the triangle.
pub fn circle_from_triplet(a: Point<Real>, b: Point<Real>, c: Point<Real>, eps: Real) -> Circle {
    // Collinear triples are also caught here: the diameter circle of the
    // longest side contains the middle point.
    for (p, q, r) in [(a, b, c), (b, c, a), (c, a, b)] {
        let circle = Circle::from_diameter(p, q);
        if circle.contains_point(&r, eps) {
            return circle;
        }
    }

    circumcircle(a, b, c)
}

/// The circumscribed circle of the triangle `a`, `b`, `c`.
///
/// Unlike [`circle_from_triplet`], all three points end up on the circle
/// boundary (unless the triple is degenerate). This is what the constrained
/// scans of the incremental solver need: the circle they grow must keep every
/// boundary point on the boundary.
pub(crate) fn circumcircle(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Circle {
    let ca = a - c;
    let cb = b - c;

    let na = ca.norm_squared();
    let nb = cb.norm_squared();

    let dab = ca.dot(&cb);
    let denom = 2.0 * (na * nb - dab * dab);

    if denom.is_zero() {
        // The triangle is degenerate (the three points are nearly collinear)
        // and slipped past the diameter tests. Take the longest segment.
        log::debug!("Degenerate triple reached the circumcircle computation.");
        let nc = (a - b).norm_squared();

        return if nc >= na && nc >= nb {
            Circle::from_diameter(a, b)
        } else if na >= nb {
            Circle::from_diameter(a, c)
        } else {
            Circle::from_diameter(b, c)
        };
    }

    let k = cb * na - ca * nb;
    let center = c + (ca * k.dot(&cb) - cb * k.dot(&ca)) / denom;
    let radius = na::distance(&a, &center);

    Circle::new(center, radius)
}
