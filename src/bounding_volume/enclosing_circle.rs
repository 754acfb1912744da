//! Minimum enclosing circle of a 2D point cloud.
//!
//! This is an iterative variant of Welzl's randomized incremental algorithm
//! with an expected linear running time. The recursion of the classical
//! formulation is replaced by two nested scans over the already-processed
//! prefix, each constrained to keep one more point on the circle boundary,
//! plus a move-to-front reordering of the point that triggered the rescan.

use crate::bounding_volume::circle_support::circumcircle;
use crate::bounding_volume::Circle;
use crate::math::{Point, Real};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// The default relative tolerance of the enclosing-circle computation.
pub const DEFAULT_TOLERANCE: Real = 1.0e-10;

/// The permutation applied to the input points before the incremental scan.
///
/// The random permutation is what gives the algorithm its expected linear
/// running time; it does not affect the result. A seeded permutation makes a
/// call fully reproducible, which is mostly useful for tests.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Permutation {
    /// A uniform random permutation drawn from the thread-local generator.
    Random,
    /// A uniform random permutation drawn from a generator seeded with the
    /// given value.
    Seeded(u64),
}

/// Parameters of the enclosing-circle computation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EnclosingCircleParams {
    /// Relative tolerance of the point-in-circle predicate.
    ///
    /// The absolute epsilon used by every predicate of one call is
    /// `tolerance * m` where `m` is the largest coordinate magnitude of the
    /// input, so the predicate behaves consistently for very small and very
    /// large point clouds.
    pub tolerance: Real,
    /// The permutation strategy applied to the input.
    pub permutation: Permutation,
}

impl Default for EnclosingCircleParams {
    fn default() -> Self {
        EnclosingCircleParams {
            tolerance: DEFAULT_TOLERANCE,
            permutation: Permutation::Random,
        }
    }
}

/// Errors that can occur during the enclosing-circle computation.
#[derive(thiserror::Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnclosingCircleError {
    /// The coordinates of the point at the reported index are not all
    /// finite (NaN or infinite). The input is not sanitized: the call fails
    /// without attempting a partial result.
    #[error("the coordinates of input point {0} are not all finite")]
    InvalidInput(usize),
}

/// Computes the minimum enclosing circle of `points` with default
/// parameters.
///
/// Every input point lies within the returned circle (up to the default
/// tolerance), and no smaller circle has that property. Duplicate points are
/// allowed; an empty input yields a circle of radius 0 at the origin.
///
/// # Example
/// ```
/// use mec2d::enclosing_circle;
/// use mec2d::math::Point;
///
/// let points = [
///     Point::new(0.0, 0.0),
///     Point::new(2.0, 0.0),
///     Point::new(1.0, 1.0),
/// ];
/// let circle = enclosing_circle(&points).unwrap();
/// assert!((circle.center.x - 1.0).abs() < 1.0e-9);
/// assert!((circle.center.y - 0.0).abs() < 1.0e-9);
/// assert!((circle.radius - 1.0).abs() < 1.0e-9);
/// ```
pub fn enclosing_circle(points: &[Point<Real>]) -> Result<Circle, EnclosingCircleError> {
    enclosing_circle_with_params(points, &EnclosingCircleParams::default())
}

/// Computes the minimum enclosing circle of `points` with the given
/// parameters.
///
/// The input slice is never mutated: the algorithm permutes a private index
/// vector and retains no working state after returning.
pub fn enclosing_circle_with_params(
    points: &[Point<Real>],
    params: &EnclosingCircleParams,
) -> Result<Circle, EnclosingCircleError> {
    let mut magnitude: Real = 0.0;
    for (i, pt) in points.iter().enumerate() {
        if !pt.x.is_finite() || !pt.y.is_finite() {
            return Err(EnclosingCircleError::InvalidInput(i));
        }
        magnitude = magnitude.max(pt.x.abs()).max(pt.y.abs());
    }

    let eps = params.tolerance * magnitude;

    if points.is_empty() {
        return Ok(Circle::new(Point::origin(), 0.0));
    }

    let mut order: Vec<usize> = (0..points.len()).collect();
    match params.permutation {
        Permutation::Random => order.shuffle(&mut rand::thread_rng()),
        Permutation::Seeded(seed) => order.shuffle(&mut StdRng::seed_from_u64(seed)),
    }

    let mut circle = Circle::new(points[order[0]], 0.0);

    for i in 1..order.len() {
        let p = points[order[i]];

        if !circle.contains_point(&p, eps) {
            // `p` lies on the boundary of the minimum circle enclosing the
            // prefix processed so far.
            circle = enclose_with_one(points, &order[..i], p, eps);
            // Move the violating point to the front of the processed prefix.
            order[..=i].rotate_right(1);
        }
    }

    Ok(circle)
}

/// Minimum circle enclosing `points[order]` with `b1` on its boundary.
fn enclose_with_one(points: &[Point<Real>], order: &[usize], b1: Point<Real>, eps: Real) -> Circle {
    let mut circle = Circle::new(b1, 0.0);

    for j in 0..order.len() {
        let q = points[order[j]];

        if !circle.contains_point(&q, eps) {
            circle = enclose_with_two(points, &order[..j], b1, q, eps);
        }
    }

    circle
}

/// Minimum circle enclosing `points[order]` with `b1` and `b2` on its
/// boundary.
fn enclose_with_two(
    points: &[Point<Real>],
    order: &[usize],
    b1: Point<Real>,
    b2: Point<Real>,
    eps: Real,
) -> Circle {
    let mut circle = Circle::from_diameter(b1, b2);

    for &k in order {
        let r = points[k];

        if !circle.contains_point(&r, eps) {
            // The new circle must keep `b1` and `b2` on its boundary, so
            // this is the circumcircle, not the minimum circle of the
            // three points.
            circle = circumcircle(b1, b2, r);
        }
    }

    circle
}
