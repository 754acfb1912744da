//! Bounding circle.

use crate::math::{Point, Real};
use na;

/// A circle, represented by its center and its radius.
///
/// Values of this type are never mutated: every refinement step of the
/// enclosing-circle computation produces a fresh `Circle`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct Circle {
    /// The center of the circle.
    pub center: Point<Real>,
    /// The radius of the circle.
    pub radius: Real,
}

impl Circle {
    /// Creates a new circle.
    pub fn new(center: Point<Real>, radius: Real) -> Circle {
        Circle { center, radius }
    }

    /// The circle center.
    #[inline]
    pub fn center(&self) -> &Point<Real> {
        &self.center
    }

    /// The circle radius.
    #[inline]
    pub fn radius(&self) -> Real {
        self.radius
    }

    /// The circle with the segment `[a, b]` as its diameter.
    ///
    /// This is the smallest circle containing both `a` and `b`. It is
    /// well-defined when `a == b` (a circle of radius 0).
    #[inline]
    pub fn from_diameter(a: Point<Real>, b: Point<Real>) -> Circle {
        let center = na::center(&a, &b);
        Circle::new(center, na::distance(&center, &b))
    }

    /// Tests whether `pt` lies inside this circle, with tolerance `eps` on
    /// the radius comparison.
    ///
    /// `eps` is an absolute tolerance; the enclosing-circle driver derives it
    /// from a relative tolerance and the coordinate magnitude of the input so
    /// that the predicate behaves consistently across scales.
    #[inline]
    pub fn contains_point(&self, pt: &Point<Real>, eps: Real) -> bool {
        na::distance(&self.center, pt) <= self.radius + eps
    }
}
