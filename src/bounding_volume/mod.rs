//! Bounding circles and the minimum-enclosing-circle computation.

#[doc(inline)]
pub use crate::bounding_volume::circle::Circle;
#[doc(inline)]
pub use crate::bounding_volume::enclosing_circle::{
    enclosing_circle, enclosing_circle_with_params, EnclosingCircleError, EnclosingCircleParams,
    Permutation, DEFAULT_TOLERANCE,
};

#[doc(hidden)]
pub mod circle;
mod circle_support;
#[doc(hidden)]
pub mod enclosing_circle;

/// Free functions for some special cases of bounding-circle computation.
pub mod details {
    pub use super::circle_support::{circle_from_support, circle_from_triplet};
}
