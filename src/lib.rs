/*!
mec2d
========

**mec2d** computes the minimum enclosing circle (MEC) of a finite set of
2-dimensional points: the unique smallest circle containing every point of
the set.

The computation uses a Welzl-style randomized incremental algorithm with an
expected linear running time, implemented iteratively (no recursion) with a
move-to-front reordering of the scan prefix.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(feature = "serde")]
#[macro_use]
extern crate serde;
extern crate num_traits as num;

pub extern crate nalgebra as na;

pub mod bounding_volume;
pub mod math;

pub use crate::bounding_volume::{
    enclosing_circle, enclosing_circle_with_params, Circle, EnclosingCircleError,
    EnclosingCircleParams, Permutation,
};
