//! Type aliases for the mathematical types used throughout this crate.

/// The scalar type used throughout this crate.
pub type Real = f64;

/// The point type.
pub use na::Point2 as Point;
