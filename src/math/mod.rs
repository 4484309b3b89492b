//! Fixed-precision vector types.
//!
//! `Vector` holds decimal coordinates rounded to a configured number of
//! significant digits; `ToCoordinate` lists the scalar inputs it accepts.
pub mod coordinate;
pub mod vector;

pub use coordinate::ToCoordinate;
pub use vector::{AngleUnit, Vector, DEFAULT_TOLERANCE, DISPLAY_DECIMAL_PLACES};
