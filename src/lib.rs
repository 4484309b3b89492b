//! decimal-vectors: fixed-precision Euclidean vector algebra.
//!
//! This crate provides an immutable `Vector` over decimal coordinates with
//! arithmetic, magnitude and normalization, dot products and angles,
//! parallel/orthogonal classification, projections, and 3-D cross products
//! with the areas derived from them.
//!
//! Coordinates are `rust_decimal::Decimal` values rounded to a process-wide
//! number of significant digits (see [`config::Precision`]), so rounding stays
//! predictable across chained operations.
pub mod config;
pub mod error;
pub mod math;

pub use config::Precision;
pub use error::VectorError;
pub use math::{AngleUnit, ToCoordinate, Vector};
pub use rust_decimal::Decimal;
