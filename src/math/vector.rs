use std::f64::consts::PI;
use std::fmt;
use std::ops::Index;
use std::slice::Iter;
use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::config::Precision;
use crate::error::VectorError;
use crate::math::coordinate::ToCoordinate;

/// Default threshold below which a magnitude or a dot product counts as zero (1e-10).
pub const DEFAULT_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 10);

/// Decimal places used when rendering coordinates.
pub const DISPLAY_DECIMAL_PLACES: u32 = 3;

/// Decimal places a cosine is rounded to before deciding it sits on ±1.
const COSINE_GUARD_DECIMAL_PLACES: u32 = 3;

/// Unit of the value returned by [`Vector::angle_with`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AngleUnit {
    #[default]
    Radians,
    Degrees,
}

/// An immutable vector of fixed-precision decimal coordinates.
///
/// Every coordinate, and every intermediate result of an operation, is rounded
/// to the [`Precision`] the vector was built with. Operations never mutate;
/// they return new vectors carrying the receiver's precision.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<Decimal>", into = "Vec<Decimal>")]
pub struct Vector {
    coordinates: Vec<Decimal>,
    precision: Precision,
}

#[allow(clippy::len_without_is_empty)]
impl Vector {
    /// Build a vector with the process-wide precision.
    pub fn new<I>(coordinates: I) -> Result<Self, VectorError>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        Self::with_precision(coordinates, Precision::current())
    }

    pub fn with_precision<I>(coordinates: I, precision: Precision) -> Result<Self, VectorError>
    where
        I: IntoIterator,
        I::Item: ToCoordinate,
    {
        let coordinates = coordinates
            .into_iter()
            .map(|c| c.to_coordinate().map(|value| precision.round(value)))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        if coordinates.is_empty() {
            return Err(VectorError::EmptyInput);
        }
        Ok(Self {
            coordinates,
            precision,
        })
    }

    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    pub fn coordinates(&self) -> &[Decimal] {
        &self.coordinates
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    pub fn iter(&self) -> Iter<'_, Decimal> {
        self.coordinates.iter()
    }

    pub fn get(&self, index: usize) -> Result<Decimal, VectorError> {
        self.coordinates
            .get(index)
            .copied()
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimension: self.dimension(),
            })
    }

    pub fn to_vec(&self) -> Vec<Decimal> {
        self.coordinates.clone()
    }

    // Callers guarantee `coordinates` is non-empty.
    fn with_coordinates(&self, coordinates: Vec<Decimal>) -> Vector {
        Vector {
            coordinates: coordinates
                .into_iter()
                .map(|c| self.precision.round(c))
                .collect(),
            precision: self.precision,
        }
    }

    fn product(&self, a: Decimal, b: Decimal) -> Result<Decimal, VectorError> {
        a.checked_mul(b)
            .map(|value| self.precision.round(value))
            .ok_or(VectorError::Overflow)
    }

    fn sum(&self, a: Decimal, b: Decimal) -> Result<Decimal, VectorError> {
        a.checked_add(b)
            .map(|value| self.precision.round(value))
            .ok_or(VectorError::Overflow)
    }

    fn difference(&self, a: Decimal, b: Decimal) -> Result<Decimal, VectorError> {
        a.checked_sub(b)
            .map(|value| self.precision.round(value))
            .ok_or(VectorError::Overflow)
    }

    fn ensure_same_dimension(&self, v: &Vector) -> Result<(), VectorError> {
        if self.dimension() != v.dimension() {
            return Err(VectorError::DimensionMismatch {
                left: self.dimension(),
                right: v.dimension(),
            });
        }
        Ok(())
    }

    /// Element-wise sum. Fails with [`VectorError::Overflow`] past the decimal range.
    pub fn plus(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.ensure_same_dimension(v)?;
        let coordinates = self
            .iter()
            .zip(v.iter())
            .map(|(&x, &y)| self.sum(x, y))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        Ok(self.with_coordinates(coordinates))
    }

    pub fn minus(&self, v: &Vector) -> Result<Vector, VectorError> {
        self.ensure_same_dimension(v)?;
        let coordinates = self
            .iter()
            .zip(v.iter())
            .map(|(&x, &y)| self.difference(x, y))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        Ok(self.with_coordinates(coordinates))
    }

    pub fn times_scalar<T: ToCoordinate>(&self, c: T) -> Result<Vector, VectorError> {
        let c = c.to_coordinate()?;
        self.scaled(c)
    }

    fn scaled(&self, c: Decimal) -> Result<Vector, VectorError> {
        let coordinates = self
            .iter()
            .map(|&x| self.product(c, x))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        Ok(self.with_coordinates(coordinates))
    }

    /// Euclidean length, rounded to this vector's precision.
    ///
    /// Saturates at [`Decimal::MAX`] when the length itself is beyond the
    /// decimal range.
    pub fn magnitude(&self) -> Decimal {
        self.checked_magnitude().unwrap_or_else(|_| {
            log::warn!("Magnitude of {} exceeds the decimal range", self);
            Decimal::MAX
        })
    }

    fn checked_magnitude(&self) -> Result<Decimal, VectorError> {
        let Some(exponent) = self.exponent() else {
            return Ok(Decimal::ZERO);
        };
        let root = self.root_sum_of_squares(&self.shifted_coordinates(exponent)?)?;
        Ok(self.precision.round(shift(root, exponent)?))
    }

    /// Power of ten of the largest coordinate, `None` for the zero vector.
    fn exponent(&self) -> Option<i64> {
        let largest = self.iter().map(|x| x.abs()).max()?;
        if largest.is_zero() {
            return None;
        }
        let digits = largest.mantissa().unsigned_abs().ilog10() as i64;
        Some(digits - largest.scale() as i64)
    }

    // Every shifted coordinate lies in (-10, 10). Shifting by a power of ten
    // is exact, so rounding to significant digits gives the same digits.
    fn shifted_coordinates(&self, exponent: i64) -> Result<Vec<Decimal>, VectorError> {
        self.iter().map(|&x| shift(x, -exponent)).collect()
    }

    fn root_sum_of_squares(&self, values: &[Decimal]) -> Result<Decimal, VectorError> {
        let sum_of_squares = values.iter().try_fold(Decimal::ZERO, |acc, &x| {
            self.sum(acc, self.product(x, x)?)
        })?;
        // Root taken in f64, then rounded back to this vector's precision.
        let root = sum_of_squares.to_f64().unwrap_or_default().sqrt();
        Ok(self.precision.round(root.to_coordinate()?))
    }

    /// Scale to unit magnitude.
    ///
    /// Fails with [`VectorError::ZeroVectorNormalization`] when the magnitude
    /// has no reciprocal.
    pub fn normalize(&self) -> Result<Vector, VectorError> {
        let exponent = self
            .exponent()
            .ok_or(VectorError::ZeroVectorNormalization)?;
        let shifted = self.shifted_coordinates(exponent)?;
        let magnitude = self.root_sum_of_squares(&shifted)?;
        let inverse = Decimal::ONE
            .checked_div(magnitude)
            .ok_or(VectorError::ZeroVectorNormalization)?;
        log::trace!(
            "Normalizing {} with magnitude {}e{}",
            self,
            magnitude,
            exponent
        );
        let inverse = self.precision.round(inverse);
        let coordinates = shifted
            .iter()
            .map(|&x| self.product(inverse, x))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        Ok(self.with_coordinates(coordinates))
    }

    /// Sum of pairwise coordinate products.
    ///
    /// Dimensions are not checked: pairing stops at the shorter operand, unlike
    /// [`Vector::plus`] and [`Vector::minus`].
    pub fn dot_product(&self, v: &Vector) -> Result<Decimal, VectorError> {
        if self.dimension() != v.dimension() {
            log::debug!(
                "Dot product of dimensions {} and {} only pairs the first {} coordinates",
                self.dimension(),
                v.dimension(),
                self.dimension().min(v.dimension())
            );
        }
        self.iter()
            .zip(v.iter())
            .try_fold(Decimal::ZERO, |acc, (&x, &y)| self.sum(acc, self.product(x, y)?))
    }

    /// Angle between two non-zero vectors.
    ///
    /// The cosine of the unit vectors is rounded to 3 places only to decide
    /// whether it snaps to ±1. Radians come from the unrounded cosine and are
    /// returned as computed; degrees are rounded to 3 decimals.
    pub fn angle_with(&self, v: &Vector, unit: AngleUnit) -> Result<f64, VectorError> {
        let cosine = self.normalize()?.dot_product(&v.normalize()?)?;
        let radians = guarded_cosine(cosine).acos();
        match unit {
            AngleUnit::Radians => Ok(radians),
            AngleUnit::Degrees => {
                let degrees = radians * 180.0 / PI;
                Ok((degrees * 1000.0).round() / 1000.0)
            }
        }
    }

    pub fn is_zero(&self) -> bool {
        self.is_zero_within(DEFAULT_TOLERANCE)
    }

    pub fn is_zero_within(&self, tolerance: Decimal) -> bool {
        self.magnitude() < tolerance
    }

    pub fn is_orthogonal_to(&self, v: &Vector) -> bool {
        self.is_orthogonal_to_within(v, DEFAULT_TOLERANCE)
    }

    /// A dot product beyond the decimal range is never within tolerance.
    pub fn is_orthogonal_to_within(&self, v: &Vector, tolerance: Decimal) -> bool {
        matches!(self.dot_product(v), Ok(dot) if dot.abs() < tolerance)
    }

    /// True when either vector is zero or the angle is exactly 0 or π.
    ///
    /// The angle comparison is exact, not tolerance based.
    pub fn is_parallel_to(&self, v: &Vector) -> bool {
        if self.is_zero() || v.is_zero() {
            return true;
        }
        matches!(
            self.angle_with(v, AngleUnit::Radians),
            Ok(angle) if angle == 0.0 || angle == PI
        )
    }

    /// Projection of `self` onto the direction of `basis`.
    pub fn component_parallel_to(&self, basis: &Vector) -> Result<Vector, VectorError> {
        let unit = basis.normalize()?;
        let weight = self.dot_product(&unit)?;
        let coordinates = unit
            .iter()
            .map(|&u| self.product(weight, u))
            .collect::<Result<Vec<Decimal>, VectorError>>()?;
        Ok(self.with_coordinates(coordinates))
    }

    /// What remains of `self` after removing its projection onto `basis`.
    pub fn component_orthogonal_to(&self, basis: &Vector) -> Result<Vector, VectorError> {
        let projection = self.component_parallel_to(basis)?;
        self.minus(&projection)
    }

    pub fn cross_product(&self, v: &Vector) -> Result<Vector, VectorError> {
        if self.dimension() != 3 || v.dimension() != 3 {
            return Err(VectorError::WrongDimensionForCrossProduct {
                left: self.dimension(),
                right: v.dimension(),
            });
        }
        let (x1, y1, z1) = (self[0], self[1], self[2]);
        let (x2, y2, z2) = (v[0], v[1], v[2]);

        Ok(self.with_coordinates(vec![
            self.difference(self.product(y1, z2)?, self.product(y2, z1)?)?,
            self.difference(self.product(x2, z1)?, self.product(x1, z2)?)?,
            self.difference(self.product(x1, y2)?, self.product(x2, y1)?)?,
        ]))
    }

    pub fn area_of_parallelogram(&self, v: &Vector) -> Result<Decimal, VectorError> {
        self.cross_product(v)?.checked_magnitude()
    }

    pub fn area_of_triangle(&self, v: &Vector) -> Result<Decimal, VectorError> {
        let parallelogram = self.area_of_parallelogram(v)?;
        Ok(self.precision.round(parallelogram / Decimal::TWO))
    }
}

// Multiply by 10^exponent. Exponents of non-zero decimals stay within ±28.
fn shift(value: Decimal, exponent: i64) -> Result<Decimal, VectorError> {
    let factor = Decimal::from_i128_with_scale(10i128.pow(exponent.unsigned_abs() as u32), 0);
    let shifted = if exponent >= 0 {
        value.checked_mul(factor)
    } else {
        value.checked_div(factor)
    };
    shifted.ok_or(VectorError::Overflow)
}

// Snap cosines that round to ±1 onto ±1 so acos stays defined and exactly
// parallel inputs land on 0 or π.
fn guarded_cosine(cosine: Decimal) -> f64 {
    let rounded = cosine.round_dp(COSINE_GUARD_DECIMAL_PLACES);
    if rounded.abs() >= Decimal::ONE {
        return if cosine.is_sign_negative() { -1.0 } else { 1.0 };
    }
    cosine.to_f64().unwrap_or_default()
}

impl PartialEq for Vector {
    fn eq(&self, other: &Self) -> bool {
        self.coordinates == other.coordinates
    }
}

impl Eq for Vector {}

impl Index<usize> for Vector {
    type Output = Decimal;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Decimal;
    type IntoIter = Iter<'a, Decimal>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

impl TryFrom<Vec<Decimal>> for Vector {
    type Error = VectorError;

    fn try_from(value: Vec<Decimal>) -> Result<Self, Self::Error> {
        Vector::new(value)
    }
}

impl From<Vector> for Vec<Decimal> {
    fn from(value: Vector) -> Self {
        value.coordinates
    }
}

impl FromStr for Vector {
    type Err = VectorError;

    /// Parse `[1, -2.5, 3e2]`, optionally prefixed with `Vector:`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let text = text
            .strip_prefix("Vector:")
            .map(str::trim_start)
            .unwrap_or(text);
        let body = text
            .strip_prefix('[')
            .and_then(|rest| rest.strip_suffix(']'))
            .ok_or(VectorError::NotIterable)?;
        if body.trim().is_empty() {
            return Err(VectorError::EmptyInput);
        }
        Vector::new(body.split(','))
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: [")?;
        for (idx, value) in self.coordinates.iter().enumerate() {
            let shown = value.round_dp_with_strategy(
                DISPLAY_DECIMAL_PLACES,
                RoundingStrategy::MidpointAwayFromZero,
            );
            write!(f, "{:.*}", DISPLAY_DECIMAL_PLACES as usize, shown)?;
            if idx + 1 != self.coordinates.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
