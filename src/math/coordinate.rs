use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::VectorError;

/// Scalar inputs accepted wherever a coordinate or a scale factor is expected.
///
/// Implemented for `Decimal`, the primitive integers and floats, and numeric
/// strings. Non-finite floats and strings that do not spell a number are
/// rejected with [`VectorError::InvalidCoordinate`].
pub trait ToCoordinate {
    fn to_coordinate(&self) -> Result<Decimal, VectorError>;
}

impl ToCoordinate for Decimal {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        Ok(*self)
    }
}

impl ToCoordinate for f64 {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::InvalidCoordinate(self.to_string()));
        }
        // Shortest round-trip text first, so 8.218 stays 8.218.
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f64(*self))
            .ok_or_else(|| VectorError::InvalidCoordinate(self.to_string()))
    }
}

impl ToCoordinate for f32 {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        if !self.is_finite() {
            return Err(VectorError::InvalidCoordinate(self.to_string()));
        }
        Decimal::from_str(&self.to_string())
            .ok()
            .or_else(|| Decimal::from_f32(*self))
            .ok_or_else(|| VectorError::InvalidCoordinate(self.to_string()))
    }
}

macro_rules! integer_coordinate {
    ($($t:ty),*) => {
        $(
            impl ToCoordinate for $t {
                fn to_coordinate(&self) -> Result<Decimal, VectorError> {
                    Ok(Decimal::from(*self))
                }
            }
        )*
    };
}

integer_coordinate!(i32, i64, u32, u64, usize);

impl ToCoordinate for str {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        let text = self.trim();
        Decimal::from_str(text)
            .or_else(|_| Decimal::from_scientific(text))
            .map_err(|_| VectorError::InvalidCoordinate(self.to_string()))
    }
}

impl ToCoordinate for String {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        self.as_str().to_coordinate()
    }
}

impl<T: ToCoordinate + ?Sized> ToCoordinate for &T {
    fn to_coordinate(&self) -> Result<Decimal, VectorError> {
        (**self).to_coordinate()
    }
}
