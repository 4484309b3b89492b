use std::error::Error;
use std::fmt;

/// Errors raised by vector construction and vector operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    EmptyInput,
    NotIterable,
    InvalidCoordinate(String), // Offending input, as written
    DimensionMismatch { left: usize, right: usize },
    ZeroVectorNormalization,
    WrongDimensionForCrossProduct { left: usize, right: usize },
    IndexOutOfRange { index: usize, dimension: usize },
    InvalidPrecision(u32),
    PrecisionAlreadySet { current: u32, requested: u32 },
    Overflow,
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VectorError::EmptyInput => write!(f, "The coordinates must be nonempty"),
            VectorError::NotIterable => write!(f, "The coordinates must be an iterable"),
            VectorError::InvalidCoordinate(value) => {
                write!(f, "Cannot convert {:?} into a decimal coordinate", value)
            }
            VectorError::DimensionMismatch { left, right } => write!(
                f,
                "The coordinates must be of the same length (got {} and {})",
                left, right
            ),
            VectorError::ZeroVectorNormalization => write!(f, "Cannot normalize zero vector"),
            VectorError::WrongDimensionForCrossProduct { left, right } => write!(
                f,
                "The coordinates must be in three dimension form (got {} and {})",
                left, right
            ),
            VectorError::IndexOutOfRange { index, dimension } => write!(
                f,
                "Index {} is out of range for a vector of dimension {}",
                index, dimension
            ),
            VectorError::InvalidPrecision(digits) => write!(
                f,
                "Precision must be between 1 and 28 significant digits, got {}",
                digits
            ),
            VectorError::PrecisionAlreadySet { current, requested } => write!(
                f,
                "Precision is already fixed at {} significant digits, cannot change it to {}",
                current, requested
            ),
            VectorError::Overflow => write!(f, "Result exceeds the decimal range"),
        }
    }
}

impl Error for VectorError {}
