use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::error::VectorError;

/// Largest number of significant digits a `Decimal` can carry.
pub const MAX_SIGNIFICANT_DIGITS: u32 = 28;

static PROCESS_PRECISION: OnceLock<Precision> = OnceLock::new();

/// Number of significant digits kept after every arithmetic step.
///
/// A process has one precision. It is either set once through
/// [`Precision::init`] before any vector is built, or falls back to the
/// default of 6 digits on first use. Each [`Vector`](crate::math::Vector)
/// captures the precision it was built with, so values never change meaning
/// after construction.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision {
    significant_digits: u32,
}

impl Precision {
    pub fn new(significant_digits: u32) -> Result<Self, VectorError> {
        if significant_digits == 0 || significant_digits > MAX_SIGNIFICANT_DIGITS {
            return Err(VectorError::InvalidPrecision(significant_digits));
        }
        Ok(Self { significant_digits })
    }

    pub fn significant_digits(&self) -> u32 {
        self.significant_digits
    }

    /// Fix the process-wide precision.
    ///
    /// Succeeds when nothing has been fixed yet, or when `precision` equals the
    /// value already in place. Any attempt to change it afterwards fails.
    pub fn init(precision: Precision) -> Result<(), VectorError> {
        let current = *PROCESS_PRECISION.get_or_init(|| {
            log::debug!(
                "Fixing process precision at {} significant digits",
                precision.significant_digits
            );
            precision
        });
        if current != precision {
            return Err(VectorError::PrecisionAlreadySet {
                current: current.significant_digits,
                requested: precision.significant_digits,
            });
        }
        Ok(())
    }

    /// The process-wide precision, fixing the default if none was set.
    pub fn current() -> Precision {
        *PROCESS_PRECISION.get_or_init(|| {
            log::debug!(
                "No precision configured, using the default of {} significant digits",
                Precision::default().significant_digits
            );
            Precision::default()
        })
    }

    /// Round `value` to this many significant digits, midpoint to even.
    pub fn round(&self, value: Decimal) -> Decimal {
        value
            .round_sf(self.significant_digits)
            .unwrap_or(value)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            significant_digits: 6,
        }
    }
}

impl TryFrom<u32> for Precision {
    type Error = VectorError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Precision::new(value)
    }
}

impl From<Precision> for u32 {
    fn from(value: Precision) -> Self {
        value.significant_digits
    }
}

impl FromStr for Precision {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().parse::<u32>().map_err(|_| {
            format!(
                "Unknown precision: {}. Expected a number of significant digits between 1 and {}",
                s, MAX_SIGNIFICANT_DIGITS
            )
        })?;
        Precision::new(digits).map_err(|e| e.to_string())
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} significant digits", self.significant_digits)
    }
}
