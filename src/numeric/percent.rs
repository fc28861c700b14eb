// ============================================================================
// Percent
// Fraction interpreted as parts-per-hundred when rendered
// ============================================================================

use super::config::{NumberFormat, Rounding};
use super::errors::NumericResult;
use super::fraction::Fraction;
use num_bigint::BigInt;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A ratio that renders as a percentage: `1/4` formats as `"25"`.
///
/// Arithmetic delegates to [`Fraction`] and re-wraps the result, so percent
/// math stays typed as percent.
#[derive(Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Percent(Fraction);

impl Percent {
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 5;
    pub const DEFAULT_DECIMAL_PLACES: u32 = 2;

    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self(Fraction::new(numerator, denominator))
    }

    /// `0%`
    pub fn zero() -> Self {
        Self::new(0, 100)
    }

    /// `100%`
    pub fn one_hundred() -> Self {
        Self::new(100, 100)
    }

    /// Basis points: `25` is `0.25%`.
    pub fn from_bps(bps: impl Into<BigInt>) -> Self {
        Self::new(bps, 10_000)
    }

    /// Parse from a float where `1.0` is 100%, floored to `decimals` places.
    ///
    /// # Errors
    /// Returns `Parse` for values that have no decimal representation.
    pub fn from_f64(value: f64, decimals: u32) -> NumericResult<Self> {
        Fraction::from_f64(value, decimals).map(Self)
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.0.numerator()
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.0.denominator()
    }

    pub fn as_fraction(&self) -> Fraction {
        self.0.clone()
    }

    pub fn quotient(&self) -> NumericResult<BigInt> {
        self.0.quotient()
    }

    pub fn remainder(&self) -> NumericResult<Percent> {
        self.0.remainder().map(Self)
    }

    pub fn invert(&self) -> Percent {
        Self(self.0.invert())
    }

    pub fn add(&self, other: impl Into<Fraction>) -> Percent {
        Self(self.0.add(other))
    }

    pub fn subtract(&self, other: impl Into<Fraction>) -> Percent {
        Self(self.0.subtract(other))
    }

    pub fn multiply(&self, other: impl Into<Fraction>) -> Percent {
        Self(self.0.multiply(other))
    }

    pub fn divide(&self, other: impl Into<Fraction>) -> Percent {
        Self(self.0.divide(other))
    }

    pub fn less_than(&self, other: impl Into<Fraction>) -> bool {
        self.0.less_than(other)
    }

    pub fn equal_to(&self, other: impl Into<Fraction>) -> bool {
        self.0.equal_to(other)
    }

    pub fn greater_than(&self, other: impl Into<Fraction>) -> bool {
        self.0.greater_than(other)
    }

    /// Significant digits of the value times 100.
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        self.0
            .multiply(100)
            .to_significant(significant_digits, format, rounding)
    }

    /// Fixed places of the value times 100.
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        self.0.multiply(100).to_fixed(decimal_places, format, rounding)
    }
}

impl From<Fraction> for Percent {
    fn from(value: Fraction) -> Self {
        Self(value)
    }
}

impl From<Percent> for Fraction {
    fn from(value: Percent) -> Self {
        value.0
    }
}

impl From<&Percent> for Fraction {
    fn from(value: &Percent) -> Self {
        value.0.clone()
    }
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_significant(Self::DEFAULT_SIGNIFICANT_DIGITS, None, None) {
            Ok(rendered) => write!(f, "{}%", rendered),
            Err(_) => write!(f, "{} (undefined %)", self.0),
        }
    }
}
