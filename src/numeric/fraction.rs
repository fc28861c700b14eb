// ============================================================================
// Fraction
// Exact rational number over arbitrary-precision integers
// ============================================================================

use super::config::{NumberFormat, Rounding};
use super::errors::{NumericError, NumericResult};
use super::format::{format_fixed, format_significant, round_quotient};
use super::scale::pow10;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parse a base-10 integer string.
///
/// This is the single boundary conversion from text to the integer primitive.
/// An optional sign is accepted, surrounding whitespace is trimmed.
///
/// # Errors
/// Returns `Parse` for anything that is not a plain decimal integer.
pub fn parse_integer(s: &str) -> NumericResult<BigInt> {
    let trimmed = s.trim();
    let digits = trimmed
        .strip_prefix('-')
        .or_else(|| trimmed.strip_prefix('+'))
        .unwrap_or(trimmed);

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(NumericError::Parse(format!(
            "{:?} is not a base-10 integer",
            s
        )));
    }

    trimmed
        .parse::<BigInt>()
        .map_err(|e| NumericError::Parse(format!("{:?}: {}", s, e)))
}

/// Exact rational number `numerator / denominator`.
///
/// Values are never reduced to lowest terms. Equality and ordering use
/// cross-multiplication, so `1/2` and `2/4` compare equal while keeping
/// their own representation.
///
/// # Example
/// ```
/// use token_fractions::numeric::Fraction;
///
/// let a = Fraction::new(1, 10);
/// let b = Fraction::new(4, 12);
/// let sum = a.add(&b);
/// assert_eq!(sum.numerator().to_string(), "52");
/// assert_eq!(sum.denominator().to_string(), "120");
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fraction {
    numerator: BigInt,
    denominator: BigInt,
}

impl Fraction {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create from a numerator and denominator.
    ///
    /// A zero denominator is accepted here; operations that divide by it
    /// return `DivisionByZero`.
    pub fn new(numerator: impl Into<BigInt>, denominator: impl Into<BigInt>) -> Self {
        Self {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    /// Create `value / 1`.
    pub fn from_integer(value: impl Into<BigInt>) -> Self {
        Self::new(value, BigInt::one())
    }

    /// Create from decimal digit strings.
    ///
    /// # Errors
    /// Returns `Parse` if either string is not a base-10 integer.
    pub fn try_new(numerator: &str, denominator: &str) -> NumericResult<Self> {
        Ok(Self::new(parse_integer(numerator)?, parse_integer(denominator)?))
    }

    /// `0 / 1`
    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    /// `1 / 1`
    pub fn one() -> Self {
        Self::from_integer(1)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        &self.denominator
    }

    /// Split into `(numerator, denominator)`.
    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// Check if value is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }

    /// Integer division of numerator by denominator.
    ///
    /// Truncates toward zero: `-7/2` has quotient `-3`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the denominator is zero.
    pub fn quotient(&self) -> NumericResult<BigInt> {
        if self.denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(&self.numerator / &self.denominator)
    }

    /// Integer nearest the value under `rounding`, applied to the magnitude
    /// so that `-1/2` half-up gives `-1`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the denominator is zero.
    pub fn rounded_quotient(&self, rounding: Rounding) -> NumericResult<BigInt> {
        round_quotient(&self.numerator, &self.denominator, rounding)
    }

    /// What is left after [`quotient`](Self::quotient), over the same
    /// denominator. Carries the sign of the numerator.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the denominator is zero.
    pub fn remainder(&self) -> NumericResult<Fraction> {
        if self.denominator.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Self::new(
            &self.numerator % &self.denominator,
            self.denominator.clone(),
        ))
    }

    /// Swap numerator and denominator.
    pub fn invert(&self) -> Fraction {
        Self::new(self.denominator.clone(), self.numerator.clone())
    }

    /// Plain copy, used to drop a wrapper type before generic math.
    pub fn as_fraction(&self) -> Fraction {
        self.clone()
    }

    // ========================================================================
    // Arithmetic Operations
    // ========================================================================

    pub fn add(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();
        if self.denominator == other.denominator {
            return Self::new(&self.numerator + other.numerator, other.denominator);
        }
        Self::new(
            &self.numerator * &other.denominator + &other.numerator * &self.denominator,
            &self.denominator * other.denominator,
        )
    }

    pub fn subtract(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();
        if self.denominator == other.denominator {
            return Self::new(&self.numerator - other.numerator, other.denominator);
        }
        Self::new(
            &self.numerator * &other.denominator - &other.numerator * &self.denominator,
            &self.denominator * other.denominator,
        )
    }

    pub fn multiply(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();
        Self::new(
            &self.numerator * other.numerator,
            &self.denominator * other.denominator,
        )
    }

    /// `(a·d) / (b·c)`. Dividing by zero yields a zero denominator rather
    /// than an error; the failure surfaces when the result is evaluated.
    pub fn divide(&self, other: impl Into<Fraction>) -> Fraction {
        let other = other.into();
        Self::new(
            &self.numerator * other.denominator,
            &self.denominator * other.numerator,
        )
    }

    // ========================================================================
    // Comparison
    // ========================================================================

    /// Cross-multiplied comparison `a·d` vs `c·b`.
    pub fn compare(&self, other: &Fraction) -> Ordering {
        (&self.numerator * &other.denominator).cmp(&(&other.numerator * &self.denominator))
    }

    pub fn less_than(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Less
    }

    pub fn equal_to(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Equal
    }

    pub fn greater_than(&self, other: impl Into<Fraction>) -> bool {
        self.compare(&other.into()) == Ordering::Greater
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Render with `significant_digits` significant digits.
    ///
    /// Rounding defaults to half-up. Trailing fractional zeros are dropped.
    ///
    /// # Errors
    /// - `PrecisionArgument` if `significant_digits` is zero or the format is invalid
    /// - `DivisionByZero` if the denominator is zero
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        with_format(format, |format| {
            format_significant(
                &self.numerator,
                &self.denominator,
                significant_digits,
                format,
                format.resolve_rounding(rounding, Rounding::RoundHalfUp),
            )
        })
    }

    /// Render with exactly `decimal_places` fractional digits.
    ///
    /// Rounding defaults to half-up.
    ///
    /// # Errors
    /// - `PrecisionArgument` if the format is invalid
    /// - `DivisionByZero` if the denominator is zero
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        with_format(format, |format| {
            format_fixed(
                &self.numerator,
                &self.denominator,
                decimal_places,
                format,
                format.resolve_rounding(rounding, Rounding::RoundHalfUp),
            )
        })
    }
}

/// Run `f` with the caller's format, or the plain default, after validating it.
pub(crate) fn with_format<T>(
    format: Option<&NumberFormat>,
    f: impl FnOnce(&NumberFormat) -> NumericResult<T>,
) -> NumericResult<T> {
    match format {
        Some(format) => {
            format.validate()?;
            f(format)
        }
        None => f(&NumberFormat::default()),
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl Fraction {
    /// Exact conversion: `mantissa / 10^scale`.
    pub fn from_decimal(d: Decimal) -> Self {
        Self::new(d.mantissa(), pow10(d.scale()))
    }

    /// Floor `value` to `decimals` places and convert exactly.
    ///
    /// The float is read through `rust_decimal`, never multiplied directly.
    ///
    /// # Errors
    /// Returns `Parse` for NaN, infinities and values outside Decimal's range.
    pub fn from_f64(value: f64, decimals: u32) -> NumericResult<Self> {
        let d = Decimal::from_f64(value)
            .ok_or_else(|| NumericError::Parse(format!("{} is not representable", value)))?;
        Ok(Self::from_decimal(
            d.round_dp_with_strategy(decimals, RoundingStrategy::ToNegativeInfinity),
        ))
    }

    /// Convert to rust_decimal::Decimal, rounding half-up to the places
    /// Decimal can hold.
    ///
    /// This is intended for API boundaries only.
    ///
    /// # Errors
    /// - `AmountRange` if the integer part exceeds Decimal's 96-bit mantissa
    /// - `DivisionByZero` if the denominator is zero
    pub fn to_decimal(&self) -> NumericResult<Decimal> {
        const MAX_SCALE: u32 = 28;

        let integer_digits = self.quotient()?.abs().to_str_radix(10).len() as u32;
        let places = MAX_SCALE.saturating_sub(integer_digits);
        let rendered = self.to_fixed(places, None, Some(Rounding::RoundHalfUp))?;

        Decimal::from_str(&rendered).map_err(|_| NumericError::AmountRange {
            value: rendered,
            bits: 96,
        })
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

impl FromStr for Fraction {
    type Err = NumericError;

    /// Parse `"n"` or `"n/d"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((numerator, denominator)) => Self::try_new(numerator, denominator),
            None => Ok(Self::from_integer(parse_integer(s)?)),
        }
    }
}

impl From<&Fraction> for Fraction {
    fn from(value: &Fraction) -> Self {
        value.clone()
    }
}

impl From<BigInt> for Fraction {
    fn from(value: BigInt) -> Self {
        Self::from_integer(value)
    }
}

impl From<&BigInt> for Fraction {
    fn from(value: &BigInt) -> Self {
        Self::from_integer(value.clone())
    }
}

macro_rules! impl_from_primitive {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                #[inline]
                fn from(value: $t) -> Self {
                    Self::from_integer(value)
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Neg for Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Self::new(-self.numerator, self.denominator)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction::new(-&self.numerator, self.denominator.clone())
    }
}

// Operators are implemented on references only so `a.add(5)` keeps
// resolving to the inherent method.
macro_rules! impl_ref_op {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl<'a, 'b> $trait<&'b Fraction> for &'a Fraction {
            type Output = Fraction;

            #[inline]
            fn $method(self, rhs: &'b Fraction) -> Self::Output {
                Fraction::$inherent(self, rhs)
            }
        }
    };
}

impl_ref_op!(Add, add, add);
impl_ref_op!(Sub, sub, subtract);
impl_ref_op!(Mul, mul, multiply);
impl_ref_op!(Div, div, divide);

// ============================================================================
// Tests
// ============================================================================
