// ============================================================================
// Currency Amount
// Exact quantity of a currency, counted in its smallest unit
// ============================================================================

use super::config::AmountBounds;
use super::currency::{ensure_same_currency, AnyCurrency, ChainId, Token};
use crate::interfaces::Currency;
use crate::numeric::{
    decimal_scale, format_exact, format_fixed, format_significant, parse_integer, with_format,
    Fraction, NumberFormat, NumericError, NumericResult, Percent, Rounding,
};
use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;

/// An amount of `C`.
///
/// The amount is an exact fraction of raw units (`raw / 1` for on-chain
/// balances). Its display value is that fraction divided by
/// `10^currency.decimals()`. Every constructor enforces the configured
/// [`AmountBounds`] on the integer quotient.
///
/// # Example
/// ```
/// use token_fractions::domain::{CurrencyAmount, NativeCurrency};
///
/// let amount = CurrencyAmount::from_raw_amount(NativeCurrency::ether(1), 1_500_000_000_000_000_000u64)?;
/// assert_eq!(amount.to_exact(None)?, "1.5");
/// assert_eq!(amount.to_fixed(2, None, None)?, "1.50");
/// # Ok::<(), token_fractions::numeric::NumericError>(())
/// ```
#[derive(Clone, Debug)]
pub struct CurrencyAmount<C: Currency> {
    currency: C,
    fraction: Fraction,
    decimal_scale: BigInt,
    bounds: AmountBounds,
}

impl<C: Currency> CurrencyAmount<C> {
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;

    // ========================================================================
    // Construction
    // ========================================================================

    /// Amount from a raw integer in the currency's smallest unit, bounded by
    /// uint256.
    ///
    /// # Errors
    /// Returns `AmountRange` if `raw` exceeds `2^256 - 1`.
    pub fn from_raw_amount(currency: C, raw: impl Into<BigInt>) -> NumericResult<Self> {
        Self::from_raw_amount_bounded(currency, raw, AmountBounds::default())
    }

    /// # Errors
    /// Returns `AmountRange` if `raw` exceeds `bounds`.
    pub fn from_raw_amount_bounded(
        currency: C,
        raw: impl Into<BigInt>,
        bounds: AmountBounds,
    ) -> NumericResult<Self> {
        Self::from_fraction(currency, Fraction::from_integer(raw), bounds)
    }

    /// Amount from a non-integer count of raw units, e.g. a percentage slice.
    ///
    /// # Errors
    /// - `DivisionByZero` if `denominator` is zero
    /// - `AmountRange` if the quotient exceeds uint256
    pub fn from_fractional_amount(
        currency: C,
        numerator: impl Into<BigInt>,
        denominator: impl Into<BigInt>,
    ) -> NumericResult<Self> {
        Self::from_fraction(
            currency,
            Fraction::new(numerator, denominator),
            AmountBounds::default(),
        )
    }

    pub(crate) fn from_fraction(
        currency: C,
        fraction: Fraction,
        bounds: AmountBounds,
    ) -> NumericResult<Self> {
        if fraction.denominator().is_zero() {
            return Err(NumericError::DivisionByZero);
        }

        let quotient = fraction.quotient()?;
        if !bounds.contains(&quotient) {
            tracing::debug!(%currency, %quotient, bits = bounds.bits(), "amount out of range");
            return Err(NumericError::AmountRange {
                value: quotient.to_string(),
                bits: bounds.bits(),
            });
        }

        let decimal_scale = decimal_scale(u32::from(currency.decimals()));
        Ok(Self {
            currency,
            fraction,
            decimal_scale,
            bounds,
        })
    }

    /// Parse a human readable decimal such as `"1,234.5"` into an amount.
    ///
    /// Group separators are dropped, fractional digits beyond the currency's
    /// decimals are truncated.
    ///
    /// # Errors
    /// - `Parse` for empty or malformed input
    /// - `AmountRange` if the result exceeds uint256
    pub fn parse_amount(
        currency: C,
        ui_amount: &str,
        decimal_separator: &str,
        group_separator: &str,
    ) -> NumericResult<Self> {
        let mut cleaned = ui_amount.trim().to_string();
        if !group_separator.is_empty() {
            cleaned = cleaned.replace(group_separator, "");
        }

        let (integer, fraction) = if decimal_separator.is_empty() {
            (cleaned.as_str(), "")
        } else {
            cleaned
                .split_once(decimal_separator)
                .unwrap_or((cleaned.as_str(), ""))
        };

        let unsigned = integer.trim_start_matches(['-', '+']);
        let malformed = !fraction.bytes().all(|b| b.is_ascii_digit())
            || (unsigned.is_empty() && fraction.is_empty());
        if malformed {
            return Err(NumericError::Parse(format!(
                "{:?} is not a decimal amount",
                ui_amount
            )));
        }

        let decimals = usize::from(currency.decimals());
        let mut digits: String = fraction.chars().take(decimals).collect();
        while digits.len() < decimals {
            digits.push('0');
        }

        let integer = if unsigned.is_empty() {
            format!("{}0", integer)
        } else {
            integer.to_string()
        };
        let raw = parse_integer(&format!("{}{}", integer, digits))?;
        Self::from_raw_amount(currency, raw)
    }

    /// Same currency and bounds, different raw amount.
    ///
    /// # Errors
    /// Returns `AmountRange` if `raw` exceeds the bounds.
    pub fn with_amount(&self, raw: impl Into<BigInt>) -> NumericResult<Self> {
        Self::from_raw_amount_bounded(self.currency.clone(), raw, self.bounds)
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    #[inline]
    pub fn currency(&self) -> &C {
        &self.currency
    }

    #[inline]
    pub fn bounds(&self) -> AmountBounds {
        self.bounds
    }

    #[inline]
    pub fn decimal_scale(&self) -> &BigInt {
        &self.decimal_scale
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.fraction.numerator()
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.fraction.denominator()
    }

    /// Integer amount in smallest units, truncated toward zero.
    pub fn raw(&self) -> BigInt {
        // constructors reject a zero denominator
        self.fraction.numerator() / self.fraction.denominator()
    }

    pub fn quotient(&self) -> BigInt {
        self.raw()
    }

    /// The amount in raw units as a plain fraction.
    pub fn as_fraction(&self) -> Fraction {
        self.fraction.clone()
    }

    /// The amount in display units (`raw / 10^decimals`).
    pub fn value(&self) -> Fraction {
        self.fraction.divide(&self.decimal_scale)
    }

    pub fn is_zero(&self) -> bool {
        self.fraction.is_zero()
    }

    // ========================================================================
    // Arithmetic
    // ========================================================================

    /// # Errors
    /// - `CurrencyMismatch` if `other` is in another currency
    /// - `AmountRange` if the sum exceeds the bounds
    pub fn add(&self, other: &Self) -> NumericResult<Self> {
        ensure_same_currency(&self.currency, &other.currency)?;
        self.rebuild(self.fraction.add(&other.fraction))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn subtract(&self, other: &Self) -> NumericResult<Self> {
        ensure_same_currency(&self.currency, &other.currency)?;
        self.rebuild(self.fraction.subtract(&other.fraction))
    }

    /// Scale by a plain fraction; the result keeps the currency.
    ///
    /// # Errors
    /// Returns `AmountRange` if the product exceeds the bounds.
    pub fn multiply(&self, other: impl Into<Fraction>) -> NumericResult<Self> {
        self.rebuild(self.fraction.multiply(other))
    }

    /// # Errors
    /// - `DivisionByZero` if `other` is zero
    /// - `AmountRange` if the result exceeds the bounds
    pub fn divide(&self, other: impl Into<Fraction>) -> NumericResult<Self> {
        self.rebuild(self.fraction.divide(other))
    }

    /// Integer amount `raw * fraction`, rounded half-up to whole raw units.
    ///
    /// # Errors
    /// - `DivisionByZero` if `fraction` has a zero denominator
    /// - `AmountRange` if the result exceeds the bounds
    pub fn scale(&self, fraction: impl Into<Fraction>) -> NumericResult<Self> {
        let fraction: Fraction = fraction.into();
        let scaled = fraction
            .multiply(self.raw())
            .rounded_quotient(Rounding::RoundHalfUp)?;
        self.with_amount(scaled)
    }

    /// This amount less `percent` of itself, rounded half-up to whole raw
    /// units.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `percent` has a zero denominator.
    pub fn reduce_by(&self, percent: &Percent) -> NumericResult<Self> {
        self.scale(Fraction::one().subtract(percent))
    }

    /// What share of `other` this amount is.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if `other` is in another currency
    /// - `DivisionByZero` if `other` is zero
    pub fn percent_of(&self, other: &Self) -> NumericResult<Percent> {
        ensure_same_currency(&self.currency, &other.currency)?;
        if other.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        Ok(Percent::from(self.fraction.divide(&other.fraction)))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn less_than(&self, other: &Self) -> NumericResult<bool> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.fraction.less_than(&other.fraction))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn greater_than(&self, other: &Self) -> NumericResult<bool> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.fraction.greater_than(&other.fraction))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if `other` is in another currency.
    pub fn equal_to(&self, other: &Self) -> NumericResult<bool> {
        ensure_same_currency(&self.currency, &other.currency)?;
        Ok(self.fraction.equal_to(&other.fraction))
    }

    // Raw-unit comparisons against a plain value, e.g. `amount.greater_than_value(0)`.

    pub fn less_than_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.less_than(other)
    }

    pub fn equal_to_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.equal_to(other)
    }

    pub fn greater_than_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.greater_than(other)
    }

    fn rebuild(&self, fraction: Fraction) -> NumericResult<Self> {
        Self::from_fraction(self.currency.clone(), fraction, self.bounds)
    }

    // ========================================================================
    // Formatting
    // ========================================================================

    /// Significant digits of the display value. Rounds down by default.
    ///
    /// # Errors
    /// Returns `PrecisionArgument` if `significant_digits` is zero or the
    /// format is invalid.
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        with_format(format, |format| {
            format_significant(
                self.fraction.numerator(),
                &(self.fraction.denominator() * &self.decimal_scale),
                significant_digits,
                format,
                format.resolve_rounding(rounding, Rounding::RoundDown),
            )
        })
    }

    /// Fixed places of the display value. Rounds down by default.
    ///
    /// # Errors
    /// Returns `PrecisionArgument` if `decimal_places` exceeds the currency's
    /// decimals or the format is invalid.
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        let decimals = u32::from(self.currency.decimals());
        if decimal_places > decimals {
            tracing::debug!(decimal_places, decimals, currency = %self.currency, "too many decimal places");
            return Err(NumericError::PrecisionArgument(format!(
                "{} places requested, {} has {} decimals",
                decimal_places, self.currency, decimals
            )));
        }

        with_format(format, |format| {
            format_fixed(
                self.fraction.numerator(),
                &(self.fraction.denominator() * &self.decimal_scale),
                decimal_places,
                format,
                format.resolve_rounding(rounding, Rounding::RoundDown),
            )
        })
    }

    /// Every decimal of the raw amount, with trailing zeros dropped.
    ///
    /// # Errors
    /// Returns `PrecisionArgument` for an invalid format.
    pub fn to_exact(&self, format: Option<&NumberFormat>) -> NumericResult<String> {
        with_format(format, |format| {
            format_exact(&self.raw(), u32::from(self.currency.decimals()), format)
        })
    }

    /// Exact value with display grouping, followed by the symbol if any.
    pub fn format_units(&self) -> NumericResult<String> {
        let exact = self.to_exact(Some(&NumberFormat::display()))?;
        Ok(match self.currency.symbol() {
            Some(symbol) => format!("{} {}", exact, symbol),
            None => exact,
        })
    }
}

impl CurrencyAmount<AnyCurrency> {
    /// The same amount denominated in the wrapped token on `chain_id`.
    ///
    /// # Errors
    /// - `ChainMismatch` if the currency lives on another chain
    /// - `UnsupportedChain` if a native currency has no known wrapped token
    pub fn wrapped(&self, chain_id: ChainId) -> NumericResult<CurrencyAmount<Token>> {
        let token = self.currency.wrapped(chain_id)?;
        CurrencyAmount::from_fraction(token, self.fraction.clone(), self.bounds)
    }
}

impl<C: Currency> PartialEq for CurrencyAmount<C> {
    fn eq(&self, other: &Self) -> bool {
        self.currency.equals(&other.currency) && self.fraction == other.fraction
    }
}

impl<C: Currency> From<&CurrencyAmount<C>> for Fraction {
    fn from(amount: &CurrencyAmount<C>) -> Self {
        amount.as_fraction()
    }
}

impl<C: Currency> fmt::Display for CurrencyAmount<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_exact(None) {
            Ok(exact) => write!(f, "{} {}", exact, self.currency),
            Err(_) => write!(f, "{} {}", self.fraction, self.currency),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NativeCurrency;
    use num_traits::One;

    const ADDRESS_ONE: &str = "0x0000000000000000000000000000000000000001";
    const ADDRESS_TWO: &str = "0x0000000000000000000000000000000000000002";

    fn token(address: &str, decimals: u8) -> Token {
        Token::new(1, address, decimals).unwrap()
    }

    fn max_uint256() -> BigInt {
        (BigInt::one() << 256u32) - 1
    }

    #[test]
    fn test_constructor() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 100).unwrap();
        assert_eq!(amount.raw(), BigInt::from(100));
        assert_eq!(amount.decimal_scale(), &BigInt::from(10u64.pow(18)));

        let ether = CurrencyAmount::from_raw_amount(NativeCurrency::ether(1), 100).unwrap();
        assert_eq!(ether.quotient(), BigInt::from(100));
        assert_eq!(ether.currency().symbol(), Some("ETH"));
    }

    #[test]
    fn test_fractional_amount() {
        let amount = CurrencyAmount::from_fractional_amount(token(ADDRESS_ONE, 18), 100, 3).unwrap();
        assert_eq!(amount.raw(), BigInt::from(33));
        assert_eq!(amount.numerator(), &BigInt::from(100));
        assert_eq!(amount.denominator(), &BigInt::from(3));

        assert_eq!(
            CurrencyAmount::from_fractional_amount(token(ADDRESS_ONE, 18), 1, 0),
            Err(NumericError::DivisionByZero)
        );
    }

    #[test]
    fn test_multiply_by_percent() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 100)
            .unwrap()
            .multiply(Percent::new(15, 100))
            .unwrap();
        assert_eq!(amount.raw(), BigInt::from(15));
    }

    #[test]
    fn test_max_uint256_boundary() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), max_uint256()).unwrap();
        assert_eq!(amount.raw(), max_uint256());

        let overflow = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), max_uint256() + 1);
        assert!(matches!(overflow, Err(NumericError::AmountRange { bits: 256, .. })));

        // quotient is what counts
        let fractional = CurrencyAmount::from_fractional_amount(
            token(ADDRESS_ONE, 18),
            max_uint256() * 2 + 1,
            2,
        )
        .unwrap();
        assert_eq!(fractional.raw(), max_uint256());

        assert!(CurrencyAmount::from_fractional_amount(
            token(ADDRESS_ONE, 18),
            (max_uint256() + 2) * 2,
            2,
        )
        .is_err());
    }

    #[test]
    fn test_narrow_bounds() {
        let currency = token(ADDRESS_ONE, 6);
        let amount =
            CurrencyAmount::from_raw_amount_bounded(currency.clone(), u64::MAX, AmountBounds::U64).unwrap();
        assert!(matches!(
            amount.add(&amount),
            Err(NumericError::AmountRange { bits: 64, .. })
        ));
        assert!(CurrencyAmount::from_raw_amount(currency, u64::MAX)
            .unwrap()
            .add(&CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 6), u64::MAX).unwrap())
            .is_ok());
    }

    #[test]
    fn test_add_and_subtract() {
        let a = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 150).unwrap();
        let b = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 50).unwrap();
        assert_eq!(a.add(&b).unwrap().raw(), BigInt::from(200));
        assert_eq!(a.subtract(&b).unwrap().raw(), BigInt::from(100));
        assert_eq!(b.subtract(&a).unwrap().raw(), BigInt::from(-100));
    }

    #[test]
    fn test_currency_mismatch() {
        let a = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 1).unwrap();
        let b = CurrencyAmount::from_raw_amount(token(ADDRESS_TWO, 18), 1).unwrap();
        assert!(matches!(a.add(&b), Err(NumericError::CurrencyMismatch { .. })));
        assert!(matches!(a.subtract(&b), Err(NumericError::CurrencyMismatch { .. })));
        assert!(matches!(a.percent_of(&b), Err(NumericError::CurrencyMismatch { .. })));
        assert!(a.less_than(&b).is_err());
    }

    #[test]
    fn test_comparison() {
        let a = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 1).unwrap();
        let b = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 2).unwrap();
        assert!(a.less_than(&b).unwrap());
        assert!(b.greater_than(&a).unwrap());
        assert_ne!(a, b);
        assert_eq!(a, b.with_amount(1).unwrap());

        let halves = CurrencyAmount::from_fractional_amount(token(ADDRESS_ONE, 18), 4, 2).unwrap();
        assert_eq!(halves, b);
    }

    #[test]
    fn test_value_comparison() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 6), 5).unwrap();
        assert!(amount.greater_than_value(0));
        assert!(!amount.equal_to_value(0));
        assert!(amount.less_than_value(Fraction::new(11, 2)));
        assert!(amount.with_amount(0).unwrap().equal_to_value(0));

        let same = CurrencyAmount::from_fractional_amount(token(ADDRESS_ONE, 6), 10, 2).unwrap();
        assert!(amount.equal_to(&same).unwrap());
        assert!(!amount.equal_to(&same.with_amount(6).unwrap()).unwrap());

        let other = CurrencyAmount::from_raw_amount(token(ADDRESS_TWO, 6), 5).unwrap();
        assert!(matches!(amount.equal_to(&other), Err(NumericError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_scale_rounds_half_up() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 6), 1_000).unwrap();
        assert_eq!(amount.scale(Fraction::new(2, 3)).unwrap().raw(), BigInt::from(667));

        let one = amount.with_amount(1).unwrap();
        assert_eq!(one.scale(Fraction::new(1, 2)).unwrap().raw(), BigInt::from(1));
        assert_eq!(one.scale(Fraction::new(1, 3)).unwrap().raw(), BigInt::from(0));

        // 999 less 0.5% is 994.005
        let reduced = amount.with_amount(999).unwrap().reduce_by(&Percent::from_bps(50)).unwrap();
        assert_eq!(reduced.raw(), BigInt::from(994));
        // 7 less 50% is 3.5
        let halved = amount.with_amount(7).unwrap().reduce_by(&Percent::new(50, 100)).unwrap();
        assert_eq!(halved.raw(), BigInt::from(4));
    }

    #[test]
    fn test_scale_and_reduce() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 6), 1_000).unwrap();
        assert_eq!(amount.scale(Fraction::new(1, 3)).unwrap().raw(), BigInt::from(333));

        let reduced = amount.reduce_by(&Percent::from_bps(50)).unwrap();
        assert_eq!(reduced.raw(), BigInt::from(995));
        assert_eq!(reduced.denominator(), &BigInt::from(1));

        let share = reduced.percent_of(&amount).unwrap();
        assert_eq!(share.to_fixed(2, None, None).unwrap(), "99.50");

        let zero = amount.with_amount(0).unwrap();
        assert_eq!(amount.percent_of(&zero), Err(NumericError::DivisionByZero));
    }

    #[test]
    fn test_to_significant() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 0), 123_456).unwrap();
        assert_eq!(amount.to_significant(4, None, None).unwrap(), "123400");

        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 6), 1_999_999).unwrap();
        assert_eq!(amount.to_significant(3, None, None).unwrap(), "1.99");
        assert_eq!(
            amount
                .to_significant(3, None, Some(Rounding::RoundHalfUp))
                .unwrap(),
            "2"
        );

        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 1_234_567_891u64).unwrap();
        assert_eq!(
            amount
                .to_significant(CurrencyAmount::<Token>::DEFAULT_SIGNIFICANT_DIGITS, None, None)
                .unwrap(),
            "0.00000000123456"
        );
    }

    #[test]
    fn test_to_fixed() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 0), 1000).unwrap();
        assert_eq!(amount.to_fixed(0, None, None).unwrap(), "1000");
        assert!(matches!(
            amount.to_fixed(3, None, None),
            Err(NumericError::PrecisionArgument(_))
        ));

        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 500).unwrap();
        assert_eq!(amount.to_fixed(18, None, None).unwrap(), "0.000000000000000500");
    }

    #[test]
    fn test_format_rounding_precedence() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 2), 1_999).unwrap();
        let up = NumberFormat::default().with_rounding(Rounding::RoundUp);
        assert_eq!(amount.to_fixed(1, None, None).unwrap(), "19.9");
        assert_eq!(amount.to_fixed(1, Some(&up), None).unwrap(), "20.0");
        assert_eq!(
            amount.to_fixed(1, Some(&up), Some(Rounding::RoundDown)).unwrap(),
            "19.9"
        );
    }

    #[test]
    fn test_to_exact() {
        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 0), 1000).unwrap();
        assert_eq!(amount.to_exact(None).unwrap(), "1000");

        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 1000).unwrap();
        assert_eq!(amount.to_exact(None).unwrap(), "0.000000000000001");

        let amount = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 18), 1_234_567_000_000_000_000_000u128).unwrap();
        assert_eq!(amount.to_exact(None).unwrap(), "1234.567");
        assert_eq!(
            amount.to_exact(Some(&NumberFormat::display())).unwrap(),
            "1,234.567"
        );
    }

    #[test]
    fn test_format_units() {
        let usdc = token(ADDRESS_ONE, 6).with_symbol("USDC");
        let amount = CurrencyAmount::from_raw_amount(usdc, 1_234_500_000u64).unwrap();
        assert_eq!(amount.format_units().unwrap(), "1,234.5 USDC");
        assert_eq!(amount.to_string(), "1234.5 USDC");

        let anonymous = CurrencyAmount::from_raw_amount(token(ADDRESS_ONE, 0), 7).unwrap();
        assert_eq!(anonymous.format_units().unwrap(), "7");
    }

    #[test]
    fn test_parse_amount() {
        let usdc = token(ADDRESS_ONE, 6);
        let parsed = CurrencyAmount::parse_amount(usdc.clone(), "1,234.5", ".", ",").unwrap();
        assert_eq!(parsed.raw(), BigInt::from(1_234_500_000u64));

        let truncated = CurrencyAmount::parse_amount(usdc.clone(), "0.12345678", ".", "").unwrap();
        assert_eq!(truncated.raw(), BigInt::from(123_456));

        let european = CurrencyAmount::parse_amount(usdc.clone(), "1.000,25", ",", ".").unwrap();
        assert_eq!(european.raw(), BigInt::from(1_000_250_000u64));

        let bare = CurrencyAmount::parse_amount(usdc.clone(), ".5", ".", "").unwrap();
        assert_eq!(bare.raw(), BigInt::from(500_000));

        let whole = CurrencyAmount::parse_amount(usdc.clone(), "42", ".", "").unwrap();
        assert_eq!(whole.raw(), BigInt::from(42_000_000));

        assert!(CurrencyAmount::parse_amount(usdc.clone(), "", ".", "").is_err());
        assert!(CurrencyAmount::parse_amount(usdc.clone(), "1.2.3", ".", "").is_err());
        assert!(CurrencyAmount::parse_amount(usdc, "abc", ".", "").is_err());
    }

    #[test]
    fn test_wrapped_amount() {
        let ether: AnyCurrency = NativeCurrency::ether(1).into();
        let amount = CurrencyAmount::from_raw_amount(ether, 10).unwrap();
        let wrapped = amount.wrapped(1).unwrap();
        assert_eq!(wrapped.raw(), BigInt::from(10));
        assert_eq!(wrapped.currency().symbol(), Some("WETH"));

        let any_token: AnyCurrency = token(ADDRESS_ONE, 18).into();
        let amount = CurrencyAmount::from_raw_amount(any_token, 10).unwrap();
        assert!(amount.wrapped(1).unwrap().currency().equals(&token(ADDRESS_ONE, 18)));
        assert!(matches!(
            amount.wrapped(3),
            Err(NumericError::ChainMismatch { .. })
        ));
    }
}
