// ============================================================================
// Price
// Exchange rate between a base and a quote currency
// ============================================================================

use super::currency::ensure_same_currency;
use super::currency_amount::CurrencyAmount;
use crate::interfaces::Currency;
use crate::numeric::{decimal_scale, Fraction, NumberFormat, NumericResult, Rounding};
use num_bigint::BigInt;
use std::fmt;

/// Quote units per base unit.
///
/// The stored fraction is in raw units (`quote_raw / base_raw`); `scalar`
/// converts it to display units when formatting.
///
/// # Example
/// ```
/// use token_fractions::domain::{Price, Token};
///
/// let btc = Token::new(1, "0x0000000000000000000000000000000000000001", 8)?;
/// let usd = Token::new(1, "0x0000000000000000000000000000000000000002", 6)?;
///
/// // denominator (base raw) comes before numerator (quote raw)
/// let price = Price::new(btc, usd, 1_00000000, 30_000_000000u64);
/// assert_eq!(price.to_fixed(0, None, None)?, "30000");
/// # Ok::<(), token_fractions::numeric::NumericError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Price<B: Currency, Q: Currency> {
    base_currency: B,
    quote_currency: Q,
    fraction: Fraction,
    scalar: Fraction,
}

impl<B: Currency, Q: Currency> Price<B, Q> {
    pub const DEFAULT_SIGNIFICANT_DIGITS: u32 = 6;
    pub const DEFAULT_DECIMAL_PLACES: u32 = 4;

    /// `denominator` is the base-side raw amount, `numerator` the quote-side.
    pub fn new(
        base_currency: B,
        quote_currency: Q,
        denominator: impl Into<BigInt>,
        numerator: impl Into<BigInt>,
    ) -> Self {
        Self::from_fraction(
            base_currency,
            quote_currency,
            Fraction::new(numerator, denominator),
        )
    }

    /// Price implied by trading `base_amount` for `quote_amount`.
    pub fn from_amounts(base_amount: &CurrencyAmount<B>, quote_amount: &CurrencyAmount<Q>) -> Self {
        let ratio = quote_amount.as_fraction().divide(base_amount);
        Self::from_fraction(
            base_amount.currency().clone(),
            quote_amount.currency().clone(),
            ratio,
        )
    }

    fn from_fraction(base_currency: B, quote_currency: Q, fraction: Fraction) -> Self {
        let scalar = Fraction::new(
            decimal_scale(u32::from(base_currency.decimals())),
            decimal_scale(u32::from(quote_currency.decimals())),
        );
        Self {
            base_currency,
            quote_currency,
            fraction,
            scalar,
        }
    }

    #[inline]
    pub fn base_currency(&self) -> &B {
        &self.base_currency
    }

    #[inline]
    pub fn quote_currency(&self) -> &Q {
        &self.quote_currency
    }

    #[inline]
    pub fn numerator(&self) -> &BigInt {
        self.fraction.numerator()
    }

    #[inline]
    pub fn denominator(&self) -> &BigInt {
        self.fraction.denominator()
    }

    /// `10^base_decimals / 10^quote_decimals`
    #[inline]
    pub fn scalar(&self) -> &Fraction {
        &self.scalar
    }

    /// Raw-unit ratio, without decimal adjustment.
    pub fn raw(&self) -> Fraction {
        self.fraction.clone()
    }

    /// Display-unit ratio.
    pub fn adjusted(&self) -> Fraction {
        self.fraction.multiply(&self.scalar)
    }

    pub fn invert(&self) -> Price<Q, B> {
        Price::from_fraction(
            self.quote_currency.clone(),
            self.base_currency.clone(),
            self.fraction.invert(),
        )
    }

    /// Chain `B -> Q` with `Q -> R` into `B -> R`.
    ///
    /// # Errors
    /// Returns `CurrencyMismatch` unless `other`'s base is this price's quote.
    pub fn multiply<R: Currency>(&self, other: &Price<Q, R>) -> NumericResult<Price<B, R>> {
        ensure_same_currency(&self.quote_currency, &other.base_currency)?;
        Ok(Price::from_fraction(
            self.base_currency.clone(),
            other.quote_currency.clone(),
            self.fraction.multiply(&other.fraction),
        ))
    }

    /// Quote-currency amount for `amount` of the base currency.
    ///
    /// The result is exact; its `raw()` drops any fractional raw unit.
    ///
    /// # Errors
    /// - `CurrencyMismatch` if `amount` is not in the base currency
    /// - `AmountRange` if the quote exceeds the amount's bounds
    pub fn quote(&self, amount: &CurrencyAmount<B>) -> NumericResult<CurrencyAmount<Q>> {
        ensure_same_currency(&self.base_currency, amount.currency())?;
        CurrencyAmount::from_fraction(
            self.quote_currency.clone(),
            self.fraction.multiply(amount),
            amount.bounds(),
        )
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the prices are for different pairs.
    pub fn less_than(&self, other: &Self) -> NumericResult<bool> {
        self.ensure_same_pair(other)?;
        Ok(self.fraction.less_than(&other.fraction))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the prices are for different pairs.
    pub fn greater_than(&self, other: &Self) -> NumericResult<bool> {
        self.ensure_same_pair(other)?;
        Ok(self.fraction.greater_than(&other.fraction))
    }

    /// # Errors
    /// Returns `CurrencyMismatch` if the prices are for different pairs.
    pub fn equal_to(&self, other: &Self) -> NumericResult<bool> {
        self.ensure_same_pair(other)?;
        Ok(self.fraction.equal_to(&other.fraction))
    }

    // Raw-unit comparisons against a plain ratio.

    pub fn less_than_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.less_than(other)
    }

    pub fn equal_to_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.equal_to(other)
    }

    pub fn greater_than_value(&self, other: impl Into<Fraction>) -> bool {
        self.fraction.greater_than(other)
    }

    fn ensure_same_pair(&self, other: &Self) -> NumericResult<()> {
        ensure_same_currency(&self.base_currency, &other.base_currency)?;
        ensure_same_currency(&self.quote_currency, &other.quote_currency)
    }

    /// Significant digits of the adjusted price. Rounds half-up by default.
    ///
    /// # Errors
    /// - `PrecisionArgument` if `significant_digits` is zero
    /// - `DivisionByZero` if the price has a zero denominator
    pub fn to_significant(
        &self,
        significant_digits: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        self.adjusted()
            .to_significant(significant_digits, format, rounding)
    }

    /// Fixed places of the adjusted price. Rounds half-up by default.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if the price has a zero denominator.
    pub fn to_fixed(
        &self,
        decimal_places: u32,
        format: Option<&NumberFormat>,
        rounding: Option<Rounding>,
    ) -> NumericResult<String> {
        self.adjusted().to_fixed(decimal_places, format, rounding)
    }
}

impl<B: Currency, Q: Currency> PartialEq for Price<B, Q> {
    fn eq(&self, other: &Self) -> bool {
        self.base_currency.equals(&other.base_currency)
            && self.quote_currency.equals(&other.quote_currency)
            && self.fraction == other.fraction
    }
}

impl<B: Currency, Q: Currency> fmt::Display for Price<B, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_significant(Self::DEFAULT_SIGNIFICANT_DIGITS, None, None) {
            Ok(rendered) => write!(f, "{} {}/{}", rendered, self.quote_currency, self.base_currency),
            Err(_) => write!(f, "{} {}/{}", self.fraction, self.quote_currency, self.base_currency),
        }
    }
}
