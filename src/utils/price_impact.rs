// ============================================================================
// Price Impact
// Execution price versus mid price for a trade
// ============================================================================

use crate::domain::{ensure_same_currency, CurrencyAmount, Price};
use crate::interfaces::Currency;
use crate::numeric::{Fraction, NumericError, NumericResult, Percent};

/// Share of the mid-price quote lost by executing at the actual output.
///
/// `(mid.raw * input.raw - output.raw) / (mid.raw * input.raw)`; negative
/// when the trade returns more than the mid price promises.
///
/// # Errors
/// - `CurrencyMismatch` if the amounts are not in the price's currencies
/// - `DivisionByZero` if the mid-price quote is zero
pub fn compute_price_impact<B: Currency, Q: Currency>(
    mid_price: &Price<B, Q>,
    input_amount: &CurrencyAmount<B>,
    output_amount: &CurrencyAmount<Q>,
) -> NumericResult<Percent> {
    ensure_same_currency(mid_price.base_currency(), input_amount.currency())?;
    ensure_same_currency(mid_price.quote_currency(), output_amount.currency())?;

    let exact_quote: Fraction = mid_price.raw().multiply(input_amount.raw());
    if exact_quote.is_zero() {
        return Err(NumericError::DivisionByZero);
    }

    let impact = exact_quote
        .subtract(output_amount.raw())
        .divide(&exact_quote);
    Ok(Percent::from(impact))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AnyCurrency, NativeCurrency, Token};
    use num_bigint::BigInt;

    const ADDRESS_ZERO: &str = "0x0000000000000000000000000000000000000000";
    const ADDRESS_ONE: &str = "0x0000000000000000000000000000000000000001";

    fn t0() -> Token {
        Token::new(1, ADDRESS_ZERO, 18).unwrap()
    }

    fn t1() -> Token {
        Token::new(1, ADDRESS_ONE, 18).unwrap()
    }

    #[test]
    fn test_zero_impact() {
        let ether: AnyCurrency = NativeCurrency::ether(1).into();
        let token: AnyCurrency = t0().into();
        let impact = compute_price_impact(
            &Price::new(ether.clone(), token.clone(), 10, 100),
            &CurrencyAmount::from_raw_amount(ether, 10).unwrap(),
            &CurrencyAmount::from_raw_amount(token, 100).unwrap(),
        )
        .unwrap();
        assert_eq!(impact.numerator(), &BigInt::from(0));
        assert_eq!(impact.denominator(), &BigInt::from(10_000));
    }

    #[test]
    fn test_half_output() {
        let impact = compute_price_impact(
            &Price::new(t0(), t1(), 10, 100),
            &CurrencyAmount::from_raw_amount(t0(), 10).unwrap(),
            &CurrencyAmount::from_raw_amount(t1(), 50).unwrap(),
        )
        .unwrap();
        assert_eq!(impact, Percent::new(5_000, 10_000));
        assert_eq!(impact.to_fixed(2, None, None).unwrap(), "50.00");
    }

    #[test]
    fn test_negative_for_more_output() {
        let impact = compute_price_impact(
            &Price::new(t0(), t1(), 10, 100),
            &CurrencyAmount::from_raw_amount(t0(), 10).unwrap(),
            &CurrencyAmount::from_raw_amount(t1(), 200).unwrap(),
        )
        .unwrap();
        assert_eq!(impact.numerator(), &BigInt::from(-10_000));
        assert_eq!(impact.denominator(), &BigInt::from(10_000));
        assert_eq!(impact.to_significant(5, None, None).unwrap(), "-100");
    }

    #[test]
    fn test_rejects_wrong_currencies() {
        let result = compute_price_impact(
            &Price::new(t0(), t1(), 10, 100),
            &CurrencyAmount::from_raw_amount(t1(), 10).unwrap(),
            &CurrencyAmount::from_raw_amount(t1(), 50).unwrap(),
        );
        assert!(matches!(result, Err(NumericError::CurrencyMismatch { .. })));
    }

    #[test]
    fn test_zero_input() {
        let result = compute_price_impact(
            &Price::new(t0(), t1(), 10, 100),
            &CurrencyAmount::from_raw_amount(t0(), 0).unwrap(),
            &CurrencyAmount::from_raw_amount(t1(), 0).unwrap(),
        );
        assert_eq!(result, Err(NumericError::DivisionByZero));
    }
}
