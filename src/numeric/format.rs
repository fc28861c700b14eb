// ============================================================================
// Decimal Rendering
// Exact ratio -> decimal string conversion with a single rounding step
// ============================================================================
//
// Every routine here works on the magnitudes of numerator and denominator
// and re-applies the sign last, so rounding modes are symmetric around zero.
// The only rounding performed anywhere in the crate happens in `round_div`.

use super::config::{NumberFormat, Rounding};
use super::errors::{NumericError, NumericResult};
use super::scale::pow10;
use num_bigint::{BigInt, BigUint, Sign};
use num_integer::Integer;
use num_traits::Zero;

/// Integer division of magnitudes with the requested rounding.
fn round_div(numerator: &BigUint, denominator: &BigUint, rounding: Rounding) -> BigUint {
    let (quotient, remainder) = numerator.div_rem(denominator);
    if remainder.is_zero() {
        return quotient;
    }

    match rounding {
        Rounding::RoundDown => quotient,
        Rounding::RoundUp => quotient + 1u32,
        Rounding::RoundHalfUp => {
            if (remainder << 1u32) >= *denominator {
                quotient + 1u32
            } else {
                quotient
            }
        }
    }
}

/// Splits numerator/denominator into (is_negative, |n|, |d|).
fn magnitudes(numerator: &BigInt, denominator: &BigInt) -> NumericResult<(bool, BigUint, BigUint)> {
    if denominator.is_zero() {
        return Err(NumericError::DivisionByZero);
    }
    let negative = matches!(
        (numerator.sign(), denominator.sign()),
        (Sign::Minus, Sign::Plus) | (Sign::Plus, Sign::Minus)
    );
    Ok((negative, numerator.magnitude().clone(), denominator.magnitude().clone()))
}

/// `numerator / denominator` as an integer, rounded once on the magnitude.
///
/// # Errors
/// Returns `DivisionByZero` if the denominator is zero.
pub(crate) fn round_quotient(
    numerator: &BigInt,
    denominator: &BigInt,
    rounding: Rounding,
) -> NumericResult<BigInt> {
    let (negative, n, d) = magnitudes(numerator, denominator)?;
    let sign = if negative { Sign::Minus } else { Sign::Plus };
    Ok(BigInt::from_biguint(sign, round_div(&n, &d, rounding)))
}

/// Splits the digits of `scaled` (a value times `10^places`) into integer and
/// fractional strings.
fn split_digits(scaled: &BigUint, places: usize) -> (String, String) {
    let mut digits = scaled.to_str_radix(10);
    if digits.len() <= places {
        digits = format!("{:0>width$}", digits, width = places + 1);
    }
    let fraction = digits.split_off(digits.len() - places);
    (digits, fraction)
}

/// Inserts the group separator into a run of integer digits.
fn group_integer(digits: &str, format: &NumberFormat) -> String {
    let size = format.group_size;
    if format.group_separator.is_empty() || size == 0 || digits.len() <= size {
        return digits.to_string();
    }

    let first = match digits.len() % size {
        0 => size,
        n => n,
    };
    let mut grouped = String::with_capacity(digits.len() + digits.len() / size * format.group_separator.len());
    grouped.push_str(&digits[..first]);
    let mut i = first;
    while i < digits.len() {
        grouped.push_str(&format.group_separator);
        grouped.push_str(&digits[i..i + size]);
        i += size;
    }
    grouped
}

fn render(negative: bool, integer: &str, fraction: &str, format: &NumberFormat) -> String {
    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_integer(integer, format));
    if !fraction.is_empty() {
        out.push_str(&format.decimal_separator);
        out.push_str(fraction);
    }
    out
}

/// Renders `numerator / denominator` with exactly `places` fractional digits.
///
/// # Errors
/// Returns `DivisionByZero` if the denominator is zero.
pub fn format_fixed(
    numerator: &BigInt,
    denominator: &BigInt,
    places: u32,
    format: &NumberFormat,
    rounding: Rounding,
) -> NumericResult<String> {
    let (negative, n, d) = magnitudes(numerator, denominator)?;

    let scaled = round_div(&(n * pow10(places).magnitude()), &d, rounding);
    let (integer, fraction) = split_digits(&scaled, places as usize);

    Ok(render(negative && !scaled.is_zero(), &integer, &fraction, format))
}

/// Renders `numerator / denominator` rounded to `digits` significant digits.
///
/// Trailing fractional zeros are dropped, integers longer than `digits` are
/// zero-filled.
///
/// # Errors
/// - `PrecisionArgument` if `digits` is zero
/// - `DivisionByZero` if the denominator is zero
pub fn format_significant(
    numerator: &BigInt,
    denominator: &BigInt,
    digits: u32,
    format: &NumberFormat,
    rounding: Rounding,
) -> NumericResult<String> {
    if digits == 0 {
        return Err(NumericError::PrecisionArgument(
            "0 is not positive.".to_string(),
        ));
    }

    let (negative, n, d) = magnitudes(numerator, denominator)?;
    if n.is_zero() {
        return Ok("0".to_string());
    }

    // 10^exponent <= n/d < 10^(exponent + 1)
    let mut exponent = n.to_str_radix(10).len() as i64 - d.to_str_radix(10).len() as i64;
    let at_least_power = if exponent >= 0 {
        n >= &d * pow10(exponent as u32).magnitude()
    } else {
        &n * pow10((-exponent) as u32).magnitude() >= d
    };
    if !at_least_power {
        exponent -= 1;
    }

    let shift = digits as i64 - 1 - exponent;
    let mantissa = if shift >= 0 {
        round_div(&(n * pow10(shift as u32).magnitude()), &d, rounding)
    } else {
        round_div(&n, &(d * pow10((-shift) as u32).magnitude()), rounding)
    };

    let (integer, fraction) = if shift <= 0 {
        let zeros = "0".repeat((-shift) as usize);
        (format!("{}{}", mantissa.to_str_radix(10), zeros), String::new())
    } else {
        let (integer, fraction) = split_digits(&mantissa, shift as usize);
        (integer, fraction.trim_end_matches('0').to_string())
    };

    Ok(render(negative, &integer, &fraction, format))
}

/// Renders `numerator / 10^decimals` without rounding and without trailing
/// fractional zeros.
pub fn format_exact(numerator: &BigInt, decimals: u32, format: &NumberFormat) -> NumericResult<String> {
    let plain = format_fixed(
        numerator,
        &pow10(decimals),
        decimals,
        &NumberFormat::default(),
        Rounding::RoundDown,
    )?;
    let stripped = strip_trailing_zeros(&plain);

    let (negative, body) = match stripped.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, stripped.as_str()),
    };
    let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));
    Ok(render(negative, integer, fraction, format))
}

/// Drops trailing zeros after the `.` of a plain decimal string, and the `.`
/// itself when nothing remains.
///
/// Strings with more than one `.` are returned unchanged.
pub fn strip_trailing_zeros(num: &str) -> String {
    let mut parts = num.split('.');
    let (head, tail) = match (parts.next(), parts.next(), parts.next()) {
        (Some(head), Some(tail), None) if !head.is_empty() => (head, tail),
        (Some(_), None, None) => return num.to_string(),
        _ => {
            tracing::debug!(num, "invalid number passed to strip_trailing_zeros");
            return num.to_string();
        }
    };

    let tail = tail.trim_end_matches('0');
    if tail.is_empty() {
        head.to_string()
    } else {
        format!("{}.{}", head, tail)
    }
}
