// ============================================================================
// Integer Square Root
// floor(sqrt(n)) for arbitrary-precision integers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Largest integer below which `f64` holds every value exactly (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Computes `floor(sqrt(value))`.
///
/// Values below [`MAX_SAFE_INTEGER`] take the hardware square root and are
/// then corrected by at most one step; larger values run Newton's iteration
/// from `value / 2 + 1`, which decreases monotonically to the floor root.
///
/// # Errors
/// Returns `Domain` for negative input.
pub fn sqrt(value: &BigInt) -> NumericResult<BigInt> {
    if value.is_negative() {
        return Err(NumericError::Domain(format!(
            "square root of negative value {}",
            value
        )));
    }

    if let Some(small) = value.to_u64().filter(|v| *v < MAX_SAFE_INTEGER) {
        return Ok(BigInt::from(sqrt_u64(small)));
    }

    let two = BigInt::from(2u8);
    let mut z = value.clone();
    let mut x: BigInt = value / &two + 1u8;
    let mut iterations = 0u32;
    while x < z {
        z = x.clone();
        x = (value / &x + &x) / &two;
        iterations += 1;
    }

    tracing::trace!(iterations, bits = value.bits(), "newton sqrt converged");
    Ok(z)
}

fn sqrt_u64(value: u64) -> u64 {
    let mut root = (value as f64).sqrt() as u64;
    // the float root can be one off near the top of the safe range
    while root * root > value {
        root -= 1;
    }
    while (root + 1) * (root + 1) <= value {
        root += 1;
    }
    root
}
