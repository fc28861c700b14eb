// ============================================================================
// Decimal Scale Cache
// Memoised 10^n powers shared by amounts, prices and formatting
// ============================================================================

use crossbeam_skiplist::SkipMap;
use num_bigint::BigInt;
use std::sync::OnceLock;

/// Process-wide `10^n` table.
///
/// Append-only: an entry is never replaced once stored. Two threads racing on
/// the same key both compute the same value and one insert wins.
fn cache() -> &'static SkipMap<u32, BigInt> {
    static CACHE: OnceLock<SkipMap<u32, BigInt>> = OnceLock::new();
    CACHE.get_or_init(SkipMap::new)
}

/// Returns `10^decimals`.
pub fn decimal_scale(decimals: u32) -> BigInt {
    if let Some(entry) = cache().get(&decimals) {
        return entry.value().clone();
    }

    tracing::trace!(decimals, "populating decimal scale cache");
    let entry = cache().get_or_insert_with(decimals, || pow10(decimals));
    entry.value().clone()
}

/// Uncached `10^exponent`.
pub(crate) fn pow10(exponent: u32) -> BigInt {
    if exponent <= 38 {
        BigInt::from(10u128.pow(exponent))
    } else {
        BigInt::from(10u8).pow(exponent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_small_scales() {
        assert_eq!(decimal_scale(0), BigInt::from(1));
        assert_eq!(decimal_scale(6), BigInt::from(1_000_000));
        assert_eq!(decimal_scale(18), BigInt::from(1_000_000_000_000_000_000u64));
    }

    #[test]
    fn test_large_scale() {
        let expected: BigInt = format!("1{}", "0".repeat(77)).parse().unwrap();
        assert_eq!(decimal_scale(77), expected);
        assert_eq!(pow10(39), BigInt::from(10u128.pow(38)) * 10);
    }

    #[test]
    fn test_concurrent_population() {
        let handles: Vec<_> = (0..8)
            .map(|_| thread::spawn(|| (0..64).map(decimal_scale).collect::<Vec<_>>()))
            .collect();

        let results: Vec<Vec<BigInt>> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        for result in &results[1..] {
            assert_eq!(result, &results[0]);
        }
        assert_eq!(results[0][40], pow10(40));
    }
}
