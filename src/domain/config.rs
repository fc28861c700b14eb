// ============================================================================
// Amount Configuration
// Range bounds enforced when amounts are constructed
// ============================================================================

use num_bigint::BigInt;
use num_traits::One;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Amount Bounds
// ============================================================================

/// Largest raw amount an amount may hold, as an unsigned integer width.
///
/// The check applies to the integer quotient of the amount, so fractional
/// amounts just below the bound are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AmountBounds {
    /// Native 64-bit balances
    U64,
    /// 128-bit balances (e.g. Soroban/Cosmos style tokens)
    U128,
    /// EVM uint256, the default
    #[default]
    U256,
}

impl AmountBounds {
    pub fn bits(&self) -> u32 {
        match self {
            AmountBounds::U64 => 64,
            AmountBounds::U128 => 128,
            AmountBounds::U256 => 256,
        }
    }

    /// `2^bits - 1`
    pub fn max_value(&self) -> BigInt {
        (BigInt::one() << self.bits()) - 1
    }

    /// True when `raw` does not exceed the bound.
    pub fn contains(&self, raw: &BigInt) -> bool {
        raw <= &self.max_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_values() {
        assert_eq!(AmountBounds::U64.max_value(), BigInt::from(u64::MAX));
        assert_eq!(AmountBounds::U128.max_value(), BigInt::from(u128::MAX));

        let max_uint256: BigInt =
            "115792089237316195423570985008687907853269984665640564039457584007913129639935"
                .parse()
                .unwrap();
        assert_eq!(AmountBounds::default().max_value(), max_uint256);
    }

    #[test]
    fn test_contains() {
        let bound = AmountBounds::U64;
        assert!(bound.contains(&BigInt::from(u64::MAX)));
        assert!(!bound.contains(&(BigInt::from(u64::MAX) + 1)));
        assert!(bound.contains(&BigInt::from(-1)));
    }
}
