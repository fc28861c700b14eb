// ============================================================================
// Token Fractions Library
// Exact rational arithmetic for token amounts, prices and percentages
// ============================================================================

//! # Token Fractions
//!
//! Exact rational arithmetic for on-chain quantities, where floating-point
//! error is unacceptable and amounts can exceed 256-bit integer range.
//!
//! ## Features
//!
//! - **Unreduced fractions** over arbitrary-precision integers
//! - **Currency-checked amounts** with uint256 (or narrower) range guards
//! - **Prices** that compose, invert and quote with decimal correction
//! - **Deterministic formatting** with three rounding modes and grouping
//! - **Integer square root** for AMM curve math
//!
//! Rounding only ever happens when a value is formatted.
//!
//! ## Example
//!
//! ```rust
//! use token_fractions::prelude::*;
//!
//! let weth = weth9(1).unwrap();
//! let usdc = Token::new(1, "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48", 6)?.with_symbol("USDC");
//!
//! // 1 WETH = 2,500 USDC, raw units on both sides
//! let price = Price::new(weth.clone(), usdc, 1_000_000_000_000_000_000u64, 2_500_000_000u64);
//!
//! let input = CurrencyAmount::parse_amount(weth, "0.4", ".", ",")?;
//! let output = price.quote(&input)?;
//! assert_eq!(output.to_exact(None)?, "1000");
//! assert_eq!(price.to_fixed(2, Some(&NumberFormat::display()), None)?, "2,500.00");
//! # Ok::<(), NumericError>(())
//! ```

pub mod domain;
pub mod interfaces;
pub mod numeric;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        weth9, AmountBounds, AnyCurrency, ChainId, CurrencyAmount, NativeCurrency, Price, Token,
    };
    pub use crate::interfaces::Currency;
    pub use crate::numeric::{
        parse_integer, sqrt, Fraction, NumberFormat, NumericError, NumericResult, Percent,
        Rounding,
    };
    pub use crate::utils::compute_price_impact;
}
