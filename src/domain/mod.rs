// ============================================================================
// Domain Models Module
// Currencies and the currency-anchored value objects
// ============================================================================

pub mod config;
pub mod currency;
pub mod currency_amount;
pub mod price;
pub mod weth9;

pub use config::AmountBounds;
pub use currency::{AnyCurrency, ChainId, NativeCurrency, Token};
pub use currency_amount::CurrencyAmount;
pub use price::Price;
pub use weth9::{supported_chains, weth9};

pub(crate) use currency::ensure_same_currency;
