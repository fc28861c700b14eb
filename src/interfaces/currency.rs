// ============================================================================
// Currency Interface
// Defines the contract amounts and prices rely on from a currency
// ============================================================================

use std::fmt::{Debug, Display};

/// Anything an amount can be denominated in.
///
/// The value engine only needs `decimals` and an identity relation; the
/// symbol is used when rendering amounts for display.
pub trait Currency: Clone + Debug + Display {
    /// Number of decimal places between the raw unit and the display unit
    fn decimals(&self) -> u8;

    /// Identity comparison, not structural equality
    fn equals(&self, other: &Self) -> bool;

    /// Ticker, if the currency has one
    fn symbol(&self) -> Option<&str> {
        None
    }

    /// Human readable name
    fn name(&self) -> Option<&str> {
        None
    }
}
