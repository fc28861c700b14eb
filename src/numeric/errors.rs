// ============================================================================
// Numeric Errors
// Error types for exact fraction arithmetic and formatting
// ============================================================================

use thiserror::Error;

/// Errors that can occur while constructing, combining or formatting values.
///
/// Every variant is a precondition violation on caller-supplied data. None of
/// them are transient, so nothing in this crate retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumericError {
    /// Input could not be interpreted as an integer or fraction
    #[error("parse error: {0}")]
    Parse(String),

    /// Amount quotient falls outside the supported unsigned width
    #[error("amount out of range: {value} exceeds u{bits} maximum")]
    AmountRange { value: String, bits: u32 },

    /// Operands are denominated in different currencies
    #[error("currency mismatch: expected {expected}, found {found}")]
    CurrencyMismatch { expected: String, found: String },

    /// Invalid digits/places argument to a formatting method
    #[error("invalid precision argument: {0}")]
    PrecisionArgument(String),

    /// Input outside the mathematical domain of the operation
    #[error("domain error: {0}")]
    Domain(String),

    /// Attempted division by a zero denominator
    #[error("division by zero")]
    DivisionByZero,

    /// Currency lives on a different chain than requested
    #[error("chain mismatch: expected chain {expected}, found chain {found}")]
    ChainMismatch { expected: u64, found: u64 },

    /// No wrapped-native token is known for the chain
    #[error("unsupported chain: {0}")]
    UnsupportedChain(u64),
}

/// Result type alias for numeric operations
pub type NumericResult<T> = Result<T, NumericError>;
