// ============================================================================
// Numeric Module
// Exact rational arithmetic and decimal rendering
// ============================================================================
//
// This module provides:
// - Fraction: unreduced numerator/denominator pair over BigInt
// - Percent: Fraction rendered as parts-per-hundred
// - NumberFormat/Rounding: rendering configuration
// - sqrt: floor square root for arbitrary-precision integers
// - NumericError: error types for parsing, range and formatting failures
//
// Design principles:
// - No floating-point in arithmetic (only at the f64 parse boundary)
// - Fallible operations return Result, formatting included
// - Fractions are never reduced; equality is cross-multiplied

mod config;
mod errors;
mod format;
mod fraction;
mod percent;
mod scale;
mod sqrt;

pub use config::{NumberFormat, Rounding};
pub use errors::{NumericError, NumericResult};
pub use format::{format_exact, format_fixed, format_significant, strip_trailing_zeros};
pub use fraction::{parse_integer, Fraction};
pub use percent::Percent;
pub use scale::decimal_scale;
pub use sqrt::{sqrt, MAX_SAFE_INTEGER};

pub(crate) use fraction::with_format;
