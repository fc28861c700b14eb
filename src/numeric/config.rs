// ============================================================================
// Number Format Configuration
// Separators, grouping and rounding policy for display strings
// ============================================================================

use super::errors::{NumericError, NumericResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Rounding
// ============================================================================

/// Rounding policy applied when a value is rendered to a string.
///
/// All modes operate on the magnitude, so negative values mirror positive
/// ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rounding {
    /// Truncate toward zero
    RoundDown,
    /// Round to nearest, ties away from zero
    #[default]
    RoundHalfUp,
    /// Round away from zero whenever digits are discarded
    RoundUp,
}

// ============================================================================
// Number Format
// ============================================================================

/// Display configuration for `to_significant`, `to_fixed` and `to_exact`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NumberFormat {
    /// Separator between integer and fractional digits
    pub decimal_separator: String,

    /// Separator inserted between integer digit groups.
    /// Empty disables grouping.
    pub group_separator: String,

    /// Number of integer digits per group
    pub group_size: usize,

    /// Optional: rounding mode used when the caller passes none
    /// None falls back to the value type's default
    pub rounding: Option<Rounding>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            group_separator: String::new(),
            group_size: 3,
            rounding: None,
        }
    }
}

impl NumberFormat {
    /// Plain format: `.` decimals, no grouping
    pub fn new() -> Self {
        Self::default()
    }

    /// Display preset: `,` every three integer digits
    pub fn display() -> Self {
        Self::default().with_group_separator(",")
    }

    /// Builder method: Set decimal separator
    pub fn with_decimal_separator(mut self, separator: impl Into<String>) -> Self {
        self.decimal_separator = separator.into();
        self
    }

    /// Builder method: Set group separator
    pub fn with_group_separator(mut self, separator: impl Into<String>) -> Self {
        self.group_separator = separator.into();
        self
    }

    /// Builder method: Set group size
    pub fn with_group_size(mut self, size: usize) -> Self {
        self.group_size = size;
        self
    }

    /// Builder method: Set fallback rounding mode
    pub fn with_rounding(mut self, rounding: Rounding) -> Self {
        self.rounding = Some(rounding);
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> NumericResult<()> {
        if self.decimal_separator.is_empty() {
            return Err(NumericError::PrecisionArgument(
                "decimal separator cannot be empty".to_string(),
            ));
        }

        if !self.group_separator.is_empty() && self.group_size == 0 {
            return Err(NumericError::PrecisionArgument(
                "group size must be positive when grouping is enabled".to_string(),
            ));
        }

        Ok(())
    }

    /// Resolve the effective rounding mode.
    ///
    /// An explicit argument wins, then `self.rounding`, then `fallback`.
    pub fn resolve_rounding(&self, explicit: Option<Rounding>, fallback: Rounding) -> Rounding {
        explicit.or(self.rounding).unwrap_or(fallback)
    }
}
