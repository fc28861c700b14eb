// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod currency;

pub use currency::Currency;
