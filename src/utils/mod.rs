// ============================================================================
// Utilities Module
// Trade math built on prices and amounts
// ============================================================================

mod price_impact;

pub use price_impact::compute_price_impact;
