//! Error types for econia-core.

use thiserror::Error;

/// Violated precondition of a granularity formula.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GranularityError {
    #[error("Decimal unit must be positive: {0}")]
    NonPositiveUnit(String),

    #[error("Decimal size must not be negative: {0}")]
    NegativeSize(String),

    #[error("Value is not representable as a decimal: {0}")]
    NotRepresentable(String),

    #[error("Lot size must be non-zero")]
    ZeroLotSize,

    #[error("Derived min size is zero: {0}")]
    ZeroMinSize(String),

    #[error("Arithmetic overflow: {0}")]
    Overflow(String),
}

/// Result type alias for granularity operations.
pub type GranularityResult<T> = std::result::Result<T, GranularityError>;
