//! Error types raised while configuring the aggregator.

use cityscore_core::Category;
use thiserror::Error;

/// Errors raised when a category weight table is unusable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WeightsError {
    /// A category weight was `NaN` or infinite.
    #[error("weight for {category} must be finite, got {weight}")]
    NonFinite {
        /// Category carrying the weight.
        category: Category,
        /// Rejected weight.
        weight: f64,
    },
    /// A category weight was zero or negative.
    #[error("weight for {category} must be positive, got {weight}")]
    NotPositive {
        /// Category carrying the weight.
        category: Category,
        /// Rejected weight.
        weight: f64,
    },
    /// The weight applied to unlisted categories was unusable.
    #[error("default weight must be finite and positive, got {0}")]
    InvalidDefault(f64),
}
