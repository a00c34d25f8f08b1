//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: The workspace-wide error taxonomy pricing failures
//!   converge into

use thiserror::Error;

/// Categorised pricing errors.
///
/// The shared taxonomy upper layers convert their own error types into,
/// so callers that span several components can handle one error type.
///
/// # Variants
/// - `InvalidInput`: Invalid market data or parameters
/// - `NumericalInstability`: Computation produced an unusable number
/// - `ModelFailure`: Model assumptions violated
///
/// # Examples
/// ```
/// use vanilla_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical instability during computation.
    #[error("Numerical instability: {0}")]
    NumericalInstability(String),

    /// Model failed to produce a valid result.
    #[error("Model failure: {0}")]
    ModelFailure(String),
}
