//! Error types for model construction.
//!
//! This module provides:
//! - `ModelError`: Rejected market snapshot parameters

use thiserror::Error;
use vanilla_core::types::PricingError;

/// Market snapshot validation errors.
///
/// One variant per offending parameter, carrying the rejected value so the
/// caller can report it without re-deriving context. Construction is the
/// only fallible step in the engine; evaluation itself never errors.
///
/// # Examples
/// ```
/// use vanilla_model::error::ModelError;
///
/// let err = ModelError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ModelError {
    /// Invalid spot price (must be positive and finite).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The rejected spot price
        spot: f64,
    },

    /// Invalid strike price (must be positive and finite).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The rejected strike price
        strike: f64,
    },

    /// Invalid risk-free rate (must be finite; sign is unconstrained).
    #[error("Invalid risk-free rate: r = {rate}")]
    InvalidRate {
        /// The rejected rate
        rate: f64,
    },

    /// Invalid volatility (must be non-negative and finite).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The rejected volatility
        volatility: f64,
    },

    /// Invalid time to expiry (must be non-negative and finite).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The rejected expiry
        expiry: f64,
    },

    /// Invalid dividend yield (must be non-negative and finite).
    #[error("Invalid dividend yield: q = {dividend_yield}")]
    InvalidDividendYield {
        /// The rejected dividend yield
        dividend_yield: f64,
    },
}

impl From<ModelError> for PricingError {
    fn from(err: ModelError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
