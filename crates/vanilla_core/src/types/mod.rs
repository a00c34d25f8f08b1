//! Shared types for pricing operations.
//!
//! This module provides:
//! - `error`: Structured error types shared across the workspace
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level:
//! - [`PricingError`] from `error`

pub mod error;

pub use error::PricingError;
