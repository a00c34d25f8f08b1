//! Numerical building blocks for closed-form pricing.
//!
//! This module provides:
//! - `distributions`: Standard normal CDF and PDF built on an erfc approximation
//!
//! # Re-exports
//!
//! For convenience, commonly used functions are re-exported at this module level:
//! - [`norm_cdf`], [`norm_pdf`] from `distributions`

pub mod distributions;

pub use distributions::{norm_cdf, norm_pdf};
