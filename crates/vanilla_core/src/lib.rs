//! # vanilla_core: Mathematical Foundation for European Option Pricing
//!
//! ## Layer 1 (Foundation) Role
//!
//! vanilla_core serves as the bottom layer of the workspace, providing:
//! - Standard normal distribution functions (`math::distributions`)
//! - Trait for generic floating-point computation (`traits`)
//! - Error types: `PricingError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other vanilla_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - thiserror: Derived error types
//!
//! ## Usage Examples
//!
//! ```rust
//! use vanilla_core::math::distributions::{norm_cdf, norm_pdf};
//!
//! // Cumulative probability at the mean
//! let p = norm_cdf(0.0_f64);
//! assert!((p - 0.5).abs() < 1e-7);
//!
//! // Density at the mean: 1 / sqrt(2π)
//! let density = norm_pdf(0.0_f64);
//! assert!((density - 0.3989422804).abs() < 1e-7);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod math;
pub mod traits;
pub mod types;
