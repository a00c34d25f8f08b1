//! # vanilla_model: Black-Scholes-Merton Pricing Kernel
//!
//! Analytical pricing and risk sensitivities for European options on
//! dividend-paying underlyings. This crate is Layer 2 of the workspace:
//! it depends only on [`vanilla_core`] and is depended on by the curve
//! and service layers above it.
//!
//! ## Design
//!
//! All validation happens at the boundary. [`MarketState::new`] checks
//! every parameter once and returns a [`ModelError`] on bad input; the
//! evaluation functions [`price`] and [`greeks()`] are then pure and
//! infallible over validated snapshots. Zero expiry and zero volatility
//! are accepted as inputs and evaluate to exactly zero.
//!
//! ## Modules
//!
//! - [`market`]: Validated market snapshot and option type
//! - [`pricing`]: Closed-form price, time value, scalar conveniences
//! - [`greeks`](mod@greeks): Full sensitivity profile in one evaluation
//! - [`error`]: Validation errors
//!
//! ## Quick Start
//!
//! ```
//! use vanilla_model::{greeks, price, MarketState, OptionType};
//!
//! let state = MarketState::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)?
//!     .with_dividend_yield(0.01)?;
//!
//! let premium = price(&state);
//! let profile = greeks(&state);
//!
//! assert!(premium > 0.0);
//! assert!(profile.delta_call > 0.0 && profile.delta_call < 1.0);
//! # Ok::<(), vanilla_model::ModelError>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/Deserialize for [`OptionType`] and
//!   [`GreeksResult`], used by the service layer for JSON output.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
mod factors;
pub mod greeks;
pub mod market;
pub mod pricing;

pub use error::ModelError;
pub use greeks::{greeks, GreeksResult};
pub use market::{MarketState, OptionType};
pub use pricing::{call_price, price, put_price, time_value};
