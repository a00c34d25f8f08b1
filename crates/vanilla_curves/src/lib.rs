//! # vanilla_curves: Batch Evaluation over Parameter Grids
//!
//! Layer 3 of the workspace: thin batching over the scalar pricing
//! kernel in [`vanilla_model`]. The kernel deliberately exposes a single
//! evaluation primitive; this crate owns the decision of how to fan it
//! out over a grid.
//!
//! ## Modules
//!
//! - [`grid`]: Evenly spaced and centred grid construction
//! - [`sweep`]: One-axis sweeps producing price and Greeks curves
//! - [`error`]: Curve evaluation errors
//!
//! ## Quick Start
//!
//! ```
//! use vanilla_curves::{grid, price_curve, SweepAxis};
//! use vanilla_model::{MarketState, OptionType};
//!
//! let base = MarketState::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)?;
//! let spots = grid::centered(100.0, 0.4, 50);
//!
//! let curve = price_curve(&base, SweepAxis::Spot, &spots)?;
//! assert_eq!(curve.len(), spots.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Long grids move to the rayon pool automatically; see
//! [`SweepConfig`] to tune or pin the dispatch.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod grid;
pub mod sweep;

pub use error::CurveError;
pub use sweep::{
    greeks_curve, greeks_curve_with, price_curve, price_curve_with, SweepAxis, SweepConfig,
    DEFAULT_PARALLEL_THRESHOLD,
};
