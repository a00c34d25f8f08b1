//! Error types for curve evaluation.

use thiserror::Error;
use vanilla_model::ModelError;

/// Errors raised while evaluating a curve over a parameter grid.
///
/// A sweep either returns a value for every grid point or fails fast on
/// the first point that does not form a valid market snapshot. There are
/// no partial results.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CurveError {
    /// The supplied grid contained no points.
    #[error("Empty grid: nothing to evaluate")]
    EmptyGrid,

    /// A grid point failed snapshot validation.
    #[error("Invalid grid point at index {index}: {source}")]
    InvalidPoint {
        /// Zero-based position of the offending point in the grid.
        index: usize,
        /// The underlying validation failure.
        source: ModelError,
    },
}
