//! One-axis parameter sweeps over the pricing kernel.
//!
//! A sweep revalues a base snapshot across a grid of values for a single
//! market variable. Every point is an independent scalar evaluation, so
//! the result is ordered like the grid and the sequential and parallel
//! paths produce identical output.
//!
//! Parallelism is opt-in by grid size: below [`SweepConfig::parallel_threshold`]
//! the per-point work (a handful of transcendental calls) does not pay for
//! thread handoff, so short grids stay on the calling thread.

use rayon::prelude::*;
use vanilla_core::traits::Float;
use vanilla_model::{greeks, price, GreeksResult, MarketState, ModelError};

use crate::error::CurveError;

/// Grid length at or above which sweeps move to the rayon pool.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// The market variable a sweep varies.
///
/// All other fields of the base snapshot are held fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SweepAxis {
    /// Vary the spot price.
    Spot,
    /// Vary the volatility.
    Volatility,
}

impl SweepAxis {
    /// Produces a revalidated snapshot with this axis set to `value`.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if `value` is out of domain for the axis.
    pub fn apply<T: Float>(
        self,
        base: &MarketState<T>,
        value: T,
    ) -> Result<MarketState<T>, ModelError> {
        match self {
            SweepAxis::Spot => base.with_spot(value),
            SweepAxis::Volatility => base.with_volatility(value),
        }
    }
}

/// Controls when a sweep switches to the parallel path.
#[derive(Debug, Clone, Copy)]
pub struct SweepConfig {
    /// Grid length at or above which evaluation uses the rayon pool.
    pub parallel_threshold: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SweepConfig {
    /// Creates a configuration with default thresholds.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parallel threshold.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if a grid of `points` elements should use the pool.
    #[inline]
    pub fn should_parallelize(&self, points: usize) -> bool {
        points >= self.parallel_threshold
    }
}

/// Prices the base snapshot across a grid, default configuration.
///
/// The result has the same length and order as `grid`; each element is
/// exactly what [`vanilla_model::price`] returns for the bumped snapshot.
///
/// # Errors
///
/// [`CurveError::EmptyGrid`] for an empty grid, or
/// [`CurveError::InvalidPoint`] naming the first grid index whose value is
/// out of domain for the axis.
///
/// # Examples
/// ```
/// use vanilla_curves::{grid, price_curve, SweepAxis};
/// use vanilla_model::{MarketState, OptionType};
///
/// let base = MarketState::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call)?;
/// let spots = grid::centered(100.0, 0.4, 50);
///
/// let prices = price_curve(&base, SweepAxis::Spot, &spots)?;
/// assert_eq!(prices.len(), 50);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn price_curve<T>(
    base: &MarketState<T>,
    axis: SweepAxis,
    grid: &[T],
) -> Result<Vec<T>, CurveError>
where
    T: Float + Send + Sync,
{
    price_curve_with(&SweepConfig::default(), base, axis, grid)
}

/// Prices across a grid with an explicit sweep configuration.
///
/// # Errors
///
/// Same contract as [`price_curve`].
pub fn price_curve_with<T>(
    config: &SweepConfig,
    base: &MarketState<T>,
    axis: SweepAxis,
    grid: &[T],
) -> Result<Vec<T>, CurveError>
where
    T: Float + Send + Sync,
{
    evaluate(config, base, axis, grid, |state| price(state))
}

/// Computes the full Greeks profile across a grid, default configuration.
///
/// # Errors
///
/// Same contract as [`price_curve`].
pub fn greeks_curve<T>(
    base: &MarketState<T>,
    axis: SweepAxis,
    grid: &[T],
) -> Result<Vec<GreeksResult<T>>, CurveError>
where
    T: Float + Send + Sync,
{
    greeks_curve_with(&SweepConfig::default(), base, axis, grid)
}

/// Computes Greeks across a grid with an explicit sweep configuration.
///
/// # Errors
///
/// Same contract as [`price_curve`].
pub fn greeks_curve_with<T>(
    config: &SweepConfig,
    base: &MarketState<T>,
    axis: SweepAxis,
    grid: &[T],
) -> Result<Vec<GreeksResult<T>>, CurveError>
where
    T: Float + Send + Sync,
{
    evaluate(config, base, axis, grid, |state| greeks(state))
}

/// Runs one evaluation function over every grid point.
///
/// Dispatches between the sequential and parallel map on grid length.
/// Both paths fail fast on the first invalid point.
fn evaluate<T, R, F>(
    config: &SweepConfig,
    base: &MarketState<T>,
    axis: SweepAxis,
    grid: &[T],
    eval: F,
) -> Result<Vec<R>, CurveError>
where
    T: Float + Send + Sync,
    R: Send,
    F: Fn(&MarketState<T>) -> R + Send + Sync,
{
    if grid.is_empty() {
        return Err(CurveError::EmptyGrid);
    }

    let eval_point = |(index, value): (usize, &T)| -> Result<R, CurveError> {
        let state = axis
            .apply(base, *value)
            .map_err(|source| CurveError::InvalidPoint { index, source })?;
        Ok(eval(&state))
    };

    if config.should_parallelize(grid.len()) {
        grid.par_iter().enumerate().map(eval_point).collect()
    } else {
        grid.iter().enumerate().map(eval_point).collect()
    }
}
