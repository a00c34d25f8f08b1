//! European option pricing under Black-Scholes-Merton.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^(-qT)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^(-qT)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (r - q + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! When the expiry or the volatility is zero the price is defined as
//! exactly zero. That is a compatibility contract with the callers of this
//! engine: an expired contract reports zero, not its intrinsic value.

use num_traits::Float;
use vanilla_core::math::distributions::norm_cdf;

use crate::error::ModelError;
use crate::factors::Factors;
use crate::market::{MarketState, OptionType};

/// Computes the option price for a market snapshot.
///
/// Selects the call or put formula from the snapshot's option type. The
/// result is clamped to a minimum of zero, and the degenerate branch
/// (expiry <= 0 or volatility <= 0) returns exactly zero.
///
/// Pure and infallible: all input validation happened when the snapshot
/// was constructed.
///
/// # Examples
/// ```
/// use vanilla_model::{price, MarketState, OptionType};
///
/// let call = MarketState::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// let put = call.with_option_type(OptionType::Put);
///
/// // Put-call parity: C - P = S - K·e^(-rT)
/// let parity = price(&call) - price(&put) - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-9);
/// ```
pub fn price<T: Float>(state: &MarketState<T>) -> T {
    let zero = T::zero();

    let factors = match Factors::of(state) {
        Some(f) => f,
        None => return zero,
    };

    let value = match state.option_type() {
        OptionType::Call => {
            // C = S * e^(-qT) * N(d1) - K * e^(-rT) * N(d2)
            let nd1 = norm_cdf(factors.d1);
            let nd2 = norm_cdf(factors.d2);
            state.spot() * factors.df_div * nd1 - state.strike() * factors.df_rate * nd2
        }
        OptionType::Put => {
            // P = K * e^(-rT) * N(-d2) - S * e^(-qT) * N(-d1)
            let nd1_neg = norm_cdf(-factors.d1);
            let nd2_neg = norm_cdf(-factors.d2);
            state.strike() * factors.df_rate * nd2_neg - state.spot() * factors.df_div * nd1_neg
        }
    };

    value.max(zero)
}

/// Returns the time value of the option: price minus intrinsic value.
///
/// Negative values are possible for deep in-the-money European options
/// (and on the degenerate branch, where the price is defined as zero).
pub fn time_value<T: Float>(state: &MarketState<T>) -> T {
    price(state) - state.intrinsic_value()
}

/// Convenience function to price a European call.
///
/// Builds the snapshot internally, so this is the one-call entry point for
/// scalar use.
///
/// # Arguments
///
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free rate
/// * `dividend_yield` - Continuous dividend yield
/// * `volatility` - Annualised volatility
/// * `expiry` - Time to expiry in years
///
/// # Errors
///
/// Returns `ModelError` if any parameter fails validation.
pub fn call_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
    expiry: T,
) -> Result<T, ModelError> {
    let state = MarketState::new(spot, strike, rate, volatility, expiry, OptionType::Call)?
        .with_dividend_yield(dividend_yield)?;
    Ok(price(&state))
}

/// Convenience function to price a European put.
///
/// # Arguments
///
/// * `spot` - Spot price
/// * `strike` - Strike price
/// * `rate` - Risk-free rate
/// * `dividend_yield` - Continuous dividend yield
/// * `volatility` - Annualised volatility
/// * `expiry` - Time to expiry in years
///
/// # Errors
///
/// Returns `ModelError` if any parameter fails validation.
pub fn put_price<T: Float>(
    spot: T,
    strike: T,
    rate: T,
    dividend_yield: T,
    volatility: T,
    expiry: T,
) -> Result<T, ModelError> {
    let state = MarketState::new(spot, strike, rate, volatility, expiry, OptionType::Put)?
        .with_dividend_yield(dividend_yield)?;
    Ok(price(&state))
}
