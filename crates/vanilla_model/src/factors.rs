//! Shared intermediate terms of the Black-Scholes-Merton closed forms.
//!
//! This is the single place d1 and d2 are computed. The pricer and the
//! Greeks engine both consume a `Factors` value, so the two always agree
//! bit for bit on the shared terms.

use num_traits::Float;

use crate::market::MarketState;

/// Precomputed terms shared by price and Greeks evaluation.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Factors<T> {
    /// d1 term of the formula.
    pub(crate) d1: T,
    /// d2 term of the formula.
    pub(crate) d2: T,
    /// √T
    pub(crate) sqrt_t: T,
    /// e^(-r * T)
    pub(crate) df_rate: T,
    /// e^(-q * T)
    pub(crate) df_div: T,
}

impl<T: Float> Factors<T> {
    /// Computes the shared terms for a snapshot.
    ///
    /// Returns `None` on the degenerate branch (expiry <= 0 or
    /// volatility <= 0), where price and every Greek are defined as zero.
    pub(crate) fn of(state: &MarketState<T>) -> Option<Self> {
        let zero = T::zero();
        if state.expiry() <= zero || state.volatility() <= zero {
            return None;
        }

        let sqrt_t = state.expiry().sqrt();
        let vol_sqrt_t = state.volatility() * sqrt_t;

        // d1 = [ln(S/K) + (r - q + σ²/2) * T] / (σ * √T)
        let log_moneyness = (state.spot() / state.strike()).ln();
        let drift = state.rate() - state.dividend_yield()
            + state.volatility() * state.volatility() / T::from(2.0).unwrap();
        let d1 = (log_moneyness + drift * state.expiry()) / vol_sqrt_t;

        // d2 = d1 - σ * √T
        let d2 = d1 - vol_sqrt_t;

        let df_rate = (-state.rate() * state.expiry()).exp();
        let df_div = (-state.dividend_yield() * state.expiry()).exp();

        Some(Self {
            d1,
            d2,
            sqrt_t,
            df_rate,
            df_div,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::market::OptionType;
    use approx::assert_relative_eq;

    fn create_test_state() -> MarketState<f64> {
        MarketState::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call).unwrap()
    }

    #[test]
    fn test_reference_d1_d2() {
        // d1 = (ln(1) + (0.05 + 0.02) * 1) / 0.2 = 0.35
        let factors = Factors::of(&create_test_state()).unwrap();
        assert_relative_eq!(factors.d1, 0.35, epsilon = 1e-12);
        assert_relative_eq!(factors.d2, 0.15, epsilon = 1e-12);
    }

    #[test]
    fn test_d2_offset_from_d1() {
        let state = MarketState::new(110.0, 95.0, 0.02, 0.3, 0.75, OptionType::Put).unwrap();
        let factors = Factors::of(&state).unwrap();
        let vol_sqrt_t = 0.3 * 0.75_f64.sqrt();
        assert_relative_eq!(factors.d1 - factors.d2, vol_sqrt_t, epsilon = 1e-12);
    }

    #[test]
    fn test_discount_factors() {
        let state = create_test_state().with_dividend_yield(0.02).unwrap();
        let factors = Factors::of(&state).unwrap();
        assert_relative_eq!(factors.df_rate, (-0.05_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(factors.df_div, (-0.02_f64).exp(), epsilon = 1e-15);
        assert_relative_eq!(factors.sqrt_t, 1.0, epsilon = 1e-15);
    }

    #[test]
    fn test_degenerate_expiry() {
        let state = MarketState::new(100.0, 100.0, 0.05, 0.2, 0.0, OptionType::Call).unwrap();
        assert!(Factors::of(&state).is_none());
    }

    #[test]
    fn test_degenerate_volatility() {
        let state = MarketState::new(100.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call).unwrap();
        assert!(Factors::of(&state).is_none());
    }

    #[test]
    fn test_dividend_shifts_d1_down() {
        let base = Factors::of(&create_test_state()).unwrap();
        let with_div = Factors::of(&create_test_state().with_dividend_yield(0.03).unwrap()).unwrap();
        assert!(with_div.d1 < base.d1);
        // q enters d1 only through the drift, scaled by T / (σ√T)
        assert_relative_eq!(base.d1 - with_div.d1, 0.03 / 0.2, epsilon = 1e-12);
    }
}
