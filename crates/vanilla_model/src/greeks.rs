//! Analytical Greeks for European options.
//!
//! One evaluation produces the full sensitivity profile for both sides of
//! the contract. The factor decomposition (d₁, d₂, discount factors) is
//! computed once and shared across every formula, so asking for all ten
//! outputs costs little more than asking for one.
//!
//! ## Scaling Conventions
//!
//! Raw derivatives are rescaled to trading units:
//!
//! - **Vega** is per volatility point (raw ∂V/∂σ divided by 100)
//! - **Theta** is per calendar day (annual decay divided by 365)
//! - **Rho** is per percentage point of rate (raw ∂V/∂r divided by 100)
//!
//! Delta and gamma are left in natural units.

use num_traits::Float;
use vanilla_core::math::distributions::{norm_cdf, norm_pdf};

use crate::factors::Factors;
use crate::market::{MarketState, OptionType};

/// Full sensitivity profile of a European option at one market snapshot.
///
/// Both call and put figures are carried so that the caller never has to
/// re-evaluate to switch sides. `d1` and `d2` are exposed for diagnostics
/// and for callers layering further analytics on top.
///
/// On the degenerate branch (zero expiry or zero volatility) every field
/// is exactly zero, matching the pricing convention.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GreeksResult<T: Float> {
    /// Call delta, e^(-qT)·N(d₁). Lies in (0, 1).
    pub delta_call: T,
    /// Put delta, -e^(-qT)·N(-d₁). Lies in (-1, 0).
    pub delta_put: T,
    /// Gamma, e^(-qT)·φ(d₁) / (S·σ·√T). Identical for call and put.
    pub gamma: T,
    /// Vega per volatility point, S·e^(-qT)·φ(d₁)·√T / 100.
    pub vega: T,
    /// Call theta per calendar day.
    pub theta_call: T,
    /// Put theta per calendar day.
    pub theta_put: T,
    /// Call rho per percentage point of rate, K·T·e^(-rT)·N(d₂) / 100.
    pub rho_call: T,
    /// Put rho per percentage point of rate, -K·T·e^(-rT)·N(-d₂) / 100.
    pub rho_put: T,
    /// The d₁ term used by every formula above.
    pub d1: T,
    /// The d₂ term, d₁ - σ√T.
    pub d2: T,
}

impl<T: Float> GreeksResult<T> {
    /// Returns a result with every field set to zero.
    ///
    /// This is the value reported on the degenerate branch.
    pub fn zero() -> Self {
        let zero = T::zero();
        Self {
            delta_call: zero,
            delta_put: zero,
            gamma: zero,
            vega: zero,
            theta_call: zero,
            theta_put: zero,
            rho_call: zero,
            rho_put: zero,
            d1: zero,
            d2: zero,
        }
    }

    /// Returns the delta for the requested side.
    #[inline]
    pub fn delta(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.delta_call,
            OptionType::Put => self.delta_put,
        }
    }

    /// Returns the theta for the requested side.
    #[inline]
    pub fn theta(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.theta_call,
            OptionType::Put => self.theta_put,
        }
    }

    /// Returns the rho for the requested side.
    #[inline]
    pub fn rho(&self, option_type: OptionType) -> T {
        match option_type {
            OptionType::Call => self.rho_call,
            OptionType::Put => self.rho_put,
        }
    }
}

/// Computes the full Greeks profile for a market snapshot.
///
/// The snapshot's option type is ignored: both sides are always reported,
/// and [`GreeksResult::delta`] and friends select a side afterwards.
///
/// The put-side figures evaluate N(-d₁) and N(-d₂) directly, the same
/// calls the put pricing path makes, so pricing and Greeks agree bitwise
/// on shared terms.
///
/// # Examples
/// ```
/// use vanilla_model::{greeks, MarketState, OptionType};
///
/// let state = MarketState::new(100.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
/// let g = greeks(&state);
///
/// assert!(g.delta_call > 0.0 && g.delta_call < 1.0);
/// assert!(g.gamma > 0.0);
/// ```
pub fn greeks<T: Float>(state: &MarketState<T>) -> GreeksResult<T> {
    let factors = match Factors::of(state) {
        Some(f) => f,
        None => return GreeksResult::zero(),
    };

    let two = T::from(2.0).unwrap();
    let hundred = T::from(100.0).unwrap();
    let days_per_year = T::from(365.0).unwrap();

    let spot = state.spot();
    let strike = state.strike();
    let rate = state.rate();
    let dividend_yield = state.dividend_yield();
    let volatility = state.volatility();
    let expiry = state.expiry();

    let nd1 = norm_cdf(factors.d1);
    let nd2 = norm_cdf(factors.d2);
    let nd1_neg = norm_cdf(-factors.d1);
    let nd2_neg = norm_cdf(-factors.d2);
    let pdf_d1 = norm_pdf(factors.d1);

    let delta_call = factors.df_div * nd1;
    let delta_put = -(factors.df_div * nd1_neg);

    let gamma = factors.df_div * pdf_d1 / (spot * volatility * factors.sqrt_t);
    let vega = spot * factors.df_div * pdf_d1 * factors.sqrt_t / hundred;

    // Decay of the optionality itself, shared by both thetas
    let decay = -(spot * pdf_d1 * volatility * factors.df_div) / (two * factors.sqrt_t);
    let theta_call = (decay - rate * strike * factors.df_rate * nd2
        + dividend_yield * spot * factors.df_div * nd1)
        / days_per_year;
    let theta_put = (decay + rate * strike * factors.df_rate * nd2_neg
        - dividend_yield * spot * factors.df_div * nd1_neg)
        / days_per_year;

    let rho_call = strike * expiry * factors.df_rate * nd2 / hundred;
    let rho_put = -(strike * expiry * factors.df_rate * nd2_neg) / hundred;

    GreeksResult {
        delta_call,
        delta_put,
        gamma,
        vega,
        theta_call,
        theta_put,
        rho_call,
        rho_put,
        d1: factors.d1,
        d2: factors.d2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pricing::price;
    use approx::assert_relative_eq;

    fn create_test_state() -> MarketState<f64> {
        MarketState::new(100.0, 100.0, 0.05, 0.20, 1.0, OptionType::Call).unwrap()
    }

    // ==========================================================
    // Reference values (S=100, K=100, r=5%, σ=20%, T=1)
    // ==========================================================

    #[test]
    fn test_reference_delta() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.delta_call, 0.636831, epsilon = 1e-5);
        assert_relative_eq!(g.delta_put, -0.363169, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_gamma() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.gamma, 0.018762, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_vega() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.vega, 0.375240, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_theta() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.theta_call, -0.017573, epsilon = 1e-5);
        assert_relative_eq!(g.theta_put, -0.004542, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_rho() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.rho_call, 0.532325, epsilon = 1e-5);
        assert_relative_eq!(g.rho_put, -0.418905, epsilon = 1e-5);
    }

    #[test]
    fn test_reference_d1_d2() {
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.d1, 0.35, epsilon = 1e-12);
        assert_relative_eq!(g.d2, 0.15, epsilon = 1e-12);
    }

    // ==========================================================
    // Degenerate branch
    // ==========================================================

    #[test]
    fn test_zero_expiry_reports_all_zeros() {
        let state = MarketState::new(120.0, 100.0, 0.05, 0.2, 0.0, OptionType::Call).unwrap();
        assert_eq!(greeks(&state), GreeksResult::zero());
    }

    #[test]
    fn test_zero_volatility_reports_all_zeros() {
        let state = MarketState::new(120.0, 100.0, 0.05, 0.0, 1.0, OptionType::Call).unwrap();
        let g = greeks(&state);
        assert_eq!(g.delta_call, 0.0);
        assert_eq!(g.delta_put, 0.0);
        assert_eq!(g.gamma, 0.0);
        assert_eq!(g.vega, 0.0);
        assert_eq!(g.theta_call, 0.0);
        assert_eq!(g.theta_put, 0.0);
        assert_eq!(g.rho_call, 0.0);
        assert_eq!(g.rho_put, 0.0);
        assert_eq!(g.d1, 0.0);
        assert_eq!(g.d2, 0.0);
    }

    // ==========================================================
    // Structural properties
    // ==========================================================

    #[test]
    fn test_option_type_does_not_affect_result() {
        let call_state = create_test_state();
        let put_state = call_state.with_option_type(OptionType::Put);
        assert_eq!(greeks(&call_state), greeks(&put_state));
    }

    #[test]
    fn test_delta_parity() {
        // delta_call - delta_put = e^(-qT)
        let g = greeks(&create_test_state());
        assert_relative_eq!(g.delta_call - g.delta_put, 1.0, epsilon = 1e-12);

        let with_div = create_test_state().with_dividend_yield(0.03).unwrap();
        let g = greeks(&with_div);
        assert_relative_eq!(
            g.delta_call - g.delta_put,
            (-0.03_f64).exp(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_delta_bounds_across_moneyness() {
        for spot in [50.0, 80.0, 100.0, 120.0, 200.0] {
            let g = greeks(&create_test_state().with_spot(spot).unwrap());
            assert!(g.delta_call > 0.0 && g.delta_call < 1.0);
            assert!(g.delta_put > -1.0 && g.delta_put < 0.0);
        }
    }

    #[test]
    fn test_deep_itm_call_delta_approaches_one() {
        let g = greeks(&create_test_state().with_spot(300.0).unwrap());
        assert!(g.delta_call > 0.999);
        assert!(g.delta_put > -0.001);
    }

    #[test]
    fn test_gamma_and_vega_non_negative() {
        for spot in [50.0, 100.0, 200.0] {
            let g = greeks(&create_test_state().with_spot(spot).unwrap());
            assert!(g.gamma >= 0.0);
            assert!(g.vega >= 0.0);
        }
    }

    #[test]
    fn test_gamma_peaks_near_the_money() {
        let atm = greeks(&create_test_state()).gamma;
        let itm = greeks(&create_test_state().with_spot(70.0).unwrap()).gamma;
        let otm = greeks(&create_test_state().with_spot(140.0).unwrap()).gamma;
        assert!(atm > itm);
        assert!(atm > otm);
    }

    #[test]
    fn test_theta_negative_without_dividend() {
        let g = greeks(&create_test_state());
        assert!(g.theta_call < 0.0);
        assert!(g.theta_put < 0.0);
    }

    #[test]
    fn test_rho_signs() {
        let g = greeks(&create_test_state());
        assert!(g.rho_call > 0.0);
        assert!(g.rho_put < 0.0);
    }

    // ==========================================================
    // Finite-difference validation against the pricer
    // ==========================================================

    fn state_with(spot: f64, rate: f64, vol: f64, expiry: f64, q: f64) -> MarketState<f64> {
        MarketState::new(spot, 100.0, rate, vol, expiry, OptionType::Call)
            .unwrap()
            .with_dividend_yield(q)
            .unwrap()
    }

    #[test]
    fn test_delta_matches_finite_difference() {
        let h = 0.5;
        for q in [0.0, 0.03] {
            let g = greeks(&state_with(100.0, 0.05, 0.2, 1.0, q));
            let up = state_with(100.0 + h, 0.05, 0.2, 1.0, q);
            let down = state_with(100.0 - h, 0.05, 0.2, 1.0, q);

            let fd_call = (price(&up) - price(&down)) / (2.0 * h);
            assert_relative_eq!(g.delta_call, fd_call, epsilon = 1e-3);

            let fd_put = (price(&up.with_option_type(OptionType::Put))
                - price(&down.with_option_type(OptionType::Put)))
                / (2.0 * h);
            assert_relative_eq!(g.delta_put, fd_put, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_gamma_matches_finite_difference() {
        let h = 0.5;
        let g = greeks(&create_test_state());
        let up = price(&state_with(100.0 + h, 0.05, 0.2, 1.0, 0.0));
        let mid = price(&state_with(100.0, 0.05, 0.2, 1.0, 0.0));
        let down = price(&state_with(100.0 - h, 0.05, 0.2, 1.0, 0.0));

        let fd = (up - 2.0 * mid + down) / (h * h);
        assert_relative_eq!(g.gamma, fd, epsilon = 1e-3);
    }

    #[test]
    fn test_vega_matches_finite_difference() {
        let h = 0.01;
        let g = greeks(&create_test_state());
        let up = price(&state_with(100.0, 0.05, 0.2 + h, 1.0, 0.0));
        let down = price(&state_with(100.0, 0.05, 0.2 - h, 1.0, 0.0));

        // per volatility point
        let fd = (up - down) / (2.0 * h) / 100.0;
        assert_relative_eq!(g.vega, fd, epsilon = 1e-3);
    }

    #[test]
    fn test_theta_matches_finite_difference() {
        let h = 0.01;
        let g = greeks(&create_test_state());
        let up = state_with(100.0, 0.05, 0.2, 1.0 + h, 0.0);
        let down = state_with(100.0, 0.05, 0.2, 1.0 - h, 0.0);

        // theta is the decay as the clock advances, per calendar day
        let fd_call = -(price(&up) - price(&down)) / (2.0 * h) / 365.0;
        assert_relative_eq!(g.theta_call, fd_call, epsilon = 1e-3);

        let fd_put = -(price(&up.with_option_type(OptionType::Put))
            - price(&down.with_option_type(OptionType::Put)))
            / (2.0 * h)
            / 365.0;
        assert_relative_eq!(g.theta_put, fd_put, epsilon = 1e-3);
    }

    #[test]
    fn test_rho_matches_finite_difference() {
        let h = 0.005;
        let g = greeks(&create_test_state());
        let up = state_with(100.0, 0.05 + h, 0.2, 1.0, 0.0);
        let down = state_with(100.0, 0.05 - h, 0.2, 1.0, 0.0);

        // per percentage point of rate
        let fd_call = (price(&up) - price(&down)) / (2.0 * h) / 100.0;
        assert_relative_eq!(g.rho_call, fd_call, epsilon = 1e-3);

        let fd_put = (price(&up.with_option_type(OptionType::Put))
            - price(&down.with_option_type(OptionType::Put)))
            / (2.0 * h)
            / 100.0;
        assert_relative_eq!(g.rho_put, fd_put, epsilon = 1e-3);
    }

    // ==========================================================
    // Accessors
    // ==========================================================

    #[test]
    fn test_side_accessors() {
        let g = greeks(&create_test_state());
        assert_eq!(g.delta(OptionType::Call), g.delta_call);
        assert_eq!(g.delta(OptionType::Put), g.delta_put);
        assert_eq!(g.theta(OptionType::Call), g.theta_call);
        assert_eq!(g.theta(OptionType::Put), g.theta_put);
        assert_eq!(g.rho(OptionType::Call), g.rho_call);
        assert_eq!(g.rho(OptionType::Put), g.rho_put);
    }

    #[test]
    fn test_zero_constructor() {
        let z: GreeksResult<f64> = GreeksResult::zero();
        assert_eq!(z.delta_call, 0.0);
        assert_eq!(z.vega, 0.0);
        assert_eq!(z.d1, 0.0);
    }

    #[test]
    fn test_f32_compatibility() {
        let state = MarketState::new(100.0_f32, 100.0, 0.05, 0.2, 1.0, OptionType::Call).unwrap();
        let g = greeks(&state);
        assert!((g.delta_call - 0.636831).abs() < 1e-4);
        assert!((g.gamma - 0.018762).abs() < 1e-4);
    }

    #[cfg(feature = "serde")]
    mod serde_tests {
        use super::*;

        #[test]
        fn test_greeks_result_roundtrip() {
            let g = greeks(&create_test_state());
            let json = serde_json::to_string(&g).unwrap();
            let back: GreeksResult<f64> = serde_json::from_str(&json).unwrap();
            assert_eq!(g, back);
        }

        #[test]
        fn test_greeks_result_field_names() {
            let g = greeks(&create_test_state());
            let json = serde_json::to_string(&g).unwrap();
            assert!(json.contains("\"delta_call\""));
            assert!(json.contains("\"theta_put\""));
            assert!(json.contains("\"d1\""));
        }
    }

    // ==========================================================
    // Property-based tests
    // ==========================================================

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn spot_strategy() -> impl Strategy<Value = f64> {
            50.0..200.0
        }

        fn vol_strategy() -> impl Strategy<Value = f64> {
            0.05..1.0
        }

        fn expiry_strategy() -> impl Strategy<Value = f64> {
            0.05..3.0
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(1000))]

            #[test]
            fn test_delta_stays_in_bounds(
                spot in spot_strategy(),
                vol in vol_strategy(),
                expiry in expiry_strategy(),
            ) {
                let state =
                    MarketState::new(spot, 100.0, 0.05, vol, expiry, OptionType::Call).unwrap();
                let g = greeks(&state);
                prop_assert!(g.delta_call >= 0.0 && g.delta_call <= 1.0);
                prop_assert!(g.delta_put >= -1.0 && g.delta_put <= 0.0);
            }

            #[test]
            fn test_gamma_vega_never_negative(
                spot in spot_strategy(),
                vol in vol_strategy(),
                expiry in expiry_strategy(),
            ) {
                let state =
                    MarketState::new(spot, 100.0, 0.05, vol, expiry, OptionType::Call).unwrap();
                let g = greeks(&state);
                prop_assert!(g.gamma >= 0.0);
                prop_assert!(g.vega >= 0.0);
            }

            #[test]
            fn test_delta_parity_holds(
                spot in spot_strategy(),
                vol in vol_strategy(),
                expiry in expiry_strategy(),
            ) {
                let state =
                    MarketState::new(spot, 100.0, 0.05, vol, expiry, OptionType::Call).unwrap();
                let g = greeks(&state);
                prop_assert!((g.delta_call - g.delta_put - 1.0).abs() < 1e-9);
            }

            #[test]
            fn test_d1_d2_offset(
                spot in spot_strategy(),
                vol in vol_strategy(),
                expiry in expiry_strategy(),
            ) {
                let state =
                    MarketState::new(spot, 100.0, 0.05, vol, expiry, OptionType::Call).unwrap();
                let g = greeks(&state);
                prop_assert!((g.d1 - g.d2 - vol * expiry.sqrt()).abs() < 1e-9);
            }
        }
    }
}
