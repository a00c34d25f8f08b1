//! Market snapshot for European option evaluation.
//!
//! This module provides the immutable value object both engine entry points
//! consume:
//! - `OptionType`: Call or Put
//! - `MarketState`: validated spot, strike, rate, volatility, expiry and
//!   dividend yield for one evaluation
//!
//! Construction validates every field once; after that the snapshot is
//! immutable and evaluation cannot fail. The `with_*` methods produce
//! revalidated copies with a single field replaced, which is what the sweep
//! layer uses to walk a parameter axis.

use num_traits::Float;

use crate::error::ModelError;

/// Option type (Call or Put).
///
/// - Call: right to buy the underlying at the strike price
/// - Put: right to sell the underlying at the strike price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OptionType {
    /// Right to buy the underlying at the strike price.
    Call,
    /// Right to sell the underlying at the strike price.
    Put,
}

impl OptionType {
    /// Returns whether this is a call option.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put option.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Validated market snapshot for one option evaluation.
///
/// Holds everything the closed forms need: spot, strike, risk-free rate,
/// volatility, time to expiry, continuous dividend yield and the option
/// type. All fields are private; the constructor rejects values the model
/// cannot price (non-positive spot or strike, negative volatility, expiry
/// or dividend yield, any non-finite input), so NaN can never reach an
/// evaluation.
///
/// Zero volatility and zero expiry are deliberately valid: they select the
/// degenerate branch where price and every Greek are defined as exactly
/// zero.
///
/// # Type Parameters
///
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use vanilla_model::{MarketState, OptionType};
///
/// let state = MarketState::new(
///     100.0, // spot
///     100.0, // strike
///     0.05,  // risk-free rate (5%)
///     0.20,  // volatility (20%)
///     1.0,   // expiry (1 year)
///     OptionType::Call,
/// )
/// .unwrap();
///
/// assert_eq!(state.dividend_yield(), 0.0);
/// assert_eq!(state.moneyness(), 1.0);
///
/// // Invalid inputs fail fast
/// assert!(MarketState::new(-1.0, 100.0, 0.05, 0.2, 1.0, OptionType::Call).is_err());
/// assert!(MarketState::new(100.0, 100.0, 0.05, -0.2, 1.0, OptionType::Call).is_err());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MarketState<T: Float> {
    /// Spot price of the underlying (S).
    spot: T,
    /// Strike price (K).
    strike: T,
    /// Risk-free rate, continuous compounding (r).
    rate: T,
    /// Annualised volatility (σ).
    volatility: T,
    /// Time to expiry in years (T).
    expiry: T,
    /// Continuous dividend yield (q).
    dividend_yield: T,
    /// Call or Put.
    option_type: OptionType,
}

impl<T: Float> MarketState<T> {
    /// Creates a new market snapshot with no dividend yield.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot price (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate` - Risk-free rate (sign unconstrained)
    /// * `volatility` - Annualised volatility (must be >= 0; zero selects
    ///   the degenerate branch)
    /// * `expiry` - Time to expiry in years (must be >= 0; zero selects the
    ///   degenerate branch)
    /// * `option_type` - Call or Put
    ///
    /// # Errors
    ///
    /// Returns `ModelError` naming the first offending parameter. Any
    /// non-finite value is rejected.
    pub fn new(
        spot: T,
        strike: T,
        rate: T,
        volatility: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<Self, ModelError> {
        let zero = T::zero();

        if !spot.is_finite() || spot <= zero {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !strike.is_finite() || strike <= zero {
            return Err(ModelError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !rate.is_finite() {
            return Err(ModelError::InvalidRate {
                rate: rate.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !volatility.is_finite() || volatility < zero {
            return Err(ModelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !expiry.is_finite() || expiry < zero {
            return Err(ModelError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            strike,
            rate,
            volatility,
            expiry,
            dividend_yield: zero,
            option_type,
        })
    }

    /// Returns a copy with the dividend yield replaced.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidDividendYield` if the yield is negative
    /// or non-finite.
    pub fn with_dividend_yield(self, dividend_yield: T) -> Result<Self, ModelError> {
        if !dividend_yield.is_finite() || dividend_yield < T::zero() {
            return Err(ModelError::InvalidDividendYield {
                dividend_yield: dividend_yield.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            dividend_yield,
            ..self
        })
    }

    /// Returns a copy with the spot price replaced.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidSpot` if the new spot is non-positive or
    /// non-finite.
    pub fn with_spot(self, spot: T) -> Result<Self, ModelError> {
        if !spot.is_finite() || spot <= T::zero() {
            return Err(ModelError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { spot, ..self })
    }

    /// Returns a copy with the volatility replaced.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::InvalidVolatility` if the new volatility is
    /// negative or non-finite.
    pub fn with_volatility(self, volatility: T) -> Result<Self, ModelError> {
        if !volatility.is_finite() || volatility < T::zero() {
            return Err(ModelError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self { volatility, ..self })
    }

    /// Returns a copy with the option type replaced.
    #[inline]
    pub fn with_option_type(self, option_type: OptionType) -> Self {
        Self {
            option_type,
            ..self
        }
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the time to expiry in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the continuous dividend yield.
    #[inline]
    pub fn dividend_yield(&self) -> T {
        self.dividend_yield
    }

    /// Returns the option type.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the moneyness ratio S / K.
    ///
    /// Values above 1 mean a call is in the money and a put is out of the
    /// money.
    #[inline]
    pub fn moneyness(&self) -> T {
        self.spot / self.strike
    }

    /// Returns the forward price of the underlying.
    ///
    /// F = S * exp((r - q) * T)
    #[inline]
    pub fn forward(&self) -> T {
        let drift = (self.rate - self.dividend_yield) * self.expiry;
        self.spot * drift.exp()
    }

    /// Returns the intrinsic value of the option at the current spot.
    ///
    /// max(0, S - K) for a call, max(0, K - S) for a put.
    #[inline]
    pub fn intrinsic_value(&self) -> T {
        let zero = T::zero();
        match self.option_type {
            OptionType::Call => (self.spot - self.strike).max(zero),
            OptionType::Put => (self.strike - self.spot).max(zero),
        }
    }
}
