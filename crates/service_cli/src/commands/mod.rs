//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. The shared
//! [`MarketArgs`] block collects the market snapshot flags; rate,
//! volatility and dividend yield are entered in percent and converted to
//! decimals here, at the presentation boundary. The engine only ever
//! sees decimals.

use clap::Args;
use vanilla_model::{MarketState, OptionType};

use crate::{CliError, Result};

pub mod curve;
pub mod greeks;
pub mod price;

/// Market snapshot flags shared by every subcommand.
#[derive(Debug, Args)]
pub struct MarketArgs {
    /// Spot price of the underlying
    #[arg(short, long, default_value_t = 100.0)]
    pub spot: f64,

    /// Strike price
    #[arg(short = 'k', long, default_value_t = 100.0)]
    pub strike: f64,

    /// Risk-free rate in percent
    #[arg(short, long, default_value_t = 5.0)]
    pub rate: f64,

    /// Annualised volatility in percent
    #[arg(short = 'v', long, default_value_t = 20.0)]
    pub volatility: f64,

    /// Time to expiry in years
    #[arg(short = 't', long, default_value_t = 1.0)]
    pub expiry: f64,

    /// Continuous dividend yield in percent
    #[arg(short = 'q', long, default_value_t = 0.0)]
    pub dividend: f64,

    /// Option type (call, put)
    #[arg(short, long, default_value = "call")]
    pub option_type: String,
}

impl MarketArgs {
    /// Builds a validated engine snapshot from the CLI flags.
    pub fn to_state(&self) -> Result<MarketState<f64>> {
        let option_type = parse_option_type(&self.option_type)?;
        let state = MarketState::new(
            self.spot,
            self.strike,
            self.rate / 100.0,
            self.volatility / 100.0,
            self.expiry,
            option_type,
        )?
        .with_dividend_yield(self.dividend / 100.0)?;
        Ok(state)
    }
}

/// Parses an option type argument, case-insensitively.
pub fn parse_option_type(raw: &str) -> Result<OptionType> {
    match raw.to_ascii_lowercase().as_str() {
        "call" => Ok(OptionType::Call),
        "put" => Ok(OptionType::Put),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown option type: {}. Supported: call, put",
            other
        ))),
    }
}
