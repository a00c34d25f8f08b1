//! Greeks command implementation
//!
//! Computes the full sensitivity profile for one market snapshot and
//! renders it with call and put columns; gamma and vega are shared
//! between the sides, d1 and d2 are reported below the table.

use tracing::info;
use vanilla_model::{greeks, GreeksResult, MarketState};

use super::MarketArgs;
use crate::{CliError, Result};

/// Run the greeks command
pub fn run(market: &MarketArgs, format: &str) -> Result<()> {
    info!("Computing Greeks profile...");

    let state = market.to_state()?;
    let profile = greeks(&state);

    match format {
        "json" => print_json(&state, &profile)?,
        "csv" => print_csv(&state, &profile)?,
        "table" => print_table(&profile),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }

    info!("Greeks complete");
    Ok(())
}

fn print_json(state: &MarketState<f64>, profile: &GreeksResult<f64>) -> Result<()> {
    let payload = serde_json::json!({
        "spot": state.spot(),
        "strike": state.strike(),
        "rate": state.rate(),
        "volatility": state.volatility(),
        "expiry": state.expiry(),
        "dividend_yield": state.dividend_yield(),
        "greeks": profile,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_csv(state: &MarketState<f64>, profile: &GreeksResult<f64>) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "spot",
        "strike",
        "rate",
        "volatility",
        "expiry",
        "dividend_yield",
        "delta_call",
        "delta_put",
        "gamma",
        "vega",
        "theta_call",
        "theta_put",
        "rho_call",
        "rho_put",
        "d1",
        "d2",
    ])?;
    writer.write_record([
        state.spot().to_string(),
        state.strike().to_string(),
        state.rate().to_string(),
        state.volatility().to_string(),
        state.expiry().to_string(),
        state.dividend_yield().to_string(),
        profile.delta_call.to_string(),
        profile.delta_put.to_string(),
        profile.gamma.to_string(),
        profile.vega.to_string(),
        profile.theta_call.to_string(),
        profile.theta_put.to_string(),
        profile.rho_call.to_string(),
        profile.rho_put.to_string(),
        profile.d1.to_string(),
        profile.d2.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

fn print_table(profile: &GreeksResult<f64>) {
    println!();
    println!("┌──────────────────┬────────────┬────────────┐");
    println!("│ {:<16} │ {:<10} │ {:<10} │", "Greek", "Call", "Put");
    println!("├──────────────────┼────────────┼────────────┤");
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Delta", profile.delta_call, profile.delta_put
    );
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Gamma", profile.gamma, profile.gamma
    );
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Vega (per 1%)", profile.vega, profile.vega
    );
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Theta (per day)", profile.theta_call, profile.theta_put
    );
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Rho (per 1%)", profile.rho_call, profile.rho_put
    );
    println!("└──────────────────┴────────────┴────────────┘");
    println!("┌──────────────────┬────────────┐");
    println!("│ {:<16} │ {:>10.4} │", "d1", profile.d1);
    println!("│ {:<16} │ {:>10.4} │", "d2", profile.d2);
    println!("└──────────────────┴────────────┘");
}
