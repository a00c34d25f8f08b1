//! Price command implementation
//!
//! Values both sides of a European option from command-line market flags
//! and reports the shared quantities (d1, d2, moneyness) alongside.

use tracing::info;
use vanilla_model::{greeks, price, time_value, MarketState, OptionType};

use super::MarketArgs;
use crate::{CliError, Result};

/// Valuation of one market snapshot, both sides plus shared quantities.
struct PriceReport {
    call: f64,
    call_intrinsic: f64,
    call_time_value: f64,
    put: f64,
    put_intrinsic: f64,
    put_time_value: f64,
    d1: f64,
    d2: f64,
    moneyness: f64,
}

/// Run the price command
pub fn run(market: &MarketArgs, format: &str) -> Result<()> {
    info!("Pricing European option...");

    let state = market.to_state()?;
    let report = build_report(&state);

    match format {
        "json" => print_json(&state, &report)?,
        "csv" => print_csv(&state, &report)?,
        "table" => print_table(&state, &report),
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }

    info!("Pricing complete");
    Ok(())
}

fn build_report(state: &MarketState<f64>) -> PriceReport {
    let call_state = state.with_option_type(OptionType::Call);
    let put_state = state.with_option_type(OptionType::Put);
    let profile = greeks(state);

    PriceReport {
        call: price(&call_state),
        call_intrinsic: call_state.intrinsic_value(),
        call_time_value: time_value(&call_state),
        put: price(&put_state),
        put_intrinsic: put_state.intrinsic_value(),
        put_time_value: time_value(&put_state),
        d1: profile.d1,
        d2: profile.d2,
        moneyness: state.moneyness(),
    }
}

fn print_json(state: &MarketState<f64>, report: &PriceReport) -> Result<()> {
    let payload = serde_json::json!({
        "spot": state.spot(),
        "strike": state.strike(),
        "rate": state.rate(),
        "volatility": state.volatility(),
        "expiry": state.expiry(),
        "dividend_yield": state.dividend_yield(),
        "call": {
            "price": report.call,
            "intrinsic_value": report.call_intrinsic,
            "time_value": report.call_time_value,
        },
        "put": {
            "price": report.put,
            "intrinsic_value": report.put_intrinsic,
            "time_value": report.put_time_value,
        },
        "d1": report.d1,
        "d2": report.d2,
        "moneyness": report.moneyness,
    });
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn print_csv(state: &MarketState<f64>, report: &PriceReport) -> Result<()> {
    let mut writer = csv::Writer::from_writer(std::io::stdout());
    writer.write_record([
        "spot",
        "strike",
        "rate",
        "volatility",
        "expiry",
        "dividend_yield",
        "call_price",
        "call_intrinsic",
        "call_time_value",
        "put_price",
        "put_intrinsic",
        "put_time_value",
        "d1",
        "d2",
        "moneyness",
    ])?;
    writer.write_record([
        state.spot().to_string(),
        state.strike().to_string(),
        state.rate().to_string(),
        state.volatility().to_string(),
        state.expiry().to_string(),
        state.dividend_yield().to_string(),
        report.call.to_string(),
        report.call_intrinsic.to_string(),
        report.call_time_value.to_string(),
        report.put.to_string(),
        report.put_intrinsic.to_string(),
        report.put_time_value.to_string(),
        report.d1.to_string(),
        report.d2.to_string(),
        report.moneyness.to_string(),
    ])?;
    writer.flush()?;
    Ok(())
}

fn print_table(state: &MarketState<f64>, report: &PriceReport) {
    println!();
    println!("┌──────────────────┬────────────┬────────────┐");
    println!("│ {:<16} │ {:<10} │ {:<10} │", "", "Call", "Put");
    println!("├──────────────────┼────────────┼────────────┤");
    println!("│ {:<16} │ {:>10.4} │ {:>10.4} │", "Price", report.call, report.put);
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Intrinsic value", report.call_intrinsic, report.put_intrinsic
    );
    println!(
        "│ {:<16} │ {:>10.4} │ {:>10.4} │",
        "Time value", report.call_time_value, report.put_time_value
    );
    println!("└──────────────────┴────────────┴────────────┘");
    println!("┌──────────────────┬────────────┐");
    println!("│ {:<16} │ {:>10.4} │", "d1", report.d1);
    println!("│ {:<16} │ {:>10.4} │", "d2", report.d2);
    println!("│ {:<16} │ {:>10.4} │", "Moneyness", report.moneyness);
    println!("│ {:<16} │ {:>10.4} │", "Expiry (years)", state.expiry());
    println!("└──────────────────┴────────────┘");
}
