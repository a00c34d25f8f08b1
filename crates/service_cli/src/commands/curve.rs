//! Curve command implementation
//!
//! Sweeps price or Greeks across a one-axis parameter grid and renders
//! the resulting curve. Grid defaults follow the interactive charting
//! conventions: a wide spot window for price curves, a tighter one for
//! Greeks, and a 10% to 100% range on the volatility axis. An explicit
//! `--from`/`--to` pair overrides the default window. Price curves carry
//! both sides, with intrinsic-value columns on the spot axis.

use tracing::info;
use vanilla_curves::{grid, greeks_curve, price_curve, SweepAxis};
use vanilla_model::{GreeksResult, MarketState, OptionType};

use super::MarketArgs;
use crate::{CliError, Result};

/// Default number of grid points for a spot-axis price sweep.
const PRICE_POINTS: usize = 50;
/// Default number of grid points on the volatility axis.
const VOL_POINTS: usize = 30;
/// Default number of grid points for a greeks sweep.
const GREEKS_POINTS: usize = 30;
/// Default spot window half-width for price sweeps, in percent.
const PRICE_WIDTH_PCT: f64 = 40.0;
/// Default spot window half-width for greeks sweeps, in percent.
const GREEKS_WIDTH_PCT: f64 = 20.0;
/// Volatility axis bounds, in decimals.
const VOL_RANGE: (f64, f64) = (0.10, 1.00);

/// Run the curve command
pub fn run(
    market: &MarketArgs,
    measure: &str,
    axis: &str,
    points: Option<usize>,
    width: Option<f64>,
    range: Option<(f64, f64)>,
    format: &str,
) -> Result<()> {
    info!("Sweeping {} along {} axis...", measure, axis);

    let state = market.to_state()?;
    let sweep_axis = parse_axis(axis)?;
    if width.is_some() && sweep_axis == SweepAxis::Volatility {
        return Err(CliError::InvalidArgument(
            "--width applies to the spot axis only".to_string(),
        ));
    }
    let range = resolve_range(sweep_axis, range)?;

    match measure {
        "price" => {
            let default_points = match sweep_axis {
                SweepAxis::Spot => PRICE_POINTS,
                SweepAxis::Volatility => VOL_POINTS,
            };
            let grid_values = build_grid(
                &state,
                sweep_axis,
                points.unwrap_or(default_points),
                width.unwrap_or(PRICE_WIDTH_PCT),
                range,
            );
            let calls = price_curve(
                &state.with_option_type(OptionType::Call),
                sweep_axis,
                &grid_values,
            )?;
            let puts = price_curve(
                &state.with_option_type(OptionType::Put),
                sweep_axis,
                &grid_values,
            )?;
            render_price_curve(&state, sweep_axis, &grid_values, &calls, &puts, format)?;
        }
        "greeks" => {
            let grid_values = build_grid(
                &state,
                sweep_axis,
                points.unwrap_or(GREEKS_POINTS),
                width.unwrap_or(GREEKS_WIDTH_PCT),
                range,
            );
            let curve = greeks_curve(&state, sweep_axis, &grid_values)?;
            render_greeks_curve(&state, sweep_axis, &grid_values, &curve, format)?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown measure: {}. Supported: price, greeks",
                other
            )));
        }
    }

    info!("Sweep complete");
    Ok(())
}

fn parse_axis(raw: &str) -> Result<SweepAxis> {
    match raw {
        "spot" => Ok(SweepAxis::Spot),
        "vol" | "volatility" => Ok(SweepAxis::Volatility),
        other => Err(CliError::InvalidArgument(format!(
            "Unknown axis: {}. Supported: spot, vol",
            other
        ))),
    }
}

/// Validates an explicit axis range; volatility bounds arrive in percent
/// and leave as decimals, matching the input convention of `--volatility`.
fn resolve_range(axis: SweepAxis, range: Option<(f64, f64)>) -> Result<Option<(f64, f64)>> {
    let (from, to) = match range {
        Some(pair) => pair,
        None => return Ok(None),
    };

    if !from.is_finite() || !to.is_finite() || from >= to {
        return Err(CliError::InvalidArgument(format!(
            "Invalid range: --from {} must be less than --to {}",
            from, to
        )));
    }

    match axis {
        SweepAxis::Spot => Ok(Some((from, to))),
        SweepAxis::Volatility => Ok(Some((from / 100.0, to / 100.0))),
    }
}

fn build_grid(
    state: &MarketState<f64>,
    axis: SweepAxis,
    points: usize,
    width_pct: f64,
    range: Option<(f64, f64)>,
) -> Vec<f64> {
    if let Some((from, to)) = range {
        return grid::linspace(from, to, points);
    }

    match axis {
        SweepAxis::Spot => grid::centered(state.spot(), width_pct / 100.0, points),
        SweepAxis::Volatility => grid::linspace(VOL_RANGE.0, VOL_RANGE.1, points),
    }
}

fn axis_label(axis: SweepAxis) -> &'static str {
    match axis {
        SweepAxis::Spot => "spot",
        SweepAxis::Volatility => "volatility",
    }
}

/// Call and put payoff at one spot level.
fn payoff_pair(spot: f64, strike: f64) -> (f64, f64) {
    ((spot - strike).max(0.0), (strike - spot).max(0.0))
}

fn render_price_curve(
    state: &MarketState<f64>,
    axis: SweepAxis,
    grid_values: &[f64],
    calls: &[f64],
    puts: &[f64],
    format: &str,
) -> Result<()> {
    let strike = state.strike();

    match format {
        "json" => {
            let points: Vec<_> = grid_values
                .iter()
                .zip(calls.iter().zip(puts))
                .map(|(x, (call, put))| match axis {
                    SweepAxis::Spot => {
                        let (call_intrinsic, put_intrinsic) = payoff_pair(*x, strike);
                        serde_json::json!({
                            "value": x,
                            "call": call,
                            "put": put,
                            "call_intrinsic": call_intrinsic,
                            "put_intrinsic": put_intrinsic,
                        })
                    }
                    SweepAxis::Volatility => {
                        serde_json::json!({ "value": x, "call": call, "put": put })
                    }
                })
                .collect();
            let payload = serde_json::json!({
                "axis": axis_label(axis),
                "points": points,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            match axis {
                SweepAxis::Spot => {
                    writer.write_record([
                        axis_label(axis),
                        "call_price",
                        "put_price",
                        "call_intrinsic",
                        "put_intrinsic",
                    ])?;
                    for (x, (call, put)) in grid_values.iter().zip(calls.iter().zip(puts)) {
                        let (call_intrinsic, put_intrinsic) = payoff_pair(*x, strike);
                        writer.write_record([
                            x.to_string(),
                            call.to_string(),
                            put.to_string(),
                            call_intrinsic.to_string(),
                            put_intrinsic.to_string(),
                        ])?;
                    }
                }
                SweepAxis::Volatility => {
                    writer.write_record([axis_label(axis), "call_price", "put_price"])?;
                    for (x, (call, put)) in grid_values.iter().zip(calls.iter().zip(puts)) {
                        writer.write_record([x.to_string(), call.to_string(), put.to_string()])?;
                    }
                }
            }
            writer.flush()?;
        }
        "table" => match axis {
            SweepAxis::Spot => {
                println!();
                println!("┌────────────┬────────────┬────────────┬────────────┬────────────┐");
                println!(
                    "│ {:<10} │ {:<10} │ {:<10} │ {:<10} │ {:<10} │",
                    axis_label(axis),
                    "call",
                    "put",
                    "call intr",
                    "put intr"
                );
                println!("├────────────┼────────────┼────────────┼────────────┼────────────┤");
                for (x, (call, put)) in grid_values.iter().zip(calls.iter().zip(puts)) {
                    let (call_intrinsic, put_intrinsic) = payoff_pair(*x, strike);
                    println!(
                        "│ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │ {:>10.4} │",
                        x, call, put, call_intrinsic, put_intrinsic
                    );
                }
                println!("└────────────┴────────────┴────────────┴────────────┴────────────┘");
            }
            SweepAxis::Volatility => {
                println!();
                println!("┌────────────┬────────────┬────────────┐");
                println!(
                    "│ {:<10} │ {:<10} │ {:<10} │",
                    axis_label(axis),
                    "call",
                    "put"
                );
                println!("├────────────┼────────────┼────────────┤");
                for (x, (call, put)) in grid_values.iter().zip(calls.iter().zip(puts)) {
                    println!("│ {:>10.4} │ {:>10.4} │ {:>10.4} │", x, call, put);
                }
                println!("└────────────┴────────────┴────────────┘");
            }
        },
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }
    Ok(())
}

fn render_greeks_curve(
    state: &MarketState<f64>,
    axis: SweepAxis,
    grid_values: &[f64],
    curve: &[GreeksResult<f64>],
    format: &str,
) -> Result<()> {
    let side = state.option_type();

    match format {
        "json" => {
            let points: Vec<_> = grid_values
                .iter()
                .zip(curve)
                .map(|(x, g)| serde_json::json!({ "value": x, "greeks": g }))
                .collect();
            let payload = serde_json::json!({
                "axis": axis_label(axis),
                "option_type": state.option_type(),
                "points": points,
            });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "csv" => {
            let mut writer = csv::Writer::from_writer(std::io::stdout());
            writer.write_record([axis_label(axis), "delta", "gamma", "vega", "theta", "rho"])?;
            for (x, g) in grid_values.iter().zip(curve) {
                writer.write_record([
                    x.to_string(),
                    g.delta(side).to_string(),
                    g.gamma.to_string(),
                    g.vega.to_string(),
                    g.theta(side).to_string(),
                    g.rho(side).to_string(),
                ])?;
            }
            writer.flush()?;
        }
        "table" => {
            println!();
            println!("┌────────────┬──────────┬──────────┬──────────┬──────────┬──────────┐");
            println!(
                "│ {:<10} │ {:<8} │ {:<8} │ {:<8} │ {:<8} │ {:<8} │",
                axis_label(axis),
                "delta",
                "gamma",
                "vega",
                "theta",
                "rho"
            );
            println!("├────────────┼──────────┼──────────┼──────────┼──────────┼──────────┤");
            for (x, g) in grid_values.iter().zip(curve) {
                println!(
                    "│ {:>10.4} │ {:>8.4} │ {:>8.4} │ {:>8.4} │ {:>8.4} │ {:>8.4} │",
                    x,
                    g.delta(side),
                    g.gamma,
                    g.vega,
                    g.theta(side),
                    g.rho(side)
                );
            }
            println!("└────────────┴──────────┴──────────┴──────────┴──────────┴──────────┘");
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }
    Ok(())
}
