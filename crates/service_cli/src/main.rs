//! Vanilla CLI - Command Line Operations for European Option Pricing
//!
//! This is the operational entry point for the vanilla-rs pricing
//! workspace.
//!
//! # Commands
//!
//! - `vanilla price` - Call and put valuation for one market snapshot
//! - `vanilla greeks` - Full sensitivity profile at one snapshot
//! - `vanilla curve` - Sweep price or Greeks across a parameter grid
//!
//! # Architecture
//!
//! The service layer of the workspace: it collects parameters, converts
//! percent inputs to the decimals the engine expects, orchestrates the
//! engine crates and renders tables, JSON or CSV. Set `RUST_LOG` to
//! control log output.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod error;

pub use error::{CliError, Result};

use commands::MarketArgs;

/// European option pricing CLI
#[derive(Parser)]
#[command(name = "vanilla")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a European option (call and put sides)
    Price {
        #[command(flatten)]
        market: MarketArgs,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Compute the full Greeks profile
    Greeks {
        #[command(flatten)]
        market: MarketArgs,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },

    /// Sweep price or Greeks across a parameter grid
    Curve {
        #[command(flatten)]
        market: MarketArgs,

        /// Measure to sweep (price, greeks)
        #[arg(long, default_value = "price")]
        measure: String,

        /// Axis to vary (spot, vol)
        #[arg(short, long, default_value = "spot")]
        axis: String,

        /// Number of grid points
        #[arg(short = 'n', long)]
        points: Option<usize>,

        /// Spot window half-width in percent (spot axis only)
        #[arg(short, long)]
        width: Option<f64>,

        /// Axis range start, paired with --to (percent on the volatility axis)
        #[arg(long, requires = "to", conflicts_with = "width")]
        from: Option<f64>,

        /// Axis range end, paired with --from
        #[arg(long, requires = "from")]
        to: Option<f64>,

        /// Output format (table, json, csv)
        #[arg(short, long, default_value = "table")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Initialise tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Price { market, format } => commands::price::run(&market, &format),
        Commands::Greeks { market, format } => commands::greeks::run(&market, &format),
        Commands::Curve {
            market,
            measure,
            axis,
            points,
            width,
            from,
            to,
            format,
        } => commands::curve::run(&market, &measure, &axis, points, width, from.zip(to), &format),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_market_flags_match_sidebar() {
        let cli = Cli::try_parse_from(["vanilla", "price"]).unwrap();
        match cli.command {
            Commands::Price { market, format } => {
                assert_eq!(market.spot, 100.0);
                assert_eq!(market.strike, 100.0);
                assert_eq!(market.rate, 5.0);
                assert_eq!(market.volatility, 20.0);
                assert_eq!(market.expiry, 1.0);
                assert_eq!(market.dividend, 0.0);
                assert_eq!(market.option_type, "call");
                assert_eq!(format, "table");
            }
            _ => panic!("expected the price subcommand"),
        }
    }

    #[test]
    fn test_curve_range_flags_come_in_pairs() {
        assert!(Cli::try_parse_from(["vanilla", "curve", "--from", "80"]).is_err());
        assert!(Cli::try_parse_from(["vanilla", "curve", "--to", "120"]).is_err());
        assert!(Cli::try_parse_from(["vanilla", "curve", "--from", "80", "--to", "120"]).is_ok());
    }

    #[test]
    fn test_curve_range_excludes_width() {
        let args = ["vanilla", "curve", "--from", "80", "--to", "120", "-w", "10"];
        assert!(Cli::try_parse_from(args).is_err());
    }
}
