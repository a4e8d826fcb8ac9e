//! Command-line interface definitions.

pub mod liquidity;
pub mod output;
pub mod price;
pub mod trade_cost;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use crate::config::Config;
use crate::domain::{LiquidityPolicy, Quantity};
use crate::error::{Error, Result};

/// LMSR market maker pricing calculator.
#[derive(Parser, Debug)]
#[command(name = "lmsr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price the first outcome
    Price(PriceArgs),

    /// Cost of moving from an initial to a final quantity state
    TradeCost(TradeCostArgs),

    /// Derive the liquidity parameter from quantities
    Liquidity(LiquidityArgs),
}

/// Which pricing variant to apply.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Two outcomes, exponential form
    #[default]
    Pair,
    /// First three outcomes, exponential form
    Triple,
    /// All outcomes, linear-ratio form
    Batch,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pair => "pair",
            Self::Triple => "triple",
            Self::Batch => "batch",
        };
        f.write_str(name)
    }
}

/// Arguments for the `price` subcommand.
#[derive(Parser, Debug)]
pub struct PriceArgs {
    /// Outstanding shares per outcome, first outcome is priced
    #[arg(required = true)]
    pub quantities: Vec<Quantity>,

    /// Pricing variant
    #[arg(short, long, value_enum, default_value_t = Mode::Pair)]
    pub mode: Mode,

    /// Explicit liquidity parameter (pair mode only)
    #[arg(short, long)]
    pub liquidity: Option<u64>,
}

/// Arguments for the `trade-cost` subcommand.
#[derive(Parser, Debug)]
pub struct TradeCostArgs {
    /// Quantities before the trade, comma-separated
    #[arg(long, value_delimiter = ',', required = true)]
    pub initial: Vec<Quantity>,

    /// Quantities after the trade, comma-separated
    #[arg(long = "final", value_name = "FINAL", value_delimiter = ',', required = true)]
    pub final_quantities: Vec<Quantity>,

    /// Pricing variant
    #[arg(short, long, value_enum, default_value_t = Mode::Pair)]
    pub mode: Mode,

    /// Explicit liquidity parameter shared by both states (pair mode only)
    #[arg(short, long)]
    pub liquidity: Option<u64>,
}

/// Arguments for the `liquidity` subcommand.
#[derive(Parser, Debug)]
pub struct LiquidityArgs {
    /// Outstanding shares per outcome
    #[arg(required = true)]
    pub quantities: Vec<Quantity>,

    /// Selection policy: fixed, max, or average (defaults to config)
    #[arg(short, long)]
    pub policy: Option<LiquidityPolicy>,
}

/// Execute a parsed command.
pub fn run(cli: &Cli, config: &Config) -> Result<()> {
    tracing::debug!(command = ?cli.command, "Running command");
    match &cli.command {
        Commands::Price(args) => price::execute(args, config, cli.json),
        Commands::TradeCost(args) => trade_cost::execute(args, config, cli.json),
        Commands::Liquidity(args) => liquidity::execute(args, config, cli.json),
    }
}

fn pair(quantities: &[Quantity]) -> Result<(Quantity, Quantity)> {
    match quantities {
        [q1, q2] => Ok((*q1, *q2)),
        _ => Err(Error::InvalidArgument(format!(
            "pair mode takes exactly 2 quantities, got {}",
            quantities.len()
        ))),
    }
}

fn reject_liquidity(mode: Mode, liquidity: Option<u64>) -> Result<()> {
    if liquidity.is_some() && mode != Mode::Pair {
        return Err(Error::InvalidArgument(
            "explicit liquidity is only supported in pair mode".into(),
        ));
    }
    Ok(())
}
